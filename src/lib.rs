//! LexLink - legal document intake and resilient AI-analysis pipeline.
//!
//! Uploads (PDF, plain text, image) are reduced to text, heuristically
//! classified, and sent to a generative model with task-specific prompts.
//! Model replies are defensively normalized into guaranteed-shape JSON; any
//! upstream or parse failure degrades to deterministic fallback data flagged
//! as demo mode.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod gemini;
pub mod languages;
pub mod normalize;
pub mod ocr;
pub mod pipeline;
pub mod prompt;
pub mod routes;
pub mod schema;
