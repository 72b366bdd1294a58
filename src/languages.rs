//! Supported-language catalogue and Web Speech API delegation.
//!
//! The server never synthesizes audio or runs a dedicated translation
//! service; it serves the catalogue, maps short codes to BCP-47 speech codes,
//! and returns instruction payloads the browser acts on.

use serde_json::{json, Value};

/// A supported language with its display name and suggested voice.
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub voice: &'static str,
}

/// Full catalogue: European, Indian regional, Asian, and Arabic.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    // English & European
    Language { code: "en", name: "English", voice: "en-US-Wavenet-D" },
    Language { code: "es", name: "Spanish (Español)", voice: "es-ES-Wavenet-B" },
    Language { code: "fr", name: "French (Français)", voice: "fr-FR-Wavenet-A" },
    Language { code: "de", name: "German (Deutsch)", voice: "de-DE-Wavenet-A" },
    Language { code: "it", name: "Italian (Italiano)", voice: "it-IT-Wavenet-A" },
    Language { code: "pt", name: "Portuguese (Português)", voice: "pt-BR-Wavenet-A" },
    Language { code: "ru", name: "Russian (Русский)", voice: "ru-RU-Wavenet-A" },
    Language { code: "nl", name: "Dutch (Nederlands)", voice: "nl-NL-Wavenet-A" },
    // Indian regional languages
    Language { code: "hi", name: "Hindi (हिन्दी)", voice: "hi-IN-Wavenet-A" },
    Language { code: "bn", name: "Bengali (বাংলা)", voice: "bn-IN-Wavenet-A" },
    Language { code: "te", name: "Telugu (తెలుగు)", voice: "te-IN-Standard-A" },
    Language { code: "mr", name: "Marathi (मराठी)", voice: "mr-IN-Wavenet-A" },
    Language { code: "ta", name: "Tamil (தமிழ்)", voice: "ta-IN-Wavenet-A" },
    Language { code: "ur", name: "Urdu (اردو)", voice: "ur-IN-Wavenet-A" },
    Language { code: "gu", name: "Gujarati (ગુજરાતી)", voice: "gu-IN-Wavenet-A" },
    Language { code: "kn", name: "Kannada (ಕನ್ನಡ)", voice: "kn-IN-Wavenet-A" },
    Language { code: "ml", name: "Malayalam (മലയാളം)", voice: "ml-IN-Wavenet-A" },
    Language { code: "pa", name: "Punjabi (ਪੰਜਾਬੀ)", voice: "pa-IN-Wavenet-A" },
    Language { code: "or", name: "Odia (ଓଡ଼ିଆ)", voice: "or-IN-Standard-A" },
    Language { code: "as", name: "Assamese (অসমীয়া)", voice: "as-IN-Standard-A" },
    // Other Asian languages
    Language { code: "zh", name: "Chinese (中文)", voice: "zh-CN-Wavenet-A" },
    Language { code: "ja", name: "Japanese (日本語)", voice: "ja-JP-Wavenet-A" },
    Language { code: "ko", name: "Korean (한국어)", voice: "ko-KR-Wavenet-A" },
    Language { code: "th", name: "Thai (ไทย)", voice: "th-TH-Standard-A" },
    Language { code: "vi", name: "Vietnamese (Tiếng Việt)", voice: "vi-VN-Wavenet-A" },
    Language { code: "ar", name: "Arabic (العربية)", voice: "ar-XA-Wavenet-A" },
];

/// Display name for a language code, used inside translation prompts.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
}

/// Map a short language code to a BCP-47 code for the Web Speech API.
/// Unknown codes pass through unchanged so callers can supply full codes.
pub fn speech_language_code(code: &str) -> &str {
    match code {
        "en" => "en-US",
        "hi" => "hi-IN",
        "bn" => "bn-IN",
        "te" => "te-IN",
        "mr" => "mr-IN",
        "ta" => "ta-IN",
        "gu" => "gu-IN",
        "kn" => "kn-IN",
        "ml" => "ml-IN",
        "pa" => "pa-IN",
        "ur" => "ur-IN",
        "es" => "es-ES",
        "fr" => "fr-FR",
        "de" => "de-DE",
        "it" => "it-IT",
        "pt" => "pt-PT",
        "ru" => "ru-RU",
        "ja" => "ja-JP",
        "ko" => "ko-KR",
        "zh" => "zh-CN",
        "ar" => "ar-SA",
        other => other,
    }
}

/// Catalogue body for `GET /languages`.
pub fn catalogue(ai_powered: bool) -> Value {
    let mut languages = serde_json::Map::new();
    for lang in SUPPORTED_LANGUAGES {
        languages.insert(
            lang.code.to_string(),
            json!({ "name": lang.name, "voice": lang.voice }),
        );
    }

    json!({
        "success": true,
        "languages": languages,
        "total": SUPPORTED_LANGUAGES.len(),
        "categories": {
            "european": ["en", "es", "fr", "de", "it", "pt", "ru", "nl"],
            "indian": ["hi", "bn", "te", "mr", "ta", "ur", "gu", "kn", "ml", "pa", "or", "as"],
            "asian": ["zh", "ja", "ko", "th", "vi"],
            "other": ["ar"],
        },
        "features": {
            "translation": true,
            "textToSpeech": true,
            "webSpeechAPI": true,
            "aiPowered": ai_powered,
        },
    })
}

/// Client-delegated speech-synthesis instruction payload for `POST /audio`.
/// `audioContent` is always null; the browser generates the audio.
pub fn audio_payload(text: &str, language_code: &str) -> Value {
    let mapped = speech_language_code(language_code);
    json!({
        "text": text,
        "languageCode": mapped,
        "audioContent": null,
        "service": "web-speech-api",
        "isFree": true,
        "instructions": "Use the Web Speech API in your browser to play this text",
        "webSpeechCode": format!(
            "const utterance = new SpeechSynthesisUtterance({});\nutterance.lang = \"{}\";\nspeechSynthesis.speak(utterance);",
            serde_json::to_string(text).unwrap_or_default(),
            mapped,
        ),
        "supportedLanguages": [
            "en", "hi", "bn", "te", "mr", "ta", "gu", "kn", "ml", "pa", "ur",
            "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh", "ar",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_counts_match() {
        let value = catalogue(false);
        assert_eq!(value["total"], SUPPORTED_LANGUAGES.len());
        assert_eq!(
            value["languages"].as_object().unwrap().len(),
            SUPPORTED_LANGUAGES.len()
        );
        assert_eq!(value["features"]["aiPowered"], false);
        assert_eq!(value["languages"]["hi"]["voice"], "hi-IN-Wavenet-A");
    }

    #[test]
    fn speech_codes_map_and_pass_through() {
        assert_eq!(speech_language_code("en"), "en-US");
        assert_eq!(speech_language_code("ta"), "ta-IN");
        assert_eq!(speech_language_code("en-GB"), "en-GB");
    }

    #[test]
    fn audio_payload_is_client_delegated() {
        let payload = audio_payload("read this aloud", "hi");
        assert!(payload["audioContent"].is_null());
        assert_eq!(payload["service"], "web-speech-api");
        assert_eq!(payload["languageCode"], "hi-IN");
        assert!(payload["webSpeechCode"]
            .as_str()
            .unwrap()
            .contains("hi-IN"));
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("en"), Some("English"));
        assert!(language_name("xx").is_none());
    }
}
