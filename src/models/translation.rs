use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
}

/// Success body of the translation endpoint: `{"response": {"translated_text": ...}}`.
#[derive(Debug, Deserialize)]
pub struct TranslationEnvelope {
    pub response: TranslatedText,
}

#[derive(Debug, Deserialize)]
pub struct TranslatedText {
    pub translated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(TranslationRequest {
            text: "кот",
            source_lang: "ru",
            target_lang: "en",
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"text": "кот", "source_lang": "ru", "target_lang": "en"})
        );
    }

    #[test]
    fn test_envelope_requires_translated_text() {
        let ok: TranslationEnvelope =
            serde_json::from_value(json!({"response": {"translated_text": "cat"}})).unwrap();
        assert_eq!(ok.response.translated_text, "cat");

        assert!(serde_json::from_value::<TranslationEnvelope>(json!({"response": {}})).is_err());
        assert!(serde_json::from_value::<TranslationEnvelope>(json!({"text": "cat"})).is_err());
    }
}
