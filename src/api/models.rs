use serde::{Deserialize, Serialize};

use crate::prompt::Language;

/// Raw fields as they arrive in a form-encoded or JSON body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeFields {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub use_demo: Option<DemoFlag>,
}

/// Forms send `"true"`; JSON clients may send a real boolean.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DemoFlag {
    Bool(bool),
    Text(String),
}

impl DemoFlag {
    pub fn is_set(&self) -> bool {
        match self {
            DemoFlag::Bool(flag) => *flag,
            DemoFlag::Text(text) => text == "true",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Where the document text comes from, in priority order.
#[derive(Debug)]
pub enum DocumentSource {
    Demo,
    Inline(String),
    Upload(UploadedFile),
}

#[derive(Debug)]
pub struct SummarizeRequest {
    pub source: Option<DocumentSource>,
    pub question: String,
    pub language: Language,
}

impl SummarizeFields {
    /// Resolves the text source: demo flag, then inline content, then the
    /// uploaded file. Lower-priority sources are dropped.
    pub fn into_request(self, file: Option<UploadedFile>) -> SummarizeRequest {
        let use_demo = self.use_demo.as_ref().is_some_and(DemoFlag::is_set);
        let content = self.content.filter(|content| !content.is_empty());

        let source = if use_demo {
            Some(DocumentSource::Demo)
        } else if let Some(content) = content {
            Some(DocumentSource::Inline(content))
        } else {
            file.map(DocumentSource::Upload)
        };

        SummarizeRequest {
            source,
            question: self.question.unwrap_or_default(),
            language: self
                .language
                .as_deref()
                .map(Language::from_tag)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl SummarizeResponse {
    /// The question is echoed only when it has non-whitespace content.
    pub fn new(summary: String, question: String) -> Self {
        let question = if question.trim().is_empty() {
            None
        } else {
            Some(question)
        };
        Self { summary, question }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            field: field.map(str::to_string),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> UploadedFile {
        UploadedFile {
            filename: "paper.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            data: b"%PDF-1.4".to_vec(),
        }
    }

    #[test]
    fn demo_flag_wins_over_everything() {
        let fields = SummarizeFields {
            content: Some("inline".into()),
            use_demo: Some(DemoFlag::Text("true".into())),
            ..Default::default()
        };
        let request = fields.into_request(Some(upload()));
        assert!(matches!(request.source, Some(DocumentSource::Demo)));
    }

    #[test]
    fn inline_content_wins_over_upload() {
        let fields = SummarizeFields {
            content: Some("inline".into()),
            use_demo: Some(DemoFlag::Text("false".into())),
            ..Default::default()
        };
        let request = fields.into_request(Some(upload()));
        assert!(matches!(request.source, Some(DocumentSource::Inline(ref text)) if text == "inline"));
    }

    #[test]
    fn empty_content_falls_through_to_upload() {
        let fields = SummarizeFields {
            content: Some(String::new()),
            ..Default::default()
        };
        let request = fields.into_request(Some(upload()));
        assert!(matches!(request.source, Some(DocumentSource::Upload(ref f)) if f.filename == "paper.pdf"));
    }

    #[test]
    fn nothing_resolves_to_no_source() {
        let request = SummarizeFields::default().into_request(None);
        assert!(request.source.is_none());
        assert_eq!(request.question, "");
        assert_eq!(request.language, Language::English);
    }

    #[test]
    fn only_exact_true_enables_demo() {
        assert!(DemoFlag::Text("true".into()).is_set());
        assert!(DemoFlag::Bool(true).is_set());
        assert!(!DemoFlag::Text("TRUE".into()).is_set());
        assert!(!DemoFlag::Text("1".into()).is_set());
        assert!(!DemoFlag::Bool(false).is_set());
    }

    #[test]
    fn json_accepts_boolean_or_string_flag() {
        let fields: SummarizeFields =
            serde_json::from_str(r#"{"useDemo": true, "language": "Hungarian"}"#).unwrap();
        let request = fields.into_request(None);
        assert!(matches!(request.source, Some(DocumentSource::Demo)));
        assert_eq!(request.language, Language::Hungarian);

        let fields: SummarizeFields = serde_json::from_str(r#"{"useDemo": "true"}"#).unwrap();
        assert!(fields.use_demo.unwrap().is_set());
    }

    #[test]
    fn response_omits_blank_question() {
        let json = serde_json::to_value(SummarizeResponse::new("s".into(), "  ".into())).unwrap();
        assert_eq!(json, serde_json::json!({"summary": "s"}));

        let json = serde_json::to_value(SummarizeResponse::new("s".into(), "Why?".into())).unwrap();
        assert_eq!(json, serde_json::json!({"summary": "s", "question": "Why?"}));
    }
}
