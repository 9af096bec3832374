//! Prompt construction for the summarize endpoint.
//!
//! Everything here is pure: the same document, question and language always
//! produce the same pair of strings, so the endpoint can be exercised without
//! a live model.

use serde::{Deserialize, Serialize};

/// Documents are cut to this many characters before they reach the model.
pub const MAX_DOCUMENT_CHARS: usize = 15_000;

const ENGLISH_SYSTEM_PROMPT: &str = "Answer the user's question as clearly and concisely as possible.
Begin with a **one-sentence direct answer**, then provide short context if needed.
Format your response into **short paragraphs (max 3 lines)** or **bullet points**.
Avoid repeating the question.";

const HUNGARIAN_SYSTEM_PROMPT: &str = "Válaszolj a felhasználó kérdésére a lehető legvilágosabban és legtömörebben.
Kezdd **egy-mondatos közvetlen válasszal**, majd adj rövid kontextust, ha szükséges.
Formázd a válaszodat **rövid bekezdésekbe (max. 3 sor)** vagy **felsoroláspontokba**.
Kerüld a kérdés megismétlését.";

/// Display language for the generated answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hungarian,
}

impl Language {
    /// Case-insensitive; anything other than "hungarian" is English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("hungarian") {
            Language::Hungarian
        } else {
            Language::English
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hungarian => "hungarian",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Language::English => ENGLISH_SYSTEM_PROMPT,
            Language::Hungarian => HUNGARIAN_SYSTEM_PROMPT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

pub fn build_prompt(document_text: &str, question: &str, language: Language) -> Prompt {
    let content = truncate_chars(document_text, MAX_DOCUMENT_CHARS);

    let user = if question.trim().is_empty() {
        match language {
            Language::English => {
                format!("Provide a brief, concise summary of this document:\n\n{content}")
            }
            Language::Hungarian => format!(
                "Add meg ennek a dokumentumnak a rövid, tömör összefoglalását:\n\n{content}"
            ),
        }
    } else {
        match language {
            Language::English => {
                format!("Document content:\n\n{content}\n\nQuestion: {question}")
            }
            Language::Hungarian => {
                format!("Dokumentum tartalma:\n\n{content}\n\nKérdés: {question}")
            }
        }
    };

    Prompt {
        system: language.system_prompt().to_string(),
        user,
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tag_is_case_insensitive() {
        assert_eq!(Language::from_tag("hungarian"), Language::Hungarian);
        assert_eq!(Language::from_tag("HUNGARIAN"), Language::Hungarian);
        assert_eq!(Language::from_tag("Hungarian"), Language::Hungarian);
    }

    #[test]
    fn unknown_tags_fall_back_to_english() {
        for tag in ["english", "", "german", "magyar", "hu", " hungarian ", "hungarian\n"] {
            assert_eq!(Language::from_tag(tag), Language::English, "tag {tag:?}");
        }
    }

    #[test]
    fn system_prompt_follows_language() {
        let en = build_prompt("doc", "", Language::from_tag("French"));
        assert_eq!(en.system, ENGLISH_SYSTEM_PROMPT);

        let hu = build_prompt("doc", "", Language::from_tag("hUnGaRiAn"));
        assert_eq!(hu.system, HUNGARIAN_SYSTEM_PROMPT);
    }

    #[test]
    fn question_branch_embeds_document_and_question() {
        let prompt = build_prompt("Quarterly report", "What are the key points?", Language::English);
        assert_eq!(
            prompt.user,
            "Document content:\n\nQuarterly report\n\nQuestion: What are the key points?"
        );
    }

    #[test]
    fn hungarian_question_branch_uses_hungarian_headers() {
        let prompt = build_prompt("Jelentés", "Miről szól?", Language::Hungarian);
        assert_eq!(prompt.user, "Dokumentum tartalma:\n\nJelentés\n\nKérdés: Miről szól?");
    }

    #[test]
    fn blank_question_takes_summary_branch() {
        for question in ["", "   ", "\n\t"] {
            let prompt = build_prompt("Hello world", question, Language::English);
            assert_eq!(
                prompt.user,
                "Provide a brief, concise summary of this document:\n\nHello world"
            );
        }

        let hu = build_prompt("Szia", " ", Language::Hungarian);
        assert!(hu.user.starts_with("Add meg ennek a dokumentumnak"));
        assert!(!hu.user.contains("Kérdés"));
    }

    #[test]
    fn long_documents_are_cut_to_limit() {
        let text = "a".repeat(MAX_DOCUMENT_CHARS) + &"b".repeat(500);
        let expected = "a".repeat(MAX_DOCUMENT_CHARS);

        let summary = build_prompt(&text, "", Language::English);
        assert_eq!(
            summary
                .user
                .strip_prefix("Provide a brief, concise summary of this document:\n\n"),
            Some(expected.as_str())
        );

        let answer = build_prompt(&text, "Why?", Language::English);
        assert_eq!(
            answer.user,
            format!("Document content:\n\n{expected}\n\nQuestion: Why?")
        );
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let text = "é".repeat(MAX_DOCUMENT_CHARS + 10);
        let prompt = build_prompt(&text, "", Language::Hungarian);
        let body = prompt.user.split("\n\n").nth(1).unwrap();
        assert_eq!(body.chars().count(), MAX_DOCUMENT_CHARS);
    }

    #[test]
    fn short_documents_pass_through() {
        assert_eq!(truncate_chars("short", MAX_DOCUMENT_CHARS), "short");
        assert_eq!(truncate_chars("", MAX_DOCUMENT_CHARS), "");
    }
}
