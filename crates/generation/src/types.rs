use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyWord {
    /// The word in the language being learned.
    pub source_word: String,
    /// The translation in the interface language.
    pub target_word: String,
    /// English translation, the pivot for image generation.
    pub english_word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSentence {
    #[serde(alias = "germanSentence")]
    pub source_sentence: String,
    pub translation_sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarRule {
    pub rule: String,
    pub explanation: String,
    pub example: ExampleSentence,
}

/// A fill-in-the-blank question. After repair the answer is always one of the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl GrammarQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct HintPayload {
    pub hint: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExplanationPayload {
    pub explanation: String,
}
