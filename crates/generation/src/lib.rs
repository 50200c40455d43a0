use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, warn};

mod backend;
mod gemini_api;
mod language;
mod prompts;
mod repair;
mod schema;
mod types;

pub use backend::{GenerativeBackend, TextRequest};
pub use gemini_api::{
    GeminiApi, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
    DEFAULT_TIMEOUT,
};
pub use language::{CefrLevel, Language, UnknownLanguage, UnknownLevel};
pub use repair::ensure_answer_present;
pub use types::{ExampleSentence, GrammarQuestion, GrammarRule, VocabularyWord};

const WORD_LIST_TEMPERATURE: f32 = 1.2;

/// Every way a generation call can fail. Callers are expected to treat all of them as
/// one "generation failed" outcome and offer a retry.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation failed: {0} not configured")]
    NotConfigured(&'static str),
    #[error("generation failed: request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generation failed: HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("generation failed: malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("generation failed: empty response")]
    EmptyResponse,
    #[error("generation failed: unexpected shape: {0}")]
    Schema(String),
}

/// Builds prompts, calls the backend once per request and returns typed, repaired values.
pub struct Generator {
    backend: Arc<dyn GenerativeBackend>,
    rng: Mutex<StdRng>,
}

impl Generator {
    pub fn new(config: GeminiConfig, seed: Option<u64>) -> Self {
        Self::with_backend(Arc::new(GeminiApi::new(config)), seed)
    }

    /// A fixed `seed` makes option shuffling reproducible.
    pub fn with_backend(backend: Arc<dyn GenerativeBackend>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            backend,
            rng: Mutex::new(rng),
        }
    }

    async fn text(&self, kind: &'static str, request: TextRequest) -> Result<String, GenerationError> {
        debug!(kind, "generation request");
        self.backend
            .generate_json(request)
            .await
            .inspect_err(|error| warn!(kind, %error, "generation request failed"))
    }

    /// Generates `count` fresh words. `exclude` holds previously seen source words; the
    /// model is asked to avoid them but nothing guarantees it.
    pub async fn generate_word_list(
        &self,
        count: usize,
        learning: Language,
        ui: Language,
        level: CefrLevel,
        exclude: &[String],
    ) -> Result<Vec<VocabularyWord>, GenerationError> {
        let request = TextRequest::new(
            prompts::word_list(count, learning, ui, level, exclude),
            schema::word_list(learning, ui),
        )
        .with_temperature(WORD_LIST_TEMPERATURE);
        let text = self.text("word_list", request).await?;
        repair::word_list(&text).inspect_err(|error| warn!(%error, "unusable word list"))
    }

    /// Returns a `data:image/png;base64,` URI.
    pub async fn generate_image(&self, english_word: &str) -> Result<String, GenerationError> {
        debug!(kind = "image", english_word, "generation request");
        let bytes = self
            .backend
            .generate_image(&prompts::image(english_word))
            .await
            .inspect_err(|error| warn!(english_word, %error, "image generation failed"))?;
        Ok(format!("data:image/png;base64,{bytes}"))
    }

    pub async fn generate_example_sentence(
        &self,
        source_word: &str,
        learning: Language,
        ui: Language,
    ) -> Result<ExampleSentence, GenerationError> {
        let request = TextRequest::new(
            prompts::example_sentence(source_word, learning, ui),
            schema::example_sentence(source_word, learning, ui),
        );
        let text = self.text("example_sentence", request).await?;
        repair::parse(&text)
    }

    pub async fn generate_hint(
        &self,
        source_word: &str,
        learning: Language,
        ui: Language,
    ) -> Result<String, GenerationError> {
        let request = TextRequest::new(
            prompts::hint(source_word, learning, ui),
            schema::hint(learning, ui),
        );
        let text = self.text("hint", request).await?;
        repair::hint(&text)
    }

    pub async fn generate_grammar_rule(
        &self,
        word: &VocabularyWord,
        learning: Language,
        ui: Language,
        level: CefrLevel,
    ) -> Result<GrammarRule, GenerationError> {
        let request = TextRequest::new(
            prompts::grammar_rule(word, learning, ui, level),
            schema::grammar_rule(learning, ui),
        );
        let text = self.text("grammar_rule", request).await?;
        repair::grammar_rule(&text)
    }

    pub async fn generate_grammar_question(
        &self,
        word: &VocabularyWord,
        learning: Language,
        ui: Language,
        level: CefrLevel,
    ) -> Result<GrammarQuestion, GenerationError> {
        let request = TextRequest::new(
            prompts::grammar_question(word, learning, ui, level),
            schema::grammar_question(learning, ui),
        );
        let text = self.text("grammar_question", request).await?;
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        repair::grammar_question(&text, &mut *rng)
    }

    pub async fn generate_grammar_explanation(
        &self,
        question: &GrammarQuestion,
        incorrect_answer: &str,
        learning: Language,
        ui: Language,
    ) -> Result<String, GenerationError> {
        let request = TextRequest::new(
            prompts::grammar_explanation(question, incorrect_answer, learning, ui),
            schema::grammar_explanation(question, incorrect_answer, ui),
        );
        let text = self.text("grammar_explanation", request).await?;
        repair::explanation(&text)
    }
}
