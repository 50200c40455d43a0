use colored::Colorize;
use generation::GenerationError;
use thiserror::Error;

use crate::speech::SpeechError;
use crate::translations::Translations;

/// The two failure kinds a screen can run into. Neither ends the program: the screen
/// prints a banner and falls back to a stable state.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("speech unavailable: {0}")]
    Permission(#[from] SpeechError),
}

impl ScreenError {
    /// Text of the banner shown to the learner, in the interface language.
    pub fn banner_text(&self, t: &Translations) -> &'static str {
        match self {
            ScreenError::Generation(_) => t.generation_error,
            ScreenError::Permission(SpeechError::PermissionDenied) => t.mic_error,
            ScreenError::Permission(SpeechError::Unsupported) => t.speech_unsupported,
            ScreenError::Permission(_) => t.recognition_error,
        }
    }
}

pub fn print_banner(message: &str) {
    println!("{}", format!("!! {message}").red().bold());
}

pub fn report(error: &ScreenError, t: &Translations) {
    tracing::warn!(%error, "screen error");
    print_banner(error.banner_text(t));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translations::translations;
    use generation::Language;

    #[test]
    fn banners_follow_error_kind() {
        let t = translations(Language::En);
        let generation = ScreenError::from(GenerationError::EmptyResponse);
        assert_eq!(generation.banner_text(t), t.generation_error);
        let denied = ScreenError::from(SpeechError::PermissionDenied);
        assert_eq!(denied.banner_text(t), t.mic_error);
        let unsupported = ScreenError::from(SpeechError::Unsupported);
        assert_eq!(unsupported.banner_text(t), t.speech_unsupported);
        let other = ScreenError::from(SpeechError::Failed("exit 2".into()));
        assert_eq!(other.banner_text(t), t.recognition_error);
    }
}
