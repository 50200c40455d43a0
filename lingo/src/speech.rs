use std::io;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::config::{RecognizerKind, SpeechConfig};
use crate::utilities::input;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("speech is not supported here")]
    Unsupported,
    #[error("no speech detected")]
    NoSpeech,
    #[error("speech engine failed: {0}")]
    Failed(String),
}

/// Runs one recognition session and returns its final transcript.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, language_tag: &str) -> Result<String, SpeechError>;
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str, language_tag: &str) -> Result<(), SpeechError>;
}

/// Stand-in used when nothing is configured.
pub struct Unavailable;

#[async_trait]
impl SpeechRecognizer for Unavailable {
    async fn recognize(&self, _language_tag: &str) -> Result<String, SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

#[async_trait]
impl SpeechSynthesizer for Unavailable {
    async fn speak(&self, _text: &str, _language_tag: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

/// Reads the transcript from the terminal, for setups without a microphone.
pub struct TypedRecognizer;

#[async_trait]
impl SpeechRecognizer for TypedRecognizer {
    async fn recognize(&self, language_tag: &str) -> Result<String, SpeechError> {
        let prompt = format!("[{language_tag}] > ");
        let line = tokio::task::spawn_blocking(move || input(&prompt))
            .await
            .map_err(|error| SpeechError::Failed(error.to_string()))?
            .map_err(|error| SpeechError::Failed(error.to_string()))?;
        let transcript = line.trim();
        if transcript.is_empty() {
            return Err(SpeechError::NoSpeech);
        }
        Ok(transcript.to_owned())
    }
}

/// Runs an external program; `{lang}` and `{text}` in the template are substituted per
/// argument after shell-style splitting.
pub struct CommandRecognizer {
    template: String,
}

pub struct CommandSynthesizer {
    template: String,
}

impl CommandRecognizer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl CommandSynthesizer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

fn expand(template: &str, language_tag: &str, text: &str) -> Result<Vec<String>, SpeechError> {
    let words = shell_words::split(template)
        .map_err(|error| SpeechError::Failed(format!("bad command template: {error}")))?;
    if words.is_empty() {
        return Err(SpeechError::Unsupported);
    }
    Ok(words
        .into_iter()
        .map(|word| word.replace("{lang}", language_tag).replace("{text}", text))
        .collect())
}

fn classify_failure(stderr: &str, status: std::process::ExitStatus) -> SpeechError {
    let lowered = stderr.to_lowercase();
    if lowered.contains("not-allowed") || lowered.contains("permission") {
        SpeechError::PermissionDenied
    } else if stderr.trim().is_empty() {
        SpeechError::Failed(status.to_string())
    } else {
        SpeechError::Failed(stderr.trim().to_owned())
    }
}

async fn run(args: Vec<String>) -> Result<String, SpeechError> {
    let (program, rest) = args.split_first().ok_or(SpeechError::Unsupported)?;
    debug!(program = %program, "running speech command");
    let output = Command::new(program)
        .args(rest)
        .output()
        .await
        .map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => SpeechError::Unsupported,
            io::ErrorKind::PermissionDenied => SpeechError::PermissionDenied,
            _ => SpeechError::Failed(error.to_string()),
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(classify_failure(&stderr, output.status));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn recognize(&self, language_tag: &str) -> Result<String, SpeechError> {
        let transcript = run(expand(&self.template, language_tag, "")?).await?;
        if transcript.is_empty() {
            return Err(SpeechError::NoSpeech);
        }
        Ok(transcript)
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    async fn speak(&self, text: &str, language_tag: &str) -> Result<(), SpeechError> {
        run(expand(&self.template, language_tag, text)?).await.map(|_| ())
    }
}

pub fn recognizer_from_config(config: &SpeechConfig) -> Box<dyn SpeechRecognizer> {
    match (config.recognizer, &config.recognize_command) {
        (RecognizerKind::Typed, _) => Box::new(TypedRecognizer),
        (RecognizerKind::Command, Some(template)) => Box::new(CommandRecognizer::new(template)),
        _ => Box::new(Unavailable),
    }
}

pub fn synthesizer_from_config(config: &SpeechConfig) -> Box<dyn SpeechSynthesizer> {
    match &config.synthesize_command {
        Some(template) => Box::new(CommandSynthesizer::new(template)),
        None => Box::new(Unavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_substituted_per_argument() {
        let args = expand("espeak-ng -v {lang} '{text}'", "de-DE", "der Hund").unwrap();
        assert_eq!(args, vec!["espeak-ng", "-v", "de-DE", "der Hund"]);
    }

    #[test]
    fn blank_template_is_unsupported() {
        assert_eq!(expand("  ", "de-DE", ""), Err(SpeechError::Unsupported));
    }

    #[tokio::test]
    async fn command_output_becomes_transcript() {
        let recognizer = CommandRecognizer::new("echo ' Hund! '");
        assert_eq!(recognizer.recognize("de-DE").await.unwrap(), "Hund!");
    }

    #[tokio::test]
    async fn missing_program_is_unsupported() {
        let recognizer = CommandRecognizer::new("lingo-no-such-recognizer {lang}");
        assert_eq!(
            recognizer.recognize("de-DE").await,
            Err(SpeechError::Unsupported)
        );
    }

    #[tokio::test]
    async fn permission_errors_are_recognized() {
        let recognizer = CommandRecognizer::new("sh -c 'echo not-allowed >&2; exit 1'");
        assert_eq!(
            recognizer.recognize("de-DE").await,
            Err(SpeechError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn silence_is_no_speech() {
        let recognizer = CommandRecognizer::new("true");
        assert_eq!(recognizer.recognize("de-DE").await, Err(SpeechError::NoSpeech));
    }

    #[tokio::test]
    async fn unconfigured_speech_is_unsupported() {
        let config = SpeechConfig::default();
        let recognizer = recognizer_from_config(&config);
        let synthesizer = synthesizer_from_config(&config);
        assert_eq!(recognizer.recognize("fr-FR").await, Err(SpeechError::Unsupported));
        assert_eq!(synthesizer.speak("chien", "fr-FR").await, Err(SpeechError::Unsupported));
    }
}
