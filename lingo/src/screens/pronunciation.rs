use colored::Colorize;
use generation::VocabularyWord;
use tracing::debug;

use super::{print_header, Outcome, SessionContext};
use crate::error::{report, ScreenError};
use crate::speech::{SpeechRecognizer, SpeechSynthesizer};
use crate::translations::fill;
use crate::utilities::{input, wait_for_enter};

const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Lowercased, trimmed transcript without punctuation.
pub fn normalize_transcript(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}

pub fn pronunciation_matches(transcript: &str, word: &str) -> bool {
    normalize_transcript(transcript) == normalize_transcript(word)
}

enum Command {
    Listen,
    Record,
    Menu,
}

fn parse_command(line: &str) -> Option<Command> {
    match &line.trim().to_lowercase()[..] {
        "l" | "listen" => Some(Command::Listen),
        "" | "r" | "record" => Some(Command::Record),
        "m" | "menu" => Some(Command::Menu),
        _ => None,
    }
}

pub struct Speech<'a> {
    pub recognizer: &'a dyn SpeechRecognizer,
    pub synthesizer: &'a dyn SpeechSynthesizer,
}

/// Say each word aloud; a recording that matches the word scores a point. A failed
/// recording leaves the word open for another attempt.
pub async fn run(
    ctx: &SessionContext<'_>,
    speech: &Speech<'_>,
    words: &[VocabularyWord],
) -> anyhow::Result<Outcome> {
    let tag = ctx.learning_language.speech_tag();
    let mut score = 0;
    let mut asked = 0;
    for (index, word) in words.iter().enumerate() {
        print_header(ctx.t, index + 1, words.len(), Some(score));
        println!("{}", ctx.t.pronunciation_instruction);
        println!("{}  ({})", word.source_word.bold().blue(), word.target_word.dimmed());
        let transcript = loop {
            let line = input(&format!("{} > ", ctx.t.pronunciation_controls))?;
            let Some(command) = parse_command(&line) else {
                println!("{}", ctx.t.unknown_command);
                continue;
            };
            match command {
                Command::Listen => {
                    if let Err(error) = speech.synthesizer.speak(&word.source_word, tag).await {
                        report(&ScreenError::from(error), ctx.t);
                    }
                }
                Command::Record => {
                    println!("{}", ctx.t.speak_now.yellow());
                    match speech.recognizer.recognize(tag).await {
                        Ok(transcript) => break transcript,
                        Err(error) => report(&ScreenError::from(error), ctx.t),
                    }
                }
                Command::Menu if asked == 0 => return Ok(Outcome::Left),
                Command::Menu => {
                    return Ok(Outcome::Completed {
                        score,
                        total: asked,
                    })
                }
            }
        };
        asked += 1;
        debug!(%transcript, word = %word.source_word, "pronunciation attempt");
        println!("{}", fill(ctx.t.you_said, &[("transcript", &transcript)]));
        if pronunciation_matches(&transcript, &word.source_word) {
            score += 1;
            println!("{}", ctx.t.correct.green().bold());
        } else {
            println!(
                "{}",
                fill(ctx.t.correct_word_was, &[("word", &word.source_word)]).red()
            );
        }
        wait_for_enter(ctx.t.continue_prompt)?;
    }
    Ok(Outcome::Completed {
        score,
        total: asked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_case_are_ignored() {
        assert!(pronunciation_matches("Hund!", "hund"));
        assert!(pronunciation_matches("  (Bonjour.) ", "bonjour"));
        assert!(!pronunciation_matches("Guten-Tag", "guten tag"));
    }

    #[test]
    fn different_words_do_not_match() {
        assert!(!pronunciation_matches("Hund", "Hunde"));
    }

    #[test]
    fn non_latin_scripts_survive_normalization() {
        assert_eq!(normalize_transcript(" 犬。"), "犬。");
        assert!(pronunciation_matches("Straße", "straße"));
    }

    #[test]
    fn enter_records() {
        assert!(matches!(parse_command("\n"), Some(Command::Record)));
        assert!(matches!(parse_command("L"), Some(Command::Listen)));
        assert!(parse_command("sing").is_none());
    }
}
