use colored::Colorize;
use generation::VocabularyWord;
use tracing::debug;

use super::{print_header, with_spinner, Outcome, SessionContext};
use crate::error::print_banner;
use crate::translations::fill;
use crate::utilities::{input, wait_for_enter};

/// Case-insensitive comparison of a typed answer with the expected translation. Only the
/// typed side is trimmed.
pub fn is_correct_translation(answer: &str, target: &str) -> bool {
    answer.trim().to_lowercase() == target.to_lowercase()
}

enum Reply {
    Answer(String),
    Hint,
    Menu,
}

fn parse_reply(line: &str) -> Option<Reply> {
    let line = line.trim();
    match line {
        "" => None,
        "?" | ":h" | ":hint" => Some(Reply::Hint),
        ":m" | ":menu" => Some(Reply::Menu),
        answer => Some(Reply::Answer(answer.to_owned())),
    }
}

/// Asks one word after another. The total counts only the words actually asked, so
/// leaving early still produces a result.
pub async fn run(ctx: &SessionContext<'_>, words: &[VocabularyWord]) -> anyhow::Result<Outcome> {
    let mut score = 0;
    let mut asked = 0;
    let prompt = fill(
        ctx.t.translate_prompt,
        &[("language", ctx.ui_language.native_name())],
    );
    for (index, word) in words.iter().enumerate() {
        print_header(ctx.t, index + 1, words.len(), Some(score));
        println!("{}", word.source_word.bold().blue());
        let mut hint: Option<String> = None;
        let answer = loop {
            match parse_reply(&input(&prompt)?) {
                None => continue,
                Some(Reply::Menu) if asked == 0 => return Ok(Outcome::Left),
                Some(Reply::Menu) => {
                    return Ok(Outcome::Completed {
                        score,
                        total: asked,
                    })
                }
                Some(Reply::Hint) => {
                    if hint.is_none() {
                        let generated = with_spinner(
                            ctx.t.loading,
                            ctx.generator.generate_hint(
                                &word.source_word,
                                ctx.learning_language,
                                ctx.ui_language,
                            ),
                        )
                        .await;
                        match generated {
                            Ok(text) => hint = Some(text),
                            Err(_) => {
                                print_banner(ctx.t.hint_error);
                                continue;
                            }
                        }
                    }
                    if let Some(text) = &hint {
                        println!("{}", fill(ctx.t.hint, &[("hint", text)]).yellow());
                    }
                }
                Some(Reply::Answer(answer)) => break answer,
            }
        };
        asked += 1;
        if is_correct_translation(&answer, &word.target_word) {
            score += 1;
            println!("{}", ctx.t.correct.green().bold());
            let sentence = with_spinner(
                ctx.t.loading,
                ctx.generator.generate_example_sentence(
                    &word.source_word,
                    ctx.learning_language,
                    ctx.ui_language,
                ),
            )
            .await;
            match sentence {
                Ok(sentence) => {
                    println!("{}", ctx.t.example_sentence.dimmed());
                    println!("  {}", sentence.source_sentence.italic());
                    println!("  {}", sentence.translation_sentence);
                }
                Err(error) => debug!(%error, "skipping example sentence"),
            }
        } else {
            println!(
                "{}",
                fill(ctx.t.incorrect, &[("answer", &word.target_word)]).red()
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
    fn answers_ignore_case_and_padding() {
        assert!(is_correct_translation("  Dog \n", "dog"));
        assert!(is_correct_translation("CHIEN", "chien"));
        assert!(!is_correct_translation("dogs", "dog"));
    }

    #[test]
    fn expected_translation_is_taken_as_generated() {
        assert!(is_correct_translation("der Hund", "Der Hund"));
        assert!(!is_correct_translation("dog", " dog"));
    }

    #[test]
    fn blank_lines_are_not_answers() {
        assert!(parse_reply("   \n").is_none());
        assert!(matches!(parse_reply("?\n"), Some(Reply::Hint)));
        assert!(matches!(parse_reply(":menu"), Some(Reply::Menu)));
        assert!(matches!(parse_reply(" der Hund "), Some(Reply::Answer(a)) if a == "der Hund"));
    }
}
