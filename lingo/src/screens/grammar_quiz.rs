use colored::Colorize;
use generation::{GrammarQuestion, VocabularyWord};

use super::{print_header, with_spinner, Outcome, SessionContext};
use crate::error::{report, ScreenError};
use crate::translations::fill;
use crate::utilities::{confirm, input, wait_for_enter};

#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    Option(usize),
    Skip,
}

/// Maps a typed reply to an option index: a 1-based number, `:s` to skip, or text close
/// enough to exactly one option.
pub fn resolve_choice(reply: &str, options: &[String]) -> Option<Choice> {
    let reply = reply.trim();
    if let Ok(number) = reply.parse::<usize>() {
        return (1..=options.len())
            .contains(&number)
            .then(|| Choice::Option(number - 1));
    }
    let reply = reply.to_lowercase();
    if matches!(&reply[..], ":s" | ":skip") {
        return Some(Choice::Skip);
    }
    if reply.is_empty() {
        return None;
    }
    let mut ranked = options
        .iter()
        .enumerate()
        .map(|(index, option)| (index, strsim::jaro(&option.to_lowercase(), &reply)))
        .collect::<Vec<(usize, f64)>>();
    // most similar at the start
    ranked.sort_unstable_by(|(_, a), (_, b)| b.total_cmp(a));
    let (best, similarity) = *ranked.first()?;
    let runner_up = ranked.get(1).map_or(0.0, |(_, similarity)| *similarity);
    if (similarity > 0.9 && similarity - runner_up > 0.25) || similarity == 1.0 {
        Some(Choice::Option(best))
    } else {
        None
    }
}

async fn fetch_question(
    ctx: &SessionContext<'_>,
    word: &VocabularyWord,
) -> anyhow::Result<Option<GrammarQuestion>> {
    loop {
        let question = with_spinner(
            ctx.t.loading,
            ctx.generator.generate_grammar_question(
                word,
                ctx.learning_language,
                ctx.ui_language,
                ctx.level,
            ),
        )
        .await;
        match question {
            Ok(question) => return Ok(Some(question)),
            Err(error) => {
                report(&ScreenError::from(error), ctx.t);
                if !confirm(ctx.t.retry_prompt)? {
                    return Ok(None);
                }
            }
        }
    }
}

/// Multiple-choice grammar questions, one per word. A question that cannot be fetched
/// and is not retried ends the session.
pub async fn run(ctx: &SessionContext<'_>, words: &[VocabularyWord]) -> anyhow::Result<Outcome> {
    let mut score = 0;
    let mut asked = 0;
    for (index, word) in words.iter().enumerate() {
        print_header(ctx.t, index + 1, words.len(), Some(score));
        let Some(question) = fetch_question(ctx, word).await? else {
            break;
        };
        println!("{}", question.question.bold());
        for (index, option) in question.options.iter().enumerate() {
            println!("[{}]: {}", index + 1, option);
        }
        let choice = loop {
            match resolve_choice(&input(ctx.t.choose_option)?, &question.options) {
                Some(choice) => break choice,
                None => println!("{}", ctx.t.option_not_understood),
            }
        };
        asked += 1;
        let chosen = match choice {
            Choice::Option(index) => &question.options[index],
            Choice::Skip => {
                println!(
                    "{}",
                    fill(ctx.t.correct_answer_was, &[("answer", &question.answer)])
                );
                continue;
            }
        };
        if question.is_correct(chosen) {
            score += 1;
            println!("{}", ctx.t.correct.green().bold());
        } else {
            println!(
                "{}",
                fill(ctx.t.correct_answer_was, &[("answer", &question.answer)]).red()
            );
            let explanation = with_spinner(
                ctx.t.getting_explanation,
                ctx.generator.generate_grammar_explanation(
                    &question,
                    chosen,
                    ctx.learning_language,
                    ctx.ui_language,
                ),
            )
            .await;
            match explanation {
                Ok(text) => println!("{text}"),
                Err(_) => println!("{}", ctx.t.explanation_error.dimmed()),
            }
        }
        wait_for_enter(ctx.t.continue_prompt)?;
    }
    if asked == 0 {
        return Ok(Outcome::Left);
    }
    Ok(Outcome::Completed {
        score,
        total: asked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["der", "die", "das", "den"].map(String::from).to_vec()
    }

    #[test]
    fn numbers_pick_options() {
        assert_eq!(resolve_choice("2\n", &options()), Some(Choice::Option(1)));
        assert_eq!(resolve_choice("0", &options()), None);
        assert_eq!(resolve_choice("5", &options()), None);
    }

    #[test]
    fn exact_text_picks_its_option() {
        assert_eq!(resolve_choice(" DAS ", &options()), Some(Choice::Option(2)));
    }

    #[test]
    fn close_but_ambiguous_text_is_rejected() {
        let options = ["gegangen", "gegangene"].map(String::from).to_vec();
        assert_eq!(resolve_choice("gegangenn", &options), None);
    }

    #[test]
    fn clear_typos_are_accepted() {
        let options = ["ist gegangen", "hat", "wird"].map(String::from).to_vec();
        assert_eq!(resolve_choice("ist gegangn", &options), Some(Choice::Option(0)));
    }

    #[test]
    fn skip_is_recognized() {
        assert_eq!(resolve_choice(":S", &options()), Some(Choice::Skip));
        assert_eq!(resolve_choice("", &options()), None);
    }
}
