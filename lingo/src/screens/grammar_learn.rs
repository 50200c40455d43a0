use colored::Colorize;
use generation::{GrammarRule, VocabularyWord};

use super::{parse_navigation, print_header, with_spinner, Deck, Navigation, SessionContext, Slot};
use crate::translations::fill;
use crate::utilities::input;

fn print_rule(rule: &GrammarRule, ctx: &SessionContext<'_>) {
    println!("{}", fill(ctx.t.grammar_rule, &[("rule", &rule.rule)]).bold());
    println!("{}", rule.explanation);
    println!("{}", ctx.t.example_sentence.dimmed());
    println!("  {}", rule.example.source_sentence.italic());
    println!("  {}", rule.example.translation_sentence);
}

/// One grammar rule per word, fetched when its card is first shown and kept for the rest
/// of the session.
pub async fn run(ctx: &SessionContext<'_>, words: &[VocabularyWord]) -> anyhow::Result<()> {
    let mut deck: Deck<GrammarRule> = Deck::new(words.len());
    if deck.is_empty() {
        return Ok(());
    }
    let mut redraw = true;
    loop {
        let word = &words[deck.index()];
        if redraw {
            print_header(ctx.t, deck.index() + 1, deck.len(), None);
            println!("{}", word.source_word.bold().blue());
        }
        if redraw && matches!(deck.slot(), Slot::Pending) {
            let rule = with_spinner(
                ctx.t.loading,
                ctx.generator.generate_grammar_rule(
                    word,
                    ctx.learning_language,
                    ctx.ui_language,
                    ctx.level,
                ),
            )
            .await;
            deck.set_slot(match rule {
                Ok(rule) => Slot::Ready(rule),
                Err(_) => Slot::Failed,
            });
        }
        if redraw {
            match deck.slot() {
                Slot::Ready(rule) => print_rule(rule, ctx),
                _ => println!("{}", ctx.t.rule_not_available.red()),
            }
        }
        redraw = true;
        match parse_navigation(&input(&format!("{} > ", ctx.t.navigation))?) {
            Navigation::Next => {
                if !deck.next() {
                    return Ok(());
                }
            }
            Navigation::Prev => redraw = deck.prev(),
            Navigation::Menu => return Ok(()),
            Navigation::Retry => {
                if matches!(deck.slot(), Slot::Failed) {
                    deck.set_slot(Slot::Pending);
                } else {
                    redraw = false;
                }
            }
            Navigation::Unknown => {
                println!("{}", ctx.t.unknown_command);
                redraw = false;
            }
        }
    }
}
