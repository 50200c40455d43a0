use std::future::Future;
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use generation::{CefrLevel, Generator, Language};
use indicatif::{ProgressBar, ProgressStyle};

use crate::translations::{fill, Translations};

pub mod grammar_learn;
pub mod grammar_quiz;
pub mod learning;
pub mod pronunciation;
pub mod quiz;

/// What every session screen needs to talk to the learner and the generator.
pub struct SessionContext<'a> {
    pub generator: &'a Generator,
    pub t: &'static Translations,
    pub ui_language: Language,
    pub learning_language: Language,
    pub level: CefrLevel,
    /// Where flashcard pictures are written.
    pub image_dir: &'a Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed { score: usize, total: usize },
    Left,
}

/// A lazily loaded per-card value. Failures stick so the same card is not refetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Pending,
    Ready(T),
    Failed,
}

/// Cursor over a fixed number of cards with one cached slot per card.
#[derive(Debug)]
pub struct Deck<T> {
    index: usize,
    slots: Vec<Slot<T>>,
}

impl<T> Deck<T> {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            slots: (0..len).map(|_| Slot::Pending).collect(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.slots.len()
    }

    /// Moves forward, returns false at the last card.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves back, returns false at the first card.
    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn slot(&self) -> &Slot<T> {
        &self.slots[self.index]
    }

    pub fn set_slot(&mut self, slot: Slot<T>) {
        self.slots[self.index] = slot;
    }
}

pub enum Navigation {
    Next,
    Prev,
    Menu,
    Retry,
    Unknown,
}

pub fn parse_navigation(line: &str) -> Navigation {
    match &line.trim().to_lowercase()[..] {
        "" | "n" | "next" => Navigation::Next,
        "p" | "prev" | "previous" => Navigation::Prev,
        "m" | "menu" | "q" | "quit" => Navigation::Menu,
        "r" | "retry" => Navigation::Retry,
        _ => Navigation::Unknown,
    }
}

/// Awaits `future` behind a spinner; input is not read while it runs.
pub async fn with_spinner<F: Future>(message: &str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let output = future.await;
    spinner.finish_and_clear();
    output
}

pub fn print_header(t: &Translations, current: usize, total: usize, score: Option<usize>) {
    println!("----------------------------------------");
    let progress = fill(
        t.progress,
        &[("current", &current.to_string()), ("total", &total.to_string())],
    );
    match score {
        Some(score) => println!(
            "{}    {}",
            progress.dimmed(),
            fill(t.score, &[("score", &score.to_string())]).bold()
        ),
        None => println!("{}", progress.dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_stops_at_both_ends() {
        let mut deck: Deck<()> = Deck::new(2);
        assert!(!deck.prev());
        assert!(deck.next());
        assert!(deck.is_last());
        assert!(!deck.next());
        assert_eq!(deck.index(), 1);
        assert!(deck.prev());
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn slots_are_kept_per_card() {
        let mut deck = Deck::new(3);
        deck.set_slot(Slot::Failed);
        deck.next();
        deck.set_slot(Slot::Ready("Noun Gender"));
        deck.prev();
        assert_eq!(deck.slot(), &Slot::Failed);
        deck.next();
        assert_eq!(deck.slot(), &Slot::Ready("Noun Gender"));
        deck.next();
        assert_eq!(deck.slot(), &Slot::Pending);
    }

    #[test]
    fn enter_means_next() {
        assert!(matches!(parse_navigation("\n"), Navigation::Next));
        assert!(matches!(parse_navigation(" P "), Navigation::Prev));
        assert!(matches!(parse_navigation("menu"), Navigation::Menu));
        assert!(matches!(parse_navigation("xyz"), Navigation::Unknown));
    }
}
