use colored::Colorize;

use crate::translations::{fill, Translations};
use crate::utilities::wait_for_enter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    Excellent,
    Good,
    Practice,
}

/// Rounded percentage, 0 for an empty session.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

pub fn tier(percentage: u32) -> Tier {
    match percentage {
        100.. => Tier::Perfect,
        75..=99 => Tier::Excellent,
        50..=74 => Tier::Good,
        _ => Tier::Practice,
    }
}

fn message(tier: Tier, t: &Translations) -> &'static str {
    match tier {
        Tier::Perfect => t.perfect_message,
        Tier::Excellent => t.excellent_message,
        Tier::Good => t.good_message,
        Tier::Practice => t.practice_message,
    }
}

pub fn show_results(score: usize, total: usize, t: &Translations) -> std::io::Result<()> {
    let percentage = percentage(score, total);
    println!("========================================");
    println!("{}", t.results_title.bold());
    println!(
        "{}",
        fill(
            t.final_score,
            &[
                ("score", &score.to_string()),
                ("total", &total.to_string()),
                ("percentage", &percentage.to_string()),
            ],
        )
    );
    let message = message(tier(percentage), t);
    match tier(percentage) {
        Tier::Perfect | Tier::Excellent => println!("{}", message.green()),
        Tier::Good => println!("{}", message.yellow()),
        Tier::Practice => println!("{}", message.cyan()),
    }
    println!("========================================");
    wait_for_enter(t.continue_prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_by_percentage() {
        assert_eq!(tier(percentage(10, 10)), Tier::Perfect);
        assert_eq!(tier(percentage(8, 10)), Tier::Excellent);
        assert_eq!(tier(percentage(5, 10)), Tier::Good);
        assert_eq!(tier(percentage(3, 10)), Tier::Practice);
    }

    #[test]
    fn empty_session_is_zero_percent() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(tier(percentage(0, 0)), Tier::Practice);
    }

    #[test]
    fn boundaries_round_like_the_display() {
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(tier(percentage(3, 4)), Tier::Excellent);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(tier(percentage(1, 2)), Tier::Good);
        assert_eq!(percentage(199, 200), 100);
    }
}
