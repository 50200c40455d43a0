use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::DeserializeOwned;

use crate::types::{ExplanationPayload, HintPayload};
use crate::{GenerationError, GrammarQuestion, GrammarRule, VocabularyWord};

pub(crate) fn parse<T: DeserializeOwned>(text: &str) -> Result<T, GenerationError> {
    Ok(serde_json::from_str(text.trim())?)
}

fn require(field: &'static str, value: &str) -> Result<(), GenerationError> {
    if value.trim().is_empty() {
        return Err(GenerationError::Schema(format!("'{field}' is blank")));
    }
    Ok(())
}

pub(crate) fn word_list(text: &str) -> Result<Vec<VocabularyWord>, GenerationError> {
    let words: Vec<VocabularyWord> = parse(text)?;
    for word in &words {
        require("sourceWord", &word.source_word)?;
    }
    Ok(words)
}

pub(crate) fn hint(text: &str) -> Result<String, GenerationError> {
    let payload: HintPayload = parse(text)?;
    require("hint", &payload.hint)?;
    Ok(payload.hint)
}

pub(crate) fn explanation(text: &str) -> Result<String, GenerationError> {
    let payload: ExplanationPayload = parse(text)?;
    require("explanation", &payload.explanation)?;
    Ok(payload.explanation)
}

pub(crate) fn grammar_rule(text: &str) -> Result<GrammarRule, GenerationError> {
    let rule: GrammarRule = parse(text)?;
    require("rule", &rule.rule)?;
    Ok(rule)
}

pub(crate) fn grammar_question<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
) -> Result<GrammarQuestion, GenerationError> {
    let mut question: GrammarQuestion = parse(text)?;
    if question.options.is_empty() {
        return Err(GenerationError::Schema("'options' is empty".to_owned()));
    }
    ensure_answer_present(&mut question, rng);
    Ok(question)
}

/// Puts the answer into the options when the generator left it out.
///
/// One incorrect option makes room for the answer so the length is unchanged, then the
/// options are shuffled so the answer's position says nothing about generation order.
/// Questions that already contain the answer are left untouched.
pub fn ensure_answer_present<R: Rng + ?Sized>(question: &mut GrammarQuestion, rng: &mut R) {
    if question.options.is_empty() || question.options.contains(&question.answer) {
        return;
    }
    let keep = question.options.len() - 1;
    let answer = question.answer.clone();
    let mut options: Vec<String> = question
        .options
        .drain(..)
        .filter(|option| *option != answer)
        .take(keep)
        .collect();
    options.push(answer);
    options.shuffle(rng);
    question.options = options;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(options: &[&str], answer: &str) -> GrammarQuestion {
        GrammarQuestion {
            question: "Ich ___ ins Kino. (I go to the cinema.)".into(),
            options: options.iter().map(|option| option.to_string()).collect(),
            answer: answer.into(),
        }
    }

    #[test]
    fn missing_answer_replaces_one_option() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut q = question(&["gehe", "gehst", "geht", "gehen"], "gehe ");
            ensure_answer_present(&mut q, &mut rng);
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.options.iter().filter(|o| **o == q.answer).count(), 1);
        }
    }

    #[test]
    fn present_answer_keeps_generation_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut q = question(&["gehst", "gehe", "geht"], "gehe");
        ensure_answer_present(&mut q, &mut rng);
        assert_eq!(q.options, vec!["gehst", "gehe", "geht"]);
    }

    #[test]
    fn single_option_becomes_the_answer() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut q = question(&["gehst"], "gehe");
        ensure_answer_present(&mut q, &mut rng);
        assert_eq!(q.options, vec!["gehe"]);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let shuffled = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut q = question(&["a", "b", "c", "d"], "e");
            ensure_answer_present(&mut q, &mut rng);
            q.options
        };
        assert_eq!(shuffled(42), shuffled(42));
    }

    #[test]
    fn empty_options_are_a_schema_failure() {
        let mut rng = StdRng::seed_from_u64(0);
        let text = r#"{"question":"___","options":[],"answer":"x"}"#;
        assert!(matches!(
            grammar_question(text, &mut rng),
            Err(GenerationError::Schema(_))
        ));
    }

    #[test]
    fn word_list_rejects_blank_source_words() {
        let text = r#"[{"sourceWord":" ","englishWord":"dog","targetWord":"perro"}]"#;
        assert!(word_list(text).is_err());
    }

    #[test]
    fn word_list_requires_every_field() {
        let text = r#"[{"sourceWord":"Hund","englishWord":"dog"}]"#;
        assert!(matches!(word_list(text), Err(GenerationError::Json(_))));
    }

    #[test]
    fn hint_and_explanation_unwrap_their_objects() {
        assert_eq!(hint(r#"{"hint":"pet"}"#).unwrap(), "pet");
        assert!(hint(r#"{"hint":""}"#).is_err());
        assert_eq!(
            explanation(r#"{"explanation":"Plural needs -e."}"#).unwrap(),
            "Plural needs -e."
        );
    }
}
