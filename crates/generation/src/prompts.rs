use crate::{CefrLevel, GrammarQuestion, Language, VocabularyWord};

pub fn word_list(
    count: usize,
    learning: Language,
    ui: Language,
    level: CefrLevel,
    exclude: &[String],
) -> String {
    let level_phrase = match level {
        CefrLevel::All => "covering all CEFR levels from A1 to C1".to_owned(),
        level => format!("appropriate for the CEFR {level} level"),
    };
    let exclusion = if exclude.is_empty() {
        String::new()
    } else {
        format!(
            " IMPORTANT: Do not include any of the following {learning} words in the list: {}.",
            exclude.join(", ")
        )
    };
    format!(
        "Generate a list of {count} unique and common {learning} words, {level_phrase}. \
         Include a mix of nouns, verbs, and adjectives. \
         For each word, provide its English translation and its {ui} translation.{exclusion}"
    )
}

pub fn image(english_word: &str) -> String {
    format!(
        "A clean, simple, high-quality photograph or vector illustration of \"{english_word}\". \
         The object should be on a plain white background, centered. No text or watermarks."
    )
}

pub fn example_sentence(source_word: &str, learning: Language, ui: Language) -> String {
    format!(
        "Create a simple {learning} example sentence for the word \"{source_word}\" \
         and provide its {ui} translation."
    )
}

pub fn hint(source_word: &str, learning: Language, ui: Language) -> String {
    format!(
        "Give me a short, one or two-word hint in {ui} for the {learning} word \"{source_word}\". \
         The hint should not be the direct translation."
    )
}

pub fn grammar_rule(
    word: &VocabularyWord,
    learning: Language,
    ui: Language,
    level: CefrLevel,
) -> String {
    let level_phrase = match level {
        CefrLevel::All => "appropriate for a CEFR A1-C1 learner".to_owned(),
        level => format!("appropriate for a CEFR {level} learner"),
    };
    format!(
        "For the {learning} word \"{}\" (which means \"{}\" in English), identify the most \
         important grammar rule associated with it, {level_phrase}. Provide a concise name for \
         the rule, a brief explanation in {ui}, and a simple example sentence in {learning} \
         with its {ui} translation.",
        word.source_word, word.english_word
    )
}

pub fn grammar_question(
    word: &VocabularyWord,
    learning: Language,
    ui: Language,
    level: CefrLevel,
) -> String {
    let level_phrase = match level {
        CefrLevel::All => "at a CEFR level from A1 to C1".to_owned(),
        level => format!("at the CEFR {level} level"),
    };
    format!(
        "Generate a multiple-choice grammar question for the {learning} word \"{source}\" \
         (which means \"{target}\" in {ui}). The question should be a sentence in {learning} \
         with a blank space ('___') where the word should go. The sentence should test a common \
         grammatical point related to the word {level_phrase} (e.g., verb conjugation, noun \
         gender/case, adjective endings). Provide three plausible incorrect options and ensure \
         the one correct answer is \"{source}\". Also, provide a translation of the question \
         sentence in {ui} in parentheses after the question sentence.",
        source = word.source_word,
        target = word.target_word,
    )
}

pub fn grammar_explanation(
    question: &GrammarQuestion,
    incorrect_answer: &str,
    learning: Language,
    ui: Language,
) -> String {
    format!(
        "A user was given a multiple-choice grammar question in {learning}.\n\
         The sentence was: \"{}\".\n\
         The correct answer is \"{}\".\n\
         The user incorrectly chose \"{incorrect_answer}\".\n\
         Please provide a simple, one-to-two sentence explanation in {ui} of the grammar rule \
         they likely misunderstood. Focus on why the correct answer fits the sentence and the \
         incorrect one does not.",
        question.question, question.answer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hund() -> VocabularyWord {
        VocabularyWord {
            source_word: "Hund".into(),
            target_word: "perro".into(),
            english_word: "dog".into(),
            image: None,
        }
    }

    #[test]
    fn word_list_without_exclusions_omits_the_instruction() {
        let prompt = word_list(5, Language::De, Language::En, CefrLevel::A2, &[]);
        assert!(prompt.contains("list of 5 unique and common German words"));
        assert!(prompt.contains("appropriate for the CEFR A2 level"));
        assert!(!prompt.contains("IMPORTANT"));
    }

    #[test]
    fn word_list_embeds_seen_words() {
        let seen = vec!["Hund".to_owned(), "Katze".to_owned()];
        let prompt = word_list(3, Language::De, Language::Es, CefrLevel::All, &seen);
        assert!(prompt.contains("covering all CEFR levels from A1 to C1"));
        assert!(prompt.contains("its Spanish translation"));
        assert!(prompt.ends_with("German words in the list: Hund, Katze."));
    }

    #[test]
    fn hint_forbids_direct_translation() {
        let prompt = hint("Hund", Language::De, Language::Fr);
        assert!(prompt.contains("hint in French"));
        assert!(prompt.contains("should not be the direct translation"));
    }

    #[test]
    fn grammar_question_names_the_expected_answer() {
        let prompt = grammar_question(&hund(), Language::De, Language::Es, CefrLevel::B1);
        assert!(prompt.contains("\"Hund\" (which means \"perro\" in Spanish)"));
        assert!(prompt.contains("ensure the one correct answer is \"Hund\""));
        assert!(prompt.contains("at the CEFR B1 level"));
    }

    #[test]
    fn grammar_rule_uses_english_pivot() {
        let prompt = grammar_rule(&hund(), Language::De, Language::Ja, CefrLevel::All);
        assert!(prompt.contains("which means \"dog\" in English"));
        assert!(prompt.contains("appropriate for a CEFR A1-C1 learner"));
    }

    #[test]
    fn explanation_contrasts_choices() {
        let question = GrammarQuestion {
            question: "Der ___ bellt. (The dog barks.)".into(),
            options: vec!["Hund".into(), "Hunde".into()],
            answer: "Hund".into(),
        };
        let prompt = grammar_explanation(&question, "Hunde", Language::De, Language::En);
        assert!(prompt.contains("The correct answer is \"Hund\"."));
        assert!(prompt.contains("The user incorrectly chose \"Hunde\"."));
    }
}
