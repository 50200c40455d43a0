//! Response schemas declared to the text model, in the Gemini `responseSchema` dialect.

use serde_json::{json, Value};

use crate::{GrammarQuestion, Language};

pub fn word_list(learning: Language, ui: Language) -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "sourceWord": {
                    "type": "STRING",
                    "description": format!("A single common {learning} word (noun, verb, or adjective).")
                },
                "englishWord": {
                    "type": "STRING",
                    "description": format!("The English translation of the {learning} word.")
                },
                "targetWord": {
                    "type": "STRING",
                    "description": format!("The {ui} translation of the {learning} word.")
                }
            },
            "required": ["sourceWord", "englishWord", "targetWord"]
        }
    })
}

pub fn example_sentence(source_word: &str, learning: Language, ui: Language) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sourceSentence": {
                "type": "STRING",
                "description": format!("A simple {learning} sentence using the provided word \"{source_word}\".")
            },
            "translationSentence": {
                "type": "STRING",
                "description": format!("The {ui} translation of the {learning} sentence.")
            }
        },
        "required": ["sourceSentence", "translationSentence"]
    })
}

pub fn hint(learning: Language, ui: Language) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "hint": {
                "type": "STRING",
                "description": format!(
                    "A short, one or two-word hint in {ui} that describes or relates to the \
                     {learning} word, without giving away the answer directly."
                )
            }
        },
        "required": ["hint"]
    })
}

pub fn grammar_rule(learning: Language, ui: Language) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "rule": {
                "type": "STRING",
                "description": "A concise name for the primary grammar rule associated with the word (e.g., 'Noun Gender', 'Verb Conjugation', 'Adjective Declension')."
            },
            "explanation": {
                "type": "STRING",
                "description": format!("A simple, one-to-two sentence explanation of this grammar rule in {ui}, specifically as it applies to the word.")
            },
            "example": {
                "type": "OBJECT",
                "properties": {
                    "sourceSentence": {
                        "type": "STRING",
                        "description": format!("A simple {learning} sentence demonstrating the rule with the word.")
                    },
                    "translationSentence": {
                        "type": "STRING",
                        "description": format!("The {ui} translation of the example sentence.")
                    }
                },
                "required": ["sourceSentence", "translationSentence"]
            }
        },
        "required": ["rule", "explanation", "example"]
    })
}

pub fn grammar_question(learning: Language, ui: Language) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "question": {
                "type": "STRING",
                "description": format!(
                    "A single {learning} sentence with a blank space ('___') where the word should fit. \
                     It must also include the {ui} translation in parentheses. \
                     Example: 'Ich ___ ins Kino. (I go to the cinema.)'"
                )
            },
            "options": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!(
                    "An array of 3-4 possible {learning} words to fill the blank. One must be the \
                     correct answer from the prompt, and the others should be plausible but incorrect."
                )
            },
            "answer": {
                "type": "STRING",
                "description": format!("The correct {learning} word from the options array.")
            }
        },
        "required": ["question", "options", "answer"]
    })
}

pub fn grammar_explanation(question: &GrammarQuestion, incorrect_answer: &str, ui: Language) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "explanation": {
                "type": "STRING",
                "description": format!(
                    "A simple, one-to-two sentence explanation in {ui} of the grammar rule tested. \
                     Explain why \"{}\" is correct and \"{incorrect_answer}\" is incorrect for the sentence: \"{}\".",
                    question.answer, question.question
                )
            }
        },
        "required": ["explanation"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_requires_all_three_fields() {
        let schema = word_list(Language::It, Language::En);
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(
            schema["items"]["required"],
            json!(["sourceWord", "englishWord", "targetWord"])
        );
        assert_eq!(
            schema["items"]["properties"]["targetWord"]["description"],
            "The English translation of the Italian word."
        );
    }

    #[test]
    fn grammar_question_declares_string_options() {
        let schema = grammar_question(Language::Fr, Language::De);
        assert_eq!(schema["properties"]["options"]["items"]["type"], "STRING");
    }
}
