use std::fmt;
use std::str::FromStr;

use generation::{CefrLevel, Language};
use thiserror::Error;

pub const QUIZ_MIN: usize = 2;
pub const DEFAULT_QUIZ_LENGTH: usize = 10;
/// Upper bound shown before a category is picked.
const UNCATEGORIZED_MAX: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Vocabulary,
    Grammar,
    Pronunciation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Learn,
    Quiz,
}

/// The session screen a started menu leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    VocabLearn,
    VocabQuiz,
    GrammarLearn,
    GrammarQuiz,
    PronunciationPractice,
}

impl GameMode {
    /// Whether the session ends on the results screen.
    pub fn is_scored(self) -> bool {
        !matches!(self, GameMode::VocabLearn | GameMode::GrammarLearn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLimits {
    pub min: usize,
    pub max: usize,
}

impl QuizLimits {
    pub fn clamp(&self, length: usize) -> usize {
        length.clamp(self.min, self.max)
    }
}

/// Words requested for a learn session, which is also the longest allowed quiz.
pub fn learn_limit(category: Category, level: CefrLevel) -> usize {
    match (category, level) {
        (Category::Vocabulary | Category::Pronunciation, CefrLevel::A1 | CefrLevel::A2) => 1000,
        (Category::Vocabulary | Category::Pronunciation, CefrLevel::B1) => 2000,
        (Category::Vocabulary | Category::Pronunciation, CefrLevel::B2 | CefrLevel::C1) => 3000,
        (Category::Vocabulary | Category::Pronunciation, CefrLevel::All) => 10000,
        (Category::Grammar, CefrLevel::A1 | CefrLevel::A2) => 200,
        (Category::Grammar, CefrLevel::B1) => 300,
        (Category::Grammar, CefrLevel::B2 | CefrLevel::C1) => 400,
        (Category::Grammar, CefrLevel::All) => 1500,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("pick a category first")]
    NoCategory,
    #[error("pronunciation has no learn mode")]
    LearnUnavailable,
    #[error("pick a category and a mode first")]
    NotStartable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub game_mode: GameMode,
    pub count: usize,
    pub ui_language: Language,
    pub learning_language: Language,
    pub level: CefrLevel,
}

#[derive(Debug, Clone)]
pub struct Menu {
    ui_language: Language,
    learning_language: Language,
    level: CefrLevel,
    category: Option<Category>,
    mode: Option<Mode>,
    quiz_length: usize,
}

impl Menu {
    pub fn new(ui_language: Language, learning_language: Language, level: CefrLevel) -> Self {
        Self {
            ui_language,
            learning_language,
            level,
            category: None,
            mode: None,
            quiz_length: DEFAULT_QUIZ_LENGTH,
        }
    }

    pub fn ui_language(&self) -> Language {
        self.ui_language
    }

    pub fn learning_language(&self) -> Language {
        self.learning_language
    }

    pub fn level(&self) -> CefrLevel {
        self.level
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    pub fn limits(&self) -> QuizLimits {
        match self.category {
            Some(category) => QuizLimits {
                min: QUIZ_MIN,
                max: learn_limit(category, self.level),
            },
            None => QuizLimits {
                min: QUIZ_MIN,
                max: UNCATEGORIZED_MAX,
            },
        }
    }

    fn reset_choice(&mut self) {
        self.category = None;
        self.mode = None;
        self.quiz_length = self.limits().clamp(self.quiz_length);
    }

    pub fn set_ui_language(&mut self, language: Language) {
        if self.ui_language != language {
            self.ui_language = language;
            self.reset_choice();
        }
    }

    pub fn set_learning_language(&mut self, language: Language) {
        if self.learning_language != language {
            self.learning_language = language;
            self.reset_choice();
        }
    }

    /// Snaps an out-of-range quiz length to the nearest bound of the new level.
    pub fn set_level(&mut self, level: CefrLevel) {
        self.level = level;
        self.quiz_length = self.limits().clamp(self.quiz_length);
    }

    pub fn set_category(&mut self, category: Category) {
        if self.category == Some(category) {
            return;
        }
        self.category = Some(category);
        self.mode = match category {
            Category::Pronunciation => Some(Mode::Quiz),
            _ => None,
        };
        self.quiz_length = self.limits().clamp(DEFAULT_QUIZ_LENGTH);
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), MenuError> {
        match (self.category, mode) {
            (None, _) => Err(MenuError::NoCategory),
            (Some(Category::Pronunciation), Mode::Learn) => Err(MenuError::LearnUnavailable),
            _ => {
                self.mode = Some(mode);
                Ok(())
            }
        }
    }

    /// Returns the length actually stored after clamping.
    pub fn set_quiz_length(&mut self, length: usize) -> usize {
        self.quiz_length = self.limits().clamp(length);
        self.quiz_length
    }

    pub fn start(&self) -> Result<SessionRequest, MenuError> {
        let (category, mode) = self
            .category
            .zip(self.mode)
            .ok_or(MenuError::NotStartable)?;
        let game_mode = match (category, mode) {
            (Category::Vocabulary, Mode::Learn) => GameMode::VocabLearn,
            (Category::Vocabulary, Mode::Quiz) => GameMode::VocabQuiz,
            (Category::Grammar, Mode::Learn) => GameMode::GrammarLearn,
            (Category::Grammar, Mode::Quiz) => GameMode::GrammarQuiz,
            (Category::Pronunciation, _) => GameMode::PronunciationPractice,
        };
        let count = match mode {
            Mode::Learn => learn_limit(category, self.level),
            Mode::Quiz => self.quiz_length,
        };
        Ok(SessionRequest {
            game_mode,
            count,
            ui_language: self.ui_language,
            learning_language: self.learning_language,
            level: self.level,
        })
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase()[..] {
            "vocabulary" | "vocab" | "v" => Ok(Category::Vocabulary),
            "grammar" | "g" => Ok(Category::Grammar),
            "pronunciation" | "p" => Ok(Category::Pronunciation),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase()[..] {
            "learn" | "l" => Ok(Mode::Learn),
            "quiz" | "q" | "practice" => Ok(Mode::Quiz),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Vocabulary => "vocabulary",
            Category::Grammar => "grammar",
            Category::Pronunciation => "pronunciation",
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Learn => "learn",
            Mode::Quiz => "quiz",
        })
    }
}
