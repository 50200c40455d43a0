use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages that can be learned or used for the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ja,
    Zh,
    De,
    Fr,
    Es,
    It,
    Ar,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Ja,
        Language::Zh,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::It,
        Language::Ar,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::Ar => "ar",
        }
    }

    /// English name, used inside prompts.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "Japanese",
            Language::Zh => "Chinese",
            Language::De => "German",
            Language::Fr => "French",
            Language::Es => "Spanish",
            Language::It => "Italian",
            Language::Ar => "Arabic",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "日本語",
            Language::Zh => "中文",
            Language::De => "Deutsch",
            Language::Fr => "Français",
            Language::Es => "Español",
            Language::It => "Italiano",
            Language::Ar => "العربية",
        }
    }

    /// BCP-47 tag handed to speech engines.
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Ja => "ja-JP",
            Language::Zh => "zh-CN",
            Language::De => "de-DE",
            Language::Fr => "fr-FR",
            Language::Es => "es-ES",
            Language::It => "it-IT",
            Language::Ar => "ar-SA",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or(UnknownLanguage(s.to_owned()))
    }
}

/// Common European Framework of Reference proficiency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    All,
}

impl CefrLevel {
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::All => "All",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown CEFR level '{}'", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for CefrLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CefrLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or(UnknownLevel(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("DE".parse::<Language>(), Ok(Language::De));
        assert_eq!(" ja ".parse::<Language>(), Ok(Language::Ja));
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn parses_levels() {
        assert_eq!("b2".parse::<CefrLevel>(), Ok(CefrLevel::B2));
        assert_eq!("ALL".parse::<CefrLevel>(), Ok(CefrLevel::All));
        assert!("C2".parse::<CefrLevel>().is_err());
    }

    #[test]
    fn speech_tags_follow_bcp47() {
        assert_eq!(Language::De.speech_tag(), "de-DE");
        assert_eq!(Language::Zh.speech_tag(), "zh-CN");
    }
}
