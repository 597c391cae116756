//! Label language selection.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::LookupError;

/// Language for rendering stem, branch and derived labels.
///
/// `English` renders stems and branches in pinyin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    #[default]
    Chinese,
    English,
    Vietnamese,
}

impl Language {
    /// Short code: `zh`, `en`, `vi`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::English => "en",
            Self::Vietnamese => "vi",
        }
    }

    /// Separator between stem and branch labels in a pillar.
    pub const fn pillar_separator(self) -> &'static str {
        match self {
            Self::Chinese => "",
            Self::English | Self::Vietnamese => " ",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" | "cn" | "chinese" => Ok(Self::Chinese),
            "en" | "english" | "pinyin" => Ok(Self::English),
            "vi" | "vn" | "vietnamese" => Ok(Self::Vietnamese),
            _ => Err(LookupError::UnknownLabel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("vietnamese".parse::<Language>().unwrap(), Language::Vietnamese);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn code_roundtrip() {
        for lang in [Language::Chinese, Language::English, Language::Vietnamese] {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }
}
