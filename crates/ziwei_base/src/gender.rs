//! Gender of the chart subject.

use std::str::FromStr;

use crate::error::BaseError;
use crate::stem::YinYang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// Male is yang, female is yin.
    pub const fn yin_yang(self) -> YinYang {
        match self {
            Self::Male => YinYang::Yang,
            Self::Female => YinYang::Yin,
        }
    }
}

impl FromStr for Gender {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(BaseError::UnknownGender(s.to_string())),
        }
    }
}
