use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which language model writes summaries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LlmChoice {
    #[default]
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "grok")]
    Grok,
}

impl fmt::Display for LlmChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LlmChoice::Gemini => "gemini",
            LlmChoice::Grok => "grok",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for LlmChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(LlmChoice::Gemini),
            "grok" => Ok(LlmChoice::Grok),
            other => Err(AppError::InvalidInput(format!(
                "Unknown LLM '{}', expected 'gemini' or 'grok'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_choice_parsing() {
        assert_eq!(" Grok ".parse::<LlmChoice>().unwrap(), LlmChoice::Grok);
        assert_eq!(LlmChoice::default(), LlmChoice::Gemini);
        assert!("gpt".parse::<LlmChoice>().is_err());
    }
}
