use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leagues with a sports screamsheet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum League {
    #[serde(rename = "mlb")]
    Mlb,
    #[serde(rename = "nhl")]
    Nhl,
    #[serde(rename = "nfl")]
    Nfl,
    #[serde(rename = "nba")]
    Nba,
}

impl League {
    /// Upper-case abbreviation used in titles
    pub fn abbreviation(&self) -> &'static str {
        match self {
            League::Mlb => "MLB",
            League::Nhl => "NHL",
            League::Nfl => "NFL",
            League::Nba => "NBA",
        }
    }

    pub fn all() -> [League; 4] {
        [League::Mlb, League::Nhl, League::Nfl, League::Nba]
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for League {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mlb" => Ok(League::Mlb),
            "nhl" => Ok(League::Nhl),
            "nfl" => Ok(League::Nfl),
            "nba" => Ok(League::Nba),
            other => Err(AppError::InvalidInput(format!("Unknown league: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("NHL".parse::<League>().unwrap(), League::Nhl);
        assert_eq!(League::Mlb.to_string(), "MLB");
        assert!("cricket".parse::<League>().is_err());
    }
}
