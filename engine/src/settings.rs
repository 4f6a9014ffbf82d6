use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::Validate;
use crate::types::Difficulty;

/// Scripted policy for the X side in automated matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    Random,
    FirstEmpty,
}

impl FromStr for Opponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Opponent::Random),
            "first-empty" | "first_empty" => Ok(Opponent::FirstEmpty),
            _ => Err(format!(
                "Unknown opponent '{}', expected random or first-empty",
                s
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub games: u32,
    pub bot_difficulty: Difficulty,
    pub opponent: Opponent,
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            games: 100,
            bot_difficulty: Difficulty::Hard,
            opponent: Opponent::Random,
            seed: None,
        }
    }
}

impl Validate for MatchSettings {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.games > 1_000_000 {
            return Err("games must not exceed 1000000".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(MatchSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_games_is_rejected() {
        let settings = MatchSettings {
            games: 0,
            ..MatchSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_excessive_games_is_rejected() {
        let settings = MatchSettings {
            games: 2_000_000,
            ..MatchSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_opponent_from_str() {
        assert_eq!("random".parse::<Opponent>(), Ok(Opponent::Random));
        assert_eq!("first-empty".parse::<Opponent>(), Ok(Opponent::FirstEmpty));
        assert_eq!("First_Empty".parse::<Opponent>(), Ok(Opponent::FirstEmpty));
        assert!("perfect".parse::<Opponent>().is_err());
    }

    #[test]
    fn test_settings_yaml_round_trip() {
        let settings = MatchSettings {
            games: 25,
            bot_difficulty: Difficulty::Medium,
            opponent: Opponent::FirstEmpty,
            seed: Some(7),
        };

        let yaml = serde_yaml_ng::to_string(&settings).unwrap();
        let parsed: MatchSettings = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }
}
