use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.yaml";
const MAX_GAMES: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerChoice {
    Empty,
    Random,
    PrettyGood,
    VeryGood,
    Minimax,
    Human,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub games: u32,
    pub seed: Option<u64>,
    pub x_player: PlayerChoice,
    pub o_player: PlayerChoice,
    pub show_boards: bool,
    pub replay: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: None,
            x_player: PlayerChoice::Minimax,
            o_player: PlayerChoice::VeryGood,
            show_boards: false,
            replay: false,
        }
    }
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!("games must be between 1 and {}", MAX_GAMES));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_games_bounds() {
        let mut config = MatchConfig::default();
        config.games = 0;
        assert!(config.validate().is_err());
        config.games = MAX_GAMES + 1;
        assert!(config.validate().is_err());
        config.games = MAX_GAMES;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: MatchConfig = YamlConfigSerializer
            .deserialize("games: 3\nx_player: human\no_player: pretty-good\n")
            .unwrap();
        assert_eq!(config.games, 3);
        assert_eq!(config.x_player, PlayerChoice::Human);
        assert_eq!(config.o_player, PlayerChoice::PrettyGood);
        assert_eq!(config.seed, None);
        assert!(!config.show_boards);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = MatchConfig {
            games: 25,
            seed: Some(9),
            x_player: PlayerChoice::Random,
            o_player: PlayerChoice::Minimax,
            show_boards: true,
            replay: true,
        };
        let serializer = YamlConfigSerializer;
        let text = serializer.serialize(&config).unwrap();
        let parsed: MatchConfig = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
