//! Match configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result, SimError};
use crate::games::GameVariant;
use crate::strategy::{SeatSpec, StrategyKind};

/// One of the two configured seats, independent of who moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::One, Seat::Two];

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Raw 0-based index (`One` = 0, `Two` = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.index() + 1)
    }
}

/// Which seat moves first in each game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Seat1,
    Seat2,
    /// Drawn per game from the match RNG.
    Random,
}

impl FirstPlayer {
    /// The seat opening the next game.
    pub fn resolve(self, rng: &mut GameRng) -> Seat {
        match self {
            FirstPlayer::Seat1 => Seat::One,
            FirstPlayer::Seat2 => Seat::Two,
            FirstPlayer::Random => {
                if rng.gen_bool(0.5) {
                    Seat::One
                } else {
                    Seat::Two
                }
            }
        }
    }
}

impl FromStr for FirstPlayer {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "seat1" => Ok(FirstPlayer::Seat1),
            "2" | "seat2" => Ok(FirstPlayer::Seat2),
            "random" | "r" => Ok(FirstPlayer::Random),
            _ => Err(SimError::InvalidFirstPlayer(s.to_string())),
        }
    }
}

/// A series of games between two seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Which game to play.
    pub variant: GameVariant,

    /// Strategy in seat 1.
    pub seat1: SeatSpec,

    /// Strategy in seat 2.
    pub seat2: SeatSpec,

    /// Number of games (at least 1).
    pub games: u32,

    /// Who opens each game.
    pub first_player: FirstPlayer,

    /// Match seed; every strategy RNG and first-player draw derives from it.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::TicTacToe,
            seat1: SeatSpec::new(StrategyKind::Minimax),
            seat2: SeatSpec::new(StrategyKind::Random),
            games: 1,
            first_player: FirstPlayer::Seat1,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new match config for `variant` with default seats.
    pub fn new(variant: GameVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Set both seats.
    pub fn with_seats(mut self, seat1: SeatSpec, seat2: SeatSpec) -> Self {
        self.seat1 = seat1;
        self.seat2 = seat2;
        self
    }

    /// Set number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set first-player policy.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Set match seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn seat(&self, seat: Seat) -> &SeatSpec {
        match seat {
            Seat::One => &self.seat1,
            Seat::Two => &self.seat2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(SimError::InvalidConfig(
                "a match needs at least one game".to_string(),
            ));
        }
        self.seat1.validate()?;
        self.seat2.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_player_parsing() {
        assert_eq!("1".parse::<FirstPlayer>().unwrap(), FirstPlayer::Seat1);
        assert_eq!("2".parse::<FirstPlayer>().unwrap(), FirstPlayer::Seat2);
        assert_eq!("R".parse::<FirstPlayer>().unwrap(), FirstPlayer::Random);
        assert!(matches!(
            "3".parse::<FirstPlayer>(),
            Err(SimError::InvalidFirstPlayer(_))
        ));
    }

    #[test]
    fn test_random_first_player_uses_both_seats() {
        let mut rng = GameRng::new(8);
        let draws: Vec<Seat> = (0..64).map(|_| FirstPlayer::Random.resolve(&mut rng)).collect();
        assert!(draws.contains(&Seat::One));
        assert!(draws.contains(&Seat::Two));
    }

    #[test]
    fn test_fixed_first_player_ignores_rng() {
        let mut rng = GameRng::new(0);
        assert_eq!(FirstPlayer::Seat2.resolve(&mut rng), Seat::Two);
        assert_eq!(
            rng.gen_range_usize(0..1000),
            GameRng::new(0).gen_range_usize(0..1000)
        );
    }

    #[test]
    fn test_validation() {
        assert!(MatchConfig::default().validate().is_ok());
        assert!(MatchConfig::default().with_games(0).validate().is_err());

        let human = MatchConfig::default()
            .with_seats(SeatSpec::new(StrategyKind::Human), SeatSpec::default());
        assert!(matches!(
            human.validate(),
            Err(SimError::UnsupportedStrategy(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new(GameVariant::ConnectFour)
            .with_first_player(FirstPlayer::Random)
            .with_games(10);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""variant":"connectfour""#));
        assert!(json.contains(r#""first_player":"random""#));
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
