//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of a game. `Player::A` always moves first from an empty
//! board; the driver decides which strategy sits behind which side.
//!
//! ## ByPlayer
//!
//! Fixed two-slot storage indexed by `Player`, used for anything that
//! exists once per side (strategies, seat labels).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, rendered as `X`.
    A,
    /// Moves second, rendered as `O`.
    B,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Raw 0-based index (`A` = 0, `B` = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Board symbol for this player's marks.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use boardgame_sim::core::{ByPlayer, Player};
///
/// let mut wins: ByPlayer<u32> = ByPlayer::with_value(0);
/// wins[Player::B] += 1;
///
/// assert_eq!(wins[Player::A], 0);
/// assert_eq!(wins[Player::B], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByPlayer<T> {
    data: [T; 2],
}

impl<T> ByPlayer<T> {
    /// Create from explicit values for `A` and `B`.
    pub fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Player) -> T) -> Self {
        let a = factory(Player::A);
        let b = factory(Player::B);
        Self::new(a, b)
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for ByPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for ByPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::A.index(), 0);
        assert_eq!(Player::B.index(), 1);
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
        assert_eq!(format!("{}", Player::B), "Player B");
        assert_eq!(Player::A.symbol(), 'X');
    }

    #[test]
    fn test_by_player_from_fn() {
        let map = ByPlayer::from_fn(|p| p.index() * 10);
        assert_eq!(map[Player::A], 0);
        assert_eq!(map[Player::B], 10);
    }

    #[test]
    fn test_by_player_mutation() {
        let mut map: ByPlayer<i32> = ByPlayer::with_value(0);
        map[Player::A] = 7;
        *map.get_mut(Player::B) += 3;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::A, &7), (Player::B, &3)]);
    }

    #[test]
    fn test_by_player_serialization() {
        let map = ByPlayer::new("minimax".to_string(), "random".to_string());
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ByPlayer<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
