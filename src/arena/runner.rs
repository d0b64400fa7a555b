//! Game driver and match runner.
//!
//! The driver loop is the same for every variant: ask the side to move for
//! a move on the read-only board, apply it, repeat until the game ends.
//! Strategies are trusted only as far as the board accepts their moves.

use crate::core::{ByPlayer, GameRng, Player, Result, SimError};
use crate::games::{create_board, AnyBoard};
use crate::rules::{Board, GameResult};
use crate::strategy::Strategy;

use super::config::{MatchConfig, Seat};
use super::record::{GameOutcome, GameRecord, SeatRecord};

/// A finished game as seen by the driver.
#[derive(Clone, Debug)]
pub struct PlayedGame<B> {
    /// Final position.
    pub board: B,

    pub result: GameResult,

    /// Moves in play order, as displayed.
    pub moves: Vec<String>,
}

/// Play `board` to the end with one strategy per side.
///
/// A move the board rejects aborts the game with
/// [`SimError::IllegalMove`]; the board is not advanced past it.
pub fn play_game<B: Board>(
    mut board: B,
    strategies: &mut ByPlayer<Box<dyn Strategy<B>>>,
) -> Result<PlayedGame<B>> {
    let mut moves = Vec::new();

    loop {
        if let Some(result) = board.outcome() {
            return Ok(PlayedGame {
                board,
                result,
                moves,
            });
        }

        let player = board.current_player();
        let strategy = &mut strategies[player];
        let mv = strategy.choose_move(&board);

        board.apply(mv).map_err(|source| SimError::IllegalMove {
            strategy: strategy.label(),
            mv: mv.to_string(),
            source,
        })?;

        log::trace!("{player} ({}) played {mv}", strategy.label());
        moves.push(mv.to_string());
    }
}

/// Play every game of a match.
///
/// All randomness derives from `config.seed`: the first-player draw and one
/// forked stream per strategy per game, so a match replays exactly.
pub fn run_match(config: &MatchConfig) -> Result<Vec<GameRecord>> {
    config.validate()?;

    log::info!(
        "match start: {} games of {}, {} vs {}",
        config.games,
        config.variant,
        config.seat1,
        config.seat2
    );

    let mut rng = GameRng::new(config.seed);
    let mut records = Vec::with_capacity(config.games as usize);
    let mut wins = [0u32; 2];
    let mut draws = 0u32;

    for game in 1..=config.games {
        let first = config.first_player.resolve(&mut rng);
        let second = first.other();

        let mut strategies: ByPlayer<Box<dyn Strategy<AnyBoard>>> = ByPlayer::new(
            config.seat(first).build(Player::A, rng.fork())?,
            config.seat(second).build(Player::B, rng.fork())?,
        );

        let played = play_game(create_board(config.variant), &mut strategies)?;
        let record = GameRecord {
            game,
            variant: config.variant,
            first,
            seats: Seat::ALL.map(|seat| {
                let player = if seat == first { Player::A } else { Player::B };
                SeatRecord::new(config.seat(seat), player)
            }),
            outcome: GameRecord::outcome_for(first, played.result),
            plies: played.moves.len(),
            moves: played.moves,
        };

        match record.outcome {
            GameOutcome::Winner(seat) => wins[seat.index()] += 1,
            GameOutcome::Draw => draws += 1,
        }
        log::debug!(
            "game {game}: {first} opened, {} after {} plies",
            played.result,
            record.plies
        );
        records.push(record);
    }

    log::info!(
        "match end: seat 1 won {}, seat 2 won {}, {} drawn",
        wins[0],
        wins[1],
        draws
    );
    Ok(records)
}
