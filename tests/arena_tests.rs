//! Match runner integration tests.

use boardgame_sim::arena::{run_match, FirstPlayer, GameOutcome, MatchConfig, Seat};
use boardgame_sim::core::{Player, SimError};
use boardgame_sim::games::GameVariant;
use boardgame_sim::strategy::{SeatSpec, StrategyKind};

fn seats(a: &str, b: &str) -> (SeatSpec, SeatSpec) {
    (
        SeatSpec::new(a.parse().unwrap()),
        SeatSpec::new(b.parse().unwrap()),
    )
}

// =============================================================================
// Match Results
// =============================================================================

#[test]
fn test_minimax_never_loses_tictactoe_to_random() {
    let (s1, s2) = seats("mm", "r");
    let config = MatchConfig::new(GameVariant::TicTacToe)
        .with_seats(s1.with_depth(9), s2)
        .with_first_player(FirstPlayer::Random)
        .with_games(10)
        .with_seed(3);

    let records = run_match(&config).unwrap();
    assert_eq!(records.len(), 10);
    for record in &records {
        assert_ne!(record.outcome, GameOutcome::Winner(Seat::Two), "{record:?}");
    }
}

#[test]
fn test_minimax_beats_random_connect_four() {
    let (s1, s2) = seats("minimax", "random");
    let config = MatchConfig::new(GameVariant::ConnectFour)
        .with_seats(s1.with_depth(3), s2)
        .with_games(4)
        .with_seed(11);

    let records = run_match(&config).unwrap();
    let wins = records
        .iter()
        .filter(|r| r.winner() == Some(Seat::One))
        .count();
    assert!(wins >= 3, "minimax won only {wins} of 4");
}

#[test]
fn test_every_strategy_kind_completes_games() {
    for (a, b) in [("greedy", "buffered"), ("q", "a"), ("r", "mm")] {
        let (s1, s2) = seats(a, b);
        for variant in [GameVariant::TicTacToe, GameVariant::ConnectFour] {
            let config = MatchConfig::new(variant)
                .with_seats(s1.with_depth(2), s2.with_depth(2))
                .with_games(2);
            let records = run_match(&config).unwrap();
            for record in &records {
                assert_eq!(record.plies, record.moves.len());
                // Shortest possible game: three marks against two
                assert!(record.plies >= 5);
            }
        }
    }
}

// =============================================================================
// Seating
// =============================================================================

#[test]
fn test_second_seat_opens_as_player_a() {
    let (s1, s2) = seats("random", "greedy");
    let config = MatchConfig::new(GameVariant::TicTacToe)
        .with_seats(s1, s2)
        .with_first_player(FirstPlayer::Seat2)
        .with_games(3);

    for record in run_match(&config).unwrap() {
        assert_eq!(record.first, Seat::Two);
        assert_eq!(record.seat(Seat::Two).player, Player::A);
        assert_eq!(record.seat(Seat::One).player, Player::B);
        assert_eq!(record.seat(Seat::Two).strategy, StrategyKind::Greedy);
    }
}

#[test]
fn test_random_first_player_varies() {
    let (s1, s2) = seats("r", "r");
    let config = MatchConfig::new(GameVariant::TicTacToe)
        .with_seats(s1, s2)
        .with_first_player("random".parse().unwrap())
        .with_games(32);

    let records = run_match(&config).unwrap();
    assert!(records.iter().any(|r| r.first == Seat::One));
    assert!(records.iter().any(|r| r.first == Seat::Two));
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn test_same_seed_same_match() {
    let (s1, s2) = seats("mm", "q");
    let config = MatchConfig::new(GameVariant::ConnectFour)
        .with_seats(s1.with_depth(2), s2)
        .with_first_player(FirstPlayer::Random)
        .with_games(3)
        .with_seed(99);

    assert_eq!(run_match(&config).unwrap(), run_match(&config).unwrap());
}

#[test]
fn test_records_serialize() {
    let config = MatchConfig::new(GameVariant::TicTacToe).with_games(2);
    let records = run_match(&config).unwrap();

    let json = serde_json::to_string(&records).unwrap();
    let back: Vec<boardgame_sim::arena::GameRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, records);
}

// =============================================================================
// Configuration Errors
// =============================================================================

#[test]
fn test_human_seat_rejected() {
    let (s1, s2) = seats("human", "random");
    let config = MatchConfig::default().with_seats(s1, s2);
    assert!(matches!(
        run_match(&config),
        Err(SimError::UnsupportedStrategy(_))
    ));
}

#[test]
fn test_unknown_tags_rejected() {
    assert!(matches!(
        "alphazero".parse::<StrategyKind>(),
        Err(SimError::UnknownStrategy(_))
    ));
    assert!(matches!(
        "go".parse::<GameVariant>(),
        Err(SimError::UnknownVariant(_))
    ));
    assert!(matches!(
        "third".parse::<FirstPlayer>(),
        Err(SimError::InvalidFirstPlayer(_))
    ));
}

#[test]
fn test_zero_depth_rejected() {
    let (s1, s2) = seats("mm", "mm");
    let config = MatchConfig::default().with_seats(s1.with_depth(0), s2);
    assert!(matches!(run_match(&config), Err(SimError::InvalidDepth(0))));
}
