mod common;

use std::io::Cursor;

use common::ScriptedTerminal;
use rand::{rngs::SmallRng, SeedableRng};
use starfall_blackjack::{
    session::play_session, GameConfig, GameError, Move, StarfallGame, StdConsole, TextTerminal,
};

#[test]
fn test_session_ends_when_player_declines() {
    let mut game = StarfallGame::new(100, SmallRng::seed_from_u64(1));
    let mut term = ScriptedTerminal::new(&[5], &[Move::Stand], &[false]);

    let summary = play_session(&mut game, &mut term).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.starting_bankroll, 100);
    assert!([95, 100, 105].contains(&summary.final_bankroll));
    assert_eq!(summary.wins + summary.losses + summary.ties, 1);
    assert_eq!(term.log.first().map(String::as_str), Some("Welcome to Starfall Blackjack!"));
    assert_eq!(term.log.last().map(String::as_str), Some("Game over! Thanks for playing."));
}

#[test]
fn test_session_ends_when_player_is_broke() {
    // Falls back to going all-in and hitting every time, so the first round is a bust.
    let mut game = StarfallGame::new(40, SmallRng::seed_from_u64(2));
    let mut term = ScriptedTerminal::default();

    let summary = play_session(&mut game, &mut term).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.losses, 1);
    assert_eq!(summary.final_bankroll, 0);
    // Still asked about another round before the funds check ends the loop.
    assert_eq!(term.continue_prompts, 1);
    assert!(term.saw("Bust! You exceeded 21."));
}

#[test]
fn test_session_over_text_console() {
    let config = GameConfig { starting_bankroll: 100, seed: Some(7) };
    let mut game = StarfallGame::from_config(&config).unwrap();
    let input = "lots\n10\ns\ny\n10\nx\ns\nn\n";
    let mut term = TextTerminal::new(StdConsole::new(Cursor::new(input), Vec::new()));

    let summary = play_session(&mut game, &mut term).unwrap();
    let output = String::from_utf8(term.into_inner().output().clone()).unwrap();

    assert_eq!(summary.rounds, 2);
    assert!(output.starts_with("Welcome to Starfall Blackjack!\n"));
    assert_eq!(output.matches("--- New Round ---").count(), 2);
    assert_eq!(output.matches("Please enter a valid number.").count(), 1);
    assert_eq!(output.matches("Invalid input. Please enter H or S.").count(), 1);
    assert_eq!(output.matches("Play another round? (y/n): ").count(), 2);
    assert!(output.ends_with("Game over! Thanks for playing.\n"));
}

#[test]
fn test_closed_input_aborts_session() {
    let mut game = StarfallGame::new(100, SmallRng::seed_from_u64(3));
    let mut term = TextTerminal::new(StdConsole::new(Cursor::new(""), Vec::new()));

    let err = play_session(&mut game, &mut term).unwrap_err();
    assert!(matches!(err, GameError::InputClosed));
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let config = GameConfig { starting_bankroll: 100, seed: Some(2024) };
    let play = || {
        let mut game = StarfallGame::from_config(&config).unwrap();
        let mut term = ScriptedTerminal::new(&[10, 10, 10], &[Move::Stand; 3], &[true, true, false]);
        let summary = play_session(&mut game, &mut term).unwrap();
        (summary, term.transcript())
    };

    assert_eq!(play(), play());
}
