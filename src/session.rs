use log::info;
use rand::Rng;
use serde::Serialize;

use crate::{
    error::GameError,
    game::{Outcome, RoundReport, StarfallGame, Verdict},
    participant::Chips,
    terminal::{TableEvent, Terminal},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Rounds cut short by an empty deck (also counted as ties).
    pub voids: u32,
    pub starting_bankroll: Chips,
    pub final_bankroll: Chips,
}

impl SessionSummary {
    fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        match report.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
        if report.verdict == Verdict::Void {
            self.voids += 1;
        }
        self.final_bankroll = report.bankroll;
    }
}

/// Plays rounds until the player is broke or declines another one.
pub fn play_session<R, T>(game: &mut StarfallGame<R>, terminal: &mut T) -> Result<SessionSummary, GameError>
where
    R: Rng,
    T: Terminal + ?Sized,
{
    let starting_bankroll = game.player().bankroll().available();
    let mut summary = SessionSummary {
        starting_bankroll,
        final_bankroll: starting_bankroll,
        ..SessionSummary::default()
    };

    terminal.show(&TableEvent::Welcome)?;
    while !game.player().bankroll().is_broke() {
        let report = game.play_round(terminal)?;
        summary.record(&report);
        if !terminal.prompt_continue()? {
            break;
        }
    }
    terminal.show(&TableEvent::Farewell)?;

    info!(
        "session over after {} rounds: {} won, {} lost, {} tied, bankroll ${} -> ${}",
        summary.rounds,
        summary.wins,
        summary.losses,
        summary.ties,
        summary.starting_bankroll,
        summary.final_bankroll
    );
    Ok(summary)
}
