use std::fmt;

use log::{debug, info, warn};
use rand::{rngs::SmallRng, Rng};
use serde::Serialize;

use crate::{
    config::GameConfig,
    dealer::{self, DealerMove},
    deck::{Card, Deck},
    error::GameError,
    hand,
    participant::{Chips, Participant},
    terminal::{Move, TableEvent, Terminal},
};

pub const PLAYER_NAME: &str = "You";
pub const DEALER_NAME: &str = "Diamond";
pub const MIN_BET: Chips = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

/// How a round was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    PlayerBusted,
    PlayerWins,
    DealerWins,
    Tie,
    /// The deck ran out mid-round; nobody pays.
    Void,
}

impl Verdict {
    pub fn outcome(&self) -> Outcome {
        match self {
            Verdict::PlayerWins => Outcome::Win,
            Verdict::PlayerBusted | Verdict::DealerWins => Outcome::Loss,
            Verdict::Tie | Verdict::Void => Outcome::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::PlayerBusted => write!(f, "{DEALER_NAME} wins! You busted."),
            Verdict::PlayerWins => write!(f, "You win! {DEALER_NAME} loses."),
            Verdict::DealerWins => write!(f, "{DEALER_NAME} wins! Better luck next time."),
            Verdict::Tie => write!(f, "It's a tie!"),
            Verdict::Void => write!(f, "No contest. The round is void."),
        }
    }
}

/// Compares final values. The player's bust is checked before the dealer's.
pub fn compare(player: u32, dealer: u32) -> Verdict {
    if hand::is_bust(player) {
        Verdict::PlayerBusted
    } else if hand::is_bust(dealer) || player > dealer {
        Verdict::PlayerWins
    } else if player < dealer {
        Verdict::DealerWins
    } else {
        Verdict::Tie
    }
}

/// A bet already checked against the bankroll it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Wager(Chips);

impl Wager {
    pub fn new(amount: Chips, bankroll: Chips) -> Result<Self, GameError> {
        if amount < MIN_BET || amount > bankroll {
            return Err(GameError::InvalidBet {
                bet: i64::from(amount),
                min: MIN_BET,
                max: bankroll,
            });
        }
        Ok(Wager(amount))
    }

    pub fn amount(&self) -> Chips {
        self.0
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub outcome: Outcome,
    pub verdict: Verdict,
    pub bet: Chips,
    /// Player's bankroll after settlement.
    pub bankroll: Chips,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_value: u32,
    pub dealer_value: u32,
    pub dealer_played: bool,
    pub dealer_moves: Vec<DealerMove>,
}

#[derive(Debug)]
enum Phase {
    Dealing,
    Betting,
    PlayerTurn,
    DealerTurn,
    Settlement,
    Done(RoundReport),
}

struct Round {
    deck: Deck,
    wager: Option<Wager>,
    dealer_played: bool,
    moves: Vec<DealerMove>,
}

impl Round {
    fn stake(&self) -> Chips {
        self.wager.map_or(0, |w| w.amount())
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.draw().ok_or(GameError::DeckExhausted)
    }
}

/// Table state carried from one round to the next.
pub struct StarfallGame<R> {
    player: Participant,
    dealer: Participant,
    rng: R,
}

impl StarfallGame<SmallRng> {
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(StarfallGame::new(config.starting_bankroll, config.rng()))
    }
}

impl<R: Rng> StarfallGame<R> {
    pub fn new(starting_bankroll: Chips, rng: R) -> Self {
        StarfallGame {
            player: Participant::player(PLAYER_NAME, starting_bankroll),
            dealer: Participant::dealer(DEALER_NAME),
            rng,
        }
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Plays one round with a freshly shuffled deck.
    pub fn play_round<T: Terminal + ?Sized>(&mut self, terminal: &mut T) -> Result<RoundReport, GameError> {
        self.ensure_funds()?;
        let deck = Deck::shuffled(&mut self.rng);
        self.play_round_with(deck, terminal)
    }

    /// Plays one round drawing from `deck` as given.
    pub fn play_round_with<T: Terminal + ?Sized>(
        &mut self,
        deck: Deck,
        terminal: &mut T,
    ) -> Result<RoundReport, GameError> {
        self.ensure_funds()?;

        let mut round = Round {
            deck,
            wager: None,
            dealer_played: false,
            moves: Vec::new(),
        };
        let mut phase = Phase::Dealing;
        loop {
            debug!("round phase: {phase:?}");
            let step = match phase {
                Phase::Dealing => self.deal(&mut round, terminal),
                Phase::Betting => self.take_bet(&mut round, terminal),
                Phase::PlayerTurn => self.player_turn(&mut round, terminal),
                Phase::DealerTurn => self.dealer_turn(&mut round, terminal),
                Phase::Settlement => self.settle(&round, terminal),
                Phase::Done(report) => return Ok(report),
            };
            phase = match step {
                Err(GameError::DeckExhausted) => self.void(&round, terminal)?,
                other => other?,
            };
        }
    }

    fn ensure_funds(&self) -> Result<(), GameError> {
        if self.player.bankroll().available() < MIN_BET {
            return Err(GameError::OutOfChips);
        }
        Ok(())
    }

    fn deal<T: Terminal + ?Sized>(&mut self, round: &mut Round, terminal: &mut T) -> Result<Phase, GameError> {
        terminal.show(&TableEvent::RoundStarted)?;
        self.player.reset_hand();
        self.dealer.reset_hand();

        for _ in 0..2 {
            self.player.add_card(round.draw()?);
            self.dealer.add_card(round.draw()?);
        }
        debug!(
            "dealt {:?} to player, {:?} to dealer, {} cards left",
            self.player.hand(),
            self.dealer.hand(),
            round.deck.remaining_cards()
        );
        Ok(Phase::Betting)
    }

    fn take_bet<T: Terminal + ?Sized>(&mut self, round: &mut Round, terminal: &mut T) -> Result<Phase, GameError> {
        let bankroll = self.player.bankroll().available();
        loop {
            let amount = terminal.prompt_bet(MIN_BET, bankroll)?;
            match Wager::new(amount, bankroll) {
                Ok(wager) => {
                    round.wager = Some(wager);
                    return Ok(Phase::PlayerTurn);
                }
                Err(err) => {
                    debug!("rejected bet: {err}");
                    terminal.show(&TableEvent::InvalidBet)?;
                }
            }
        }
    }

    fn player_turn<T: Terminal + ?Sized>(&mut self, round: &mut Round, terminal: &mut T) -> Result<Phase, GameError> {
        loop {
            terminal.show(&TableEvent::Hands {
                player: &self.player,
                dealer: &self.dealer,
                reveal_dealer: false,
            })?;
            match terminal.prompt_move()? {
                Move::Hit => {
                    let card = round.draw()?;
                    self.player.add_card(card);
                    terminal.show(&TableEvent::PlayerDrew(card))?;

                    if hand::is_bust(self.player.value()) {
                        terminal.show(&TableEvent::PlayerBusted)?;
                        let report = self.finish(round, Verdict::PlayerBusted);
                        terminal.show(&TableEvent::BustLoss {
                            bet: report.bet,
                            balance: report.bankroll,
                        })?;
                        return Ok(Phase::Done(report));
                    }
                }
                Move::Stand => return Ok(Phase::DealerTurn),
            }
        }
    }

    fn dealer_turn<T: Terminal + ?Sized>(&mut self, round: &mut Round, terminal: &mut T) -> Result<Phase, GameError> {
        round.dealer_played = true;
        let result = dealer::play_turn(&mut self.dealer, &mut round.deck, &mut self.rng, &mut round.moves);
        for step in &round.moves {
            terminal.show(&TableEvent::Dealer(*step))?;
        }
        result?;
        Ok(Phase::Settlement)
    }

    fn settle<T: Terminal + ?Sized>(&mut self, round: &Round, terminal: &mut T) -> Result<Phase, GameError> {
        terminal.show(&TableEvent::FinalHands)?;
        terminal.show(&TableEvent::Hands {
            player: &self.player,
            dealer: &self.dealer,
            reveal_dealer: true,
        })?;

        let verdict = compare(self.player.value(), self.dealer.value());
        terminal.show(&TableEvent::Verdict(verdict))?;
        let report = self.finish(round, verdict);
        terminal.show(&TableEvent::Balance(report.bankroll))?;
        Ok(Phase::Done(report))
    }

    fn void<T: Terminal + ?Sized>(&mut self, round: &Round, terminal: &mut T) -> Result<Phase, GameError> {
        warn!(
            "deck exhausted after {} dealer moves, voiding the round",
            round.moves.len()
        );
        terminal.show(&TableEvent::DeckExhausted)?;
        let report = self.finish(round, Verdict::Void);
        terminal.show(&TableEvent::Balance(report.bankroll))?;
        Ok(Phase::Done(report))
    }

    /// Moves the stake according to `verdict` and records the round.
    fn finish(&mut self, round: &Round, verdict: Verdict) -> RoundReport {
        let bet = round.stake();
        let outcome = verdict.outcome();
        match outcome {
            Outcome::Win => self.player.bankroll_mut().credit(bet),
            Outcome::Loss => self.player.bankroll_mut().debit(bet),
            Outcome::Tie => {}
        }

        let report = RoundReport {
            outcome,
            verdict,
            bet,
            bankroll: self.player.bankroll().available(),
            player_cards: self.player.hand().to_vec(),
            dealer_cards: self.dealer.hand().to_vec(),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            dealer_played: round.dealer_played,
            dealer_moves: round.moves.clone(),
        };
        match serde_json::to_string(&report) {
            Ok(json) => info!("round settled: {json}"),
            Err(err) => warn!("round settled as {verdict:?}, report not encodable: {err}"),
        }
        report
    }
}
