//! The boundary between the engine and whoever is sitting at the table.
//!
//! The engine only talks to a [`Terminal`]: it asks for a bet, a move or
//! whether to keep playing, and it announces [`TableEvent`]s. [`TextTerminal`]
//! turns that contract into prompts and lines of text over any [`Console`],
//! such as [`StdConsole`] for stdin/stdout.

use std::{
    fmt,
    io::{BufRead, Write},
    num::{IntErrorKind, ParseIntError},
};

use serde::Serialize;
use thiserror::Error;

use crate::{
    dealer::DealerMove,
    deck::Card,
    error::GameError,
    game::{Verdict, DEALER_NAME},
    participant::{Chips, Participant},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Move {
    Hit,
    Stand,
}

/// Something worth telling the player about.
#[derive(Debug)]
pub enum TableEvent<'a> {
    Welcome,
    RoundStarted,
    Hands {
        player: &'a Participant,
        dealer: &'a Participant,
        reveal_dealer: bool,
    },
    InvalidBet,
    PlayerDrew(Card),
    PlayerBusted,
    BustLoss { bet: Chips, balance: Chips },
    Dealer(DealerMove),
    FinalHands,
    Verdict(Verdict),
    Balance(Chips),
    DeckExhausted,
    Farewell,
}

impl fmt::Display for TableEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::Welcome => write!(f, "Welcome to Starfall Blackjack!"),
            TableEvent::RoundStarted => write!(f, "\n--- New Round ---"),
            TableEvent::Hands {
                player,
                dealer,
                reveal_dealer,
            } => {
                writeln!(f, "\nYour hand:")?;
                for card in player.hand() {
                    writeln!(f, "{card}")?;
                }
                writeln!(f, "Total value: {}", player.value())?;

                write!(f, "\n{}'s hand:", dealer.name())?;
                if *reveal_dealer {
                    for card in dealer.hand() {
                        write!(f, "\n{card}")?;
                    }
                    write!(f, "\nTotal value: {}", dealer.value())
                } else {
                    if let Some(card) = dealer.first_card() {
                        write!(f, "\n{card}")?;
                    }
                    write!(f, "\n[Hidden]")
                }
            }
            TableEvent::InvalidBet => write!(f, "{}", BetInputError::OutOfRange),
            TableEvent::PlayerDrew(card) => write!(f, "You draw: {card}"),
            TableEvent::PlayerBusted => write!(f, "Bust! You exceeded 21."),
            TableEvent::BustLoss { bet, balance } => {
                write!(f, "You lost ${bet}. Remaining balance: ${balance}")
            }
            TableEvent::Dealer(DealerMove::Smirk) => {
                write!(f, "\n{DEALER_NAME} smirks... She's up to something!")
            }
            TableEvent::Dealer(DealerMove::SneakDraw(card)) => {
                write!(f, "{DEALER_NAME} sneakily draws an extra card: {card}")
            }
            TableEvent::Dealer(DealerMove::Discard(_)) => {
                write!(f, "{DEALER_NAME} discards a card to manipulate her hand!")
            }
            TableEvent::Dealer(DealerMove::Draw(card)) => write!(f, "{DEALER_NAME} draws: {card}"),
            TableEvent::FinalHands => write!(f, "\nFinal hands:"),
            TableEvent::Verdict(verdict) => write!(f, "{verdict}"),
            TableEvent::Balance(balance) => write!(f, "Your balance: ${balance}"),
            TableEvent::DeckExhausted => {
                write!(f, "The deck ran dry! This round is void and your bet is returned.")
            }
            TableEvent::Farewell => write!(f, "Game over! Thanks for playing."),
        }
    }
}

/// Request/response contract the round controller plays through.
pub trait Terminal {
    /// Returns a bet in `[min, max]`, asking again until one is given.
    fn prompt_bet(&mut self, min: Chips, max: Chips) -> Result<Chips, GameError>;

    /// Returns Hit or Stand, asking again on anything else.
    fn prompt_move(&mut self) -> Result<Move, GameError>;

    /// True when the player wants another round.
    fn prompt_continue(&mut self) -> Result<bool, GameError>;

    fn show(&mut self, event: &TableEvent<'_>) -> Result<(), GameError>;
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BetInputError {
    #[error("Please enter a valid number.")]
    NotANumber,
    #[error("Invalid bet amount. Please enter a value within your balance.")]
    OutOfRange,
}

pub fn parse_bet(input: &str, min: Chips, max: Chips) -> Result<Chips, BetInputError> {
    let bet: i64 = input.trim().parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => BetInputError::OutOfRange,
        _ => BetInputError::NotANumber,
    })?;
    if bet < i64::from(min) || bet > i64::from(max) {
        return Err(BetInputError::OutOfRange);
    }
    Chips::try_from(bet).map_err(|_| BetInputError::OutOfRange)
}

pub fn parse_move(input: &str) -> Option<Move> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" => Some(Move::Hit),
        "s" => Some(Move::Stand),
        _ => None,
    }
}

pub fn parse_continue(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// A line-oriented text device.
pub trait Console {
    /// Shows `prompt` and reads one line. `None` once input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GameError>;

    fn write_line(&mut self, text: &str) -> Result<(), GameError>;
}

/// Console over any reader/writer pair: stdin/stdout, or buffers in tests.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StdConsole { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// Plays the [`Terminal`] contract as prompts and text over a [`Console`].
pub struct TextTerminal<C> {
    console: C,
}

impl<C: Console> TextTerminal<C> {
    pub fn new(console: C) -> Self {
        TextTerminal { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_inner(self) -> C {
        self.console
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        self.console.read_line(prompt)?.ok_or(GameError::InputClosed)
    }
}

impl<C: Console> Terminal for TextTerminal<C> {
    fn prompt_bet(&mut self, min: Chips, max: Chips) -> Result<Chips, GameError> {
        loop {
            let answer = self.ask(&format!("You have ${max}. Enter your bet: "))?;
            match parse_bet(&answer, min, max) {
                Ok(bet) => return Ok(bet),
                Err(err) => self.console.write_line(&err.to_string())?,
            }
        }
    }

    fn prompt_move(&mut self) -> Result<Move, GameError> {
        loop {
            let answer = self.ask("Do you want to [H]it or [S]tand? ")?;
            match parse_move(&answer) {
                Some(choice) => return Ok(choice),
                None => self.console.write_line("Invalid input. Please enter H or S.")?,
            }
        }
    }

    fn prompt_continue(&mut self) -> Result<bool, GameError> {
        let answer = self.console.read_line("Play another round? (y/n): ")?;
        Ok(answer.as_deref().is_some_and(parse_continue))
    }

    fn show(&mut self, event: &TableEvent<'_>) -> Result<(), GameError> {
        self.console.write_line(&event.to_string())
    }
}
