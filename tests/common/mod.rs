#![allow(dead_code)]

use std::collections::VecDeque;

use starfall_blackjack::{Card, Chips, Deck, GameError, Move, Suit, TableEvent, Terminal};

/// Terminal fed from queued answers. Once a queue runs dry it falls back to
/// going all-in, hitting, and asking for another round.
#[derive(Default)]
pub struct ScriptedTerminal {
    pub bets: VecDeque<Chips>,
    pub moves: VecDeque<Move>,
    pub continues: VecDeque<bool>,
    pub bet_prompts: usize,
    pub continue_prompts: usize,
    pub log: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new(bets: &[Chips], moves: &[Move], continues: &[bool]) -> Self {
        ScriptedTerminal {
            bets: bets.iter().copied().collect(),
            moves: moves.iter().copied().collect(),
            continues: continues.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn transcript(&self) -> String {
        self.log.join("\n")
    }

    pub fn saw(&self, text: &str) -> bool {
        self.log.iter().any(|line| line.contains(text))
    }
}

impl Terminal for ScriptedTerminal {
    fn prompt_bet(&mut self, _min: Chips, max: Chips) -> Result<Chips, GameError> {
        self.bet_prompts += 1;
        Ok(self.bets.pop_front().unwrap_or(max))
    }

    fn prompt_move(&mut self) -> Result<Move, GameError> {
        Ok(self.moves.pop_front().unwrap_or(Move::Hit))
    }

    fn prompt_continue(&mut self) -> Result<bool, GameError> {
        self.continue_prompts += 1;
        Ok(self.continues.pop_front().unwrap_or(true))
    }

    fn show(&mut self, event: &TableEvent<'_>) -> Result<(), GameError> {
        self.log.push(event.to_string());
        Ok(())
    }
}

pub fn card(label: &str) -> Card {
    Card::standard(Suit::X, label).unwrap()
}

/// Deck that deals `draw_order` front to back.
pub fn stacked(draw_order: &[&'static str]) -> Deck {
    Deck::from_cards(draw_order.iter().rev().map(|label| card(label)).collect())
}
