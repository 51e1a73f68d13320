use js_sys::Function;
use wasm_bindgen::{prelude::*, JsCast};

pub mod config;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod participant;
pub mod session;
pub mod terminal;

pub use config::GameConfig;
pub use deck::{Card, Deck, Suit};
pub use error::GameError;
pub use game::{Outcome, RoundReport, StarfallGame, Verdict};
pub use participant::{Bankroll, Chips, Participant};
pub use session::SessionSummary;
pub use terminal::{Console, Move, StdConsole, TableEvent, Terminal, TextTerminal};

/// Console backed by JavaScript callbacks. Lines go to `display`, or to the
/// browser console when no display function was passed.
struct JsConsole<'a> {
    prompt: &'a Function,
    display: Option<&'a Function>,
}

impl<'a> JsConsole<'a> {
    fn new(prompt: &'a Function, display: &'a JsValue) -> Self {
        JsConsole {
            prompt,
            display: display.dyn_ref::<Function>(),
        }
    }
}

impl Console for JsConsole<'_> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        let answer = self
            .prompt
            .call1(&JsValue::NULL, &JsValue::from_str(prompt))
            .map_err(|err| GameError::Callback(format!("prompt threw: {err:?}")))?;
        Ok(answer.as_string())
    }

    fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        match self.display {
            Some(display) => display
                .call1(&JsValue::NULL, &JsValue::from_str(text))
                .map(|_| ())
                .map_err(|err| GameError::Callback(format!("display threw: {err:?}"))),
            None => {
                web_sys::console::log_1(&JsValue::from_str(text));
                Ok(())
            }
        }
    }
}

fn game_from_params(params: &JsValue) -> Result<StarfallGame<rand::rngs::SmallRng>, JsValue> {
    let config: GameConfig = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
    StarfallGame::from_config(&config).map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))
}

#[wasm_bindgen]
pub fn play_session(params: &JsValue, prompt: &Function, display: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let mut game = game_from_params(params)?;
    let mut terminal = TextTerminal::new(JsConsole::new(prompt, display));

    let summary = session::play_session(&mut game, &mut terminal)
        .map_err(|err| JsValue::from_str(&format!("Session failed: {err}")))?;

    serde_wasm_bindgen::to_value(&summary)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn play_round(params: &JsValue, prompt: &Function, display: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let mut game = game_from_params(params)?;
    let mut terminal = TextTerminal::new(JsConsole::new(prompt, display));

    let report = game
        .play_round(&mut terminal)
        .map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}
