// src/input/mod.rs

pub mod input_deck;
pub mod parser;

pub use input_deck::InputDeck;
pub use parser::{parse_input_deck, parse_input_deck_str};
