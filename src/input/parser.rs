// src/input/parser.rs

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::input::InputDeck;

/// Parses the input deck from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML input file.
///
/// # Returns
///
/// * `Ok(InputDeck)` if parsing is successful.
/// * `Err` if the file cannot be read or is not a valid input deck.
pub fn parse_input_deck<P: AsRef<Path>>(file_path: P) -> Result<InputDeck> {
    let contents = fs::read_to_string(file_path)?;
    parse_input_deck_str(&contents)
}

/// Parses the input deck from YAML text.
pub fn parse_input_deck_str(contents: &str) -> Result<InputDeck> {
    let input_deck: InputDeck = serde_yaml::from_str(contents)?;
    Ok(input_deck)
}
