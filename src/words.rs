use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static WORDS_DIR: Dir = include_dir!("src/words");

/// An ordered word list, fixed for the lifetime of a session. Words
/// are uppercase alphabetic only.
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    /// Loads one of the word lists compiled into the binary.
    pub fn new(file_name: String) -> Self {
        read_word_list_from_file(format!("{file_name}.json")).unwrap()
    }

    /// Builds a list from user-supplied words. Words are uppercased;
    /// anything containing a non-alphabetic character is dropped.
    pub fn from_custom(raw: &[String]) -> Result<Self, Box<dyn Error>> {
        let words: Vec<String> = raw.iter().filter_map(|w| normalize_word(w)).collect();

        if words.is_empty() {
            return Err("no usable words: custom words must be alphabetic".into());
        }

        Ok(Self {
            name: "custom".to_string(),
            size: words.len() as u32,
            words,
        })
    }

    /// Reorders the list in place. Run before the session starts; the
    /// list must not change once play begins.
    pub fn shuffle(&mut self) {
        self.words.shuffle(&mut rand::thread_rng());
    }
}

/// Uppercases a word, rejecting it entirely if any character is not an
/// ASCII letter.
fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

fn read_word_list_from_file(file_name: String) -> Result<WordList, Box<dyn Error>> {
    let file = WORDS_DIR
        .get_file(file_name)
        .expect("Word list file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let list = from_str(file_as_str).expect("Unable to deserialize word list json");

    Ok(list)
}
