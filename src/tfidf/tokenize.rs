// Tokenizer — raw speech text to normalized word tokens.
//
// The default `Compat` mode reproduces the historical reports exactly:
// punctuation is deleted rather than replaced, so "end.Start" becomes the
// single token "endstart", and splitting happens on single spaces, so runs
// of spaces yield empty-string tokens. Both quirks are intentional and
// affect term counts; `Words` mode is available when compatibility with
// older reports does not matter.
//
// Text that is empty or only whitespace has no tokens in either mode.

use std::fmt;
use std::str::FromStr;

/// How punctuation and whitespace are handled when splitting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizeMode {
    /// Delete ASCII punctuation, turn `\n` into a space, split on single
    /// spaces. Empty tokens are kept.
    #[default]
    Compat,
    /// Replace ASCII punctuation with a space and split on whitespace runs.
    /// Never yields empty tokens.
    Words,
}

impl FromStr for TokenizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compat" => Ok(Self::Compat),
            "words" => Ok(Self::Words),
            other => Err(format!(
                "unknown tokenize mode {other:?} (expected \"compat\" or \"words\")"
            )),
        }
    }
}

impl fmt::Display for TokenizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compat => f.write_str("compat"),
            Self::Words => f.write_str("words"),
        }
    }
}

/// Tokenize with the historical (`Compat`) rules.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, TokenizeMode::Compat)
}

/// Tokenize `text` with the given mode. Pure; never fails.
///
/// Blank text yields no tokens; empty tokens only appear between words.
pub fn tokenize_with(text: &str, mode: TokenizeMode) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();

    match mode {
        TokenizeMode::Compat => {
            let cleaned: String = lowered
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            cleaned.split(' ').map(str::to_string).collect()
        }
        TokenizeMode::Words => {
            let spaced: String = lowered
                .chars()
                .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
                .collect();
            spaced.split_whitespace().map(str::to_string).collect()
        }
    }
}
