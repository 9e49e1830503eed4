//! Character comparison policies.

use serde::{Deserialize, Serialize};

/// Policy deciding when a guessed character matches an authored one.
///
/// The same policy is used when checking that intersecting answers agree and
/// when checking guesses, so a puzzle that builds is always solved by filling
/// in the authored characters.
///
/// The engine never rejects characters because of the alphabet; validating
/// input belongs to the host.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Alphabet {
    /// Characters must be identical.
    Exact,
    /// Characters are compared after uppercasing.
    #[default]
    CaseInsensitive,
    /// Case-insensitive, with katakana folded onto hiragana.
    Kana,
}

impl Alphabet {
    /// Maps a character to its comparison form under this policy.
    ///
    /// # Example
    ///
    /// ```
    /// use crossword_core::Alphabet;
    ///
    /// assert_eq!(Alphabet::CaseInsensitive.normalize('a'), 'A');
    /// assert_eq!(Alphabet::Exact.normalize('a'), 'a');
    /// assert_eq!(Alphabet::Kana.normalize('ゴ'), 'ご');
    /// ```
    #[must_use]
    pub fn normalize(self, ch: char) -> char {
        match self {
            Self::Exact => ch,
            Self::CaseInsensitive => uppercase(ch),
            Self::Kana => fold_katakana(uppercase(ch)),
        }
    }

    /// Returns `true` if `guess` is an acceptable entry for `expected`.
    #[must_use]
    pub fn matches(self, expected: char, guess: char) -> bool {
        self.normalize(expected) == self.normalize(guess)
    }
}

// Characters whose uppercase form spans several characters (e.g. 'ß') stay as-is.
fn uppercase(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

const KATAKANA_TO_HIRAGANA: u32 = 0x60;

fn fold_katakana(ch: char) -> char {
    match ch {
        'ァ'..='ヶ' => char::from_u32(u32::from(ch) - KATAKANA_TO_HIRAGANA).unwrap_or(ch),
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_sensitive() {
        assert!(Alphabet::Exact.matches('A', 'A'));
        assert!(!Alphabet::Exact.matches('A', 'a'));
    }

    #[test]
    fn test_case_insensitive_folds_case() {
        assert!(Alphabet::CaseInsensitive.matches('A', 'a'));
        assert!(Alphabet::CaseInsensitive.matches('é', 'É'));
        assert!(!Alphabet::CaseInsensitive.matches('A', 'B'));
        assert_eq!(Alphabet::CaseInsensitive.normalize('ß'), 'ß');
    }

    #[test]
    fn test_kana_folds_katakana_onto_hiragana() {
        assert!(Alphabet::Kana.matches('ご', 'ゴ'));
        assert!(Alphabet::Kana.matches('ゃ', 'ャ'));
        assert!(Alphabet::Kana.matches('ゖ', 'ヶ'));
        assert!(Alphabet::Kana.matches('x', 'X'));
        assert!(!Alphabet::Kana.matches('ご', 'こ'));
        // Prolonged sound mark has no hiragana counterpart.
        assert_eq!(Alphabet::Kana.normalize('ー'), 'ー');
        assert!(!Alphabet::CaseInsensitive.matches('ご', 'ゴ'));
    }
}
