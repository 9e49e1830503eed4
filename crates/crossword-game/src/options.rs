use serde::{Deserialize, Serialize};

/// What [`advance_after_guess`](crate::Crossword::advance_after_guess) does
/// after the last clue of a direction.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WrapPolicy {
    /// Stay on the last cell.
    Stop,
    /// Continue with the first clue of the same direction.
    SameDirection,
    /// Continue with the first clue of the other direction.
    #[default]
    OtherDirection,
}

/// When [`CrosswordEvent::LoadedCorrect`](crate::CrosswordEvent::LoadedCorrect)
/// is raised.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum LoadedCorrectPolicy {
    /// Report on the initial load and on every puzzle replacement.
    #[default]
    EveryLoad,
    /// Report on the initial load only.
    FirstLoadOnly,
}

/// Options for a play session.
///
/// # Example
///
/// ```
/// use crossword_game::{LoadedCorrectPolicy, SessionOptions, WrapPolicy};
///
/// let options = SessionOptions::default()
///     .wrap_policy(WrapPolicy::Stop)
///     .loaded_correct_policy(LoadedCorrectPolicy::FirstLoadOnly);
/// assert!(options.wrap_policy.is_stop());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Navigation behavior at the end of a direction's clue list.
    pub wrap_policy: WrapPolicy,
    /// Whether puzzle replacement reports already-correct clues again.
    pub loaded_correct_policy: LoadedCorrectPolicy,
}

impl SessionOptions {
    /// Sets the wrap policy.
    #[must_use]
    pub fn wrap_policy(mut self, policy: WrapPolicy) -> Self {
        self.wrap_policy = policy;
        self
    }

    /// Sets the loaded-correct policy.
    #[must_use]
    pub fn loaded_correct_policy(mut self, policy: LoadedCorrectPolicy) -> Self {
        self.loaded_correct_policy = policy;
        self
    }
}
