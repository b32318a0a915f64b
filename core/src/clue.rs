use alloc::string::String;
use serde::{Deserialize, Serialize};

/// How much of a clue the player currently sees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// The state one reveal moves to, `None` once the answer is showing.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Text matching the current state, nothing while hidden.
    pub fn shown_text(&self) -> Option<&str> {
        match self.state {
            RevealState::Hidden => None,
            RevealState::Question => Some(&self.question),
            RevealState::Answer => Some(&self.answer),
        }
    }

    pub(crate) fn advance(&mut self) -> crate::RevealOutcome<'_> {
        use crate::RevealOutcome::*;

        let Some(next) = self.state.next() else {
            return NoChange;
        };
        self.state = next;
        match next {
            RevealState::Question => Question(&self.question),
            RevealState::Answer => Answer(&self.answer),
            RevealState::Hidden => NoChange,
        }
    }
}
