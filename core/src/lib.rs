#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use loader::*;
pub use provider::*;
pub use types::*;

mod board;
mod clue;
mod controller;
mod error;
mod loader;
mod provider;
#[cfg(test)]
mod testing;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of categories on the board.
    pub categories: Ix,
    /// Number of clues sampled for every category.
    pub clues_per_category: Ix,
    /// How many candidate categories to request before sampling.
    pub category_pool: u8,
    /// How many undersized categories one load may swap out before giving up.
    pub max_replacements: u8,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES: Ix = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: Ix = 5;
    pub const DEFAULT_CATEGORY_POOL: u8 = 100;
    pub const DEFAULT_MAX_REPLACEMENTS: u8 = 10;

    pub const fn new_unchecked(categories: Ix, clues_per_category: Ix) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool: Self::DEFAULT_CATEGORY_POOL,
            max_replacements: Self::DEFAULT_MAX_REPLACEMENTS,
        }
    }

    pub fn new(categories: Ix, clues_per_category: Ix) -> Self {
        Self::new_unchecked(categories.max(1), clues_per_category.max(1))
            .with_pool(Self::DEFAULT_CATEGORY_POOL)
    }

    /// Sets the candidate pool, never smaller than the category count.
    pub fn with_pool(self, category_pool: u8) -> Self {
        Self {
            category_pool: category_pool.max(self.categories),
            ..self
        }
    }

    pub const fn with_max_replacements(self, max_replacements: u8) -> Self {
        Self {
            max_replacements,
            ..self
        }
    }

    pub const fn total_cells(&self) -> usize {
        self.categories as usize * self.clues_per_category as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_CATEGORIES, Self::DEFAULT_CLUES_PER_CATEGORY)
    }
}

/// What a single reveal produced, carrying the text to display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome<'a> {
    NoChange,
    Question(&'a str),
    Answer(&'a str),
}

impl<'a> RevealOutcome<'a> {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn content(self) -> Option<&'a str> {
        match self {
            Self::NoChange => None,
            Self::Question(text) | Self::Answer(text) => Some(text),
        }
    }
}
