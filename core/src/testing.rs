use alloc::{format, string::String, vec::Vec};
use core::cell::RefCell;

use crate::*;

/// In-memory provider for loader and controller tests.
#[derive(Debug, Default)]
pub(crate) struct MemoryProvider {
    categories: Vec<(CategorySummary, CategoryData)>,
    broken: Option<CategoryId>,
    offline: bool,
    fetched: RefCell<Vec<CategoryId>>,
}

impl MemoryProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, id: CategoryId, title: &str, clues: &[(&str, &str)]) -> Self {
        let data = CategoryData {
            title: title.into(),
            clues: clues.iter().map(|&(q, a)| RawClue::new(q, a)).collect(),
        };
        self.categories.push((CategorySummary::new(id), data));
        self
    }

    /// Adds `count` categories with `clues` well-formed clues each, ids starting at `first_id`.
    pub(crate) fn with_generated(mut self, first_id: CategoryId, count: u64, clues: usize) -> Self {
        for id in first_id..first_id + count {
            let data = CategoryData {
                title: format!("category {}", id),
                clues: (0..clues)
                    .map(|n| RawClue::new(format!("q{}-{}", id, n), format!("a{}-{}", id, n)))
                    .collect(),
            };
            self.categories.push((CategorySummary::new(id), data));
        }
        self
    }

    pub(crate) fn advertising_counts(mut self) -> Self {
        for (summary, data) in &mut self.categories {
            summary.clues_count = Some(data.clues.len() as u32);
        }
        self
    }

    pub(crate) fn broken_at(mut self, id: CategoryId) -> Self {
        self.broken = Some(id);
        self
    }

    pub(crate) fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub(crate) fn fetched(&self) -> Vec<CategoryId> {
        self.fetched.borrow().clone()
    }
}

impl TriviaProvider for MemoryProvider {
    async fn list_categories(&self, count: u8) -> Result<Vec<CategorySummary>> {
        if self.offline {
            return Err(GameError::data_source("connection refused"));
        }
        Ok(self
            .categories
            .iter()
            .take(count.into())
            .map(|(summary, _)| summary.clone())
            .collect())
    }

    async fn get_category(&self, id: CategoryId) -> Result<CategoryData> {
        self.fetched.borrow_mut().push(id);
        if self.broken == Some(id) {
            return Err(GameError::data_source(String::from("malformed category payload")));
        }
        self.categories
            .iter()
            .find(|(summary, _)| summary.id == id)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| GameError::data_source(format!("404 for category {}", id)))
    }
}
