use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::*;

/// Question text the trivia service uses to mark entries that are not real questions.
pub const SENTINEL_QUESTION: &str = "=";

/// Source of trivia data, usually a remote HTTP service.
///
/// Any transport or decode failure must come back as [`GameError::DataSource`].
#[allow(async_fn_in_trait)]
pub trait TriviaProvider {
    /// Lists up to `count` candidate categories to sample from.
    async fn list_categories(&self, count: u8) -> Result<Vec<CategorySummary>>;

    /// Fetches one category with its full clue set.
    async fn get_category(&self, id: CategoryId) -> Result<CategoryData>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    /// Clue count advertised by the service, when it reports one.
    #[serde(default)]
    pub clues_count: Option<u32>,
}

impl CategorySummary {
    pub const fn new(id: CategoryId) -> Self {
        Self {
            id,
            clues_count: None,
        }
    }

    /// False only when the service says the category is too small.
    pub fn may_fill(&self, clues_per_category: Ix) -> bool {
        self.clues_count
            .is_none_or(|count| count >= u32::from(clues_per_category))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

/// A clue as it comes off the wire, fields may be missing or `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl RawClue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }

    /// Turns the entry into a hidden clue, dropping placeholders and blanks.
    pub fn into_clue(self) -> Option<Clue> {
        let question = self.question?;
        let answer = self.answer?;
        let question_text = question.trim();
        if question_text.is_empty() || question_text == SENTINEL_QUESTION {
            return None;
        }
        if answer.trim().is_empty() {
            return None;
        }
        Some(Clue::new(question, answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_blank_entries_are_dropped() {
        assert!(RawClue::new("=", "x").into_clue().is_none());
        assert!(RawClue::new(" = ", "x").into_clue().is_none());
        assert!(RawClue::new("", "x").into_clue().is_none());
        assert!(RawClue::new("2+2", "  ").into_clue().is_none());

        let clue = RawClue::new("2+2", "4").into_clue().unwrap();
        assert_eq!(clue.question(), "2+2");
        assert_eq!(clue.answer(), "4");
        assert_eq!(clue.state(), RevealState::Hidden);
    }

    #[test]
    fn decodes_service_payloads_with_nulls_and_extra_fields() {
        let json = r#"{
            "id": 11496,
            "title": "the bible",
            "clues_count": 3,
            "clues": [
                {"id": 1, "answer": "Eve", "question": "First woman", "value": 200},
                {"id": 2, "answer": "x", "question": null, "value": null},
                {"id": 3, "answer": "y", "question": "="}
            ]
        }"#;

        let data: CategoryData = serde_json::from_str(json).unwrap();
        assert_eq!(data.title, "the bible");

        let clues: Vec<_> = data.clues.into_iter().filter_map(RawClue::into_clue).collect();
        assert_eq!(clues.len(), 1);
        assert_eq!(clues[0].question(), "First woman");
    }

    #[test]
    fn summaries_without_counts_are_kept() {
        let summaries: Vec<CategorySummary> =
            serde_json::from_str(r#"[{"id": 1, "title": "a", "clues_count": 2}, {"id": 2}]"#)
                .unwrap();

        assert!(!summaries[0].may_fill(5));
        assert!(summaries[0].may_fill(2));
        assert!(summaries[1].may_fill(5));
    }
}
