use alloc::{string::String, vec::Vec};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A titled column of clues, the unit the loader assembles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

/// One game's worth of categories, laid out as a `[category, clue]` grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    titles: Vec<String>,
    clues: Array2<Clue>,
}

impl Board {
    /// Builds a board, every category must hold the same non-zero number of clues.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        let Some(first) = categories.first() else {
            return Err(GameError::InsufficientData {
                requested: 1,
                available: 0,
            });
        };
        let width = first.clues.len();
        let height = categories.len();

        if width == 0 || width > Ix::MAX.into() || height > Ix::MAX.into() {
            return Err(GameError::InsufficientData {
                requested: width.max(1),
                available: 0,
            });
        }
        if let Some(short) = categories.iter().find(|c| c.clues.len() != width) {
            return Err(GameError::InsufficientData {
                requested: width,
                available: short.clues.len(),
            });
        }

        let mut titles = Vec::with_capacity(height);
        let mut cells = Vec::with_capacity(height * width);
        for category in categories {
            titles.push(category.title);
            cells.extend(category.clues);
        }

        let clues = Array2::from_shape_vec((height, width), cells).map_err(|_| {
            GameError::InsufficientData {
                requested: height * width,
                available: 0,
            }
        })?;

        Ok(Self { titles, clues })
    }

    /// `(categories, clues per category)`.
    pub fn size(&self) -> (Ix, Ix) {
        let (height, width) = self.clues.dim();
        // both fit, checked in from_categories
        (height as Ix, width as Ix)
    }

    pub fn title(&self, category: Ix) -> Option<&str> {
        self.titles.get(usize::from(category)).map(String::as_str)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn clues_in(&self, category: Ix) -> impl Iterator<Item = &Clue> {
        let row = usize::from(category);
        let rows = if row < self.titles.len() {
            row..row + 1
        } else {
            0..0
        };
        rows.flat_map(move |row| self.clues.row(row).into_iter())
    }

    pub fn validate_address(&self, address: CellAddress) -> Result<CellAddress> {
        let size = self.size();
        if address.0 < size.0 && address.1 < size.1 {
            Ok(address)
        } else {
            Err(GameError::InvalidAddress)
        }
    }

    pub fn clue_at(&self, address: CellAddress) -> Option<&Clue> {
        self.clues.get(address.to_nd_index())
    }

    /// Moves the addressed clue one step forward and returns what to display.
    pub fn reveal(&mut self, address: CellAddress) -> Result<RevealOutcome<'_>> {
        let address = self.validate_address(address)?;
        let outcome = self.clues[address.to_nd_index()].advance();
        log::trace!("reveal {:?}: {:?}", address, outcome);
        Ok(outcome)
    }

    /// Number of clues that are no longer hidden.
    pub fn revealed_count(&self) -> usize {
        self.clues
            .iter()
            .filter(|clue| !clue.state().is_hidden())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.clues
            .iter()
            .all(|clue| clue.state() == RevealState::Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn board() -> Board {
        Board::from_categories(vec![
            Category::new("Math", vec![Clue::new("2+2", "4"), Clue::new("1+1", "2")]),
            Category::new(
                "Lit",
                vec![
                    Clue::new("Hamlet", "Shakespeare"),
                    Clue::new("Bell Jar", "Plath"),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn reveal_shows_question_then_answer_then_ignores() {
        let mut board = board();

        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::Question("2+2"));
        assert_eq!(board.clue_at((0, 0)).unwrap().state(), RevealState::Question);

        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::Answer("4"));
        assert_eq!(board.clue_at((0, 0)).unwrap().state(), RevealState::Answer);

        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board.clue_at((0, 0)).unwrap().state(), RevealState::Answer);
    }

    #[test]
    fn reveal_out_of_range_is_invalid_address() {
        let mut board = board();

        assert_eq!(board.reveal((99, 0)), Err(GameError::InvalidAddress));
        assert_eq!(board.reveal((0, 2)), Err(GameError::InvalidAddress));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn categories_keep_their_order_and_titles() {
        let board = board();

        assert_eq!(board.size(), (2, 2));
        assert_eq!(board.titles().collect::<Vec<_>>(), vec!["Math", "Lit"]);
        assert_eq!(board.title(1), Some("Lit"));
        assert_eq!(board.title(2), None);

        let lit: Vec<_> = board.clues_in(1).map(Clue::question).collect();
        assert_eq!(lit, vec!["Hamlet", "Bell Jar"]);
        assert_eq!(board.clues_in(5).count(), 0);
    }

    #[test]
    fn uneven_categories_are_rejected() {
        let result = Board::from_categories(vec![
            Category::new("Math", vec![Clue::new("2+2", "4"), Clue::new("1+1", "2")]),
            Category::new("Lit", vec![Clue::new("Hamlet", "Shakespeare")]),
        ]);

        assert_eq!(
            result,
            Err(GameError::InsufficientData {
                requested: 2,
                available: 1
            })
        );
        assert!(Board::from_categories(Vec::new()).is_err());
    }

    #[test]
    fn board_is_complete_once_every_answer_shows() {
        let mut board = board();
        for category in 0..2 {
            for clue in 0..2 {
                board.reveal((category, clue)).unwrap();
                assert!(!board.is_complete());
                board.reveal((category, clue)).unwrap();
            }
        }

        assert!(board.is_complete());
        assert_eq!(board.revealed_count(), 4);
    }
}
