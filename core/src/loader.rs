use alloc::{string::String, vec::Vec};
use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::*;

/// Fills a board by sampling categories and clues uniformly at random, driven by a seed.
///
/// Undersized categories are swapped for fresh ones from the unused part of the candidate pool,
/// at most [`BoardConfig::max_replacements`] times per load.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardLoader {
    seed: u64,
}

impl RandomBoardLoader {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub async fn load<P: TriviaProvider>(self, provider: &P, config: BoardConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let wanted = usize::from(config.categories);
        let clues_per_category = usize::from(config.clues_per_category);

        let summaries = provider.list_categories(config.category_pool).await?;
        let offered = summaries.len();
        let mut seen = HashSet::new();
        let candidates: Vec<CategoryId> = summaries
            .into_iter()
            .filter(|summary| summary.may_fill(config.clues_per_category))
            .filter(|summary| seen.insert(summary.id))
            .map(|summary| summary.id)
            .collect();
        log::debug!(
            "category pool: {} offered, {} eligible, {} wanted",
            offered,
            candidates.len(),
            wanted
        );

        if candidates.len() < wanted {
            return Err(GameError::InsufficientData {
                requested: wanted,
                available: candidates.len(),
            });
        }

        let mut pool = Urn::new(candidates);
        let mut replacements_left = config.max_replacements;
        let mut categories = Vec::with_capacity(wanted);

        while categories.len() < wanted {
            let Some(id) = pool.draw(&mut rng).copied() else {
                log::warn!("Category pool ran dry after {} categories", categories.len());
                return Err(GameError::InsufficientData {
                    requested: wanted,
                    available: categories.len(),
                });
            };

            let data = provider.get_category(id).await?;
            match sample_category(data, clues_per_category, &mut rng) {
                Ok(category) => {
                    log::debug!("category {} ({:?}) filled", id, category.title);
                    categories.push(category);
                }
                Err(available) if replacements_left == 0 => {
                    log::warn!(
                        "Category {} has {} usable clues and no replacements are left",
                        id,
                        available
                    );
                    return Err(GameError::InsufficientData {
                        requested: clues_per_category,
                        available,
                    });
                }
                Err(available) => {
                    log::warn!(
                        "Category {} has {} usable clues, need {}, drawing a replacement",
                        id,
                        available,
                        clues_per_category
                    );
                    replacements_left -= 1;
                }
            }
        }

        Board::from_categories(categories)
    }
}

/// Picks `amount` distinct usable clues, or reports how many were usable.
fn sample_category(
    data: CategoryData,
    amount: usize,
    rng: &mut impl Rng,
) -> core::result::Result<Category, usize> {
    let mut questions = HashSet::new();
    let eligible: Vec<Clue> = data
        .clues
        .into_iter()
        .filter_map(RawClue::into_clue)
        .filter(|clue| questions.insert(String::from(clue.question())))
        .collect();

    if eligible.len() < amount {
        return Err(eligible.len());
    }

    let mut urn = Urn::new(eligible);
    for _ in 0..amount {
        urn.draw(rng);
    }
    Ok(Category::new(data.title, urn.into_drawn()))
}

/// Draws items uniformly at random without replacement, a lazy Fisher-Yates shuffle.
#[derive(Debug)]
struct Urn<T> {
    items: Vec<T>,
    drawn: usize,
}

impl<T> Urn<T> {
    fn new(items: Vec<T>) -> Self {
        Self { items, drawn: 0 }
    }

    fn draw(&mut self, rng: &mut impl Rng) -> Option<&T> {
        let len = self.items.len();
        if self.drawn >= len {
            return None;
        }

        let pick = rng.random_range(self.drawn..len);
        self.items.swap(self.drawn, pick);
        self.drawn += 1;
        self.items.get(self.drawn - 1)
    }

    /// Drawn items in draw order.
    fn into_drawn(mut self) -> Vec<T> {
        self.items.truncate(self.drawn);
        self.items
    }
}
