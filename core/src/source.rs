use alloc::string::String;
use alloc::vec::Vec;
use core::future::Future;
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of the category listing. Only the id is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluePayload {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub title: String,
    #[serde(default)]
    pub clues: Vec<CluePayload>,
}

impl CategoryPayload {
    /// Keeps the first `clue_count` clues, all hidden.
    pub fn into_category(self, clue_count: Coord) -> Category {
        let clues = self
            .clues
            .into_iter()
            .take(clue_count.into())
            .map(|clue| {
                Clue::new(
                    clue.question.unwrap_or_default(),
                    clue.answer.unwrap_or_default(),
                )
            })
            .collect();
        Category::new(self.title, clues)
    }
}

/// Remote collaborator that serves category ids and category contents.
pub trait TriviaSource {
    fn category_ids(&self, count: Coord) -> impl Future<Output = core::result::Result<Vec<CategoryId>, NetworkError>>;

    fn category(
        &self,
        id: CategoryId,
        clue_count: Coord,
    ) -> impl Future<Output = core::result::Result<Category, NetworkError>>;
}
