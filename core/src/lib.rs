#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use fill::*;
pub use source::*;
pub use surface::*;
pub use types::*;

mod board;
mod clue;
mod controller;
mod error;
mod fill;
mod source;
mod surface;
mod types;

/// Shape of the board and timing of the retry loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: Coord,
    pub clues_per_category: Coord,
    pub retry_delay_ms: u32,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES: Coord = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: Coord = 5;
    pub const DEFAULT_RETRY_DELAY_MS: u32 = 5000;

    pub const fn new_unchecked(categories: Coord, clues_per_category: Coord, retry_delay_ms: u32) -> Self {
        Self {
            categories,
            clues_per_category,
            retry_delay_ms,
        }
    }

    pub fn new(categories: Coord, clues_per_category: Coord, retry_delay_ms: u32) -> Self {
        let categories = categories.clamp(1, Coord::MAX);
        let clues_per_category = clues_per_category.clamp(1, Coord::MAX);
        Self::new_unchecked(categories, clues_per_category, retry_delay_ms)
    }

    /// Grid dimensions as `(rows, cols)`.
    pub const fn grid_size(&self) -> (Coord, Coord) {
        (self.clues_per_category, self.categories)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.clues_per_category, self.categories)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_CATEGORIES,
            Self::DEFAULT_CLUES_PER_CATEGORY,
            Self::DEFAULT_RETRY_DELAY_MS,
        )
    }
}
