use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}

/// Categories laid out as columns, their clues as rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    titles: Vec<String>,
    clues: Array2<Clue>,
    size: (Coord, Coord),
}

impl Board {
    /// Builds a board from exactly `config.categories` categories holding exactly
    /// `config.clues_per_category` clues each.
    pub fn from_categories(config: &BoardConfig, categories: Vec<Category>) -> Result<Self> {
        let (rows, cols) = config.grid_size();

        if categories.len() != usize::from(cols) {
            return Err(BoardError::InvalidBoardShape);
        }
        if categories
            .iter()
            .any(|category| category.clues.len() != usize::from(rows))
        {
            return Err(BoardError::InvalidBoardShape);
        }

        let mut titles = Vec::with_capacity(categories.len());
        let mut column_major = Vec::with_capacity(config.total_cells().into());
        for category in categories {
            titles.push(category.title);
            column_major.extend(category.clues.into_iter().map(|clue| Clue {
                showing: Showing::Hidden,
                ..clue
            }));
        }

        let clues = Array2::from_shape_vec((usize::from(cols), usize::from(rows)), column_major)
            .map_err(|_| BoardError::InvalidBoardShape)?
            .reversed_axes();

        Ok(Self {
            titles,
            clues,
            size: (rows, cols),
        })
    }

    /// Grid dimensions as `(rows, cols)`.
    pub fn size(&self) -> (Coord, Coord) {
        self.size
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Clues of the category in column `col`, top to bottom.
    pub fn column(&self, col: Coord) -> impl Iterator<Item = &Clue> {
        let cols = self.size.1;
        (col < cols)
            .then(|| self.clues.column(usize::from(col)).into_iter())
            .into_iter()
            .flatten()
    }

    /// Reassembles the board as the ordered category sequence it was built from.
    #[cfg(test)]
    pub(crate) fn categories(&self) -> Vec<Category> {
        self.titles
            .iter()
            .zip(0..)
            .map(|(title, col)| Category::new(title.clone(), self.column(col).cloned().collect()))
            .collect()
    }

    pub fn iter_clues(&self) -> impl Iterator<Item = &Clue> {
        self.clues.iter()
    }

    pub fn validate_pos(&self, pos: CellPos) -> Result<CellPos> {
        if pos.is_within(self.size) {
            Ok(pos)
        } else {
            Err(BoardError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, pos: CellPos) -> Result<&Clue> {
        let pos = self.validate_pos(pos)?;
        Ok(&self.clues[pos.to_nd_index()])
    }

    pub fn showing_at(&self, pos: CellPos) -> Result<Showing> {
        self.clue_at(pos).map(|clue| clue.showing)
    }

    /// Advances the clue at `pos` one step along Hidden → Question → Answer.
    pub fn reveal(&mut self, pos: CellPos) -> Result<RevealOutcome> {
        let pos = self.validate_pos(pos)?;
        let clue = &mut self.clues[pos.to_nd_index()];

        Ok(match clue.showing.next() {
            Some(Showing::Question) => {
                clue.showing = Showing::Question;
                RevealOutcome::ShowedQuestion
            }
            Some(Showing::Answer) => {
                clue.showing = Showing::Answer;
                RevealOutcome::ShowedAnswer
            }
            Some(Showing::Hidden) | None => RevealOutcome::NoChange,
        })
    }
}
