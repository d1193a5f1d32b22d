use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// How much of a clue the player has uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Showing {
    Hidden,
    Question,
    Answer,
}

impl Showing {
    /// The next state on click, `None` once the answer is up.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }

    pub const fn cell_class(self) -> CellClass {
        match self {
            Self::Hidden => CellClass::Unrevealed,
            Self::Question => CellClass::Question,
            Self::Answer => CellClass::Answer,
        }
    }
}

impl Default for Showing {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Style tag a grid cell carries. A cell holds exactly one at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellClass {
    Unrevealed,
    Question,
    Answer,
}

impl CellClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unrevealed => "unrevealed",
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Hidden,
        }
    }

    /// Text that belongs in the cell for `showing`, `None` while hidden.
    pub fn text_for(&self, showing: Showing) -> Option<&str> {
        match showing {
            Showing::Hidden => None,
            Showing::Question => Some(&self.question),
            Showing::Answer => Some(&self.answer),
        }
    }
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showing_only_moves_forward() {
        assert_eq!(Showing::Hidden.next(), Some(Showing::Question));
        assert_eq!(Showing::Question.next(), Some(Showing::Answer));
        assert_eq!(Showing::Answer.next(), None);
        assert!(Showing::Answer.is_terminal());
    }

    #[test]
    fn class_names_match_stylesheet() {
        assert_eq!(Showing::Hidden.cell_class().name(), "unrevealed");
        assert_eq!(Showing::Question.cell_class().name(), "question");
        assert_eq!(Showing::Answer.cell_class().name(), "answer");
    }

    #[test]
    fn new_clue_starts_hidden() {
        let clue = Clue::new("q", "a");

        assert_eq!(clue.showing, Showing::Hidden);
        assert_eq!(clue.text_for(Showing::Hidden), None);
        assert_eq!(clue.text_for(Showing::Answer), Some("a"));
    }
}
