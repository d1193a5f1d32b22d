use alloc::string::{String, ToString};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Text of a cell whose clue has not been opened yet.
pub const PLACEHOLDER: &str = "?";

/// Banner text shown when a fill cycle fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// What the board logic needs from the page it draws on.
pub trait DisplaySurface {
    fn show_loading(&mut self);

    fn hide_loading(&mut self);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);

    /// Replaces header and body with `titles` and a `rows` x `cols` grid of placeholders.
    fn render_board(&mut self, titles: &[String], size: (Coord, Coord));

    /// Replaces the text and the state class of a single body cell.
    fn update_cell(&mut self, pos: CellPos, content: &str, class: CellClass);
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub text: String,
    pub class: CellClass,
}

impl CellView {
    pub fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            class: CellClass::Unrevealed,
        }
    }

    /// Clicks on an answered cell are not handled any more.
    pub const fn is_locked(&self) -> bool {
        matches!(self.class, CellClass::Answer)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Retained copy of everything on the page, redrawn by the view layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceModel {
    loading: bool,
    error: Option<String>,
    header: Vec<String>,
    cells: Array2<CellView>,
    size: (Coord, Coord),
}

impl SurfaceModel {
    pub fn new() -> Self {
        Self {
            loading: false,
            error: None,
            header: Vec::new(),
            cells: Array2::default([0, 0]),
            size: (0, 0),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Body dimensions as `(rows, cols)`.
    pub fn size(&self) -> (Coord, Coord) {
        self.size
    }

    pub fn cell(&self, pos: CellPos) -> Option<&CellView> {
        pos.is_within(self.size)
            .then(|| &self.cells[pos.to_nd_index()])
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &CellView> {
        self.cells.iter()
    }
}

impl Default for SurfaceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for SurfaceModel {
    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn render_board(&mut self, titles: &[String], size: (Coord, Coord)) {
        self.header = titles.to_vec();
        self.cells = Array2::default(size.to_nd_index());
        self.size = size;
    }

    fn update_cell(&mut self, pos: CellPos, content: &str, class: CellClass) {
        if !pos.is_within(self.size) {
            log::warn!("update for cell {} outside the rendered grid", pos);
            return;
        }
        let cell = &mut self.cells[pos.to_nd_index()];
        cell.text = content.to_string();
        cell.class = class;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn titles(count: Coord) -> Vec<String> {
        (0..count).map(|col| format!("category {col}")).collect()
    }

    #[test]
    fn starts_empty_and_idle() {
        let surface = SurfaceModel::new();

        assert!(!surface.is_loading());
        assert_eq!(surface.error(), None);
        assert!(surface.header().is_empty());
        assert_eq!(surface.iter_cells().count(), 0);
    }

    #[test]
    fn render_board_draws_placeholders() {
        let mut surface = SurfaceModel::new();

        surface.render_board(&titles(6), (5, 6));

        assert_eq!(surface.header().len(), 6);
        assert_eq!(surface.size(), (5, 6));
        assert_eq!(surface.iter_cells().count(), 30);
        assert!(
            surface
                .iter_cells()
                .all(|cell| cell.text == "?" && cell.class == CellClass::Unrevealed)
        );
    }

    #[test]
    fn render_board_discards_previous_cells() {
        let mut surface = SurfaceModel::new();
        surface.render_board(&titles(6), (5, 6));
        surface.update_cell(CellPos::new(0, 0), "q", CellClass::Question);

        surface.render_board(&titles(6), (5, 6));

        assert_eq!(surface.cell(CellPos::new(0, 0)), Some(&CellView::placeholder()));
    }

    #[test]
    fn update_cell_replaces_text_and_class() {
        let mut surface = SurfaceModel::new();
        surface.render_board(&titles(6), (5, 6));
        let pos = CellPos::new(2, 3);

        surface.update_cell(pos, "answer text", CellClass::Answer);

        let cell = surface.cell(pos).unwrap();
        assert_eq!(cell.text, "answer text");
        assert_eq!(cell.class, CellClass::Answer);
        assert!(cell.is_locked());
    }

    #[test]
    fn update_outside_grid_is_ignored() {
        let mut surface = SurfaceModel::new();
        surface.render_board(&titles(2), (1, 2));

        surface.update_cell(CellPos::new(3, 3), "x", CellClass::Question);

        assert!(surface.iter_cells().all(|cell| cell.text == "?"));
    }

    #[test]
    fn error_banner_toggles() {
        let mut surface = SurfaceModel::new();

        surface.show_error(FETCH_ERROR_MESSAGE);
        assert_eq!(surface.error(), Some("Failed to fetch data. Please try again."));

        surface.clear_error();
        assert_eq!(surface.error(), None);
    }
}
