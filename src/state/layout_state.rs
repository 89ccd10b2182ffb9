//! UI layout state management.
//!
//! Encapsulates the results table geometry (column widths) and the search
//! input buffer. Column widths are serializable so they survive restarts
//! through eframe storage.

use serde::{Deserialize, Serialize};

/// Number of resizable data columns:
/// Entry, Entry Names, Genes, Organism, Subcellular Location, Length.
pub const DATA_COLUMNS: usize = 6;

/// State related to UI layout and sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    /// Width of the fixed row-index column
    index_width: f32,
    /// Column widths, ordered as the table renders them
    column_widths: [f32; DATA_COLUMNS],
    /// Text buffer for the search input
    #[serde(skip)]
    search_text: String,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            index_width: 50.0,
            // [Entry, Entry Names, Genes, Organism, Location, Length]
            column_widths: [110.0, 140.0, 170.0, 220.0, 240.0, 80.0],
            search_text: String::new(),
        }
    }

    /// Creates a layout state with column widths restored from storage.
    pub fn with_column_widths(column_widths: [f32; DATA_COLUMNS]) -> Self {
        Self {
            column_widths,
            ..Self::new()
        }
    }

    pub fn index_width(&self) -> f32 {
        self.index_width
    }

    pub fn column_widths(&self) -> &[f32; DATA_COLUMNS] {
        &self.column_widths
    }

    pub fn column_widths_mut(&mut self) -> &mut [f32; DATA_COLUMNS] {
        &mut self.column_widths
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }
}
