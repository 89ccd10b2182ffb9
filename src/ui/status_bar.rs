//! Status bar UI rendering.
//!
//! Bottom panel showing process memory, the size of the loaded buffer, and
//! a summary of the active query.

use crate::app::AppState;
use crate::utils::{format_count, format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loading: bool) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Rows: {}", format_count(state.results.len()))).strong());

        let mut summary = String::new();
        if !state.session.search_text().is_empty() {
            summary.push_str(&format!("query: {}", state.session.search_text()));
        }
        if let Some(spec) = state.session.active_sort() {
            if !summary.is_empty() {
                summary.push_str(" | ");
            }
            summary.push_str(&format!(
                "sort: {} {}",
                spec.column.api_field(),
                spec.dir.api_token()
            ));
        }
        if !summary.is_empty() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(summary).strong());
        }

        if loading {
            ui.label(RichText::new("|").strong());
            ui.spinner();
            ui.label("Fetching next page");
        } else if !state.results.is_empty() && !state.session.has_more() {
            ui.label(RichText::new("|").strong());
            ui.label("End of results");
        }
    });
}
