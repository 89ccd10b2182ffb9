//! Panel orchestration and layout management.
//!
//! Composes the search bar, results table, and status bar, and funnels
//! their interaction results back to the application coordinator.

use crate::app::AppState;
use crate::domain::scroll_trigger::ScrollGeometry;
use crate::ui::{results_table, search_bar, status_bar, table_header};
use eframe::egui;
use protview::SortColumn;

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// User submitted the search input
    SearchSubmitted(String),
    /// User clicked a sortable column header
    SortColumnClicked(SortColumn),
    /// User requested sign-out
    SignOutRequested,
}

/// Everything one frame of rendering reports back to the coordinator.
pub struct PanelFrame {
    pub interaction: Option<PanelInteraction>,
    /// Scroll geometry of the results table, when the list was shown
    pub scroll_geometry: Option<ScrollGeometry>,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the `eframe::App::update()` implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loading: bool,
    ) -> PanelFrame {
        let mut frame = PanelFrame {
            interaction: None,
            scroll_geometry: None,
        };

        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            match search_bar::render_search_bar(ui, state, loading) {
                Some(search_bar::SearchBarInteraction::SearchSubmitted(text)) => {
                    frame.interaction = Some(PanelInteraction::SearchSubmitted(text));
                }
                Some(search_bar::SearchBarInteraction::SignOutRequested) => {
                    frame.interaction = Some(PanelInteraction::SignOutRequested);
                }
                None => {}
            }
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loading);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let header_interaction =
                table_header::render_table_header(ui, &mut state.layout, state.session.active_sort());
            if let Some(table_header::TableHeaderInteraction::SortRequested(column)) =
                header_interaction
            {
                frame.interaction = Some(PanelInteraction::SortColumnClicked(column));
            }

            ui.separator();

            frame.scroll_geometry = results_table::render_results_table(ui, state);
        });

        frame
    }
}
