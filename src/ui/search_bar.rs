//! Search bar UI rendering.
//!
//! Top panel with the free-text query input, the session identity display,
//! and the error banner. Input and button are disabled while a fetch is in
//! flight.

use crate::app::{AppState, SessionProvider};
use eframe::egui;
use egui::Color32;

/// Result of user interaction with the search bar.
pub enum SearchBarInteraction {
    /// User submitted the search input (Enter or button)
    SearchSubmitted(String),
    /// User clicked the sign-out control
    SignOutRequested,
}

/// Renders the search bar and session display.
pub fn render_search_bar(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loading: bool,
) -> Option<SearchBarInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label("Search:");

        let edit = egui::TextEdit::singleline(state.layout.search_text_mut())
            .desired_width(280.0)
            .hint_text("free text, empty matches everything");
        let response = ui.add_enabled(!loading, edit);

        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let button_clicked = ui.add_enabled(!loading, egui::Button::new("Search")).clicked();

        if enter_pressed || button_clicked {
            interaction = Some(SearchBarInteraction::SearchSubmitted(
                state.layout.search_text().to_string(),
            ));
        }

        if loading {
            ui.spinner();
            ui.label("Loading");
        }

        // Session display on the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match state.auth.identity() {
                Some(identity) => {
                    if ui.button("Sign out").clicked() {
                        interaction = Some(SearchBarInteraction::SignOutRequested);
                    }
                    ui.label(format!("Signed in as {identity}"));
                }
                None => {
                    ui.label("Signed out");
                }
            }
        });
    });

    if let Some(error) = &state.error_message {
        ui.colored_label(Color32::RED, error);
    }

    interaction
}
