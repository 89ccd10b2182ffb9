//! Table header component rendering.
//!
//! Draws the results table's column headers: a fixed row-index column
//! followed by resizable data columns. Sortable columns are clickable and
//! show the active sort direction.

use crate::state::{LayoutState, DATA_COLUMNS};
use crate::ui::text_utils::truncate_text_to_fit;
use eframe::egui;
use egui::Color32;
use protview::{SortColumn, SortDir, SortSpec};

/// Column labels paired with their sort target; `None` marks a column the
/// remote grammar cannot sort by.
pub const COLUMNS: [(&str, Option<SortColumn>); DATA_COLUMNS] = [
    ("Entry", Some(SortColumn::Accession)),
    ("Entry Names", Some(SortColumn::EntryName)),
    ("Genes", Some(SortColumn::Gene)),
    ("Organism", Some(SortColumn::OrganismName)),
    ("Subcellular Location", None),
    ("Length", Some(SortColumn::Length)),
];

const HEADER_HEIGHT: f32 = 24.0;
const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Result of user interaction with the table header.
pub enum TableHeaderInteraction {
    /// User clicked a sortable column label
    SortRequested(SortColumn),
}

fn sort_indicator(column: SortColumn, active_sort: Option<SortSpec>) -> &'static str {
    match active_sort {
        Some(SortSpec { column: active, dir }) if active == column => match dir {
            SortDir::Asc => " ▲",
            SortDir::Desc => " ▼",
        },
        _ => "",
    }
}

/// Renders the column headers with resize handles and sort controls.
pub fn render_table_header(
    ui: &mut egui::Ui,
    layout: &mut LayoutState,
    active_sort: Option<SortSpec>,
) -> Option<TableHeaderInteraction> {
    let mut interaction = None;

    let start_pos = ui.cursor().min;
    let (_header_rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), HEADER_HEIGHT),
        egui::Sense::hover(),
    );

    let font_id = egui::FontId::proportional(14.0);
    let mut x_offset = 0.0;

    // Fixed row-index column
    ui.painter().text(
        egui::pos2(start_pos.x + x_offset + 4.0, start_pos.y + HEADER_HEIGHT / 2.0),
        egui::Align2::LEFT_CENTER,
        "#",
        font_id.clone(),
        ui.visuals().strong_text_color(),
    );
    x_offset += layout.index_width();

    for (i, (name, sort_target)) in COLUMNS.iter().enumerate() {
        let width = layout.column_widths()[i];

        let label_rect = egui::Rect::from_min_size(
            egui::pos2(start_pos.x + x_offset, start_pos.y),
            egui::vec2(width, HEADER_HEIGHT),
        );

        let title = format!(
            "{}{}",
            name,
            sort_target
                .map(|column| sort_indicator(column, active_sort))
                .unwrap_or("")
        );
        let truncated = truncate_text_to_fit(&title, width, &font_id, ui.painter());
        ui.painter().text(
            label_rect.left_center() + egui::vec2(4.0, 0.0),
            egui::Align2::LEFT_CENTER,
            &truncated,
            font_id.clone(),
            ui.visuals().strong_text_color(),
        );

        // Sortable labels are clickable
        if let Some(column) = sort_target {
            let label_id = ui.id().with(("header_sort", i));
            let label_response = ui.interact(label_rect, label_id, egui::Sense::click());
            if label_response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if label_response.clicked() {
                interaction = Some(TableHeaderInteraction::SortRequested(*column));
            }
        }

        x_offset += width;

        // Column resize handle
        if i < COLUMNS.len() - 1 {
            let handle_rect = egui::Rect::from_center_size(
                egui::pos2(start_pos.x + x_offset, start_pos.y + HEADER_HEIGHT / 2.0),
                egui::vec2(8.0, HEADER_HEIGHT),
            );

            let handle_id = ui.id().with(("header_resize", i));
            let handle_response = ui.interact(handle_rect, handle_id, egui::Sense::drag());

            if handle_response.dragged() {
                let delta = handle_response.drag_delta().x;
                let new_width = (layout.column_widths()[i] + delta).max(MIN_COLUMN_WIDTH);
                layout.column_widths_mut()[i] = new_width;
            }

            let color = if handle_response.hovered() || handle_response.dragged() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
                Color32::from_rgb(100, 150, 255)
            } else {
                ui.visuals()
                    .widgets
                    .noninteractive
                    .bg_stroke
                    .color
                    .gamma_multiply(0.5)
            };
            ui.painter().rect_filled(handle_rect.shrink(2.0), 0.0, color);
        }
    }

    interaction
}
