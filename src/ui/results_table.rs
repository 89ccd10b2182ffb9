//! Results table UI rendering.
//!
//! Renders the row buffer through a virtualized vertical scroll area: only
//! rows intersecting the viewport are laid out, rows outside it are
//! replaced by padding. Reports the frame's scroll geometry so the
//! coordinator can decide on continuation fetches.

use crate::app::AppState;
use crate::domain::scroll_trigger::ScrollGeometry;
use crate::domain::visible_range::{self, ROW_HEIGHT};
use crate::state::DATA_COLUMNS;
use crate::ui::text_utils::truncate_text_to_fit;
use crate::utils::format_count;
use eframe::egui;
use egui::ScrollArea;
use protview::ProteinRow;

/// Renders the virtualized results table.
///
/// Returns the scroll geometry of this frame, or `None` when the empty
/// placeholder was shown instead of the list.
pub fn render_results_table(ui: &mut egui::Ui, state: &mut AppState) -> Option<ScrollGeometry> {
    if state.results.is_empty() {
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No data to display").heading());
            ui.label("Please start search to display results");
        });
        return None;
    }

    let mut scroll_area = ScrollArea::vertical()
        .id_salt("results_scroll")
        .auto_shrink([false, false]);
    if state.scroll.take_pending_reset() {
        // New query: jump back to the top before rendering the new buffer.
        scroll_area = scroll_area.vertical_scroll_offset(0.0);
    }

    let index_width = state.layout.index_width();
    let column_widths = *state.layout.column_widths();

    // The scroll area fills the rest of the panel, so the panel's remaining
    // height is the viewport the row window is computed against.
    let viewport_height = ui.available_height();

    let output = scroll_area.show(ui, |ui| {
        let total_rows = state.results.len();
        let scroll_y = state.scroll.scroll_y();

        let Some(range) = visible_range::visible_range(total_rows, scroll_y, viewport_height)
        else {
            return;
        };

        let top_padding = visible_range::top_padding(range);
        if top_padding > 0.0 {
            ui.add_space(top_padding);
        }

        for index in range.indices() {
            render_row(ui, index, &state.results.rows()[index], index_width, &column_widths);
        }

        let bottom_padding = visible_range::bottom_padding(range, total_rows);
        if bottom_padding > 0.0 {
            ui.add_space(bottom_padding);
        }
    });

    state.scroll.set_scroll_y(output.state.offset.y);

    Some(ScrollGeometry {
        scroll_offset: output.state.offset.y,
        visible_height: output.inner_rect.height(),
        total_content_height: output.content_size.y,
    })
}

/// Renders one fixed-height row by painting its cells at the column
/// offsets; a pure projection of the row record, no state is touched.
fn render_row(
    ui: &mut egui::Ui,
    index: usize,
    row: &ProteinRow,
    index_width: f32,
    column_widths: &[f32; DATA_COLUMNS],
) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Sense::hover(),
    );

    if index % 2 == 1 {
        ui.painter().rect_filled(rect, 0.0, ui.visuals().faint_bg_color);
    }

    let font_id = egui::FontId::proportional(13.0);
    let text_color = ui.visuals().text_color();
    let accession_color = ui.visuals().hyperlink_color;

    let genes = row.genes.join(", ");
    let length = row.length.map(|n| format_count(n as usize)).unwrap_or_default();
    let cells: [(&str, egui::Color32); DATA_COLUMNS] = [
        (&row.accession, accession_color),
        (&row.entry_name, text_color),
        (&genes, text_color),
        (&row.organism, text_color),
        (row.location.as_deref().unwrap_or(""), text_color),
        (&length, text_color),
    ];

    let mut x_offset = rect.min.x;
    let row_number = (index + 1).to_string();
    ui.painter().text(
        egui::pos2(x_offset + 4.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        &row_number,
        font_id.clone(),
        ui.visuals().weak_text_color(),
    );
    x_offset += index_width;

    for ((text, color), width) in cells.iter().zip(column_widths) {
        let truncated = truncate_text_to_fit(text, *width, &font_id, ui.painter());
        ui.painter().text(
            egui::pos2(x_offset + 4.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            &truncated,
            font_id.clone(),
            *color,
        );
        x_offset += width;
    }
}
