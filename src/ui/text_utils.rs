//! Text truncation for fixed-width table cells.

use eframe::egui;

/// Truncates `text` to fit within `available_width`, appending ".." when
/// anything was cut. Uses the painter for measurement, binary-searching the
/// cut point so long strings stay cheap.
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    // Padding avoids exact-edge clipping, 4px each side.
    let max_width = available_width - 8.0;
    if max_width <= 0.0 {
        return String::new();
    }

    let measure = |s: String| {
        painter
            .layout_no_wrap(s, font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if measure(text.to_string()) <= max_width {
        return text.to_string();
    }

    let ellipsis = "..";
    let ellipsis_width = measure(ellipsis.to_string());
    if ellipsis_width >= max_width {
        return String::new();
    }
    let available_for_text = max_width - ellipsis_width;

    let mut low = 0;
    let mut high = text.chars().count();
    let mut best_fit = 0;
    while low <= high {
        let mid = (low + high) / 2;
        let candidate: String = text.chars().take(mid).collect();
        if measure(candidate) <= available_for_text {
            best_fit = mid;
            low = mid + 1;
        } else {
            high = match mid.checked_sub(1) {
                Some(h) => h,
                None => break,
            };
        }
    }

    let mut result: String = text.chars().take(best_fit).collect();
    result.push_str(ellipsis);
    result
}
