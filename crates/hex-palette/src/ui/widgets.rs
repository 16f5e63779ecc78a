//! Reusable UI widgets

use eframe::egui;
use egui_cha_ds::icons;

use super::colors::palette;

/// Swatch button dimensions
pub const SWATCH_SIZE: egui::Vec2 = egui::vec2(104.0, 64.0);
const SWATCH_LABEL_HEIGHT: f32 = 18.0;

/// Create a title bar button with consistent styling
pub fn title_bar_button(ui: &mut egui::Ui, icon: &str, tooltip: &str) -> egui::Response {
    let icon_text = egui::RichText::new(icon)
        .family(egui::FontFamily::Name("icons".into()))
        .size(14.0)
        .color(palette::BUTTON_ICON);
    let button = egui::Button::new(icon_text)
        .fill(egui::Color32::TRANSPARENT)
        .min_size(egui::vec2(20.0, 20.0));
    ui.add(button).on_hover_text(tooltip)
}

/// Create a keypad button for one hex digit
pub fn hex_key_button(ui: &mut egui::Ui, digit: char) -> egui::Response {
    let text = egui::RichText::new(digit.to_string())
        .monospace()
        .size(14.0)
        .color(palette::BUTTON_ICON);
    ui.add(egui::Button::new(text).min_size(egui::vec2(30.0, 26.0)))
}

/// Create a pagination arrow button
pub fn nav_button(ui: &mut egui::Ui, icon: &str, enabled: bool) -> egui::Response {
    let icon_text = egui::RichText::new(icon)
        .family(egui::FontFamily::Name("icons".into()))
        .size(16.0)
        .color(palette::BUTTON_ICON);
    let button = egui::Button::new(icon_text).min_size(egui::vec2(32.0, 26.0));
    ui.add_enabled(enabled, button)
}

/// Draw one color swatch with its code label, returning the click response
///
/// While `copied` is set the swatch shows a check overlay instead of the
/// code label.
pub fn swatch_button(
    ui: &mut egui::Ui,
    code: &str,
    fill: egui::Color32,
    copied: bool,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let corner = egui::CornerRadius::same(3);
    painter.rect_filled(rect, corner, fill);

    if copied {
        painter.rect_filled(rect, corner, egui::Color32::from_black_alpha(120));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icons::CHECK,
            egui::FontId::new(20.0, egui::FontFamily::Name("icons".into())),
            egui::Color32::WHITE,
        );
    } else {
        let label_rect = egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.bottom() - SWATCH_LABEL_HEIGHT),
            rect.max,
        );
        painter.rect_filled(label_rect, egui::CornerRadius::ZERO, egui::Color32::from_black_alpha(150));
        painter.text(
            label_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("#{code}"),
            egui::FontId::monospace(11.0),
            egui::Color32::WHITE,
        );
    }

    if response.hovered() {
        painter.rect_stroke(
            rect,
            corner,
            egui::Stroke::new(1.0, egui::Color32::WHITE),
            egui::StrokeKind::Outside,
        );
    }

    response.on_hover_text(format!("Copy #{code}"))
}
