//! Hue-sorted spectrum strip
//!
//! Samples the generated set down to roughly [`SAMPLE_CAP`] entries, sorts
//! the sample by hue, and paints one contiguous bar per color.

use eframe::egui;

use super::colors::{code_color, palette, rgb_to_hsv};
use crate::palette::ColorCode;

/// Approximate upper bound on sampled colors
///
/// The stride is `len / SAMPLE_CAP` rounded down, so the actual sample can
/// exceed the cap by the rounding slack; it stays well within 2x.
pub const SAMPLE_CAP: usize = 2000;

/// Stride-sample `set` and sort the sample ascending by hue
pub fn hue_sorted_sample(set: &[ColorCode]) -> Vec<ColorCode> {
    let step = (set.len() / SAMPLE_CAP).max(1);
    let mut sampled: Vec<(f32, ColorCode)> = set
        .iter()
        .step_by(step)
        .map(|&code| {
            let (r, g, b) = code.rgb();
            (rgb_to_hsv(r, g, b).0, code)
        })
        .collect();
    sampled.sort_by(|a, b| a.0.total_cmp(&b.0));
    sampled.into_iter().map(|(_, code)| code).collect()
}

/// Paint the spectrum strip across the available width
pub fn draw(ui: &mut egui::Ui, set: &[ColorCode], height: f32) {
    let colors = hue_sorted_sample(set);
    if colors.is_empty() {
        return;
    }

    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let bar_width = rect.width() / colors.len() as f32;
    for (i, code) in colors.iter().enumerate() {
        let left = rect.left() + i as f32 * bar_width;
        // Overdraw by 1px to avoid hairline gaps between bars
        let bar = egui::Rect::from_min_max(
            egui::pos2(left, rect.top()),
            egui::pos2(left + bar_width + 1.0, rect.bottom()),
        )
        .intersect(rect);
        painter.rect_filled(bar, egui::CornerRadius::ZERO, code_color(*code));
    }

    // Light-to-dark vertical overlay for depth
    let top_half = egui::Rect::from_min_max(rect.min, egui::pos2(rect.right(), rect.center().y));
    let bottom_half = egui::Rect::from_min_max(egui::pos2(rect.left(), rect.center().y), rect.max);
    painter.rect_filled(top_half, egui::CornerRadius::ZERO, egui::Color32::from_white_alpha(10));
    painter.rect_filled(bottom_half, egui::CornerRadius::ZERO, egui::Color32::from_black_alpha(20));

    painter.rect_stroke(
        rect,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(1.0, palette::SPECTRUM_BORDER),
        egui::StrokeKind::Inside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{generate, Alphabet};

    fn hue_of(code: ColorCode) -> f32 {
        let (r, g, b) = code.rgb();
        rgb_to_hsv(r, g, b).0
    }

    #[test]
    fn test_small_set_is_kept_whole() {
        let set = generate(&Alphabet::parse("01"));
        assert_eq!(hue_sorted_sample(&set).len(), set.len());
    }

    #[test]
    fn test_large_set_is_sampled_near_cap() {
        let set = generate(&Alphabet::parse("012345"));
        assert_eq!(set.len(), 46_656);
        let sampled = hue_sorted_sample(&set);
        // Stride 23 over 46,656 entries
        assert_eq!(sampled.len(), set.len().div_ceil(23));
        assert!(sampled.len() < 2 * SAMPLE_CAP);
    }

    #[test]
    fn test_sample_is_sorted_by_hue() {
        let set = generate(&Alphabet::parse("08f"));
        let sampled = hue_sorted_sample(&set);
        for pair in sampled.windows(2) {
            assert!(hue_of(pair[0]) <= hue_of(pair[1]));
        }
    }

    #[test]
    fn test_empty_set_yields_empty_sample() {
        assert!(hue_sorted_sample(&[]).is_empty());
    }
}
