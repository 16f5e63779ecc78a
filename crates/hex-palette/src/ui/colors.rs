//! Color utilities and constants

use eframe::egui;

use crate::palette::ColorCode;

/// Color constants for UI elements
pub mod palette {
    use eframe::egui;

    pub const BUTTON_ICON: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);
    pub const STATUS_TEXT: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);
    pub const APP_LABEL: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(255, 200, 200);
    pub const BASE_BG: egui::Color32 = egui::Color32::from_rgb(26, 26, 30);
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 112, 67);
    pub const SPECTRUM_BORDER: egui::Color32 = egui::Color32::from_rgb(70, 70, 76);
}

/// Convert a generated code to its display color
pub fn code_color(code: ColorCode) -> egui::Color32 {
    let (r, g, b) = code.rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// Blend a color toward the base background (1/3 color, 2/3 background)
pub fn dim_toward_bg(color: egui::Color32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color.r() as u16 / 3 + palette::BASE_BG.r() as u16 * 2 / 3) as u8,
        (color.g() as u16 / 3 + palette::BASE_BG.g() as u16 * 2 / 3) as u8,
        (color.b() as u16 / 3 + palette::BASE_BG.b() as u16 * 2 / 3) as u8,
        180,
    )
}

/// RGB to HSV, all components in [0, 1]; grayscale maps to hue 0
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let v = max;

    (h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsv(255, 0, 0).0, 0.0);
        assert!((rgb_to_hsv(0, 255, 0).0 - 1.0 / 3.0).abs() < 1e-6);
        assert!((rgb_to_hsv(0, 0, 255).0 - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_grayscale_hue_is_zero() {
        for v in [0u8, 128, 255] {
            let (h, s, _) = rgb_to_hsv(v, v, v);
            assert_eq!(h, 0.0);
            assert_eq!(s, 0.0);
        }
    }

    #[test]
    fn test_value_tracks_max_channel() {
        let (_, _, v) = rgb_to_hsv(64, 128, 32);
        assert!((v - 128.0 / 255.0).abs() < 1e-6);
    }
}
