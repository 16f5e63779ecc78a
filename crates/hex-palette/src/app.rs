//! Hex Palette application

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use arboard::Clipboard;
use eframe::egui;
use egui_cha_ds::icons;
use egui_cha_ds::Theme;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::{AppState, Config, PaletteSettings, WindowSettings};
use crate::palette::{generate, paginate, Alphabet, ColorCode, MAX_ALPHABET_LEN};
use crate::platform::open_file;
use crate::ui::{
    code_color, dim_toward_bg, hex_key_button, nav_button, palette, spectrum, swatch_button,
    title_bar_button,
};

const HEX_DIGITS: &str = "0123456789abcdef";

/// How long the copied-check overlay stays on a swatch
const COPIED_OVERLAY: Duration = Duration::from_secs(1);

/// Main application state
pub struct HexPaletteApp {
    input: String,
    /// Alphabet the current permutation set was generated from
    committed: String,
    regen_deadline: Option<Instant>,
    permutations: Vec<ColorCode>,
    page_number: usize,
    copied: Option<(ColorCode, Instant)>,
    last_status: Option<String>,
    is_error: bool,
    settings: PaletteSettings,
    window: WindowSettings,
    state: AppState,
    config_path: PathBuf,
    // File watcher for config hot-reload
    config_changed: Arc<AtomicBool>,
    #[allow(dead_code)]
    watcher: Option<RecommendedWatcher>,
}

impl HexPaletteApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        initial_alphabet: Option<String>,
        config_path: PathBuf,
    ) -> Self {
        egui_cha_ds::setup_fonts(&cc.egui_ctx);
        let state = AppState::load();

        // Set immediate tooltip
        cc.egui_ctx.style_mut(|style| {
            style.interaction.tooltip_delay = 0.0;
        });

        // Restore saved position
        if let Some(pos) = state.position() {
            cc.egui_ctx
                .send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
        }

        // Watch the config directory so edits apply without a restart
        let config_changed = Arc::new(AtomicBool::new(false));
        let config_changed_clone = config_changed.clone();
        let watch_dir = config_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                // Ignore metadata-only changes
                if !matches!(event.kind, notify::EventKind::Access(_)) {
                    config_changed_clone.store(true, Ordering::SeqCst);
                }
            }
        })
        .ok()
        .and_then(|mut w| {
            w.watch(&watch_dir, RecursiveMode::NonRecursive).ok()?;
            Some(w)
        });

        let input = initial_alphabet
            .as_deref()
            .or_else(|| state.last_alphabet())
            .map(|s| Alphabet::parse(s).as_str().to_string())
            .unwrap_or_default();

        let mut app = Self {
            input,
            committed: String::new(),
            regen_deadline: None,
            permutations: Vec::new(),
            page_number: 1,
            copied: None,
            last_status: None,
            is_error: false,
            settings: config.palette,
            window: config.window,
            state,
            config_path,
            config_changed,
            watcher,
        };
        // Restore the previous session's palette without a debounce round-trip
        if !app.input.is_empty() {
            app.regenerate();
        }
        app
    }

    /// Replace the permutation set from the current input
    ///
    /// Resets the page to 1: page metadata is only meaningful against the
    /// set it was computed from.
    fn regenerate(&mut self) {
        let alphabet = Alphabet::parse(&self.input);
        self.permutations = generate(&alphabet);
        self.committed = self.input.clone();
        self.page_number = 1;
        self.regen_deadline = None;
        self.copied = None;
        self.state.set_last_alphabet(alphabet.as_str());
    }

    /// Schedule regeneration, debounced for longer inputs
    ///
    /// Short alphabets regenerate immediately; once the input reaches the
    /// configured threshold the (much larger) expansion is deferred so only
    /// the last value within the delay window is used.
    fn queue_regenerate(&mut self) {
        if self.input == self.committed {
            self.regen_deadline = None;
            return;
        }
        if self.input.len() >= self.settings.debounce_threshold {
            self.regen_deadline =
                Some(Instant::now() + Duration::from_millis(self.settings.debounce_ms));
        } else {
            self.regenerate();
        }
    }

    fn append_digit(&mut self, digit: char) {
        if self.input.len() < MAX_ALPHABET_LEN {
            self.input.push(digit);
            self.queue_regenerate();
        } else {
            self.last_status = Some(format!(
                "Maximum length reached ({MAX_ALPHABET_LEN} characters)"
            ));
            self.is_error = false;
        }
    }

    fn copy_to_clipboard(&mut self, code: ColorCode) {
        match Clipboard::new().and_then(|mut cb| cb.set_text(format!("#{code}"))) {
            Ok(()) => {
                self.copied = Some((code, Instant::now()));
                self.last_status = Some(format!("Copied #{code} to clipboard"));
                self.is_error = false;
            }
            Err(_) => {
                self.last_status = Some("Failed to access clipboard".to_string());
                self.is_error = true;
            }
        }
    }

    fn reload_config(&mut self) {
        let parsed = std::fs::read_to_string(&self.config_path)
            .ok()
            .and_then(|s| toml::from_str::<Config>(&s).ok());
        match parsed {
            Some(config) => {
                self.settings = config.palette;
                self.window = config.window;
                self.last_status = Some("Config reloaded".to_string());
                self.is_error = false;
            }
            None => {
                self.last_status = Some("Failed to reload config".to_string());
                self.is_error = true;
            }
        }
    }

    fn save_current_position(&mut self, ctx: &egui::Context) {
        let pos = ctx.input(|i| i.viewport().outer_rect.map(|r| r.min));
        if let Some(pos) = pos {
            self.state.set_position(pos);
            self.state.save();
        }
    }
}

impl eframe::App for HexPaletteApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = Theme::current(ctx);

        // Request periodic repaint to pick up config changes
        ctx.request_repaint_after(Duration::from_millis(500));

        // Fixed dark background
        let bg_color = egui::Color32::from_rgba_unmultiplied(
            palette::BASE_BG.r(),
            palette::BASE_BG.g(),
            palette::BASE_BG.b(),
            (self.window.opacity * 255.0) as u8,
        );

        // Apply config edits
        if self.config_changed.swap(false, Ordering::SeqCst) {
            self.reload_config();
            ctx.request_repaint();
        }

        // Fire pending regeneration once the debounce window elapses
        if let Some(deadline) = self.regen_deadline {
            let now = Instant::now();
            if now >= deadline {
                self.regenerate();
            } else {
                ctx.request_repaint_after(deadline - now);
            }
        }

        // Expire the copied-check overlay
        if let Some((_, copied_at)) = self.copied {
            if copied_at.elapsed() >= COPIED_OVERLAY {
                self.copied = None;
            } else {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
        }

        let is_hovered = ctx.input(|i| i.pointer.has_pointer());

        // Accent line takes the first color of the current palette
        let accent_base = self
            .permutations
            .first()
            .map(|&code| code_color(code))
            .unwrap_or(palette::ACCENT);
        let accent_color = match self.window.accent_line.as_str() {
            "show" => Some(accent_base),
            "hide" => None,
            // "auto": full color while hovered, otherwise dimmed
            _ => Some(if is_hovered {
                accent_base
            } else {
                dim_toward_bg(accent_base)
            }),
        };

        let show_border = match self.window.border.as_str() {
            "show" => true,
            "hide" => false,
            _ => self.window.opacity < 1.0,
        };
        let border_stroke = if show_border {
            egui::Stroke::new(
                1.0,
                egui::Color32::from_rgba_unmultiplied(128, 128, 128, 100),
            )
        } else {
            egui::Stroke::NONE
        };

        let show_title_bar = match self.window.title_bar.as_str() {
            "show" => true,
            "hide" => false,
            _ => ctx.input(|i| {
                i.pointer
                    .hover_pos()
                    .map(|pos| pos.y < 24.0)
                    .unwrap_or(false)
            }),
        };

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(bg_color)
                    .stroke(border_stroke)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                // Draw colored top accent line (at the very top edge)
                if let Some(color) = accent_color {
                    let rect = ui.max_rect();
                    ui.painter().line_segment(
                        [
                            egui::pos2(rect.left(), rect.top() - 10.0),
                            egui::pos2(rect.right(), rect.top() - 10.0),
                        ],
                        egui::Stroke::new(3.0, color),
                    );
                }

                // Window dragging
                let response = ui.interact(
                    ui.max_rect(),
                    ui.id().with("drag_area"),
                    egui::Sense::drag(),
                );
                if response.dragged() {
                    if let Some(_pos) = response.interact_pointer_pos() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                    }
                }
                // Save position when drag ends
                if response.drag_stopped() {
                    self.save_current_position(ctx);
                }

                // Custom title bar (always reserve space, only show icons when enabled)
                ui.horizontal(|ui| {
                    ui.set_min_height(20.0);

                    if show_title_bar {
                        ui.label(
                            egui::RichText::new("hex-palette")
                                .size(10.0)
                                .color(palette::APP_LABEL),
                        );

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if title_bar_button(ui, icons::X, "Close").clicked() {
                                self.save_current_position(ctx);
                                self.state.save();
                                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                            }

                            if title_bar_button(ui, icons::MINUS, "Minimize").clicked() {
                                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                            }

                            if title_bar_button(ui, icons::GEAR, "Open config").clicked() {
                                open_file(&self.config_path);
                            }
                        });
                    }
                });

                // Input row
                ui.add_space(theme.spacing_sm);
                ui.label(
                    egui::RichText::new("Enter hex characters (0-9, a-f, max 6)")
                        .size(theme.font_size_xs)
                        .color(palette::STATUS_TEXT),
                );
                let mut input_changed = false;
                ui.horizontal(|ui| {
                    let edit = ui.add(
                        egui::TextEdit::singleline(&mut self.input)
                            .hint_text("e.g. a10")
                            .font(egui::TextStyle::Monospace)
                            .desired_width(180.0),
                    );
                    if edit.changed() {
                        input_changed = true;
                    }
                    if ui.button("Clear").clicked() && !self.input.is_empty() {
                        self.input.clear();
                        input_changed = true;
                    }
                });
                if input_changed {
                    // Enforce the boundary contract before anything reaches
                    // the generator
                    let sanitized = Alphabet::parse(&self.input).as_str().to_string();
                    if sanitized != self.input {
                        self.input = sanitized;
                    }
                    self.queue_regenerate();
                }

                // Hex keypad
                let mut pressed_digit = None;
                ui.horizontal_wrapped(|ui| {
                    for digit in HEX_DIGITS.chars() {
                        if hex_key_button(ui, digit).clicked() {
                            pressed_digit = Some(digit);
                        }
                    }
                });
                if let Some(digit) = pressed_digit {
                    self.append_digit(digit);
                }

                if !self.permutations.is_empty() {
                    ui.add_space(theme.spacing_sm);
                    spectrum::draw(ui, &self.permutations, self.settings.spectrum_height);
                }

                // Swatch grid with pagination
                let mut clicked_code = None;
                let mut next_page = self.page_number;
                if !self.permutations.is_empty() {
                    let page =
                        paginate(&self.permutations, self.settings.page_size, self.page_number);
                    let total = self.permutations.len();

                    ui.add_space(theme.spacing_sm);
                    ui.horizontal(|ui| {
                        let plural = if total == 1 { "" } else { "s" };
                        ui.label(
                            egui::RichText::new(format!("{total} color combination{plural}"))
                                .size(14.0)
                                .color(egui::Color32::WHITE),
                        );
                        if page.total_pages > 1 {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "Showing {}-{} of {}",
                                            page.start_ordinal, page.end_ordinal, total
                                        ))
                                        .size(theme.font_size_xs)
                                        .color(palette::STATUS_TEXT),
                                    );
                                },
                            );
                        }
                    });

                    ui.add_space(theme.spacing_xs);
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            ui.horizontal_wrapped(|ui| {
                                for &code in page.items {
                                    let is_copied =
                                        self.copied.map(|(c, _)| c == code).unwrap_or(false);
                                    if swatch_button(
                                        ui,
                                        code.as_str(),
                                        code_color(code),
                                        is_copied,
                                    )
                                    .clicked()
                                    {
                                        clicked_code = Some(code);
                                    }
                                }
                            });
                        });

                    if page.total_pages > 1 {
                        ui.add_space(theme.spacing_xs);
                        ui.horizontal(|ui| {
                            if nav_button(ui, icons::ARROW_LEFT, page.number > 1).clicked() {
                                next_page = page.number - 1;
                            }
                            ui.label(
                                egui::RichText::new(format!(
                                    "Page {} of {}",
                                    page.number, page.total_pages
                                ))
                                .size(theme.font_size_xs)
                                .color(palette::STATUS_TEXT),
                            );
                            if nav_button(ui, icons::ARROW_RIGHT, page.number < page.total_pages)
                                .clicked()
                            {
                                next_page = page.number + 1;
                            }
                        });
                    }
                }
                if let Some(code) = clicked_code {
                    self.copy_to_clipboard(code);
                }
                self.page_number = next_page;

                // Status line
                ui.add_space(theme.spacing_xs);
                if let Some(status) = &self.last_status {
                    let color = if self.is_error {
                        palette::ERROR_TEXT
                    } else {
                        palette::STATUS_TEXT
                    };
                    ui.label(
                        egui::RichText::new(status)
                            .color(color)
                            .size(theme.font_size_xs),
                    );
                }
            });
    }
}
