//! Hex Palette - hex color permutation explorer
//!
//! Features:
//! - Enumerates every 6-digit color code formable from up to 6 hex characters
//! - Paginated swatch grid; click a swatch to copy `#code` to the clipboard
//! - Hue-sorted spectrum strip of the generated color space
//! - Debounced regeneration while typing
//!
//! Usage:
//!   hex-palette [--alphabet <hex chars>]

use std::path::PathBuf;

use eframe::egui;

mod app;
mod config;
mod palette;
mod platform;
mod ui;

use app::HexPaletteApp;
use config::Config;

fn main() -> eframe::Result<()> {
    // Config paths
    let global_config_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hex-palette")
        .join("config.toml");
    let local_config_path = PathBuf::from("hex-palette.toml");

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut initial_alphabet: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--alphabet" | "-a" => {
                if i + 1 < args.len() {
                    initial_alphabet = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --alphabet requires a value");
                    std::process::exit(1);
                }
            }
            "--init" => {
                if local_config_path.exists() {
                    eprintln!(
                        "Local config already exists: {}",
                        local_config_path.display()
                    );
                    std::process::exit(1);
                }
                let example = generate_example_config();
                std::fs::write(&local_config_path, example).expect("Failed to write config");
                println!("Created local config: {}", local_config_path.display());
                std::process::exit(0);
            }
            "--init-global" => {
                if let Some(parent) = global_config_path.parent() {
                    std::fs::create_dir_all(parent).ok();
                }
                let example = generate_example_config();
                std::fs::write(&global_config_path, example).expect("Failed to write config");
                println!("Created global config: {}", global_config_path.display());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Usage: hex-palette [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -a, --alphabet <CHARS>  Start with the given hex characters");
                println!("      --init              Create local config (./hex-palette.toml)");
                println!("      --init-global       Create/reset global config");
                println!("  -h, --help              Show this help");
                std::process::exit(0);
            }
            _ => i += 1,
        }
    }

    let (config, config_path): (Config, PathBuf) = if local_config_path.exists() {
        let content =
            std::fs::read_to_string(&local_config_path).expect("Failed to read hex-palette.toml");
        match toml::from_str(&content) {
            Ok(config) => (config, local_config_path),
            Err(e) => {
                eprintln!("[warn] Invalid hex-palette.toml, using defaults: {e}");
                (Config::default(), local_config_path)
            }
        }
    } else if global_config_path.exists() {
        let content =
            std::fs::read_to_string(&global_config_path).expect("Failed to read global config");
        match toml::from_str(&content) {
            Ok(config) => (config, global_config_path),
            Err(e) => {
                eprintln!("[warn] Invalid global config, using defaults: {e}");
                (Config::default(), global_config_path)
            }
        }
    } else {
        // Create example config
        let example = generate_example_config();
        if let Some(parent) = global_config_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(&global_config_path, example).ok();
        eprintln!(
            "Created example config at: {}",
            global_config_path.display()
        );
        (Config::default(), global_config_path)
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_decorations(false)
            .with_transparent(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        "Hex Palette",
        options,
        Box::new(move |cc| {
            Ok(Box::new(HexPaletteApp::new(
                cc,
                config,
                initial_alphabet,
                config_path,
            )))
        }),
    )
}

fn generate_example_config() -> String {
    r#"# Hex Palette Configuration
# Global config: ~/.config/hex-palette/config.toml
# Local override: ./hex-palette.toml (in working directory)

[window]
opacity = 0.95             # Background opacity (0.0 - 1.0)
border = "auto"            # "auto" (when translucent), "show", "hide"
title_bar = "auto"         # "auto" (hover), "show", "hide"
accent_line = "auto"       # "auto" (highlight on hover), "show", "hide"

[palette]
page_size = 150            # Swatches per page
debounce_ms = 500          # Regeneration delay for longer inputs
debounce_threshold = 4     # Input length at which the delay kicks in
spectrum_height = 48.0     # Height of the hue spectrum strip
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(&generate_example_config()).unwrap();
        assert_eq!(config.palette.page_size, 150);
        assert_eq!(config.window.title_bar, "auto");
    }
}
