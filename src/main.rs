#![deny(missing_docs)]

//! Demo window for the dropzone widget.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use dropzone::config;
use dropzone::egui_host::{DemoApp, MIN_VIEWPORT_SIZE};
use dropzone::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let app: Box<dyn eframe::App> = match load_config() {
        Ok((config, path)) => {
            tracing::info!(
                extensions = %config.policy.describe_extensions(),
                directories = config.policy.accepts_directories(),
                "Drop zone configured"
            );
            Box::new(DemoApp::new(config, Some(path)))
        }
        Err(err) => {
            tracing::error!("Failed to load config: {err}");
            Box::new(LaunchError {
                message: format!("Failed to load config: {err}"),
            })
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native("Dropzone", native_options, Box::new(move |_cc| Ok(app)))?;
    Ok(())
}

fn load_config() -> Result<(config::DropZoneConfig, std::path::PathBuf), config::ConfigError> {
    let path = config::config_path()?;
    let config = config::load_from_path(&path)?;
    Ok((config, path))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
