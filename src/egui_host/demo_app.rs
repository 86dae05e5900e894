use std::path::PathBuf;

use eframe::egui::{self, ScrollArea, Vec2};
use tracing::{info, warn};

use crate::config::{self, DropZoneConfig};

use super::drop_zone::{DropZone, DropZoneState, MIN_ZONE_SIZE};
use super::style;

/// Smallest window the demo can be shrunk to.
pub const MIN_VIEWPORT_SIZE: Vec2 = egui::vec2(560.0, 420.0);

/// Window listing the paths of the most recent drop above a drop zone.
pub struct DemoApp {
    config: DropZoneConfig,
    /// Where toggled settings are written back; `None` keeps them in memory.
    config_path: Option<PathBuf>,
    zone: DropZoneState,
    paths: Vec<PathBuf>,
    visuals_set: bool,
}

impl DemoApp {
    pub fn new(config: DropZoneConfig, config_path: Option<PathBuf>) -> Self {
        let zone = DropZoneState::new(config.policy.clone());
        Self {
            config,
            config_path,
            zone,
            paths: Vec::new(),
            visuals_set: false,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn zone(&self) -> &DropZoneState {
        &self.zone
    }

    /// Replace the listed paths with a new drop.
    pub fn record_drop(&mut self, paths: Vec<PathBuf>) {
        for path in &paths {
            info!(path = %path.display(), "Accepted dropped path");
        }
        self.paths = paths;
    }

    pub fn set_accepts_directories(&mut self, accept: bool) {
        self.config.policy.set_accepts_directories(accept);
        self.zone.set_policy(self.config.policy.clone());
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(err) = config::save_to_path(&self.config, path) {
            warn!("Failed to persist drop zone settings: {err}");
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_paths(&self, ui: &mut egui::Ui, max_height: f32) {
        ScrollArea::vertical()
            .max_height(max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if self.paths.is_empty() {
                    ui.label(
                        egui::RichText::new("No files dropped yet")
                            .color(style::palette().text_muted),
                    );
                }
                for path in &self.paths {
                    ui.label(path.display().to_string());
                }
            });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut accept_dirs = self.config.policy.accepts_directories();
            if ui.checkbox(&mut accept_dirs, "Accept folders").changed() {
                self.set_accepts_directories(accept_dirs);
            }
            ui.separator();

            let list_height = (ui.available_height() - MIN_ZONE_SIZE.y - 16.0).max(0.0);
            self.render_paths(ui, list_height);
            ui.add_space(8.0);

            let response = DropZone::new(&mut self.zone)
                .prompt(self.config.prompt_text())
                .highlight(&self.config.highlight)
                .show(ui);
            if let Some(paths) = response.dropped {
                self.record_drop(paths);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggling_folders_updates_zone_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = DemoApp::new(DropZoneConfig::default(), Some(path.clone()));
        assert!(!app.zone().policy().accepts_directories());

        app.set_accepts_directories(true);
        assert!(app.zone().policy().accepts_directories());
        assert!(config::load_from_path(&path).unwrap().policy.accepts_directories());
    }

    #[test]
    fn new_drop_replaces_listed_paths() {
        let mut app = DemoApp::new(DropZoneConfig::default(), None);
        app.record_drop(vec![PathBuf::from("a.csv"), PathBuf::from("b.xlsx")]);
        app.record_drop(vec![PathBuf::from("c.csv")]);
        assert_eq!(app.paths(), [PathBuf::from("c.csv")]);
    }
}
