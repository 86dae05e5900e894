//! Desktop drop zones that filter dragged files by extension or directory-ness.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted drop zone settings.
pub mod config;
/// Drag acceptance rules and the drag lifecycle.
pub mod drop_filter;
/// egui/eframe host integration.
pub mod egui_host;
/// Tracing subscriber setup.
pub mod logging;
