#![allow(dead_code)]

pub mod dropzone_env;

use std::path::PathBuf;

use dropzone::egui_host::{FrameDragInput, HostFile};

pub fn hover(paths: &[PathBuf]) -> FrameDragInput {
    FrameDragInput {
        hovered: paths.iter().map(HostFile::with_path).collect(),
        dropped: Vec::new(),
        pointer_over_zone: Some(true),
    }
}

pub fn drop_over(paths: &[PathBuf]) -> FrameDragInput {
    FrameDragInput {
        hovered: Vec::new(),
        dropped: paths.iter().map(HostFile::with_path).collect(),
        pointer_over_zone: Some(true),
    }
}
