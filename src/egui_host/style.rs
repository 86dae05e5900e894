use eframe::egui::{Color32, CursorIcon, Pos2, Rect, Stroke, Visuals, pos2};

use crate::config::HighlightSettings;
use crate::drop_filter::DragOperation;

pub const BORDER_DASH: f32 = 10.0;
pub const BORDER_GAP: f32 = 2.0;
const CORNER_SEGMENTS: usize = 6;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub zone_border: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(18, 18, 20),
        bg_secondary: Color32::from_rgb(28, 30, 32),
        text_primary: Color32::from_rgb(200, 204, 210),
        text_muted: Color32::from_rgb(140, 146, 155),
        zone_border: Color32::GRAY,
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
}

pub fn zone_border() -> Stroke {
    Stroke::new(2.0, palette().zone_border)
}

pub fn highlight_fill(settings: &HighlightSettings) -> Color32 {
    let [r, g, b, a] = settings.tint;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn cursor_for(op: DragOperation) -> CursorIcon {
    match op {
        DragOperation::Copy => CursorIcon::Copy,
        DragOperation::None => CursorIcon::NoDrop,
    }
}

/// Closed outline of `rect` with rounded corners, suitable for dashed strokes.
pub fn rounded_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let radius = radius
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
        .max(0.0);
    let corners = [
        (pos2(rect.min.x + radius, rect.min.y + radius), 180.0_f32),
        (pos2(rect.max.x - radius, rect.min.y + radius), 270.0),
        (pos2(rect.max.x - radius, rect.max.y - radius), 0.0),
        (pos2(rect.min.x + radius, rect.max.y - radius), 90.0),
    ];
    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1) + 1);
    for (center, start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = (start + 90.0 * step as f32 / CORNER_SEGMENTS as f32).to_radians();
            points.push(center + radius * eframe::egui::vec2(angle.cos(), angle.sin()));
        }
    }
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}
