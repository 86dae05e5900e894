use std::path::PathBuf;

use eframe::egui::{self, Align2, Sense, Shape, TextStyle, Vec2};

use crate::config::HighlightSettings;
use crate::drop_filter::{AcceptancePolicy, DropFilter, DropSink};

use super::drag_tracker::{DragTracker, FrameDragInput, TrackerEvent};
use super::style;

/// Smallest drop zone the widget will allocate.
pub const MIN_ZONE_SIZE: Vec2 = egui::vec2(500.0, 200.0);

/// Holds the paths of the latest successful drop until the widget hands them out.
#[derive(Debug, Default)]
pub struct DropInbox {
    latest: Option<Vec<PathBuf>>,
}

impl DropInbox {
    pub fn take(&mut self) -> Option<Vec<PathBuf>> {
        self.latest.take()
    }
}

impl DropSink for DropInbox {
    fn files_dropped(&mut self, paths: Vec<PathBuf>) {
        self.latest = Some(paths);
    }
}

/// Persistent state behind a [`DropZone`]; keep one per zone across frames.
#[derive(Debug)]
pub struct DropZoneState {
    filter: DropFilter<DropInbox>,
    tracker: DragTracker,
}

/// Result of feeding one frame of input to a [`DropZoneState`].
#[derive(Debug, PartialEq, Eq)]
pub struct ZoneFrame {
    pub event: TrackerEvent,
    pub dropped: Option<Vec<PathBuf>>,
}

impl DropZoneState {
    pub fn new(policy: AcceptancePolicy) -> Self {
        Self {
            filter: DropFilter::new(policy, DropInbox::default()),
            tracker: DragTracker::default(),
        }
    }

    pub fn policy(&self) -> &AcceptancePolicy {
        self.filter.policy()
    }

    pub fn set_policy(&mut self, policy: AcceptancePolicy) {
        self.filter.set_policy(policy);
    }

    pub fn is_highlighted(&self) -> bool {
        self.filter.is_highlighted()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_inside()
    }

    pub fn advance(&mut self, input: &FrameDragInput) -> ZoneFrame {
        let event = self.tracker.advance(input, &mut self.filter);
        ZoneFrame {
            event,
            dropped: self.filter.sink_mut().take(),
        }
    }
}

/// Output of [`DropZone::show`].
pub struct DropZoneResponse {
    pub response: egui::Response,
    pub event: TrackerEvent,
    /// Accepted paths, present only on the frame a drop succeeded.
    pub dropped: Option<Vec<PathBuf>>,
}

/// Region that accepts files dragged in from the desktop.
///
/// Paints a dashed frame with a prompt, tints itself while an acceptable drag
/// hovers, and reports accepted paths on the frame they are dropped.
#[must_use = "call `show` to render the drop zone"]
pub struct DropZone<'a> {
    state: &'a mut DropZoneState,
    prompt: String,
    min_size: Vec2,
    highlight: HighlightSettings,
}

impl<'a> DropZone<'a> {
    pub fn new(state: &'a mut DropZoneState) -> Self {
        Self {
            state,
            prompt: String::new(),
            min_size: MIN_ZONE_SIZE,
            highlight: HighlightSettings::default(),
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn min_size(mut self, min_size: Vec2) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn highlight(mut self, highlight: &HighlightSettings) -> Self {
        self.highlight = highlight.clone();
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> DropZoneResponse {
        let size = egui::vec2(ui.available_width().max(self.min_size.x), self.min_size.y);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        let input = FrameDragInput::from_context(ui.ctx(), rect);
        let frame = self.state.advance(&input);
        if let TrackerEvent::Hovering(op) = frame.event {
            ui.ctx().set_cursor_icon(style::cursor_for(op));
        }
        if self.state.is_tracking() {
            ui.ctx().request_repaint();
        }

        let painter = ui.painter_at(rect.expand(1.0));
        let radius = self.highlight.corner_radius;
        if self.state.is_highlighted() {
            painter.rect_filled(rect, radius, style::highlight_fill(&self.highlight));
        }
        let outline = style::rounded_outline(rect.shrink(1.0), radius);
        painter.extend(Shape::dashed_line(
            &outline,
            style::zone_border(),
            style::BORDER_DASH,
            style::BORDER_GAP,
        ));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &self.prompt,
            TextStyle::Button.resolve(ui.style()),
            style::palette().text_primary,
        );

        DropZoneResponse {
            response,
            event: frame.event,
            dropped: frame.dropped,
        }
    }
}
