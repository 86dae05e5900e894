use eframe::egui;
use tracing::trace;

use crate::drop_filter::{DragOperation, DropTarget};

use super::host_payload::{HostFile, HostPayload};

/// Drag-related input for one frame, reduced to what a drop zone needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameDragInput {
    pub hovered: Vec<HostFile>,
    pub dropped: Vec<HostFile>,
    /// `None` when the backend reports no pointer position this frame.
    pub pointer_over_zone: Option<bool>,
}

impl FrameDragInput {
    pub fn from_context(ctx: &egui::Context, zone: egui::Rect) -> Self {
        ctx.input(|i| {
            let pointer = i.pointer.hover_pos().or_else(|| i.pointer.interact_pos());
            Self {
                hovered: i.raw.hovered_files.iter().map(HostFile::from).collect(),
                dropped: i.raw.dropped_files.iter().map(HostFile::from).collect(),
                pointer_over_zone: pointer.map(|pos| zone.contains(pos)),
            }
        })
    }
}

/// What the tracker reported to its target this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerEvent {
    Idle,
    Hovering(DragOperation),
    Exited,
    Dropped { handled: bool },
}

/// Turns egui's per-frame hovered/dropped file lists into drag lifecycle
/// events for a single zone.
///
/// egui has no explicit enter/exit callbacks; the tracker derives them from
/// whether files were over the zone on the previous frame.
#[derive(Debug, Default)]
pub struct DragTracker {
    inside: bool,
}

impl DragTracker {
    /// True while a gesture the target has been told about is over the zone.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn advance<T>(&mut self, input: &FrameDragInput, target: &mut T) -> TrackerEvent
    where
        T: DropTarget + ?Sized,
    {
        if !input.dropped.is_empty() {
            return self.finish_drop(input, target);
        }
        // Backends often stop reporting the cursor during external drags.
        let over = input.pointer_over_zone.unwrap_or(true);
        if !input.hovered.is_empty() && over {
            let payload = HostPayload::new(&input.hovered);
            let op = if self.inside {
                target.drag_updated(&payload)
            } else {
                self.inside = true;
                trace!("Drag entered drop zone");
                target.drag_entered(&payload)
            };
            return TrackerEvent::Hovering(op);
        }
        self.leave(target)
    }

    /// The drop frame carries no hovered files; the dropped list is the final
    /// payload. It is evaluated once more so the delivered set matches it.
    fn finish_drop<T>(&mut self, input: &FrameDragInput, target: &mut T) -> TrackerEvent
    where
        T: DropTarget + ?Sized,
    {
        let over = input.pointer_over_zone.unwrap_or(self.inside);
        if !over {
            return self.leave(target);
        }
        let payload = HostPayload::new(&input.dropped);
        if self.inside {
            target.drag_updated(&payload);
        } else {
            target.drag_entered(&payload);
        }
        self.inside = false;
        let handled = target.drop_performed();
        trace!(handled, "Drop finished on drop zone");
        TrackerEvent::Dropped { handled }
    }

    fn leave<T>(&mut self, target: &mut T) -> TrackerEvent
    where
        T: DropTarget + ?Sized,
    {
        if !self.inside {
            return TrackerEvent::Idle;
        }
        self.inside = false;
        trace!("Drag left drop zone");
        target.drag_exited();
        TrackerEvent::Exited
    }
}
