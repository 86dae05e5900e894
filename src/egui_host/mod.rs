//! egui/eframe glue for the drop filter.
//!
//! egui reports external drags as per-frame lists (`hovered_files` while the
//! drag is over the window, `dropped_files` on the frame it ends). The
//! [`DragTracker`] turns those lists into the enter/update/exit/drop sequence
//! a [`DropTarget`](crate::drop_filter::DropTarget) expects, and [`DropZone`]
//! paints the feedback.

mod demo_app;
mod drag_tracker;
mod drop_zone;
mod host_payload;
pub mod style;

pub use demo_app::{DemoApp, MIN_VIEWPORT_SIZE};
pub use drag_tracker::{DragTracker, FrameDragInput, TrackerEvent};
pub use drop_zone::{DropInbox, DropZone, DropZoneResponse, DropZoneState, MIN_ZONE_SIZE, ZoneFrame};
pub use host_payload::{HostFile, HostPayload};
