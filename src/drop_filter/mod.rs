//! Drag acceptance and filtering.
//!
//! [`evaluate`] is the pure rule: directories pass on the policy's directory
//! flag, files pass on their lowercased extension. [`DropFilter`] wraps it in
//! the drag lifecycle the host drives through [`DropTarget`], keeping the last
//! evaluation inside [`DragState::DragHovering`] so a drop never acts on a
//! stale payload.

mod evaluate;
mod lifecycle;
mod payload;
mod policy;

pub use evaluate::{EvaluationResult, evaluate};
pub use lifecycle::{DragOperation, DragState, DropFilter, DropSink, DropTarget};
pub use payload::{DragPayloadItem, DragPayloadSource, PayloadError};
pub use policy::AcceptancePolicy;
