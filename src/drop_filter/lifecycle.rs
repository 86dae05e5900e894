use std::fmt;
use std::path::PathBuf;

use tracing::{debug, trace};

use super::evaluate::{EvaluationResult, evaluate};
use super::payload::{DragPayloadSource, PayloadError};
use super::policy::AcceptancePolicy;

/// Verdict returned to the host for entered/updated events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOperation {
    /// Show a copy cursor; a drop would be accepted.
    Copy,
    /// Reject the drag.
    None,
}

impl DragOperation {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Copy)
    }
}

/// Drag lifecycle as seen by one drop target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// An acceptable drag hovers over the target; holds the latest evaluation.
    DragHovering(EvaluationResult),
}

/// Host-facing drag destination. The host calls these in gesture order.
pub trait DropTarget {
    fn drag_entered(&mut self, payload: &dyn DragPayloadSource) -> DragOperation;
    fn drag_updated(&mut self, payload: &dyn DragPayloadSource) -> DragOperation;
    fn drag_exited(&mut self);
    /// Returns true when the drop was handled.
    fn drop_performed(&mut self) -> bool;
}

/// Receiver for the accepted paths of a successful drop.
pub trait DropSink {
    fn files_dropped(&mut self, paths: Vec<PathBuf>);
}

impl<F> DropSink for F
where
    F: FnMut(Vec<PathBuf>),
{
    fn files_dropped(&mut self, paths: Vec<PathBuf>) {
        self(paths)
    }
}

/// Why a payload was turned away. Only used for diagnostics; the host sees a bare reject.
#[derive(Debug)]
enum Rejection {
    UnsupportedPayload(PayloadError),
    NoAcceptableItems { offered: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPayload(err) => write!(f, "{err}"),
            Self::NoAcceptableItems { offered } => {
                write!(f, "none of {offered} dragged items match the policy")
            }
        }
    }
}

/// Filters drags against an [`AcceptancePolicy`] and hands accepted paths to a sink.
#[derive(Debug)]
pub struct DropFilter<S> {
    policy: AcceptancePolicy,
    state: DragState,
    sink: S,
}

impl<S: DropSink> DropFilter<S> {
    pub fn new(policy: AcceptancePolicy, sink: S) -> Self {
        Self {
            policy,
            state: DragState::Idle,
            sink,
        }
    }

    pub fn policy(&self) -> &AcceptancePolicy {
        &self.policy
    }

    /// Replace the policy. Takes effect on the next host event.
    pub fn set_policy(&mut self, policy: AcceptancePolicy) {
        self.policy = policy;
    }

    pub fn set_allowed_extensions<I, T>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.policy.set_allowed_extensions(extensions);
    }

    pub fn set_accepts_directories(&mut self, accept: bool) {
        self.policy.set_accepts_directories(accept);
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// True while an acceptable drag hovers over the target.
    pub fn is_highlighted(&self) -> bool {
        matches!(self.state, DragState::DragHovering(_))
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The gesture finished somewhere, possibly outside this target.
    pub fn drag_ended(&mut self) {
        self.reset("ended");
    }

    fn reevaluate(&mut self, payload: &dyn DragPayloadSource) -> DragOperation {
        match self.filter(payload) {
            Ok(result) => {
                trace!(accepted = result.len(), "Drag payload accepted");
                self.state = DragState::DragHovering(result);
                DragOperation::Copy
            }
            Err(rejection) => {
                debug!(%rejection, "Drag payload rejected");
                self.state = DragState::Idle;
                DragOperation::None
            }
        }
    }

    fn filter(&self, payload: &dyn DragPayloadSource) -> Result<EvaluationResult, Rejection> {
        let items = payload
            .file_items()
            .map_err(Rejection::UnsupportedPayload)?;
        let result = evaluate(&items, &self.policy);
        if result.is_acceptable() {
            Ok(result)
        } else {
            Err(Rejection::NoAcceptableItems {
                offered: items.len(),
            })
        }
    }

    fn reset(&mut self, reason: &str) {
        if self.is_highlighted() {
            trace!(reason, "Drag highlight cleared");
        }
        self.state = DragState::Idle;
    }
}

impl<S: DropSink> DropTarget for DropFilter<S> {
    fn drag_entered(&mut self, payload: &dyn DragPayloadSource) -> DragOperation {
        self.reevaluate(payload)
    }

    fn drag_updated(&mut self, payload: &dyn DragPayloadSource) -> DragOperation {
        self.reevaluate(payload)
    }

    fn drag_exited(&mut self) {
        self.reset("exited");
    }

    fn drop_performed(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::DragHovering(result) if result.is_acceptable() => {
                let paths = result.into_paths();
                debug!(count = paths.len(), "Delivering dropped paths");
                self.sink.files_dropped(paths);
                true
            }
            _ => {
                debug!("Drop performed without an acceptable drag");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drop_filter::DragPayloadItem;

    #[derive(Debug, Default)]
    struct Inbox(Vec<Vec<PathBuf>>);

    impl DropSink for Inbox {
        fn files_dropped(&mut self, paths: Vec<PathBuf>) {
            self.0.push(paths);
        }
    }

    fn collecting_filter(policy: AcceptancePolicy) -> DropFilter<Inbox> {
        DropFilter::new(policy, Inbox::default())
    }

    struct Unreadable;

    impl DragPayloadSource for Unreadable {
        fn file_items(&self) -> Result<Vec<DragPayloadItem>, PayloadError> {
            Err(PayloadError::Unsupported { entries: 1 })
        }
    }

    #[test]
    fn accepted_enter_highlights_until_exit() {
        let mut filter = collecting_filter(AcceptancePolicy::new(["csv"]));
        let op = filter.drag_entered(&[DragPayloadItem::file("x.csv")]);
        assert_eq!(op, DragOperation::Copy);
        assert!(filter.is_highlighted());
        filter.drag_exited();
        assert_eq!(filter.state(), &DragState::Idle);
        assert!(!filter.is_highlighted());
        assert!(filter.sink().0.is_empty());
    }

    #[test]
    fn drop_delivers_last_evaluation_once() {
        let mut filter = collecting_filter(AcceptancePolicy::new(["csv"]));
        filter.drag_entered(&[DragPayloadItem::file("x.csv"), DragPayloadItem::file("y.txt")]);
        assert!(filter.drop_performed());
        assert_eq!(filter.sink().0, vec![vec![PathBuf::from("x.csv")]]);
        assert_eq!(filter.state(), &DragState::Idle);
        assert!(!filter.drop_performed());
        assert_eq!(filter.sink().0.len(), 1);
    }

    #[test]
    fn rejected_enter_stays_idle_and_drop_fails() {
        let mut filter = collecting_filter(AcceptancePolicy::new(["csv"]));
        let op = filter.drag_entered(&[DragPayloadItem::file("notes.txt")]);
        assert_eq!(op, DragOperation::None);
        assert!(!filter.is_highlighted());
        assert!(!filter.drop_performed());
        assert!(filter.sink().0.is_empty());
    }

    #[test]
    fn unreadable_payload_is_rejected_like_an_empty_match() {
        let mut filter = collecting_filter(AcceptancePolicy::new(["csv"]));
        assert_eq!(filter.drag_entered(&Unreadable), DragOperation::None);
        assert_eq!(filter.state(), &DragState::Idle);
    }

    #[test]
    fn update_tracks_payload_changes() {
        let mut filter = collecting_filter(AcceptancePolicy::new(["csv"]));
        filter.drag_entered(&[DragPayloadItem::file("a.csv")]);
        assert_eq!(
            filter.drag_updated(&[DragPayloadItem::file("a.png")]),
            DragOperation::None
        );
        assert!(!filter.is_highlighted());
        assert_eq!(
            filter.drag_updated(&[DragPayloadItem::file("b.CSV")]),
            DragOperation::Copy
        );
        assert!(filter.drop_performed());
        assert_eq!(filter.sink().0, vec![vec![PathBuf::from("b.CSV")]]);
    }

    #[test]
    fn update_uses_current_policy() {
        let mut filter = collecting_filter(AcceptancePolicy::new(["csv"]));
        let payload = [DragPayloadItem::directory("/tmp/incoming")];
        assert_eq!(filter.drag_entered(&payload), DragOperation::None);
        filter.set_accepts_directories(true);
        assert_eq!(filter.drag_updated(&payload), DragOperation::Copy);
        filter.set_allowed_extensions(["json"]);
        assert!(filter.policy().allows_extension("JSON"));
    }

    #[test]
    fn drag_ended_clears_highlight() {
        let mut filter = collecting_filter(AcceptancePolicy::new(["csv"]));
        filter.drag_entered(&[DragPayloadItem::file("a.csv")]);
        filter.drag_ended();
        assert!(!filter.is_highlighted());
        assert!(!filter.drop_performed());
    }

    #[test]
    fn closures_receive_dropped_paths() {
        let mut received = Vec::new();
        {
            let mut filter =
                DropFilter::new(AcceptancePolicy::new(["xlsx"]), |paths: Vec<PathBuf>| received = paths);
            filter.drag_entered(&[DragPayloadItem::file("q.xlsx")]);
            assert!(filter.drop_performed());
        }
        assert_eq!(received, vec![PathBuf::from("q.xlsx")]);
    }
}
