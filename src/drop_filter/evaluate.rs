use std::path::PathBuf;

use super::payload::DragPayloadItem;
use super::policy::AcceptancePolicy;

/// Outcome of filtering one drag payload.
///
/// Acceptability is derived from the accepted list rather than stored, so the
/// two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationResult {
    accepted: Vec<DragPayloadItem>,
}

impl EvaluationResult {
    /// Accepted items in payload order.
    pub fn accepted(&self) -> &[DragPayloadItem] {
        &self.accepted
    }

    pub fn is_acceptable(&self) -> bool {
        !self.accepted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.accepted.into_iter().map(|item| item.path).collect()
    }
}

/// Filter `items` against `policy`, preserving input order.
pub fn evaluate(items: &[DragPayloadItem], policy: &AcceptancePolicy) -> EvaluationResult {
    let accepted = items
        .iter()
        .filter(|item| policy.accepts(item))
        .cloned()
        .collect();
    EvaluationResult { accepted }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<DragPayloadItem> {
        paths.iter().map(|path| DragPayloadItem::file(*path)).collect()
    }

    #[test]
    fn keeps_allowed_files_in_order() {
        let policy = AcceptancePolicy::new(["csv", "xlsx"]);
        let result = evaluate(&files(&["a.CSV", "b.txt", "c.xlsx"]), &policy);
        assert!(result.is_acceptable());
        assert_eq!(
            result.into_paths(),
            vec![PathBuf::from("a.CSV"), PathBuf::from("c.xlsx")]
        );
    }

    #[test]
    fn directory_gating_ignores_extensions() {
        let items = vec![DragPayloadItem::directory("/tmp/dir")];
        let closed = evaluate(&items, &AcceptancePolicy::default());
        assert!(!closed.is_acceptable());
        let open = evaluate(&items, &AcceptancePolicy::default().with_directories(true));
        assert_eq!(open.accepted(), items.as_slice());
    }

    #[test]
    fn empty_payload_is_never_acceptable() {
        let policy = AcceptancePolicy::new(["csv"]).with_directories(true);
        let result = evaluate(&[], &policy);
        assert!(result.is_empty());
        assert!(!result.is_acceptable());
    }

    #[test]
    fn extensionless_and_disallowed_paths_fail_quietly() {
        let policy = AcceptancePolicy::new(["csv"]);
        let result = evaluate(&files(&["Makefile", "notes.", "report.csv.bak"]), &policy);
        assert!(!result.is_acceptable());
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let policy = AcceptancePolicy::new(["csv"]).with_directories(true);
        let mut items = files(&["x.csv", "y.png"]);
        items.push(DragPayloadItem::directory("/data"));
        let first = evaluate(&items, &policy);
        let second = evaluate(&items, &policy);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
