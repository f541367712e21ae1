//! Snapshot-based optimistic list updates.
//!
//! A panel applies the patched list immediately, fires the request, and on
//! failure restores the snapshot. The list length never changes under a
//! patch, so rollback is always a plain replacement.

/// Apply `patch` to every item matching `select`. Returns the patched list
/// and the pre-patch snapshot for rollback.
pub fn patched<T: Clone>(
    items: &[T],
    select: impl Fn(&T) -> bool,
    patch: impl Fn(&mut T),
) -> (Vec<T>, Vec<T>) {
    let snapshot = items.to_vec();
    let mut next = items.to_vec();
    for item in next.iter_mut() {
        if select(item) {
            patch(item);
        }
    }
    (next, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        active: bool,
    }

    #[test]
    fn patch_changes_only_selected_rows_and_keeps_length() {
        let rows = vec![
            Row { id: 1, active: true },
            Row { id: 2, active: true },
            Row { id: 3, active: false },
        ];
        let (next, snapshot) = patched(&rows, |r| r.id == 2, |r| r.active = false);

        assert_eq!(next.len(), rows.len());
        assert_eq!(snapshot, rows);
        assert!(!next[1].active);
        assert!(next[0].active);
        assert!(!next[2].active);
    }

    #[test]
    fn rollback_restores_the_snapshot_exactly() {
        let rows = vec![Row { id: 7, active: false }];
        let (next, snapshot) = patched(&rows, |_| true, |r| r.active = true);
        assert_ne!(next, rows);
        // Failure path: the panel writes the snapshot back.
        assert_eq!(snapshot, rows);
    }

    #[test]
    fn clearing_an_empty_list_is_a_no_op() {
        let mut rows: Vec<Row> = Vec::new();
        rows.clear();
        assert!(rows.is_empty());
    }
}
