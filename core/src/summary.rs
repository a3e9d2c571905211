//! Completion counts over a list of todos.

use serde::{Deserialize, Serialize};

use crate::types::Todo;

/// Aggregate counts for a collection of todos. `total == completed + pending`
/// always holds for values produced by [`summarize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Count total, completed and pending todos.
///
/// Every element counts, duplicates included. Only `is_completed` is read.
pub fn summarize(todos: &[Todo]) -> Summary {
    let total = todos.len();
    let completed = todos.iter().filter(|t| t.is_completed).count();
    Summary {
        total,
        completed,
        pending: total - completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, title: &str, is_completed: bool) -> Todo {
        Todo {
            id,
            username: "alice".to_string(),
            title: title.to_string(),
            is_completed,
            created_at: String::new(),
            completed_at: is_completed.then(String::new),
        }
    }

    #[test]
    fn summarizes_mixed_list() {
        let todos = vec![todo(1, "Buy milk", false), todo(2, "Finish project", true)];
        let summary = summarize(&todos);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 1);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn all_completed() {
        let todos: Vec<Todo> = (0..5).map(|i| todo(i, "done", true)).collect();
        assert_eq!(
            summarize(&todos),
            Summary {
                total: 5,
                completed: 5,
                pending: 0
            }
        );
    }

    #[test]
    fn all_pending() {
        let todos: Vec<Todo> = (0..3).map(|i| todo(i, "open", false)).collect();
        assert_eq!(
            summarize(&todos),
            Summary {
                total: 3,
                completed: 0,
                pending: 3
            }
        );
    }

    #[test]
    fn duplicate_ids_count_separately() {
        let todos = vec![todo(1, "same", true), todo(1, "same", true), todo(1, "same", false)];
        let summary = summarize(&todos);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 2);
    }

    #[test]
    fn completed_at_is_ignored() {
        // Inconsistent record: flag wins.
        let mut odd = todo(1, "odd", false);
        odd.completed_at = Some("2025-01-01T00:00:00Z".to_string());
        assert_eq!(summarize(&[odd]).completed, 0);
    }

    #[test]
    fn counts_add_up_and_repeat() {
        let todos: Vec<Todo> = (0..17).map(|i| todo(i, "t", i % 3 == 0)).collect();
        let first = summarize(&todos);
        assert_eq!(first.total, todos.len());
        assert_eq!(first.completed + first.pending, first.total);
        assert_eq!(first.completed, todos.iter().filter(|t| t.is_completed).count());
        assert_eq!(summarize(&todos), first);
    }
}
