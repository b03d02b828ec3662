//! Ranking of commands against a query

use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::builtin::{DRAWER_CATEGORY, PANEL_CATEGORY};

/// Lengths of the runs of characters shared by `query` and `title`
///
/// Both strings are lowercased and aligned with a Myers character diff.
/// Adjacent equal operations are merged, so each entry is a maximal run.
pub fn equal_runs(query: &str, title: &str) -> Vec<usize> {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    let title: Vec<char> = title.to_lowercase().chars().collect();

    let mut runs = Vec::new();
    let mut current = 0;

    for op in capture_diff_slices(Algorithm::Myers, &query, &title) {
        match op {
            DiffOp::Equal { len, .. } => current += len,
            _ => {
                if current > 0 {
                    runs.push(current);
                    current = 0;
                }
            }
        }
    }
    if current > 0 {
        runs.push(current);
    }

    runs
}

/// Score of a single shared run, saturating at `u32::MAX`
fn run_score(len: usize) -> u32 {
    u32::try_from(len)
        .map(|n| n.saturating_mul(n))
        .unwrap_or(u32::MAX)
}

/// Score a title against a query: every shared run of length `n` adds `n²`
pub fn diff_score(query: &str, title: &str) -> u32 {
    equal_runs(query, title)
        .into_iter()
        .map(run_score)
        .fold(0, u32::saturating_add)
}

/// Panel reveals rank above drawer reveals, which rank above everything else
pub fn category_bonus(category: &str) -> u32 {
    if category.starts_with(PANEL_CATEGORY) {
        2
    } else if category.starts_with(DRAWER_CATEGORY) {
        1
    } else {
        0
    }
}

/// Full score of a command for a query
pub fn command_score(query: &str, category: &str, title: &str) -> u32 {
    diff_score(query, title).saturating_add(category_bonus(category))
}
