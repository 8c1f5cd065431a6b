use rand::{distributions::Alphanumeric, Rng};

use crate::toggle_definitions::Row;

pub fn random_string(prefix: &str, length: usize) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();
    format!("{}{}", prefix, suffix)
}

/// A small sheet covering the interesting parsing cases: percentages,
/// defaults, clamping, and a malformed row with no groups.
pub fn demo_rows() -> Vec<Row> {
    vec![
        Row::new("dark_mode", "true", "beta=20,internal"),
        Row::new("new_onboarding", "variant-b", "all"),
        Row::new("over_rollout", "true", "team=150"),
        Row::new("broken_row", "true", ""),
    ]
}
