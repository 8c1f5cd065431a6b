use crate::api::ToggleError;
use crate::toggle_definitions::{RolloutGroup, Row, Toggle};

/// Default applied whenever a segment carries no usable percentage.
pub const DEFAULT_ROLLOUT_PERCENTAGE: u8 = 100;

/// Resolves requested toggle names against a borrowed row set. Stateless
/// beyond the rows it was handed; construct one per resolution call.
#[derive(Debug)]
pub struct ToggleMatcher<'a> {
    pub rows: &'a [Row],
}

impl<'a> ToggleMatcher<'a> {
    pub fn new(rows: &'a [Row]) -> Self {
        ToggleMatcher { rows }
    }

    /// Resolve every requested name into a toggle. Names with no matching
    /// row are silently omitted. A malformed matched row fails only that
    /// toggle, not its siblings.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<Toggle>, ToggleError> {
        if names.is_empty() {
            return Err(ToggleError::NoToggleNames);
        }

        let mut toggles = Vec::with_capacity(names.len());
        for name in names {
            let Some(row) = self.matching_row(name)? else {
                continue;
            };
            match self.build_toggle(row) {
                Ok(toggle) => toggles.push(toggle),
                Err(e) => {
                    tracing::warn!("skipping toggle '{}': {}", name, e);
                }
            }
        }

        Ok(toggles)
    }

    /// First row whose `Key` equals `name`, exact and case-sensitive.
    /// The sheet does not enforce key uniqueness, first match wins.
    pub fn matching_row(&self, name: &str) -> Result<Option<&Row>, ToggleError> {
        if name.is_empty() {
            return Err(ToggleError::EmptyToggleName);
        }

        Ok(self.rows.iter().find(|row| row.key == name))
    }

    /// Turn a matched row into a toggle. Rows whose `Group` field yields no
    /// usable rollout group are rejected rather than producing a toggle
    /// with zero groups.
    pub fn build_toggle(&self, row: &Row) -> Result<Toggle, ToggleError> {
        let segments: Vec<&str> = row.group.split(',').collect();
        let groups = parse_rollout_groups(&segments);

        if groups.is_empty() {
            return Err(ToggleError::NoRolloutGroups(row.key.clone()));
        }

        Ok(Toggle {
            name: row.key.clone(),
            value: row.value.clone(),
            groups,
        })
    }
}

/// Parse comma-delimited group segments into rollout groups, preserving
/// segment order (it encodes rollout precedence for consumers). Every
/// whitespace character in a group name is stripped, not just the ends.
/// Segments whose name normalizes to empty are dropped.
pub fn parse_rollout_groups(segments: &[&str]) -> Vec<RolloutGroup> {
    segments
        .iter()
        .filter_map(|segment| {
            let mut parts = segment.split('=');
            let name: String = parts
                .next()
                .unwrap_or("")
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if name.is_empty() {
                return None;
            }

            Some(RolloutGroup {
                name,
                rollout_percentage: parse_rollout_percentage(parts.next()),
            })
        })
        .collect()
}

/// Coerce the right-hand side of a `name=percentage` segment. Missing,
/// empty, or non-numeric input falls back to the full-rollout default;
/// numeric input is clamped into 0..=100 and truncated to an integer.
fn parse_rollout_percentage(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return DEFAULT_ROLLOUT_PERCENTAGE;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_ROLLOUT_PERCENTAGE;
    }

    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed.clamp(0.0, 100.0) as u8,
        _ => DEFAULT_ROLLOUT_PERCENTAGE,
    }
}
