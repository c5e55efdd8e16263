use std::collections::HashMap;

use uuid::Uuid;

/// Fixed palette cycled by modulo; group numbers past the palette reuse
/// colors.
pub const GROUP_COLORS: [&str; 10] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe",
];

/// Admin-assigned group tags used to cluster profiles for meal matching.
///
/// Held only in the dashboard's memory; assignments are lost when the
/// process exits. Group 0 means "ungrouped". The tracked maximum always
/// covers the highest assigned group so a legend can enumerate every group
/// in use.
#[derive(Debug, Clone)]
pub struct MatchingGroups {
    assignments: HashMap<Uuid, u32>,
    max_group: u32,
}

impl Default for MatchingGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingGroups {
    pub fn new() -> Self {
        Self {
            assignments: HashMap::new(),
            max_group: 1,
        }
    }

    /// Assigns a group from raw admin input. Anything that does not parse as
    /// a non-negative integer floors to 0.
    pub fn assign(&mut self, user_id: Uuid, raw: &str) -> u32 {
        let group = raw.trim().parse::<u32>().unwrap_or(0);

        self.assignments.insert(user_id, group);
        if group > self.max_group {
            self.max_group = group;
        }

        group
    }

    pub fn group_of(&self, user_id: &Uuid) -> u32 {
        self.assignments.get(user_id).copied().unwrap_or(0)
    }

    pub fn remove(&mut self, user_id: &Uuid) {
        self.assignments.remove(user_id);
    }

    /// Clears every assignment and resets the tracked maximum to 1.
    pub fn reset(&mut self) {
        self.assignments.clear();
        self.max_group = 1;
    }

    pub fn max_group(&self) -> u32 {
        self.max_group
    }

    pub fn assignments(&self) -> &HashMap<Uuid, u32> {
        &self.assignments
    }

    pub fn color_for(group: u32) -> &'static str {
        GROUP_COLORS[group as usize % GROUP_COLORS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_invalid_input_floor_to_zero() {
        let mut groups = MatchingGroups::new();
        let user = Uuid::new_v4();

        assert_eq!(groups.assign(user, "-5"), 0);
        assert_eq!(groups.group_of(&user), 0);
        assert_eq!(groups.assign(user, "not a number"), 0);
        assert_eq!(groups.group_of(&user), 0);
    }

    #[test]
    fn assignment_raises_tracked_maximum() {
        let mut groups = MatchingGroups::new();
        let user = Uuid::new_v4();

        groups.assign(user, "3");
        assert!(groups.max_group() >= 3);

        // Lower assignments never shrink the maximum.
        groups.assign(user, "2");
        assert!(groups.max_group() >= 3);
    }

    #[test]
    fn reset_clears_assignments_and_maximum() {
        let mut groups = MatchingGroups::new();
        let user = Uuid::new_v4();
        groups.assign(user, "7");

        groups.reset();

        assert_eq!(groups.group_of(&user), 0);
        assert_eq!(groups.max_group(), 1);
        assert!(groups.assignments().is_empty());
    }

    #[test]
    fn palette_cycles_by_modulo() {
        assert_eq!(
            MatchingGroups::color_for(1),
            MatchingGroups::color_for(1 + GROUP_COLORS.len() as u32)
        );
    }
}
