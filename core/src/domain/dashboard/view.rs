use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    dashboard::{
        aggregation::{DayAggregate, build_meal_times},
        events::{StoreEvent, StoreRecord},
        matching::MatchingGroups,
        projection::{FilterField, SortKey, SortState, ViewMode, displayed_profiles},
    },
    feedback::entities::Feedback,
    profile::entities::Profile,
};

/// The admin dashboard's in-memory state.
///
/// Holds the full fetched profile and feedback sets plus the view settings,
/// and derives every projection from them. Rows observed via store events
/// between syncs land in the "new" buckets until the admin marks them
/// reviewed. All of this dies with the process.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    profiles: Vec<Profile>,
    new_profiles: Vec<Profile>,
    feedback: Vec<Feedback>,
    new_feedback: Vec<Feedback>,
    last_synced_at: Option<DateTime<Utc>>,
    pub mode: ViewMode,
    pub filters: HashMap<FilterField, String>,
    pub search: String,
    pub sort: SortState,
    pub matching: MatchingGroups,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            matching: MatchingGroups::new(),
            ..Default::default()
        }
    }

    /// Replaces the main buckets with a full pull of both tables, clears
    /// the "new" buckets, and records the sync time.
    pub fn apply_sync(
        &mut self,
        profiles: Vec<Profile>,
        feedback: Vec<Feedback>,
        synced_at: DateTime<Utc>,
    ) {
        self.profiles = profiles;
        self.feedback = feedback;
        self.new_profiles.clear();
        self.new_feedback.clear();
        self.last_synced_at = Some(synced_at);
    }

    /// Applies one store event by prepending to the matching "new" bucket.
    /// Events are not de-duplicated; a replayed event shows up twice.
    pub fn apply_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Inserted(StoreRecord::Profile(profile)) => {
                self.new_profiles.insert(0, profile);
            }
            StoreEvent::Inserted(StoreRecord::Feedback(feedback)) => {
                self.new_feedback.insert(0, feedback);
            }
        }
    }

    /// Merges the new buckets to the front of the main buckets and clears
    /// them.
    pub fn mark_reviewed(&mut self) {
        let mut merged = std::mem::take(&mut self.new_profiles);
        merged.append(&mut self.profiles);
        self.profiles = merged;

        let mut merged = std::mem::take(&mut self.new_feedback);
        merged.append(&mut self.feedback);
        self.feedback = merged;
    }

    /// Removes a profile from the view only; the store row is untouched.
    pub fn remove_profile(&mut self, id: Uuid) -> bool {
        let before = self.profiles.len() + self.new_profiles.len();
        self.profiles.retain(|profile| profile.id != id);
        self.new_profiles.retain(|profile| profile.id != id);
        self.matching.remove(&id);

        before != self.profiles.len() + self.new_profiles.len()
    }

    pub fn displayed(&self) -> Vec<&Profile> {
        displayed_profiles(
            &self.profiles,
            &self.new_profiles,
            self.mode,
            &self.filters,
            &self.search,
            self.sort,
        )
    }

    /// Projection with one-shot overrides, used when a request supplies
    /// explicit view settings without touching the stored ones.
    pub fn displayed_with(
        &self,
        mode: Option<ViewMode>,
        filters: Option<&HashMap<FilterField, String>>,
        search: Option<&str>,
        sort: Option<SortState>,
    ) -> Vec<&Profile> {
        displayed_profiles(
            &self.profiles,
            &self.new_profiles,
            mode.unwrap_or(self.mode),
            filters.unwrap_or(&self.filters),
            search.unwrap_or(&self.search),
            sort.unwrap_or(self.sort),
        )
    }

    pub fn meal_times(&self) -> Vec<DayAggregate> {
        build_meal_times(&self.profiles, &self.matching)
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.sort.select(key);
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn new_profiles(&self) -> &[Profile] {
        &self.new_profiles
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn new_feedback(&self) -> &[Feedback] {
        &self.new_feedback
    }

    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::ProfileConfig;

    fn profile(name: &str) -> Profile {
        Profile::new(ProfileConfig {
            name: name.to_string(),
            email: format!("{}@brandeis.edu", name.to_lowercase()),
            phone: None,
            majors: vec!["CS".to_string()],
            class_level: "SENIOR".to_string(),
            interests: Vec::new(),
            personality_type: None,
            humor_type: None,
            conversation_type: None,
            planner_type: None,
            hp_house: None,
            match_preference: None,
            housing_status: None,
            roommate_gender_preference: None,
            cleanliness_level: None,
            housing_time_period: None,
            housing_number: None,
            meal_plan: false,
            guest_swipe: false,
            dining_locations: Vec::new(),
            meal_times: serde_json::json!({}),
        })
    }

    #[test]
    fn events_prepend_in_arrival_order() {
        let mut view = DashboardView::new();

        view.apply_event(StoreEvent::profile_inserted(profile("First")));
        view.apply_event(StoreEvent::profile_inserted(profile("Second")));

        let names: Vec<&str> = view.new_profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn replayed_event_is_not_deduplicated() {
        let mut view = DashboardView::new();
        let p = profile("Dup");

        view.apply_event(StoreEvent::profile_inserted(p.clone()));
        view.apply_event(StoreEvent::profile_inserted(p));

        assert_eq!(view.new_profiles().len(), 2);
    }

    #[test]
    fn mark_reviewed_merges_to_front_and_clears() {
        let mut view = DashboardView::new();
        view.apply_sync(vec![profile("Old")], Vec::new(), Utc::now());
        view.apply_event(StoreEvent::profile_inserted(profile("New")));

        view.mark_reviewed();

        let names: Vec<&str> = view.profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["New", "Old"]);
        assert!(view.new_profiles().is_empty());
    }

    #[test]
    fn sync_replaces_buckets_and_clears_new() {
        let mut view = DashboardView::new();
        view.apply_event(StoreEvent::profile_inserted(profile("Pending")));
        view.apply_event(StoreEvent::feedback_inserted(Feedback::new(
            "note".to_string(),
        )));

        let synced_at = Utc::now();
        view.apply_sync(vec![profile("Synced")], Vec::new(), synced_at);

        assert_eq!(view.profiles().len(), 1);
        assert!(view.new_profiles().is_empty());
        assert!(view.new_feedback().is_empty());
        assert_eq!(view.last_synced_at(), Some(synced_at));
    }

    #[test]
    fn remove_profile_is_view_local() {
        let mut view = DashboardView::new();
        let keep = profile("Keep");
        let drop = profile("Drop");
        let drop_id = drop.id;
        view.apply_sync(vec![keep, drop], Vec::new(), Utc::now());
        view.matching.assign(drop_id, "2");

        assert!(view.remove_profile(drop_id));
        assert!(!view.remove_profile(drop_id));

        assert_eq!(view.profiles().len(), 1);
        assert_eq!(view.matching.group_of(&drop_id), 0);
    }
}
