use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::entities::Profile;

/// Which base set the profile table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    All,
    New,
    Filtered,
}

impl FromStr for ViewMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ViewMode::All),
            "new" => Ok(ViewMode::New),
            "filtered" => Ok(ViewMode::Filtered),
            _ => Err(()),
        }
    }
}

/// Scalar profile fields the admin can filter on by exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    ClassLevel,
    PersonalityType,
    HumorType,
    ConversationType,
    PlannerType,
    HpHouse,
    MatchPreference,
    HousingStatus,
    RoommateGenderPreference,
    CleanlinessLevel,
    HousingTimePeriod,
    MealPlan,
    GuestSwipe,
}

impl FromStr for FilterField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class_level" => Ok(FilterField::ClassLevel),
            "personality_type" => Ok(FilterField::PersonalityType),
            "humor_type" => Ok(FilterField::HumorType),
            "conversation_type" => Ok(FilterField::ConversationType),
            "planner_type" => Ok(FilterField::PlannerType),
            "hp_house" => Ok(FilterField::HpHouse),
            "match_preference" => Ok(FilterField::MatchPreference),
            "housing_status" => Ok(FilterField::HousingStatus),
            "roommate_gender_preference" => Ok(FilterField::RoommateGenderPreference),
            "cleanliness_level" => Ok(FilterField::CleanlinessLevel),
            "housing_time_period" => Ok(FilterField::HousingTimePeriod),
            "meal_plan" => Ok(FilterField::MealPlan),
            "guest_swipe" => Ok(FilterField::GuestSwipe),
            _ => Err(()),
        }
    }
}

/// Sort keys for the profile table. String fields order lexicographically,
/// set-valued fields by length, timestamps chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Email,
    ClassLevel,
    Majors,
    Interests,
    DiningLocations,
    CreatedAt,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            "class_level" => Ok(SortKey::ClassLevel),
            "majors" => Ok(SortKey::Majors),
            "interests" => Ok(SortKey::Interests),
            "dining_locations" => Ok(SortKey::DiningLocations),
            "created_at" => Ok(SortKey::CreatedAt),
            _ => Err(()),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Selecting the active key again toggles direction; selecting another
    /// key resets to ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }
}

/// The displayed-profile projection.
///
/// Pure and deterministic in its inputs: the source slices are never
/// mutated, and ties keep their incoming order (stable sort).
pub fn displayed_profiles<'a>(
    profiles: &'a [Profile],
    new_profiles: &'a [Profile],
    mode: ViewMode,
    filters: &HashMap<FilterField, String>,
    search: &str,
    sort: SortState,
) -> Vec<&'a Profile> {
    let mut displayed: Vec<&Profile> = match mode {
        ViewMode::All => profiles.iter().collect(),
        ViewMode::New => new_profiles.iter().collect(),
        ViewMode::Filtered => profiles
            .iter()
            .filter(|profile| {
                filters
                    .iter()
                    .all(|(field, value)| field_value(profile, *field).as_deref() == Some(value))
            })
            .collect(),
    };

    let query = search.trim().to_lowercase();
    if !query.is_empty() {
        displayed.retain(|profile| matches_search(profile, &query));
    }

    displayed.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    displayed
}

fn field_value(profile: &Profile, field: FilterField) -> Option<String> {
    match field {
        FilterField::ClassLevel => Some(profile.class_level.clone()),
        FilterField::PersonalityType => profile.personality_type.clone(),
        FilterField::HumorType => profile.humor_type.clone(),
        FilterField::ConversationType => profile.conversation_type.clone(),
        FilterField::PlannerType => profile.planner_type.clone(),
        FilterField::HpHouse => profile.hp_house.clone(),
        FilterField::MatchPreference => profile.match_preference.clone(),
        FilterField::HousingStatus => profile.housing_status.clone(),
        FilterField::RoommateGenderPreference => profile.roommate_gender_preference.clone(),
        FilterField::CleanlinessLevel => profile.cleanliness_level.clone(),
        FilterField::HousingTimePeriod => profile.housing_time_period.clone(),
        FilterField::MealPlan => Some(profile.meal_plan.to_string()),
        FilterField::GuestSwipe => Some(profile.guest_swipe.to_string()),
    }
}

/// Case-insensitive substring match across contact, academic, interest, and
/// housing fields. A profile passes if ANY field matches.
fn matches_search(profile: &Profile, query: &str) -> bool {
    let mut haystacks: Vec<&str> = vec![&profile.name, &profile.email];

    if let Some(phone) = &profile.phone {
        haystacks.push(phone);
    }
    haystacks.extend(profile.majors.iter().map(String::as_str));
    haystacks.extend(profile.interests.iter().map(String::as_str));
    for housing in [
        &profile.housing_status,
        &profile.roommate_gender_preference,
        &profile.cleanliness_level,
        &profile.housing_time_period,
    ]
    .into_iter()
    .flatten()
    {
        haystacks.push(housing);
    }

    haystacks
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

fn compare_by_key(a: &Profile, b: &Profile, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_strings(&a.name, &b.name),
        SortKey::Email => compare_strings(&a.email, &b.email),
        SortKey::ClassLevel => compare_strings(&a.class_level, &b.class_level),
        SortKey::Majors => a.majors.len().cmp(&b.majors.len()),
        SortKey::Interests => a.interests.len().cmp(&b.interests.len()),
        SortKey::DiningLocations => a.dining_locations.len().cmp(&b.dining_locations.len()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

fn compare_strings(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::{Profile, ProfileConfig};

    fn profile(name: &str, email: &str, majors: &[&str]) -> Profile {
        Profile::new(ProfileConfig {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            majors: majors.iter().map(|m| m.to_string()).collect(),
            class_level: "SOPHOMORE".to_string(),
            interests: vec!["hiking".to_string()],
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
            meal_plan: true,
            guest_swipe: false,
            dining_locations: vec!["Sherman".to_string()],
            meal_times: serde_json::json!({}),
        })
    }

    fn sort_by(key: SortKey, direction: SortDirection) -> SortState {
        SortState { key, direction }
    }

    #[test]
    fn projection_is_deterministic() {
        let profiles = vec![
            profile("Casey", "casey@brandeis.edu", &["CS"]),
            profile("Alex", "alex@brandeis.edu", &["Bio", "Math"]),
            profile("Blair", "blair@brandeis.edu", &["Art"]),
        ];
        let filters = HashMap::new();

        let first = displayed_profiles(
            &profiles,
            &[],
            ViewMode::All,
            &filters,
            "",
            sort_by(SortKey::Name, SortDirection::Asc),
        );
        let second = displayed_profiles(
            &profiles,
            &[],
            ViewMode::All,
            &filters,
            "",
            sort_by(SortKey::Name, SortDirection::Asc),
        );

        let first_names: Vec<&str> = first.iter().map(|p| p.name.as_str()).collect();
        let second_names: Vec<&str> = second.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(first_names, second_names);
        assert_eq!(first_names, vec!["Alex", "Blair", "Casey"]);
    }

    #[test]
    fn string_sort_desc_reverses_asc() {
        let profiles = vec![
            profile("Casey", "casey@brandeis.edu", &["CS"]),
            profile("Alex", "alex@brandeis.edu", &["Bio"]),
            profile("Blair", "blair@brandeis.edu", &["Art"]),
        ];
        let filters = HashMap::new();

        let asc: Vec<&str> = displayed_profiles(
            &profiles,
            &[],
            ViewMode::All,
            &filters,
            "",
            sort_by(SortKey::Name, SortDirection::Asc),
        )
        .iter()
        .map(|p| p.name.as_str())
        .collect();
        let mut desc: Vec<&str> = displayed_profiles(
            &profiles,
            &[],
            ViewMode::All,
            &filters,
            "",
            sort_by(SortKey::Name, SortDirection::Desc),
        )
        .iter()
        .map(|p| p.name.as_str())
        .collect();

        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn set_valued_sort_orders_by_length() {
        let profiles = vec![
            profile("Two", "two@brandeis.edu", &["CS", "Math"]),
            profile("One", "one@brandeis.edu", &["CS"]),
        ];
        let filters = HashMap::new();

        let displayed = displayed_profiles(
            &profiles,
            &[],
            ViewMode::All,
            &filters,
            "",
            sort_by(SortKey::Majors, SortDirection::Asc),
        );

        assert_eq!(displayed[0].name, "One");
        assert_eq!(displayed[1].name, "Two");
    }

    #[test]
    fn filtered_mode_applies_every_entry_exactly() {
        let mut senior = profile("Sam", "sam@brandeis.edu", &["CS"]);
        senior.class_level = "SENIOR".to_string();
        let profiles = vec![senior, profile("Jo", "jo@brandeis.edu", &["CS"])];

        let mut filters = HashMap::new();
        filters.insert(FilterField::ClassLevel, "SENIOR".to_string());

        let displayed = displayed_profiles(
            &profiles,
            &[],
            ViewMode::Filtered,
            &filters,
            "",
            SortState::default(),
        );

        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].name, "Sam");
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let profiles = vec![
            profile("Sam", "sam@brandeis.edu", &["Computer Science"]),
            profile("Jo", "jo@brandeis.edu", &["History"]),
        ];
        let filters = HashMap::new();

        let displayed = displayed_profiles(
            &profiles,
            &[],
            ViewMode::All,
            &filters,
            "computer",
            SortState::default(),
        );

        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].name, "Sam");
    }

    #[test]
    fn new_mode_shows_only_the_new_bucket() {
        let profiles = vec![profile("Old", "old@brandeis.edu", &["CS"])];
        let new_profiles = vec![profile("Fresh", "fresh@brandeis.edu", &["Art"])];
        let filters = HashMap::new();

        let displayed = displayed_profiles(
            &profiles,
            &new_profiles,
            ViewMode::New,
            &filters,
            "",
            SortState::default(),
        );

        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].name, "Fresh");
    }

    #[test]
    fn sort_select_toggles_and_resets() {
        let mut sort = SortState {
            key: SortKey::Name,
            direction: SortDirection::Asc,
        };

        sort.select(SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.select(SortKey::Email);
        assert_eq!(sort.key, SortKey::Email);
        assert_eq!(sort.direction, SortDirection::Asc);
    }
}
