use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{dashboard::matching::MatchingGroups, profile::entities::Profile};

pub const DAY_ORDER: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const MEAL_ORDER: [&str; 4] = ["breakfast", "lunch", "dinner", "late_night"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub matching_group: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotAggregate {
    pub label: String,
    pub user_count: usize,
    pub users: Vec<SlotUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealAggregate {
    pub meal: String,
    pub user_count: usize,
    pub time_slots: Vec<SlotAggregate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayAggregate {
    pub day: String,
    pub user_count: usize,
    pub meals: Vec<MealAggregate>,
}

type ParsedMealTimes = HashMap<String, HashMap<String, Vec<String>>>;

fn parse_meal_times(value: &serde_json::Value) -> Option<ParsedMealTimes> {
    match value {
        // Some rows carry the availability as a JSON string rather than a
        // nested object; accept both.
        serde_json::Value::String(raw) => serde_json::from_str(raw).ok(),
        other => serde_json::from_value(other.clone()).ok(),
    }
}

/// Builds the day → meal → time-slot aggregation tree from one scan of
/// every profile's availability.
///
/// A profile counts at most once per day, once per meal, and once per slot;
/// the same student showing up in two dinner slots counts once for dinner
/// and twice across the slots. Profiles whose availability fails to parse
/// are skipped without aborting the aggregation.
pub fn build_meal_times(profiles: &[Profile], groups: &MatchingGroups) -> Vec<DayAggregate> {
    let mut days: Vec<DayAggregate> = Vec::new();

    for profile in profiles {
        let Some(parsed) = parse_meal_times(&profile.meal_times) else {
            tracing::debug!(profile_id = %profile.id, "skipping profile with unparseable meal availability");
            continue;
        };

        for (day_name, meals) in &parsed {
            let mut counted_day = false;

            for (meal_name, slots) in meals {
                let mut counted_meal = false;
                let mut seen_slots: HashSet<&str> = HashSet::new();

                for label in slots {
                    if !seen_slots.insert(label.as_str()) {
                        continue;
                    }

                    let day_index = find_or_insert_day(&mut days, day_name);
                    let meal_index = find_or_insert_meal(&mut days[day_index].meals, meal_name);
                    let slot_index = find_or_insert_slot(
                        &mut days[day_index].meals[meal_index].time_slots,
                        label,
                    );

                    days[day_index].meals[meal_index].time_slots[slot_index]
                        .users
                        .push(SlotUser {
                            id: profile.id,
                            name: profile.name.clone(),
                            email: profile.email.clone(),
                            matching_group: groups.group_of(&profile.id),
                        });

                    if !counted_meal {
                        days[day_index].meals[meal_index].user_count += 1;
                        counted_meal = true;
                    }
                    if !counted_day {
                        days[day_index].user_count += 1;
                        counted_day = true;
                    }
                }
            }
        }
    }

    days.sort_by(|a, b| rank(&DAY_ORDER, &a.day).cmp(&rank(&DAY_ORDER, &b.day)));
    for day in &mut days {
        day.meals
            .sort_by(|a, b| rank(&MEAL_ORDER, &a.meal).cmp(&rank(&MEAL_ORDER, &b.meal)));
        for meal in &mut day.meals {
            for slot in &mut meal.time_slots {
                slot.users.sort_by(slot_user_order);
                slot.user_count = slot.users.len();
            }
        }
    }

    days
}

fn find_or_insert_day(days: &mut Vec<DayAggregate>, name: &str) -> usize {
    match days.iter().position(|d| d.day == name) {
        Some(index) => index,
        None => {
            days.push(DayAggregate {
                day: name.to_string(),
                user_count: 0,
                meals: Vec::new(),
            });
            days.len() - 1
        }
    }
}

fn find_or_insert_meal(meals: &mut Vec<MealAggregate>, name: &str) -> usize {
    match meals.iter().position(|m| m.meal == name) {
        Some(index) => index,
        None => {
            meals.push(MealAggregate {
                meal: name.to_string(),
                user_count: 0,
                time_slots: Vec::new(),
            });
            meals.len() - 1
        }
    }
}

fn find_or_insert_slot(slots: &mut Vec<SlotAggregate>, label: &str) -> usize {
    match slots.iter().position(|s| s.label == label) {
        Some(index) => index,
        None => {
            slots.push(SlotAggregate {
                label: label.to_string(),
                user_count: 0,
                users: Vec::new(),
            });
            slots.len() - 1
        }
    }
}

fn rank(order: &[&str], name: &str) -> (usize, String) {
    let position = order
        .iter()
        .position(|known| *known == name)
        .unwrap_or(order.len());
    (position, name.to_string())
}

/// Ungrouped users sort after all grouped users; among grouped users lower
/// group number first; ties break by name.
fn slot_user_order(a: &SlotUser, b: &SlotUser) -> Ordering {
    let group_key = |user: &SlotUser| {
        if user.matching_group == 0 {
            u32::MAX
        } else {
            user.matching_group
        }
    };

    group_key(a)
        .cmp(&group_key(b))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::{Profile, ProfileConfig};

    fn profile_with_times(name: &str, meal_times: serde_json::Value) -> Profile {
        Profile::new(ProfileConfig {
            name: name.to_string(),
            email: format!("{}@brandeis.edu", name.to_lowercase()),
            phone: None,
            majors: vec!["CS".to_string()],
            class_level: "JUNIOR".to_string(),
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
            meal_plan: true,
            guest_swipe: false,
            dining_locations: Vec::new(),
            meal_times,
        })
    }

    fn day<'a>(days: &'a [DayAggregate], name: &str) -> &'a DayAggregate {
        days.iter().find(|d| d.day == name).unwrap()
    }

    fn meal<'a>(day: &'a DayAggregate, name: &str) -> &'a MealAggregate {
        day.meals.iter().find(|m| m.meal == name).unwrap()
    }

    #[test]
    fn counts_once_per_level() {
        let a = profile_with_times(
            "A",
            serde_json::json!({"thursday": {"dinner": ["6:00-6:30 PM"]}}),
        );
        let b = profile_with_times(
            "B",
            serde_json::json!({
                "thursday": {"dinner": ["6:00-6:30 PM"], "lunch": ["12:00-12:30 PM"]}
            }),
        );

        let days = build_meal_times(&[a, b], &MatchingGroups::new());

        let thursday = day(&days, "thursday");
        assert_eq!(thursday.user_count, 2);
        assert_eq!(meal(thursday, "dinner").user_count, 2);
        assert_eq!(meal(thursday, "lunch").user_count, 1);

        let slot = meal(thursday, "dinner")
            .time_slots
            .iter()
            .find(|s| s.label == "6:00-6:30 PM")
            .unwrap();
        let mut names: Vec<&str> = slot.users.iter().map(|u| u.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn same_meal_two_slots_counts_meal_once() {
        let a = profile_with_times(
            "A",
            serde_json::json!({"monday": {"dinner": ["5:00-5:30 PM", "5:30-6:00 PM"]}}),
        );

        let days = build_meal_times(&[a], &MatchingGroups::new());

        let monday = day(&days, "monday");
        assert_eq!(monday.user_count, 1);
        let dinner = meal(monday, "dinner");
        assert_eq!(dinner.user_count, 1);
        assert_eq!(dinner.time_slots.len(), 2);
        assert!(dinner.time_slots.iter().all(|s| s.user_count == 1));
    }

    #[test]
    fn malformed_availability_is_skipped() {
        let good = profile_with_times("Good", serde_json::json!({"friday": {"lunch": ["Noon"]}}));
        let bad = profile_with_times("Bad", serde_json::json!(["not", "a", "schedule"]));
        let stringly = profile_with_times(
            "Stringly",
            serde_json::json!("{\"friday\": {\"lunch\": [\"Noon\"]}}"),
        );

        let days = build_meal_times(&[good, bad, stringly], &MatchingGroups::new());

        let friday = day(&days, "friday");
        assert_eq!(friday.user_count, 2);
    }

    #[test]
    fn slot_users_order_grouped_before_ungrouped() {
        let alice = profile_with_times(
            "Alice",
            serde_json::json!({"monday": {"lunch": ["Noon"]}}),
        );
        let bob = profile_with_times("Bob", serde_json::json!({"monday": {"lunch": ["Noon"]}}));
        let cara = profile_with_times("Cara", serde_json::json!({"monday": {"lunch": ["Noon"]}}));

        let mut groups = MatchingGroups::new();
        groups.assign(cara.id, "1");
        groups.assign(bob.id, "2");
        // Alice stays ungrouped.

        let days = build_meal_times(&[alice, bob, cara], &groups);
        let slot = &day(&days, "monday").meals[0].time_slots[0];

        let names: Vec<&str> = slot.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Cara", "Bob", "Alice"]);
    }

    #[test]
    fn days_and_meals_follow_week_order() {
        let a = profile_with_times(
            "A",
            serde_json::json!({
                "friday": {"dinner": ["6 PM"], "breakfast": ["8 AM"]},
                "monday": {"lunch": ["Noon"]}
            }),
        );

        let days = build_meal_times(&[a], &MatchingGroups::new());

        let day_names: Vec<&str> = days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(day_names, vec!["monday", "friday"]);
        let friday_meals: Vec<&str> = day(&days, "friday")
            .meals
            .iter()
            .map(|m| m.meal.as_str())
            .collect();
        assert_eq!(friday_meals, vec!["breakfast", "dinner"]);
    }
}
