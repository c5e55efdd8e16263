use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::Profile};

/// Serializes the profile set to comma-delimited UTF-8 text.
///
/// The header is the union of field names observed across all profiles, not
/// a fixed schema. Cells: empty for null, semicolon-joined quoted text for
/// arrays, JSON text for nested objects, quote-escaped text for strings,
/// literal form for booleans and numbers. The standard `csv` writer cannot
/// express this per-type quoting contract, hence the hand-rolled cells.
///
/// An empty profile set is an error: the caller surfaces it instead of
/// producing an empty file.
pub fn export_profiles_csv(profiles: &[Profile]) -> Result<String, CoreError> {
    if profiles.is_empty() {
        return Err(CoreError::EmptyExport);
    }

    let rows: Vec<serde_json::Map<String, Value>> = profiles
        .iter()
        .map(|profile| {
            match serde_json::to_value(profile) {
                Ok(Value::Object(map)) => Ok(map),
                // Profile always serializes to an object; anything else is a bug.
                _ => Err(CoreError::InternalServerError),
            }
        })
        .collect::<Result<_, _>>()?;

    let mut headers: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for row in &rows {
        for key in row.keys() {
            if seen.insert(key.clone()) {
                headers.push(key.clone());
            }
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|header| quoted(header))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in &rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| format_cell(row.get(header)))
            .collect();
        lines.push(cells.join(","));
    }

    Ok(lines.join("\n"))
}

/// Export filename with the export date embedded.
pub fn export_filename(date: NaiveDate) -> String {
    format!("tablemates-profiles-{}.csv", date.format("%Y-%m-%d"))
}

fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(";");
            quoted(&joined)
        }
        Some(object @ Value::Object(_)) => quoted(&object.to_string()),
        Some(Value::String(s)) => quoted(s),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
    }
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::ProfileConfig;

    fn profile(name: &str, majors: &[&str]) -> Profile {
        Profile::new(ProfileConfig {
            name: name.to_string(),
            email: "jo@brandeis.edu".to_string(),
            phone: None,
            majors: majors.iter().map(|m| m.to_string()).collect(),
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
            housing_number: Some(2),
            meal_plan: true,
            guest_swipe: false,
            dining_locations: Vec::new(),
            meal_times: serde_json::json!({"monday": {"lunch": ["Noon"]}}),
        })
    }

    #[test]
    fn joins_arrays_and_doubles_embedded_quotes() {
        let csv = export_profiles_csv(&[profile("Jo \"J\" Lee", &["CS", "Art"])]).unwrap();

        assert!(csv.contains("\"CS;Art\""));
        assert!(csv.contains("\"Jo \"\"J\"\" Lee\""));
    }

    #[test]
    fn nested_objects_serialize_as_quoted_json() {
        let csv = export_profiles_csv(&[profile("Jo", &["CS"])]).unwrap();

        assert!(csv.contains("\"{\"\"monday\"\":{\"\"lunch\"\":[\"\"Noon\"\"]}}\""));
    }

    #[test]
    fn primitives_stay_literal_and_nulls_go_empty() {
        let csv = export_profiles_csv(&[profile("Jo", &["CS"])]).unwrap();
        let header_line = csv.lines().next().unwrap();
        let row = csv.lines().nth(1).unwrap();

        let meal_plan_index = header_line
            .split(',')
            .position(|h| h == "\"meal_plan\"")
            .unwrap();
        let phone_index = header_line
            .split(',')
            .position(|h| h == "\"phone\"")
            .unwrap();
        let housing_number_index = header_line
            .split(',')
            .position(|h| h == "\"housing_number\"")
            .unwrap();

        let cells = split_row(row);
        assert_eq!(cells[meal_plan_index], "true");
        assert_eq!(cells[phone_index], "");
        assert_eq!(cells[housing_number_index], "2");
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(export_profiles_csv(&[]), Err(CoreError::EmptyExport));
    }

    // Split on commas outside quoted cells; enough for the fixtures above.
    fn split_row(row: &str) -> Vec<String> {
        let mut cells = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        for c in row.chars() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    current.push(c);
                }
                ',' if !in_quotes => {
                    cells.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }
        cells.push(current);
        cells
    }
}
