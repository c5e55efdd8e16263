use std::collections::HashMap;

use tablemates_core::domain::dashboard::{FilterField, SortDirection, SortKey, ViewMode};

/// Parsed exact-match filter entries
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub entries: Vec<(FilterField, String)>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_map(&self) -> HashMap<FilterField, String> {
        self.entries.iter().cloned().collect()
    }
}

/// Sort specification, parsed from "key" or "-key"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    fn from_string(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(stripped) = s.strip_prefix('-') {
            stripped.parse::<SortKey>().ok().map(|key| SortSpec {
                key,
                direction: SortDirection::Desc,
            })
        } else {
            s.parse::<SortKey>().ok().map(|key| SortSpec {
                key,
                direction: SortDirection::Asc,
            })
        }
    }
}

/// One-shot view settings carried on a request (mode, filters, search,
/// sort). Anything absent falls back to the dashboard's stored settings.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub mode: Option<ViewMode>,
    pub filter: FilterParams,
    pub search: Option<String>,
    pub sort: Option<SortSpec>,
}

impl ViewQuery {
    /// Parse from query string map
    /// Handles formats like:
    /// - filter[field]=value (exact match)
    /// - mode=all | new | filtered
    /// - search=free text
    /// - sort=name or sort=-name
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut parsed = ViewQuery::default();

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                if let Some(end_bracket) = filter_key.find(']') {
                    let field = &filter_key[..end_bracket];
                    if let Ok(field) = field.parse::<FilterField>() {
                        parsed.entries_push(field, value.clone());
                    }
                }
            } else if key == "mode" {
                parsed.mode = value.parse::<ViewMode>().ok();
            } else if key == "search" {
                parsed.search = Some(value.clone());
            } else if key == "sort" {
                parsed.sort = SortSpec::from_string(value);
            }
        }

        parsed
    }

    fn entries_push(&mut self, field: FilterField, value: String) {
        self.filter.entries.push((field, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse_exact_match() {
        let mut map = HashMap::new();
        map.insert("filter[class_level]".to_string(), "SENIOR".to_string());
        let params = ViewQuery::from_query_map(&map);
        assert_eq!(params.filter.entries.len(), 1);
        assert_eq!(params.filter.entries[0].0, FilterField::ClassLevel);
        assert_eq!(params.filter.entries[0].1, "SENIOR");
    }

    #[test]
    fn test_unknown_filter_field_is_dropped() {
        let mut map = HashMap::new();
        map.insert("filter[shoe_size]".to_string(), "11".to_string());
        let params = ViewQuery::from_query_map(&map);
        assert!(params.filter.is_empty());
    }

    #[test]
    fn test_sort_parse() {
        let mut map = HashMap::new();
        map.insert("sort".to_string(), "-name".to_string());
        let params = ViewQuery::from_query_map(&map);
        let sort = params.sort.unwrap();
        assert_eq!(sort.key, SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_mode_and_search_parse() {
        let mut map = HashMap::new();
        map.insert("mode".to_string(), "new".to_string());
        map.insert("search".to_string(), "computer".to_string());
        let params = ViewQuery::from_query_map(&map);
        assert_eq!(params.mode, Some(ViewMode::New));
        assert_eq!(params.search.as_deref(), Some("computer"));
    }
}
