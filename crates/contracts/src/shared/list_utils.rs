/// Generic helpers for filtering list data

/// Trait for types that support free-text search
pub trait Searchable {
    /// Whether the record matches the search query (case-insensitive)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Filter a list by a search query; a blank query passes everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Case-insensitive substring check against an optional field
pub fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Searchable for Named {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    #[test]
    fn test_filter_list() {
        let items = vec![Named("Oil filter"), Named("Brake pads"), Named("Air filter")];
        let filtered = filter_list(items, "filter");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_blank_filter_passes_all() {
        let items = vec![Named("Oil filter"), Named("Brake pads")];
        assert_eq!(filter_list(items, "  ").len(), 2);
    }

    #[test]
    fn test_field_contains() {
        assert!(field_contains(Some("NGK Iridium"), "ngk"));
        assert!(field_contains(Some("ngk iridium"), "NGK"));
        assert!(!field_contains(None, "ngk"));
    }
}
