//! Helpers for list screens: search and column sorting
use std::cmp::Ordering;

/// Types that can be matched against a free-text filter
pub trait Searchable {
    /// True when the record matches the search text (already lowercased)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be sorted by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the given column
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by the search text, case-insensitive. An empty filter
/// keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Chemise", amount: 1500.0 },
            Row { name: "Drap", amount: 800.0 },
            Row { name: "Pantalon", amount: 2000.0 },
        ]
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "amount", true);
        assert_eq!(items[0].name, "Drap");
        sort_list(&mut items, "amount", false);
        assert_eq!(items[0].name, "Pantalon");
    }

    #[test]
    fn test_filter_list_case_insensitive() {
        assert_eq!(filter_list(rows(), "CHEM").len(), 1);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        assert_eq!(filter_list(rows(), "xyz").len(), 0);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("net", "net", true), " ▲");
        assert_eq!(get_sort_indicator("net", "net", false), " ▼");
        assert_eq!(get_sort_indicator("net", "date", true), " ⇅");
    }
}
