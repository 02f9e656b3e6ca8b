/// Cities the location search knows about, in display order.
pub const ROSTER: &[&str] = &[
    "New York, US",
    "London, GB",
    "Tokyo, JP",
    "Paris, FR",
    "Sydney, AU",
    "Berlin, DE",
    "Toronto, CA",
    "Mumbai, IN",
];

pub const MAX_RESULTS: usize = 5;

/// Case-insensitive substring search over `roster`, keeping roster order and
/// returning at most [`MAX_RESULTS`] names.
pub fn search_roster(roster: &[&str], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();

    roster
        .iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .map(|city| city.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lon_matches_london_only() {
        assert_eq!(search_roster(ROSTER, "lon"), vec!["London, GB"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(search_roster(ROSTER, "TOKYO"), vec!["Tokyo, JP"]);
        assert_eq!(search_roster(ROSTER, ", de"), vec!["Berlin, DE"]);
    }

    #[test]
    fn results_keep_roster_order() {
        let results = search_roster(ROSTER, "y");
        assert_eq!(results, vec!["New York, US", "Tokyo, JP", "Sydney, AU"]);
    }

    #[test]
    fn results_are_capped() {
        let results = search_roster(ROSTER, "");
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0], "New York, US");
        assert_eq!(results[4], "Sydney, AU");
    }

    #[test]
    fn no_match() {
        assert!(search_roster(ROSTER, "atlantis").is_empty());
    }
}
