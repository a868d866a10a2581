//! What an explicit search (button or Enter) does with the geocoder's answer.

use crate::models::GeocodeResult;

pub const NO_RESULTS_NOTICE: &str = "No results found. Please try a different search term.";
pub const SEARCH_FAILED_NOTICE: &str = "Search failed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResolution {
    /// Nothing matched; tell the user.
    NoMatch,
    /// Exactly one match; apply it straight away.
    Single(GeocodeResult),
    /// Several matches; let the user pick one.
    Choices(Vec<GeocodeResult>),
}

impl SearchResolution {
    pub fn from_results(mut results: Vec<GeocodeResult>) -> Self {
        match results.len() {
            0 => SearchResolution::NoMatch,
            1 => SearchResolution::Single(results.remove(0)),
            _ => SearchResolution::Choices(results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::decode_geocode_response;
    use crate::models::Coordinate;
    use crate::selection::{Phase, SelectionController};

    #[test]
    fn single_match_is_applied_and_fetched() {
        let body = r#"{"results": [{"display_name": "Chiang Mai, Chiang Mai, Thailand", "lat": 18.7883, "lng": 98.9853}]}"#;
        let results = decode_geocode_response(200, body).unwrap();

        let chosen = match SearchResolution::from_results(results) {
            SearchResolution::Single(result) => result,
            other => panic!("expected auto-apply, got {:?}", other),
        };
        let mut controller = SelectionController::new();
        let ticket = controller.select_search_result(&chosen).unwrap();

        assert_eq!(ticket.coordinate, Coordinate::new(18.7883, 98.9853));
        assert_eq!(controller.state().marker, Some(ticket.coordinate));
        assert_eq!(controller.phase(), Phase::Loading);
    }

    #[test]
    fn several_matches_are_offered_in_backend_order() {
        let body = r#"{"results": [
            {"display_name": "Bang Rak, Bangkok, Thailand", "lat": 13.73, "lng": 100.52},
            {"display_name": "Bangkok, Bangkok, Thailand", "lat": 13.75, "lng": 100.50}
        ]}"#;
        match SearchResolution::from_results(decode_geocode_response(200, body).unwrap()) {
            SearchResolution::Choices(choices) => {
                assert_eq!(choices[0].display_name, "Bang Rak, Bangkok, Thailand");
                assert_eq!(choices.len(), 2);
            }
            other => panic!("expected a choice list, got {:?}", other),
        }
    }

    #[test]
    fn no_match_resolution() {
        assert_eq!(SearchResolution::from_results(Vec::new()), SearchResolution::NoMatch);
    }
}
