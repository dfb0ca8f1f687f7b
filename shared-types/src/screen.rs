use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Logical view of the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Listing,
    Details,
    Management,
    Dashboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_serialization() {
        let json = serde_json::to_string(&Screen::Management).unwrap();
        assert_eq!(json, "\"management\"");

        let deserialized: Screen = serde_json::from_str("\"listing\"").unwrap();
        assert_eq!(deserialized, Screen::Listing);
    }
}
