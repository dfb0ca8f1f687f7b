use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fixed option lists backing the add-lead form and the team metrics
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[ts(export)]
pub struct Catalog {
    #[serde(default = "default_sales_team")]
    pub sales_team: Vec<String>,
    #[serde(default = "default_car_models")]
    pub car_models: Vec<String>,
    #[serde(default = "default_budget_ranges")]
    pub budget_ranges: Vec<String>,
    #[serde(default = "default_timelines")]
    pub timelines: Vec<String>,
}

fn default_sales_team() -> Vec<String> {
    vec![
        "Priya Singh".to_string(),
        "Vikash Kumar".to_string(),
        "Amit Sharma".to_string(),
        "Neha Gupta".to_string(),
    ]
}

fn default_car_models() -> Vec<String> {
    vec![
        "Maruti Swift".to_string(),
        "Maruti Baleno".to_string(),
        "Hyundai Creta".to_string(),
        "Hyundai i20".to_string(),
        "Honda City".to_string(),
        "Honda Amaze".to_string(),
        "Tata Nexon".to_string(),
        "Tata Harrier".to_string(),
        "Mahindra XUV700".to_string(),
        "BMW X3".to_string(),
        "Mercedes C-Class".to_string(),
        "Audi A4".to_string(),
    ]
}

fn default_budget_ranges() -> Vec<String> {
    vec![
        "₹3-5 Lakhs".to_string(),
        "₹5-8 Lakhs".to_string(),
        "₹8-12 Lakhs".to_string(),
        "₹12-15 Lakhs".to_string(),
        "₹15-20 Lakhs".to_string(),
        "₹20-25 Lakhs".to_string(),
        "₹25-30 Lakhs".to_string(),
        "₹30+ Lakhs".to_string(),
    ]
}

fn default_timelines() -> Vec<String> {
    vec![
        "Immediately".to_string(),
        "2 weeks".to_string(),
        "1 month".to_string(),
        "2-3 months".to_string(),
        "3-6 months".to_string(),
        "6+ months".to_string(),
        "Undecided".to_string(),
    ]
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            sales_team: default_sales_team(),
            car_models: default_car_models(),
            budget_ranges: default_budget_ranges(),
            timelines: default_timelines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_defaults() {
        let catalog = Catalog::default();
        assert_eq!(catalog.sales_team.len(), 4);
        assert_eq!(catalog.sales_team[0], "Priya Singh");
        assert_eq!(catalog.car_models.len(), 12);
        assert_eq!(catalog.budget_ranges.len(), 8);
        assert_eq!(catalog.timelines.len(), 7);
    }

    #[test]
    fn test_catalog_partial_override() {
        let catalog: Catalog = serde_json::from_str("{\"sales_team\":[\"Asha Verma\"]}").unwrap();
        assert_eq!(catalog.sales_team, vec!["Asha Verma".to_string()]);
        assert_eq!(catalog.timelines.len(), 7);
    }
}
