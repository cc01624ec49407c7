use crate::core::scenarios::{
    comparison_scenarios, Practice, COMMON_PITFALLS, RECOMMENDED_PRACTICES, REAL_WORLD_EXAMPLE,
};
use crate::domain::model::ComparisonScenario;
use serde::Serialize;

pub const COLUMNS: [&str; 4] = [
    "Scenario",
    "Ternary (?:)",
    "Logical AND (&&)",
    "Double Negation (!!)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub title: &'static str,
    pub intro: &'static str,
    pub columns: [&'static str; 4],
    pub scenarios: &'static [ComparisonScenario],
    pub recommended: &'static [Practice],
    pub pitfalls: &'static [Practice],
    pub example: &'static str,
}

pub fn build() -> ComparisonView {
    ComparisonView {
        title: "JavaScript Logical Operators Demo",
        intro: "A comprehensive guide to understanding the practical usage of ternary operators (?:), \
                logical AND (&&), and double negation (!!) in React applications.",
        columns: COLUMNS,
        scenarios: comparison_scenarios(),
        recommended: &RECOMMENDED_PRACTICES,
        pitfalls: &COMMON_PITFALLS,
        example: REAL_WORLD_EXAMPLE,
    }
}
