use crate::core::scenarios::{unread_message_cases, UnreadMessageCase};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleTernaryView {
    pub title: &'static str,
    pub cases: Vec<UnreadMessageCase>,
}

pub fn build() -> SimpleTernaryView {
    SimpleTernaryView {
        title: "Differences between ternary and && operator",
        cases: unread_message_cases(),
    }
}
