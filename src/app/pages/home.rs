use crate::domain::model::{DemoCategory, DemoLink};
use serde::Serialize;

pub const DEMO_LINKS: [DemoLink; 3] = [
    DemoLink {
        path: "/http/axios",
        title: "HTTP Status Explorer",
        description: "Interactive visualization of HTTP status codes and responses",
        category: DemoCategory::Http,
        icon: "🌐",
    },
    DemoLink {
        path: "/ternary/SimpleTernary",
        title: "Simple Ternary Examples",
        description: "Demonstrating basic conditional rendering with ternary operators",
        category: DemoCategory::Syntax,
        icon: "⁉️",
    },
    DemoLink {
        path: "/ternary/ternaryOrAnd",
        title: "Ternary vs Logical Operators",
        description: "Comparing ternary, AND, and OR operators for conditional logic",
        category: DemoCategory::Syntax,
        icon: "🔀",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub links: Vec<DemoLink>,
    pub footer: &'static str,
}

pub fn build() -> HomeView {
    HomeView {
        title: "React Sandbox",
        tagline: "A collection of interactive examples and patterns to explore React concepts, \
                  syntax variations, and component implementations.",
        links: DEMO_LINKS.to_vec(),
        footer: "Built with React and TypeScript • Styled with Tailwind CSS",
    }
}
