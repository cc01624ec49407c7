use crate::app::pages::home::HomeView;
use crate::app::pages::http_explorer::ExplorerView;
use crate::app::pages::simple_ternary::SimpleTernaryView;
use crate::app::pages::ternary_or_and::ComparisonView;
use crate::app::pages::PageView;
use crate::domain::model::{FetchState, OutputFormat};
use crate::utils::error::Result;
use std::fmt::Write;

pub fn render(view: &PageView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

pub fn render_text(view: &PageView) -> String {
    match view {
        PageView::Home(home) => render_home(home),
        PageView::HttpExplorer(explorer) => render_explorer(explorer),
        PageView::SimpleTernary(simple) => render_simple_ternary(simple),
        PageView::TernaryOrAnd(comparison) => render_comparison(comparison),
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

/// 多行內容縮排後輸出
fn indented(out: &mut String, text: &str, indent: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "{}{}", indent, line);
    }
}

fn render_home(view: &HomeView) -> String {
    let mut out = String::new();
    heading(&mut out, view.title);
    let _ = writeln!(out, "{}", view.tagline);
    let _ = writeln!(out);

    for link in &view.links {
        let _ = writeln!(out, "{} {} [{}]", link.icon, link.title, link.category);
        let _ = writeln!(out, "   {}", link.description);
        let _ = writeln!(out, "   Explore example → {}", link.path);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", view.footer);
    out
}

fn render_explorer(view: &ExplorerView) -> String {
    let mut out = String::new();
    heading(&mut out, view.title);
    let _ = writeln!(out, "{}", view.subtitle);

    for group in &view.groups {
        section(&mut out, &group.title);

        for unit in &group.units {
            let _ = writeln!(out);
            match &unit.state {
                FetchState::Loading => {
                    let _ = writeln!(out, "[{}] {} … loading", unit.color, unit.title);
                }
                FetchState::Success(payload) => {
                    let _ = writeln!(out, "[{}] {} ● ok", unit.color, unit.title);
                    let _ = writeln!(out, "  Response:");
                    let pretty = serde_json::to_string_pretty(payload).unwrap_or_default();
                    indented(&mut out, &pretty, "    ");
                }
                FetchState::Error(err) => {
                    let _ = writeln!(out, "[{}] {} ● error", unit.color, unit.title);
                    let _ = writeln!(out, "  Error:");
                    let pretty = serde_json::to_string_pretty(err).unwrap_or_default();
                    indented(&mut out, &pretty, "    ");
                }
            }
            if let Some(note) = &unit.note {
                let _ = writeln!(out, "  {}", note);
            }
        }
    }

    out
}

fn render_simple_ternary(view: &SimpleTernaryView) -> String {
    let mut out = String::new();
    heading(&mut out, view.title);

    for case in &view.cases {
        section(&mut out, &case.heading);
        let _ = writeln!(out, "ternary : {}", case.ternary.as_deref().unwrap_or(""));
        let _ = writeln!(out, "!! + &&  {}", case.bang_and.as_deref().unwrap_or(""));
        let _ = writeln!(out, "&& only  {}", case.and_only.as_deref().unwrap_or(""));
    }

    out
}

fn render_comparison(view: &ComparisonView) -> String {
    let mut out = String::new();
    heading(&mut out, view.title);
    let _ = writeln!(out, "{}", view.intro);

    section(&mut out, "Operator Comparison");
    for scenario in view.scenarios {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}  `{}`", scenario.label, scenario.declaration);

        for (column, outcome) in view.columns[1..].iter().zip(&scenario.outcomes) {
            let mark = if outcome.is_good { "✓" } else { "⚠️" };
            let _ = writeln!(
                out,
                "  {:<22} {} {:<48} Result: {}",
                column,
                mark,
                outcome.expression,
                outcome.result.display_result()
            );
            if let Some(note) = &outcome.note {
                let _ = writeln!(out, "  {:<22}   Note: {}", "", note);
            }
        }
    }

    section(&mut out, "Recommended Approach for Each Scenario");
    for practice in view.recommended {
        let _ = writeln!(out, "✓ {}: {}", practice.topic, practice.advice);
    }

    section(&mut out, "Common Pitfalls to Avoid");
    for practice in view.pitfalls {
        let _ = writeln!(out, "⚠️ {}: {}", practice.topic, practice.advice);
    }

    section(&mut out, "Real-World Example");
    indented(&mut out, view.example, "    ");

    out
}
