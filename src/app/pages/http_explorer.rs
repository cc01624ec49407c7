use crate::core::explorer::{ProbeBoard, SeriesView};
use crate::domain::model::StatusEntry;
use crate::domain::ports::StatusProbe;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub groups: Vec<SeriesView>,
}

pub fn timeout_note(timeout_probe_ms: u64) -> String {
    format!("Request exceeded timeout limit ({}ms)", timeout_probe_ms)
}

/// 將分組結果包成頁面；逾時探針失敗時附上說明
pub fn assemble(mut groups: Vec<SeriesView>, timeout_probe_ms: u64) -> ExplorerView {
    for unit in groups.iter_mut().flat_map(|g| g.units.iter_mut()) {
        if unit.entry == StatusEntry::TimeoutProbe && unit.state.is_error() {
            unit.note = Some(timeout_note(timeout_probe_ms));
        }
    }

    ExplorerView {
        title: "HTTP Status Explorer",
        subtitle: "Visualizing responses and errors for different HTTP status codes",
        groups,
    }
}

pub async fn build(
    entries: &[StatusEntry],
    probe: Arc<dyn StatusProbe>,
    timeout_probe_ms: u64,
) -> ExplorerView {
    let mut board = ProbeBoard::mount(entries, probe);
    tracing::info!("🌐 Probing {} status entries", board.unit_count());

    let groups = board.settle_all().await;
    let failures = groups
        .iter()
        .flat_map(|g| &g.units)
        .filter(|u| u.state.is_error())
        .count();
    tracing::info!(
        "Probes settled: {} succeeded, {} failed",
        board.unit_count() - failures,
        failures
    );

    assemble(groups, timeout_probe_ms)
}
