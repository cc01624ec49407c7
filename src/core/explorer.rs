use crate::core::classifier::{color_classes, entry_title, group_entries, status_color};
use crate::domain::model::{
    FetchError, FetchState, ResponsePayload, SeriesKey, StatusColor, StatusEntry,
};
use crate::domain::ports::StatusProbe;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// 單元結果的寫入端；`settle` 會消耗自己，因此每個單元只會轉換一次
pub struct FetchSlot {
    entry: StatusEntry,
    tx: watch::Sender<FetchState>,
}

impl FetchSlot {
    pub fn settle(self, outcome: Result<ResponsePayload, FetchError>) -> bool {
        match self.tx.send(FetchState::from(outcome)) {
            Ok(()) => true,
            Err(_) => {
                // 單元已被移除，遲到的結果直接丟棄
                tracing::debug!("Dropping late result for {}: unit no longer observed", self.entry);
                false
            }
        }
    }
}

pub struct ProbeUnit {
    entry: StatusEntry,
    rx: watch::Receiver<FetchState>,
}

impl ProbeUnit {
    /// 建立單元並排程唯一一次讀取
    pub fn spawn(entry: StatusEntry, probe: Arc<dyn StatusProbe>) -> Self {
        let (tx, rx) = watch::channel(FetchState::Loading);
        let slot = FetchSlot { entry, tx };

        tokio::spawn(async move {
            let outcome = probe.fetch(entry).await;
            match &outcome {
                Ok(payload) => tracing::debug!(
                    "✅ {} settled with {} in {}ms",
                    entry,
                    payload.status,
                    payload.elapsed_ms
                ),
                Err(err) => tracing::warn!("⚠️ {} failed: {}", entry, err),
            }
            slot.settle(outcome);
        });

        Self { entry, rx }
    }

    pub fn entry(&self) -> StatusEntry {
        self.entry
    }

    pub fn state(&self) -> FetchState {
        self.rx.borrow().clone()
    }

    /// 任務在寫入結果前結束（例如 panic）時，單元以 network 錯誤收尾；此時沒有可用的 URL
    pub async fn settled(&mut self) -> FetchState {
        match self.rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => {
                tracing::warn!("⚠️ {} probe task ended before settling", self.entry);
                FetchState::Error(FetchError::network(
                    String::new(),
                    "probe task ended before settling",
                ))
            }
        }
    }

    pub fn view(&self, state: FetchState) -> UnitView {
        let color = status_color(&self.entry);
        UnitView {
            entry: self.entry,
            title: entry_title(&self.entry),
            color,
            classes: color_classes(color),
            state,
            note: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitView {
    pub entry: StatusEntry,
    pub title: String,
    pub color: StatusColor,
    pub classes: String,
    pub state: FetchState,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub key: SeriesKey,
    pub title: String,
    pub units: Vec<UnitView>,
}

struct ProbeGroup {
    key: SeriesKey,
    title: String,
    units: Vec<ProbeUnit>,
}

/// 依系列分組後，每個項目各自一個任務與一個結果槽，彼此不共享狀態
pub struct ProbeBoard {
    groups: Vec<ProbeGroup>,
}

impl ProbeBoard {
    pub fn mount(entries: &[StatusEntry], probe: Arc<dyn StatusProbe>) -> Self {
        let groups = group_entries(entries)
            .into_iter()
            .map(|group| ProbeGroup {
                key: group.key,
                title: group.title,
                units: group
                    .entries
                    .into_iter()
                    .map(|entry| ProbeUnit::spawn(entry, Arc::clone(&probe)))
                    .collect(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Mounted {} probe units in {} groups",
            entries.len(),
            groups.len()
        );

        Self { groups }
    }

    pub fn unit_count(&self) -> usize {
        self.groups.iter().map(|g| g.units.len()).sum()
    }

    /// 不等待，直接讀取目前的狀態
    pub fn snapshot(&self) -> Vec<SeriesView> {
        self.groups
            .iter()
            .map(|group| SeriesView {
                key: group.key,
                title: group.title.clone(),
                units: group.units.iter().map(|u| u.view(u.state())).collect(),
            })
            .collect()
    }

    pub async fn settle_all(&mut self) -> Vec<SeriesView> {
        let mut views = Vec::with_capacity(self.groups.len());

        for group in &mut self.groups {
            let mut units = Vec::with_capacity(group.units.len());
            for unit in &mut group.units {
                let state = unit.settled().await;
                units.push(unit.view(state));
            }
            views.push(SeriesView {
                key: group.key,
                title: group.title.clone(),
                units,
            });
        }

        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct ScriptedProbe {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl ScriptedProbe {
        fn new(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
            }
        }
    }

    #[async_trait]
    impl StatusProbe for ScriptedProbe {
        async fn fetch(&self, entry: StatusEntry) -> Result<ResponsePayload, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            match entry {
                StatusEntry::Numeric(code) if (200..300).contains(&code) => Ok(ResponsePayload {
                    status: code,
                    url: format!("mock://{}", code),
                    description: Some("OK".to_string()),
                    body: serde_json::json!({"code": code, "description": "OK"}),
                    settled_at: Utc::now(),
                    elapsed_ms: 0,
                }),
                StatusEntry::Numeric(code) => Err(FetchError::status(
                    format!("mock://{}", code),
                    code,
                    serde_json::Value::Null,
                )),
                StatusEntry::TimeoutProbe => Err(FetchError::timeout("mock://timeout", 1000)),
            }
        }
    }

    #[tokio::test]
    async fn test_units_start_loading_and_settle_once() {
        let probe = Arc::new(ScriptedProbe::new(Duration::from_millis(50)));
        let entries = [
            StatusEntry::Numeric(200),
            StatusEntry::Numeric(500),
            StatusEntry::TimeoutProbe,
        ];

        let mut board = ProbeBoard::mount(&entries, probe.clone());
        assert_eq!(board.unit_count(), 3);

        let snapshot = board.snapshot();
        assert!(snapshot
            .iter()
            .flat_map(|g| &g.units)
            .all(|u| u.state.is_loading()));

        let settled = board.settle_all().await;
        assert_eq!(probe.calls.load(Ordering::SeqCst), 3);

        let states: Vec<&FetchState> = settled.iter().flat_map(|g| &g.units).map(|u| &u.state).collect();
        assert!(matches!(states[0], FetchState::Success(p) if p.status == 200));
        assert!(matches!(states[1], FetchState::Error(e) if e.status == Some(500)));
        assert!(matches!(states[2], FetchState::Error(e) if e.kind == crate::domain::model::FetchErrorKind::Timeout));

        // 已結束的單元不會再次讀取
        let again = board.settle_all().await;
        assert_eq!(again, settled);
        assert_eq!(probe.calls.load(Ordering::SeqCst), 3);
    }

    struct PanickingProbe;

    #[async_trait]
    impl StatusProbe for PanickingProbe {
        async fn fetch(&self, entry: StatusEntry) -> Result<ResponsePayload, FetchError> {
            match entry {
                StatusEntry::Numeric(500) => panic!("probe exploded"),
                _ => ScriptedProbe::new(Duration::ZERO).fetch(entry).await,
            }
        }
    }

    #[tokio::test]
    async fn test_panicking_task_settles_as_network_error() {
        let entries = [StatusEntry::Numeric(500), StatusEntry::Numeric(200)];
        let mut board = ProbeBoard::mount(&entries, Arc::new(PanickingProbe));

        let settled = tokio::time::timeout(Duration::from_secs(5), board.settle_all())
            .await
            .expect("board should settle even when a task panics");

        let states: Vec<&FetchState> = settled
            .iter()
            .flat_map(|g| &g.units)
            .map(|u| &u.state)
            .collect();
        assert_eq!(states.len(), 2);
        match states[0] {
            FetchState::Error(e) => {
                assert_eq!(e.kind, crate::domain::model::FetchErrorKind::Network);
                assert_eq!(e.message, "probe task ended before settling");
                assert!(e.url.is_empty());
                assert_eq!(e.status, None);
            }
            other => panic!("expected an error state, got {:?}", other),
        }
        assert!(matches!(states[1], FetchState::Success(p) if p.status == 200));
    }

    #[tokio::test]
    async fn test_board_groups_follow_classifier() {
        let probe = Arc::new(ScriptedProbe::new(Duration::ZERO));
        let entries = [
            StatusEntry::Numeric(404),
            StatusEntry::Numeric(200),
            StatusEntry::Numeric(401),
        ];

        let mut board = ProbeBoard::mount(&entries, probe);
        let views = board.settle_all().await;

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].title, "Client Error Responses (4xx)");
        assert_eq!(views[0].units[0].title, "Status 404");
        assert_eq!(views[0].units[1].entry, StatusEntry::Numeric(401));
        assert_eq!(views[1].units[0].color, StatusColor::Emerald);
    }

    #[tokio::test]
    async fn test_late_settle_after_unit_dropped_is_tolerated() {
        let (tx, rx) = watch::channel(FetchState::Loading);
        let slot = FetchSlot {
            entry: StatusEntry::Numeric(200),
            tx,
        };
        drop(rx);

        assert!(!slot.settle(Err(FetchError::network("mock://200", "gone"))));
    }
}
