use crate::app::pages::{home, http_explorer, simple_ternary, ternary_or_and, PageView, Route};
use crate::app::render::render;
use crate::core::probe::HttpStatusProbe;
use crate::core::{ConfigProvider, StatusProbe};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use std::sync::Arc;

pub struct SandboxEngine<C: ConfigProvider> {
    config: C,
    probe: Arc<dyn StatusProbe>,
}

impl<C: ConfigProvider> SandboxEngine<C> {
    pub fn new(config: C) -> Result<Self> {
        let probe = Arc::new(HttpStatusProbe::new(&config)?);
        Ok(Self { config, probe })
    }

    pub fn with_probe(config: C, probe: Arc<dyn StatusProbe>) -> Self {
        Self { config, probe }
    }

    pub async fn build(&self, route: Route) -> PageView {
        tracing::debug!("Building page {}", route);

        match route {
            Route::Home => PageView::Home(home::build()),
            Route::HttpExplorer => PageView::HttpExplorer(
                http_explorer::build(
                    self.config.status_codes(),
                    Arc::clone(&self.probe),
                    self.config.timeout_probe_ms(),
                )
                .await,
            ),
            Route::SimpleTernary => PageView::SimpleTernary(simple_ternary::build()),
            Route::TernaryOrAnd => PageView::TernaryOrAnd(ternary_or_and::build()),
        }
    }

    pub async fn run(&self, path: &str, format: OutputFormat) -> Result<String> {
        let route = Route::resolve(path);
        tracing::info!("Opening {} ({})", route, path);

        let view = self.build(route).await;
        render(&view, format)
    }
}
