pub mod home;
pub mod http_explorer;
pub mod simple_ternary;
pub mod ternary_or_and;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Home,
    HttpExplorer,
    SimpleTernary,
    TernaryOrAnd,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::HttpExplorer,
        Route::SimpleTernary,
        Route::TernaryOrAnd,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::HttpExplorer => "/http/axios",
            Route::SimpleTernary => "/ternary/SimpleTernary",
            Route::TernaryOrAnd => "/ternary/ternaryOrAnd",
        }
    }

    /// 不分大小寫、忽略結尾斜線；無法辨識的路徑一律回到首頁
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let normalized = if normalized.is_empty() { "/" } else { normalized };

        let route = Route::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(normalized));

        match route {
            Some(route) => route,
            None => {
                tracing::debug!("No page at '{}', falling back to index", trimmed);
                Route::Home
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(home::HomeView),
    HttpExplorer(http_explorer::ExplorerView),
    SimpleTernary(simple_ternary::SimpleTernaryView),
    TernaryOrAnd(ternary_or_and::ComparisonView),
}

impl PageView {
    pub fn route(&self) -> Route {
        match self {
            PageView::Home(_) => Route::Home,
            PageView::HttpExplorer(_) => Route::HttpExplorer,
            PageView::SimpleTernary(_) => Route::SimpleTernary,
            PageView::TernaryOrAnd(_) => Route::TernaryOrAnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/http/axios"), Route::HttpExplorer);
        assert_eq!(Route::resolve("/ternary/SimpleTernary"), Route::SimpleTernary);
        assert_eq!(Route::resolve("/ternary/ternaryOrAnd"), Route::TernaryOrAnd);
    }

    #[test]
    fn test_resolve_is_lenient() {
        assert_eq!(Route::resolve("/http/axios/"), Route::HttpExplorer);
        assert_eq!(Route::resolve("/TERNARY/simpleternary"), Route::SimpleTernary);
        assert_eq!(Route::resolve(""), Route::Home);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::resolve("/does/not/exist"), Route::Home);
        assert_eq!(Route::resolve("/http"), Route::Home);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }
}
