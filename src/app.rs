//! Event Checklist App
//!
//! Top-level shell: picks the page from the current path and provides the
//! build configuration to every component.

use leptos::prelude::*;

use crate::components::{ChecklistView, ExploreView};
use crate::config::AppConfig;

pub const CHECKLIST_PATH: &str = "/checklist";
pub const EXPLORE_PATH: &str = "/explore";

#[derive(Clone, Copy, Debug, PartialEq)]
enum Page {
    Checklist,
    Explore,
}

impl Page {
    fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/') == EXPLORE_PATH {
            Page::Explore
        } else {
            Page::Checklist
        }
    }
}

/// Full page load to `path`
pub fn navigate(path: &str) {
    if let Err(e) = window().location().set_href(path) {
        log::error!("navigation to {} failed: {:?}", path, e);
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_build_env());

    let path = window().location().pathname().unwrap_or_default();
    let page = Page::from_path(&path);
    log::debug!("rendering {:?} for {}", page, path);

    let link_class = move |target: Page| {
        if page == target { "nav-link active" } else { "nav-link" }
    };

    view! {
        <nav class="navbar navbar-expand bg-light mb-3">
            <div class="container">
                <span class="navbar-brand">"Perlengkapan Acara"</span>
                <div class="navbar-nav">
                    <a class=link_class(Page::Checklist) href=CHECKLIST_PATH>"Checklist"</a>
                    <a class=link_class(Page::Explore) href=EXPLORE_PATH>"Explore"</a>
                </div>
            </div>
        </nav>
        <div class="container py-2">
            {match page {
                Page::Checklist => view! { <ChecklistView /> }.into_any(),
                Page::Explore => view! { <ExploreView /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explore_path_selects_explore_page() {
        assert_eq!(Page::from_path("/explore"), Page::Explore);
        assert_eq!(Page::from_path("/explore/"), Page::Explore);
    }

    #[test]
    fn everything_else_is_the_checklist() {
        assert_eq!(Page::from_path("/"), Page::Checklist);
        assert_eq!(Page::from_path("/checklist"), Page::Checklist);
        assert_eq!(Page::from_path("/unknown"), Page::Checklist);
    }
}
