use contracts::enums::AppTab;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const TAB_QUERY_KEY: &str = "tab";

/// Read the tab code from a `location.search` string. Unknown codes are ignored.
pub fn tab_from_search(search: &str) -> Option<AppTab> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(TAB_QUERY_KEY)
        .and_then(|code| AppTab::from_code(code))
}

/// `location.search` value that selects `tab`
pub fn search_for_tab(tab: AppTab) -> String {
    let query = serde_qs::to_string(&HashMap::from([(TAB_QUERY_KEY, tab.code())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<AppTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(AppTab::default()),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_search(&search) {
            self.activate_tab(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_search = search_for_tab(this.active_tab.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_search {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_search),
                        );
                    }
                }
            }
        });
    }

    pub fn activate_tab(&self, tab: AppTab) {
        leptos::logging::log!("activate_tab: '{}'", tab);
        self.active_tab.set(tab);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_search() {
        assert_eq!(tab_from_search("?tab=explore"), Some(AppTab::Explore));
        assert_eq!(tab_from_search("tab=settings"), Some(AppTab::Settings));
        assert_eq!(tab_from_search("?other=1&tab=upload"), Some(AppTab::Upload));
    }

    #[test]
    fn test_tab_from_search_rejects_unknown() {
        assert_eq!(tab_from_search(""), None);
        assert_eq!(tab_from_search("?tab=admin"), None);
        assert_eq!(tab_from_search("?tab=Explore"), None);
        assert_eq!(tab_from_search("?active=explore"), None);
    }

    #[test]
    fn test_search_for_tab() {
        assert_eq!(search_for_tab(AppTab::Explore), "?tab=explore");
        for tab in AppTab::all() {
            assert_eq!(tab_from_search(&search_for_tab(tab)), Some(tab));
        }
    }
}
