use crate::config::AppConfig;
use contracts::system::roles::NavItem;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<NavItem>,
    pub left_open: RwSignal<bool>,
    pub config: AppConfig,
}

impl AppGlobalContext {
    /// Opens on the first page the role may see.
    pub fn new(config: AppConfig) -> Self {
        Self {
            active: RwSignal::new(config.role.landing_page()),
            left_open: RwSignal::new(true),
            config,
        }
    }

    /// Restores the active page from `?page=` and keeps it in the URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(item) = params.page.as_deref().and_then(NavItem::from_code) {
            self.open(item);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let Some(w) = window() else {
                return;
            };
            let current = w.location().search().unwrap_or_default();
            let mut query: std::collections::BTreeMap<String, String> =
                serde_qs::from_str(current.trim_start_matches('?')).unwrap_or_default();
            query.insert("page".to_string(), active.code().to_string());
            let new_url = format!("?{}", serde_qs::to_string(&query).unwrap_or_default());

            // Only update URL if it actually changed
            if current != new_url {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    /// Switches the content area; pages outside the role are ignored.
    pub fn open(&self, item: NavItem) {
        if !self.config.role.can_open(item) {
            log::warn!(
                "page '{}' is not available to {}",
                item.code(),
                self.config.role.code()
            );
            return;
        }
        log::debug!("open page '{}'", item.code());
        self.active.set(item);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
