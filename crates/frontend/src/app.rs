use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_location();
    log::info!(
        "starting as {} (data: {:?}, api port {})",
        config.role.code(),
        config.data_source,
        config.port
    );

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <AppRoutes />
    }
}
