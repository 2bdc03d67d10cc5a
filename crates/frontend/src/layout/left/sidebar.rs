//! Sidebar with the pages available to the current role

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role = ctx.config.role;

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__group-label">{role.display_name()}</div>
            {role.nav_items().into_iter().map(|item| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == item
                        style:padding-left="12px"
                        on:click=move |_| ctx.open(item)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon())}
                            <span>{item.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
