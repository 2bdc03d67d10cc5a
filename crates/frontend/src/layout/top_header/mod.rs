//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - Punch tracker (employee role)
//! - Current role

use crate::domain::a002_timesheet::ui::PunchTracker;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::system::roles::ViewerRole;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role = ctx.config.role;

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("list")}
                </button>
                <span class="top-header__title">"Attendance"</span>
            </div>

            {(role == ViewerRole::Employee).then(|| view! {
                <div class="top-header__tracker">
                    <PunchTracker />
                </div>
            })}

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{role.display_name()}</span>
                </div>
            </div>
        </div>
    }
}
