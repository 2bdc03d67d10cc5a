use crate::dashboards::d100_employee::ui::EmployeeDashboard;
use crate::domain::a001_attendance::ui::{AdminAttendance, UserAttendance};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use contracts::system::roles::NavItem;
use leptos::prelude::*;

/// Content of the active page. Pages outside the role fall back to its landing page.
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role = ctx.config.role;

    move || {
        let active = ctx.active.get();
        let item = if role.can_open(active) {
            active
        } else {
            role.landing_page()
        };
        match item {
            NavItem::Dashboard => view! { <EmployeeDashboard /> }.into_any(),
            NavItem::MyAttendance => view! { <UserAttendance /> }.into_any(),
            NavItem::TeamAttendance => view! { <AdminAttendance /> }.into_any(),
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}
