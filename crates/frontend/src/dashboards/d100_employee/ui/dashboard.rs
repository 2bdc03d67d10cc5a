use crate::domain::a001_attendance::api::fetch_my_attendance;
use crate::domain::a003_task::ui::CreateTaskDialog;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use contracts::domain::a001_attendance::{MonthlySummary, StatusCategory};
use contracts::domain::a003_task::NewTask;
use contracts::shared::calendar::YearMonth;
use contracts::shared::date_format::month_title;
use contracts::system::roles::NavItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Employee landing page: attendance of the current month at a glance
#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = ctx.config;
    let month = YearMonth::of(today());

    let (summary, set_summary) = signal(None::<MonthlySummary>);
    let (error, set_error) = signal(None::<String>);
    let task_dialog_open = RwSignal::new(false);
    let (last_task, set_last_task) = signal(None::<NewTask>);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_my_attendance(&config, month).await {
                Ok(records) => {
                    set_summary.set(Some(MonthlySummary::from_records(month, &records)));
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("failed to load dashboard summary: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let count = move |f: fn(&MonthlySummary) -> u32| {
        Signal::derive(move || summary.get().map(|s| f(&s).to_string()))
    };
    let rate = Signal::derive(move || summary.get().map(|s| s.format_rate()));
    let working_days = Signal::derive(move || {
        summary
            .get()
            .map(|s| format!("of {} working days", s.working_days))
    });

    view! {
        <div class="page" id="d100_employee" data-page-category="dashboard">
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Employee Dashboard"</h1>
                    <p class="page__subtitle">{format!("Your activity overview for {}.", month_title(month))}</p>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Days Present"
                    icon_name="user"
                    value=count(|s| s.present)
                    tone=StatusCategory::Success
                    subtitle=working_days
                />
                <StatCard label="Days Late" icon_name="clock" value=count(|s| s.late) tone=StatusCategory::Warning />
                <StatCard label="Days Absent" icon_name="calendar" value=count(|s| s.absent) tone=StatusCategory::Danger />
                <StatCard label="On-Time Rate" icon_name="bar-chart" value=rate />
            </div>

            <div class="card">
                <h2 class="card__title">"Quick Actions"</h2>
                <Flex gap=FlexGap::Medium>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.open(NavItem::MyAttendance)
                    >
                        {icon("calendar")}
                        "View My Attendance"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| task_dialog_open.set(true)
                    >
                        {icon("plus")}
                        "New Task"
                    </Button>
                </Flex>
                {move || last_task.get().map(|task| view! {
                    <p class="card__note">
                        {format!("Task \"{}\" created ({} priority).", task.title, task.priority.label())}
                    </p>
                })}
            </div>

            <CreateTaskDialog
                open=task_dialog_open
                on_created=Callback::new(move |task: NewTask| set_last_task.set(Some(task)))
            />
        </div>
    }
}
