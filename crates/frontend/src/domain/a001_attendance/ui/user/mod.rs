use crate::domain::a001_attendance::api::fetch_my_attendance;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::month_calendar::MonthCalendar;
use crate::shared::components::ui::AttendanceStatusBadge;
use crate::shared::date_utils::today;
use contracts::domain::a001_attendance::{
    records_in_month, AttendanceRecord, MonthlySummary, StatusIndex, StatusPalette,
};
use contracts::shared::calendar::{CalendarNavigation, YearMonth};
use contracts::shared::date_format::{format_iso_date, month_title};
use leptos::prelude::*;
use leptos::task::spawn_local;

const PALETTE: StatusPalette = StatusPalette::EMPLOYEE;

/// "My Attendance" page: calendar, monthly summary and check-in log
#[component]
#[allow(non_snake_case)]
pub fn UserAttendance() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = ctx.config;

    let today = today();
    let nav = RwSignal::new(CalendarNavigation::with_selection(YearMonth::of(today), today));
    let (records, set_records) = signal::<Vec<AttendanceRecord>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let month = Memo::new(move |_| nav.with(|n| n.current_month));

    // Reload the log whenever the displayed month changes
    Effect::new(move |_| {
        let requested = month.get();
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_my_attendance(&config, requested).await;
            // the user may have moved on while the request was in flight
            if month.get_untracked() != requested {
                log::debug!("dropping stale attendance response for {}", requested);
                return;
            }
            match result {
                Ok(v) => {
                    set_records.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("failed to load attendance for {}: {}", requested, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let status_index = Signal::derive(move || records.with(|r| StatusIndex::from_records(r)));
    let month_log = Memo::new(move |_| records.with(|r| records_in_month(r, month.get())));
    let summary = Memo::new(move |_| records.with(|r| MonthlySummary::from_records(month.get(), r)));

    let selected_status = move || {
        let selected = nav.with(|n| n.selected_date)?;
        let label = status_index.with(|idx| idx.status_on(selected).map(str::to_string));
        Some((selected, label))
    };

    view! {
        <div class="page" id="a001_attendance--user" data-page-category="dashboard">
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"My Attendance"</h1>
                    <p class="page__subtitle">"View your personal attendance record."</p>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="page__content attendance-layout">
                <div class="attendance-layout__side">
                    <div class="card">
                        <MonthCalendar
                            nav=nav
                            palette=PALETTE
                            statuses=status_index
                            selectable=true
                        />
                        {move || selected_status().map(|(date, label)| view! {
                            <div class="month-calendar__selection">
                                <span>{format_iso_date(date)}</span>
                                {label.map(|l| view! { <AttendanceStatusBadge status=l palette=PALETTE /> })}
                            </div>
                        })}
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Monthly Summary"</h2>
                        <p class="card__subtitle">{move || month_title(month.get())}</p>
                        <dl class="summary-list">
                            <div class="summary-list__row">
                                <dt>"Working Days:"</dt>
                                <dd>{move || summary.get().working_days}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Days Present:"</dt>
                                <dd class="text-success">{move || summary.get().present}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Days Late:"</dt>
                                <dd class="text-error">{move || summary.get().late}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Days Absent:"</dt>
                                <dd class="text-error">{move || summary.get().absent}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"On-Time Rate:"</dt>
                                <dd class="text-success">{move || summary.get().format_rate()}</dd>
                            </div>
                        </dl>
                    </div>
                </div>

                <div class="attendance-layout__main card">
                    <h2 class="card__title">"Attendance Log"</h2>
                    <p class="card__subtitle">"Your check-in and check-out history."</p>
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Date"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Check-in"</th>
                                    <th class="table__header-cell">"Check-out"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get()>
                                    <tr><td class="table__cell" colspan="4">"Loading..."</td></tr>
                                </Show>
                                {move || month_log.get().into_iter().map(|record| view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--strong">{record.date}</td>
                                        <td class="table__cell">
                                            <AttendanceStatusBadge status=record.status palette=PALETTE />
                                        </td>
                                        <td class="table__cell table__cell--muted">{record.check_in}</td>
                                        <td class="table__cell table__cell--muted">{record.check_out}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                        <Show when=move || !loading.get() && month_log.with(|rows| rows.is_empty())>
                            <div class="table__empty">"No attendance records for this month."</div>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
