use crate::domain::a001_attendance::api::fetch_team_attendance;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::month_calendar::MonthCalendar;
use crate::shared::components::ui::AttendanceStatusBadge;
use crate::shared::date_utils::{format_input_date, parse_input_date, today};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use contracts::domain::a001_attendance::{
    AttendanceQuery, AttendanceRecord, StatusFilter, StatusIndex, StatusPalette,
};
use chrono::NaiveDate;
use contracts::shared::calendar::{CalendarNavigation, YearMonth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const PALETTE: StatusPalette = StatusPalette::ADMIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Table,
    Calendar,
}

impl CsvExportable for AttendanceRecord {
    fn headers() -> Vec<&'static str> {
        vec!["Employee", "Date", "Status", "Check-in", "Check-out"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.employee.clone().unwrap_or_default(),
            self.date.clone(),
            self.status.clone(),
            self.check_in.clone(),
            self.check_out.clone(),
        ]
    }
}

/// Team attendance page: filters, table/calendar switch and CSV export
#[component]
#[allow(non_snake_case)]
pub fn AdminAttendance() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = ctx.config;

    let (records, set_records) = signal::<Vec<AttendanceRecord>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let query = RwSignal::new(AttendanceQuery::default());
    let view_mode = RwSignal::new(ViewMode::Table);
    let nav = RwSignal::new(CalendarNavigation::new(YearMonth::of(today())));

    let fetch = move || {
        spawn_local(async move {
            match fetch_team_attendance(&config).await {
                Ok(v) => {
                    set_records.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("failed to load team attendance: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let filtered = Memo::new(move |_| query.with(|q| records.with(|r| q.apply(r))));
    let statuses = Signal::derive(move || filtered.with(|r| StatusIndex::from_records(r)));

    // A calendar day opens the table narrowed to that day.
    let on_day = Callback::new(move |date: NaiveDate| {
        query.update(|q| q.narrow_to_day(date));
        view_mode.set(ViewMode::Table);
    });

    let on_export = move |_| {
        let rows = filtered.get_untracked();
        if let Err(e) = export_to_csv(&rows, "attendance.csv") {
            log::warn!("export failed: {}", e);
            set_error.set(Some(e));
        }
    };

    fetch();

    view! {
        <div class="page" id="a001_attendance--admin" data-page-category="list">
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Attendance"</h1>
                    <p class="page__subtitle">"Review and manage team attendance records."</p>
                </div>
                <div class="page__header-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="page__content attendance-layout">
                <div class="attendance-layout__side card">
                    <h2 class="card__title">"Filters"</h2>

                    <Flex vertical=true gap=FlexGap::Small>
                        <label class="form__label">"Date Range"</label>
                        <Flex align=FlexAlign::Center gap=FlexGap::Small>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || query.with(|q| format_input_date(q.date_from))
                                on:input=move |ev| {
                                    let date = parse_input_date(&event_target_value(&ev));
                                    query.update(|q| q.date_from = date);
                                }
                            />
                            <div>"—"</div>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || query.with(|q| format_input_date(q.date_to))
                                on:input=move |ev| {
                                    let date = parse_input_date(&event_target_value(&ev));
                                    query.update(|q| q.date_to = date);
                                }
                            />
                        </Flex>
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <label class="form__label">"Status"</label>
                        {StatusFilter::all().into_iter().map(|filter| {
                            let is_selected = move || query.with(|q| q.status == Some(filter));
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=move || {
                                        if is_selected() {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        }
                                    }
                                    on_click=move |_| {
                                        query.update(|q| q.status = StatusFilter::toggle(q.status, filter));
                                    }
                                    attr:data-status=filter.value()
                                    attr:style="width: 100%; justify-content: flex-start;"
                                >
                                    {filter.label()}
                                </Button>
                            }
                        }).collect_view()}
                    </Flex>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_export
                        attr:style="width: 100%; margin-top: 16px;"
                    >
                        {icon("download")}
                        "Export as CSV"
                    </Button>
                </div>

                <div class="attendance-layout__main">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <div class="search-input">
                            {icon("search")}
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Search..."
                                prop:value=move || query.with(|q| q.search.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    query.update(|q| q.search = value);
                                }
                            />
                        </div>
                        <ButtonGroup>
                            <Button
                                size=ButtonSize::Small
                                appearance=move || {
                                    if view_mode.get() == ViewMode::Table {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                }
                                on_click=move |_| view_mode.set(ViewMode::Table)
                                attr:title="Table"
                            >
                                {icon("list")}
                            </Button>
                            <Button
                                size=ButtonSize::Small
                                appearance=move || {
                                    if view_mode.get() == ViewMode::Calendar {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                }
                                on_click=move |_| view_mode.set(ViewMode::Calendar)
                                attr:title="Calendar"
                            >
                                {icon("grid")}
                            </Button>
                        </ButtonGroup>
                    </Flex>

                    <Show
                        when=move || view_mode.get() == ViewMode::Table
                        fallback=move || view! {
                            <div class="card">
                                <MonthCalendar nav=nav palette=PALETTE statuses=statuses on_select=on_day />
                            </div>
                        }
                    >
                        <div class="card table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Employee"</th>
                                        <th class="table__header-cell">"Date"</th>
                                        <th class="table__header-cell">"Status"</th>
                                        <th class="table__header-cell">"Check-in"</th>
                                        <th class="table__header-cell">"Check-out"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || filtered.get().into_iter().map(|record| view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--strong">
                                                {record.employee.unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell table__cell--muted">{record.date}</td>
                                            <td class="table__cell">
                                                <AttendanceStatusBadge status=record.status palette=PALETTE />
                                            </td>
                                            <td class="table__cell table__cell--muted">{record.check_in}</td>
                                            <td class="table__cell table__cell--muted">{record.check_out}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                            <Show when=move || filtered.with(|rows| rows.is_empty())>
                                <div class="table__empty">"No attendance records match the filters."</div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
