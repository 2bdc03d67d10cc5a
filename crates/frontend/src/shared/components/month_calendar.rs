//! MonthCalendar: 6×7 month grid with previous/next and "Today" navigation.
//!
//! ```rust,ignore
//! let nav = RwSignal::new(CalendarNavigation::new(YearMonth::of(today())));
//! view! { <MonthCalendar nav=nav palette=StatusPalette::EMPLOYEE selectable=true /> }
//! ```

use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use chrono::{Datelike, NaiveDate};
use contracts::domain::a001_attendance::{StatusIndex, StatusPalette};
use contracts::shared::calendar::CalendarNavigation;
use contracts::shared::date_format::{month_title, WEEKDAY_HEADERS};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MonthCalendar(
    /// Displayed month and selected day
    nav: RwSignal<CalendarNavigation>,
    /// Status colours of the hosting view
    palette: StatusPalette,
    /// Optional status per day, drawn as a marker in the cell
    #[prop(optional, into)]
    statuses: Option<Signal<StatusIndex>>,
    /// Clicking a cell selects it, clicking it again clears the selection.
    /// Leading/trailing cells do not change the month.
    #[prop(optional)]
    selectable: bool,
    /// Called with the date of every clicked cell
    #[prop(optional)]
    on_select: Option<Callback<NaiveDate>>,
) -> impl IntoView {
    let grid = Memo::new(move |_| nav.with(|n| n.grid()));
    let title = move || nav.with(|n| month_title(n.current_month));

    let on_previous = move |_| {
        nav.update(|n| n.previous());
        log::debug!("calendar -> {:?}", nav.with_untracked(|n| n.current_month));
    };
    let on_next = move |_| {
        nav.update(|n| n.next());
        log::debug!("calendar -> {:?}", nav.with_untracked(|n| n.current_month));
    };
    let on_today = move |_| {
        nav.update(|n| n.go_to_today(today()));
    };

    view! {
        <div class="month-calendar">
            <div class="month-calendar__header">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=on_previous
                    attr:title="Previous month"
                >
                    {icon("chevron-left")}
                </Button>

                <h2 class="month-calendar__title">{title}</h2>

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_today
                        attr:title="Current month"
                    >
                        "Today"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=on_next
                        attr:title="Next month"
                    >
                        {icon("chevron-right")}
                    </Button>
                </ButtonGroup>
            </div>

            <div class="month-calendar__grid">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|name| view! { <div class="month-calendar__weekday">{*name}</div> })
                    .collect_view()}

                {move || {
                    grid.get()
                        .cells()
                        .iter()
                        .map(|day| {
                            let day = *day;
                            let status = statuses.and_then(|s| {
                                s.with(|index| index.status_on(day.date).map(str::to_string))
                            });
                            let marker = status
                                .as_deref()
                                .map(|label| palette.classify(label).category.name());

                            view! {
                                <div
                                    class="month-calendar__day"
                                    class:month-calendar__day--outside=!day.is_current_month
                                    class:month-calendar__day--selectable=selectable
                                    class:month-calendar__day--selected=move || {
                                        nav.with(|n| n.is_selected(day.date))
                                    }
                                    title=status.clone().unwrap_or_default()
                                    on:click=move |_| {
                                        if selectable {
                                            nav.update(|n| n.toggle_selection(day.date));
                                        }
                                        if let Some(cb) = on_select {
                                            cb.run(day.date);
                                        }
                                    }
                                >
                                    <span class="month-calendar__day-number">{day.date.day()}</span>
                                    {marker.map(|category| view! {
                                        <span class=format!(
                                            "month-calendar__marker month-calendar__marker--{}",
                                            category,
                                        )></span>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
