use crate::shared::clock::use_clock_tick;
use crate::shared::icons::icon;
use contracts::domain::a002_timesheet::{format_hours, PunchSession, TimesheetError};
use contracts::shared::date_format::format_clock_time;
use leptos::prelude::*;
use thaw::*;

/// Punch-in bar: live clock, shift start, worked and break time.
///
/// The session lives only in this view; nothing is sent to the server.
#[component]
pub fn PunchTracker() -> impl IntoView {
    let now = use_clock_tick();
    let session = RwSignal::new(PunchSession::new());
    let (error, set_error) = signal::<Option<TimesheetError>>(None);

    let apply = move |result: Result<(), TimesheetError>| match result {
        Ok(()) => set_error.set(None),
        Err(e) => {
            log::warn!("punch transition rejected: {}", e);
            set_error.set(Some(e));
        }
    };

    let on_punch = move |_| {
        let at = now.get_untracked();
        let mut next = session.get_untracked();
        let result = if next.is_punched_in() {
            next.punch_out(at).map(|summary| {
                log::info!("shift finished: {}", format_hours(summary.worked));
            })
        } else {
            next.punch_in(at)
        };
        if result.is_ok() {
            session.set(next);
        }
        apply(result);
    };

    let on_break = move |_| {
        let at = now.get_untracked();
        let mut next = session.get_untracked();
        let result = next.toggle_break(at).map(|_| ());
        if result.is_ok() {
            session.set(next);
        }
        apply(result);
    };

    let is_punched_in = move || session.with(|s| s.is_punched_in());
    let is_on_break = move || session.with(|s| s.is_on_break());

    view! {
        <div class="punch-tracker">
            <div class="punch-tracker__info">
                <span class="punch-tracker__item">
                    {icon("clock")}
                    {move || format_clock_time(now.get().time())}
                </span>

                {move || session.with(|s| s.started_at()).map(|started| view! {
                    <span class="punch-tracker__item">
                        {icon("clock")}
                        {format!("Started at {}", format_clock_time(started.time()))}
                    </span>
                })}

                <span class="punch-tracker__item">
                    {icon("bar-chart")}
                    {move || format!("{} Today", format_hours(session.with(|s| s.worked(now.get()))))}
                </span>

                <Show when=is_on_break>
                    <span class="punch-tracker__item punch-tracker__item--break">
                        {icon("clock")}
                        {move || format!("{} Break", format_hours(session.with(|s| s.break_elapsed(now.get()))))}
                    </span>
                </Show>
            </div>

            <div class="punch-tracker__actions">
                <Show when=is_punched_in>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=on_break
                    >
                        {icon("coffee")}
                        {move || if is_on_break() { "End Break" } else { "Take Break" }}
                    </Button>
                </Show>

                <Button
                    size=ButtonSize::Small
                    appearance=move || {
                        if is_punched_in() {
                            ButtonAppearance::Secondary
                        } else {
                            ButtonAppearance::Primary
                        }
                    }
                    on_click=on_punch
                >
                    {icon("log-out")}
                    {move || if is_punched_in() { "Punch Out" } else { "Punch In" }}
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <span class="punch-tracker__error">{e.to_string()}</span>
            })}
        </div>
    }
}
