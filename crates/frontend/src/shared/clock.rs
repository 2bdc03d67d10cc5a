//! Wall-clock tick for live timers.
//!
//! Each caller owns its own interval; it is cancelled when the calling
//! component's owner is disposed.

use crate::shared::date_utils::now_local;
use chrono::NaiveDateTime;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

pub const TICK_MS: u32 = 1_000;

/// Signal with the local time, refreshed every second while the view lives.
pub fn use_clock_tick() -> ReadSignal<NaiveDateTime> {
    let (now, set_now) = signal(now_local());

    let interval = Interval::new(TICK_MS, move || set_now.set(now_local()));
    let interval = StoredValue::new_local(Some(interval));

    on_cleanup(move || {
        // dropping the Interval clears the JS timer
        interval.try_update_value(|slot| slot.take());
        log::debug!("clock tick stopped");
    });

    now
}
