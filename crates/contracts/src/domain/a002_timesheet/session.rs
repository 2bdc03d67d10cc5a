use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected punch clock transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimesheetError {
    #[error("already punched in")]
    AlreadyPunchedIn,

    #[error("not punched in")]
    NotPunchedIn,

    #[error("already on break")]
    AlreadyOnBreak,

    #[error("not on break")]
    NotOnBreak,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PunchState {
    #[default]
    Idle,
    Working {
        started_at: NaiveDateTime,
    },
    OnBreak {
        started_at: NaiveDateTime,
        break_started_at: NaiveDateTime,
    },
}

/// Result of a punch-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSummary {
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
    pub worked: Duration,
}

/// Punch clock of one employee for the current day.
///
/// Worked time runs from punch-in and includes breaks. After punch-out
/// it holds the total of the finished shift until the next punch-in.
/// A failed transition leaves the state as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchSession {
    state: PunchState,
    #[serde(skip)]
    last_shift: Option<ShiftSummary>,
}

impl PunchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PunchState {
        self.state
    }

    /// The most recent finished shift, cleared by the next punch-in.
    pub fn last_shift(&self) -> Option<ShiftSummary> {
        self.last_shift
    }

    pub fn is_punched_in(&self) -> bool {
        !matches!(self.state, PunchState::Idle)
    }

    pub fn is_on_break(&self) -> bool {
        matches!(self.state, PunchState::OnBreak { .. })
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        match self.state {
            PunchState::Idle => None,
            PunchState::Working { started_at } | PunchState::OnBreak { started_at, .. } => {
                Some(started_at)
            }
        }
    }

    pub fn break_started_at(&self) -> Option<NaiveDateTime> {
        match self.state {
            PunchState::OnBreak {
                break_started_at, ..
            } => Some(break_started_at),
            _ => None,
        }
    }

    pub fn punch_in(&mut self, now: NaiveDateTime) -> Result<(), TimesheetError> {
        if self.is_punched_in() {
            log::warn!("punch in rejected: already punched in");
            return Err(TimesheetError::AlreadyPunchedIn);
        }
        self.state = PunchState::Working { started_at: now };
        self.last_shift = None;
        log::debug!("punched in at {now}");
        Ok(())
    }

    /// Ends the shift from either working or break state.
    pub fn punch_out(&mut self, now: NaiveDateTime) -> Result<ShiftSummary, TimesheetError> {
        let Some(started_at) = self.started_at() else {
            log::warn!("punch out rejected: not punched in");
            return Err(TimesheetError::NotPunchedIn);
        };
        let summary = ShiftSummary {
            started_at,
            ended_at: now,
            worked: whole_minutes(now - started_at),
        };
        self.state = PunchState::Idle;
        self.last_shift = Some(summary);
        log::debug!("punched out at {now}, worked {}", format_hours(summary.worked));
        Ok(summary)
    }

    pub fn start_break(&mut self, now: NaiveDateTime) -> Result<(), TimesheetError> {
        match self.state {
            PunchState::Idle => Err(TimesheetError::NotPunchedIn),
            PunchState::OnBreak { .. } => Err(TimesheetError::AlreadyOnBreak),
            PunchState::Working { started_at } => {
                self.state = PunchState::OnBreak {
                    started_at,
                    break_started_at: now,
                };
                Ok(())
            }
        }
    }

    /// Returns the length of the finished break. The break counter resets.
    pub fn end_break(&mut self, now: NaiveDateTime) -> Result<Duration, TimesheetError> {
        match self.state {
            PunchState::Idle => Err(TimesheetError::NotPunchedIn),
            PunchState::Working { .. } => Err(TimesheetError::NotOnBreak),
            PunchState::OnBreak {
                started_at,
                break_started_at,
            } => {
                self.state = PunchState::Working { started_at };
                Ok(whole_minutes(now - break_started_at))
            }
        }
    }

    /// Starts or ends a break. Returns `true` when a break is now running.
    pub fn toggle_break(&mut self, now: NaiveDateTime) -> Result<bool, TimesheetError> {
        if self.is_on_break() {
            self.end_break(now).map(|_| false)
        } else {
            self.start_break(now).map(|_| true)
        }
    }

    /// Time since punch-in, truncated to whole minutes. When idle, the
    /// total of the last finished shift, or zero.
    pub fn worked(&self, now: NaiveDateTime) -> Duration {
        match (self.started_at(), self.last_shift) {
            (Some(start), _) => whole_minutes(now - start),
            (None, Some(shift)) => shift.worked,
            (None, None) => Duration::zero(),
        }
    }

    /// Length of the running break, zero when not on break.
    pub fn break_elapsed(&self, now: NaiveDateTime) -> Duration {
        self.break_started_at()
            .map(|start| whole_minutes(now - start))
            .unwrap_or_else(Duration::zero)
    }
}

fn whole_minutes(d: Duration) -> Duration {
    Duration::minutes(d.num_minutes().max(0))
}

/// Example: 3h 07m elapsed -> "3h 7m"
pub fn format_hours(d: Duration) -> String {
    let minutes = d.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_full_shift() {
        let mut session = PunchSession::new();
        assert!(!session.is_punched_in());

        session.punch_in(at(9, 0, 0)).unwrap();
        assert_eq!(session.started_at(), Some(at(9, 0, 0)));
        assert_eq!(session.worked(at(10, 30, 59)), Duration::minutes(90));

        assert!(session.toggle_break(at(12, 0, 0)).unwrap());
        assert!(session.is_on_break());
        assert_eq!(session.break_elapsed(at(12, 25, 10)), Duration::minutes(25));

        assert!(!session.toggle_break(at(12, 30, 0)).unwrap());
        assert_eq!(session.break_elapsed(at(12, 31, 0)), Duration::zero());

        let summary = session.punch_out(at(17, 45, 0)).unwrap();
        assert_eq!(summary.worked, Duration::minutes(8 * 60 + 45));
        assert_eq!(session.state(), PunchState::Idle);
        assert_eq!(session.last_shift(), Some(summary));
    }

    #[test]
    fn test_worked_total_kept_after_punch_out() {
        let mut session = PunchSession::new();
        assert_eq!(session.worked(at(8, 0, 0)), Duration::zero());

        session.punch_in(at(9, 0, 0)).unwrap();
        session.punch_out(at(13, 20, 30)).unwrap();
        assert_eq!(session.worked(at(18, 0, 0)), Duration::minutes(4 * 60 + 20));
        assert_eq!(format_hours(session.worked(at(23, 0, 0))), "4h 20m");

        session.punch_in(at(14, 0, 0)).unwrap();
        assert_eq!(session.last_shift(), None);
        assert_eq!(session.worked(at(14, 5, 0)), Duration::minutes(5));
    }

    #[test]
    fn test_rejected_transitions_keep_state() {
        let mut session = PunchSession::new();
        assert_eq!(session.start_break(at(9, 0, 0)), Err(TimesheetError::NotPunchedIn));
        assert_eq!(session.toggle_break(at(9, 0, 0)), Err(TimesheetError::NotPunchedIn));
        assert_eq!(session.punch_out(at(9, 0, 0)).unwrap_err(), TimesheetError::NotPunchedIn);

        session.punch_in(at(9, 0, 0)).unwrap();
        assert_eq!(session.punch_in(at(9, 5, 0)), Err(TimesheetError::AlreadyPunchedIn));
        assert_eq!(session.started_at(), Some(at(9, 0, 0)));
        assert_eq!(session.end_break(at(9, 5, 0)), Err(TimesheetError::NotOnBreak));

        session.start_break(at(10, 0, 0)).unwrap();
        assert_eq!(session.start_break(at(10, 1, 0)), Err(TimesheetError::AlreadyOnBreak));
        assert_eq!(session.break_started_at(), Some(at(10, 0, 0)));
    }

    #[test]
    fn test_punch_out_during_break() {
        let mut session = PunchSession::new();
        session.punch_in(at(9, 0, 0)).unwrap();
        session.start_break(at(11, 0, 0)).unwrap();
        let summary = session.punch_out(at(11, 10, 0)).unwrap();
        assert_eq!(summary.worked, Duration::minutes(130));
        assert!(!session.is_on_break());
    }

    #[test]
    fn test_clock_going_backwards_is_zero() {
        let mut session = PunchSession::new();
        session.punch_in(at(9, 0, 0)).unwrap();
        assert_eq!(session.worked(at(8, 59, 0)), Duration::zero());
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(Duration::zero()), "0h 0m");
        assert_eq!(format_hours(Duration::minutes(187)), "3h 7m");
        assert_eq!(format_hours(Duration::seconds(59)), "0h 0m");
    }

    #[test]
    fn test_state_wire_shape() {
        let state = PunchState::Working { started_at: at(9, 0, 0) };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"state":"working","started_at":"2025-08-04T09:00:00"}"#);
    }
}
