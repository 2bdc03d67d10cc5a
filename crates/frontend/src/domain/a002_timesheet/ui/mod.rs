pub mod punch_tracker;

pub use punch_tracker::PunchTracker;
