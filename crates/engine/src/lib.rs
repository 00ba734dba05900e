//! Timing engine for a school-day timetable: derives the day's period/break
//! schedule from a small set of timing rules and checks the weekly
//! per-subject lecture allocation against available capacity.

pub mod allocator;
pub mod clock;
pub mod generator;
pub mod model;
pub mod validator;
