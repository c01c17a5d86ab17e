//! # Timetable Core
//!
//! Domain model and scheduling logic for weekly class timetables.
//!
//! - **Models**: subject/teacher pairs, timetable grids and form submissions
//! - **Registry**: the deduplicated pair list shared between sections
//! - **Generator**: per-day random assignment with a lunch break
//! - **Time labels**: slot index to clock range formatting
//!
//! Nothing in this crate performs I/O; randomness is injected through
//! [`random::RandomSource`].

pub mod errors;
pub mod generator;
pub mod models;
pub mod random;
pub mod registry;
pub mod time_label;
