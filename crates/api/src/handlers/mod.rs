pub mod pairs;
pub mod timetable;
