pub mod health;
pub mod pairs;
pub mod timetable;
