pub mod grid;
pub mod pair;
pub mod section;
pub mod submission;
