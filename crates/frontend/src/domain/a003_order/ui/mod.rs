pub mod compose;
pub mod details;
pub mod list;
