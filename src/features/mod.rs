pub mod hours;
pub mod reminder;
pub mod todos;
