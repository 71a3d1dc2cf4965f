pub mod timestamp;
pub mod worked_hours;
