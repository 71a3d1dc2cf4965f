pub mod directory;
pub mod reconciler;
pub mod view_builder;

pub use directory::{EmployeeDirectory, SeedReport};
pub use reconciler::AttendanceReconciler;
pub use view_builder::{AttendanceSheet, AttendanceViewBuilder};
