pub mod engine;
pub mod render;
pub mod transforms;

pub use crate::domain::model::{Employee, EmployeeKind};
pub use crate::domain::ports::{Person, ReportSettings, StaffMember};
pub use crate::utils::error::Result;
