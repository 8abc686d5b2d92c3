pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::roster::RosterFile;
pub use self::core::{
    engine::{ReportEngine, ReportOptions},
    render::{render, OutputFormat},
};
pub use domain::{
    model::{DirectorId, Employee, EmployeeId, EmployeeKind, ManagerId},
    organization::Organization,
    ports::{Person, ReportSettings, StaffMember},
    report::OrgReport,
};
pub use utils::error::{OrgError, Result};
