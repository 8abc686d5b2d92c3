use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgError {
    #[error("Collection is empty")]
    EmptyCollection,

    #[error("Employee id {id} does not belong to this organization")]
    UnknownEmployee { id: usize },

    #[error("'{name}' is not a manager")]
    NotAManager { name: String },

    #[error("'{name}' is not a director")]
    NotADirector { name: String },

    #[error("Roster contains no manager")]
    NoManager,

    #[error("No manager named '{name}' in roster")]
    UnknownManager { name: String },

    #[error("Duplicate employee name: {name}")]
    DuplicateName { name: String },

    #[error("'{owner}' references unknown employee '{name}'")]
    UnknownReference { owner: String, name: String },

    #[error("'{owner}' references '{name}', which is not a {expected}")]
    WrongReferenceKind {
        owner: String,
        name: String,
        expected: String,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl OrgError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OrgError::EmptyCollection => "Add at least one member to the team before querying it",
            OrgError::UnknownEmployee { .. }
            | OrgError::NotAManager { .. }
            | OrgError::NotADirector { .. } => {
                "Use ids returned by the same organization that hired the employee"
            }
            OrgError::NoManager | OrgError::UnknownManager { .. } => {
                "Check --manager against the roster, or add an entry with kind = \"manager\""
            }
            OrgError::DuplicateName { .. }
            | OrgError::UnknownReference { .. }
            | OrgError::WrongReferenceKind { .. } => {
                "Every name must be unique and team/managers lists must name existing entries"
            }
            OrgError::InvalidConfigValueError { .. } | OrgError::ConfigValidationError { .. } => {
                "Fix the roster file and run again"
            }
            OrgError::IoError(_) => "Check that the roster path exists and is readable",
            OrgError::SerializationError(_) | OrgError::CsvError(_) => {
                "Report output could not be produced; try --format text"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OrgError>;
