use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid view month: {month} (expected 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("view year out of range: {year}")]
    InvalidViewYear { year: i32 },

    #[error("invalid year grid: columns={columns}, rows={rows} (must hold exactly 12 months)")]
    InvalidYearGrid { columns: u32, rows: u32 },

    #[error("invalid listener: {0}")]
    InvalidListener(String),

    #[error("formatting failed: {0}")]
    Format(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
