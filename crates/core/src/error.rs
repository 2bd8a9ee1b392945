use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid weekday index {0} (expected 0-6, 0 = Sunday)")]
    InvalidWeekday(i64),

    #[error("Invalid cutoff format: {0:?} (expected HH:MM:SS)")]
    InvalidCutoffFormat(String),

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
