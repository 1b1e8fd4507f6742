use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("holiday '{0}' not found")]
    HolidayNotFound(String)
}
