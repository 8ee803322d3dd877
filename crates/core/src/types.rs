/// Backend-assigned client primary keys are numeric.
pub type ClientId = i64;

/// All calendar dates are naive `YYYY-MM-DD` dates; the workflow has no
/// time-of-day component.
pub type Date = chrono::NaiveDate;
