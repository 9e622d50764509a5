//! DTOs for movies_sea adapter.

use time::Date;

/// DTO for creating a movie.
#[derive(Debug, Clone)]
pub struct MovieCreate {
    pub title: String,
    pub release_date: Date,
}

impl MovieCreate {
    pub fn new(title: impl Into<String>, release_date: Date) -> Self {
        Self {
            title: title.into(),
            release_date,
        }
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub release_date: Option<Date>,
}

impl MovieUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release_date.is_none()
    }
}
