//! DTOs for actors_sea adapter.

use time::Date;

/// DTO for creating an actor.
#[derive(Debug, Clone)]
pub struct ActorCreate {
    pub name: String,
    pub surname: String,
    pub dob: Date,
    pub gender: Option<String>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ActorUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub dob: Option<Date>,
    pub gender: Option<String>,
}

impl ActorUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.dob.is_none() && self.gender.is_none()
    }
}
