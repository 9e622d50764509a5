//! DTOs for interpretations_sea adapter.

/// DTO for casting an actor as a character in a movie.
#[derive(Debug, Clone)]
pub struct InterpretationCreate {
    pub movie_id: i32,
    pub actor_id: i32,
    pub character: String,
}
