pub mod actors;
pub mod genres;
pub mod interpretations;
pub mod movie_genres;
pub mod movies;

pub use actors::Entity as Actors;
pub use actors::Model as Actor;
pub use genres::Entity as Genres;
pub use genres::Model as Genre;
pub use interpretations::Entity as Interpretations;
pub use interpretations::Model as Interpretation;
pub use movie_genres::Entity as MovieGenres;
pub use movies::Entity as Movies;
pub use movies::Model as Movie;
