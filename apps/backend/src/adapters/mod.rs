//! SeaORM adapters. Functions return `DbErr`; route handlers map it into
//! `AppError` at the boundary.

pub mod actors_sea;
pub mod genres_sea;
pub mod interpretations_sea;
pub mod movies_sea;
