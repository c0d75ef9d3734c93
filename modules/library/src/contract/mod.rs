//! Contract layer - transport-agnostic user and book models

pub mod model;

pub use model::{Book, User};
