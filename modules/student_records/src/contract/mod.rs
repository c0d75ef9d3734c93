//! Contract layer - transport-agnostic student model

pub mod model;

pub use model::Student;
