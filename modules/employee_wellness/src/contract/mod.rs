//! Contract layer - transport-agnostic employee and program models

pub mod model;

pub use model::{Employee, Program};
