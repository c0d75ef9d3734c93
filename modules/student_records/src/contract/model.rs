//! Contract models for student records
//!
//! NO serde derives - these are pure domain models.

/// Student record; the id is chosen by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: Option<String>,
}
