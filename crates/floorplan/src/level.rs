use crate::LevelId;
use serde::{Deserialize, Serialize};

/// A floor level of the museum.
///
/// Levels are ordered by `elevation`: 0 is the ground floor, positive values
/// are upper floors, negative values basements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
    pub elevation: i32,
}

impl Level {
    pub fn new(name: impl Into<String>, elevation: i32) -> Self {
        Self {
            id: LevelId::new(),
            name: name.into(),
            elevation,
        }
    }
}
