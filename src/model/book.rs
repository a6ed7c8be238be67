use super::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub name: String,

    /// Expected to name an existing author. Never checked.
    pub author_id: EntityId,
}

impl Book {
    pub fn new(id: EntityId, name: impl Into<String>, author_id: EntityId) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}
