//! Chat identity type for core messages.

/// Chat (group, channel or private) a message came from or goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
}

impl Chat {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
