//! Channel entity - a named stream of messages inside a server
//!
//! Channel names are unique across all servers, not per server.

use crate::value_objects::Id;

/// Channel entity (plain table, not an Image subtype)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Id,
    pub server_id: Id,
    pub name: String,
}

impl Channel {
    pub fn new(id: Id, server_id: Id, name: String) -> Self {
        Self { id, server_id, name }
    }

    #[inline]
    pub fn belongs_to(&self, server_id: Id) -> bool {
        self.server_id == server_id
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

/// Input for creating a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChannel {
    pub server_id: Id,
    pub name: String,
}

impl NewChannel {
    pub fn new(server_id: Id, name: String) -> Self {
        Self { server_id, name }
    }
}
