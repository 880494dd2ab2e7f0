//! Reaction entity - an emoji reaction on a message

use crate::value_objects::Id;

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Id,
    pub message_id: Id,
    pub user_id: Id,
    /// Emoji code, stored in the `type` column
    pub reaction_type: String,
}

impl Reaction {
    pub fn new(id: Id, message_id: Id, user_id: Id, reaction_type: String) -> Self {
        Self {
            id,
            message_id,
            user_id,
            reaction_type,
        }
    }

    /// Check if reaction uses a specific emoji code
    #[inline]
    pub fn is_type(&self, reaction_type: &str) -> bool {
        self.reaction_type == reaction_type
    }
}

/// Input for creating a reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub message_id: Id,
    pub user_id: Id,
    pub reaction_type: String,
}

impl NewReaction {
    pub fn new(message_id: Id, user_id: Id, reaction_type: String) -> Self {
        Self {
            message_id,
            user_id,
            reaction_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_type() {
        let reaction = Reaction::new(Id::new(1), Id::new(2), Id::new(3), ":thumbsup:".to_string());
        assert!(reaction.is_type(":thumbsup:"));
        assert!(!reaction.is_type(":fire:"));
    }
}
