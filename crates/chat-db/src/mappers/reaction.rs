//! Reaction entity <-> model mapper

use chat_core::entities::Reaction;
use chat_core::value_objects::Id;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction::new(
            Id::new(model.id),
            Id::new(model.message_id),
            Id::new(model.user_id),
            model.reaction_type,
        )
    }
}
