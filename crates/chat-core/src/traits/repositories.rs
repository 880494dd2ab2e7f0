//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Every `delete` removes the entity together with everything it owns, in a
//! single transaction. Constraint violations (unique, not-null, foreign key)
//! are reported by the storage engine and surface as the matching
//! [`DomainError`] variant; nothing is checked up front.

use async_trait::async_trait;

use crate::dict::{ChannelTree, MessageTree, ServerTree, UserTree};
use crate::entities::{
    Channel, Image, ImageRecord, Message, NewChannel, NewImage, NewMessage, NewReaction,
    NewServer, NewUser, Reaction, Server, User,
};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Image Repository
// ============================================================================

#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Load a row of the base table and resolve it to its concrete subtype
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ImageRecord>>;

    /// Create a standalone image (discriminator `image`)
    async fn create(&self, image: &NewImage) -> RepoResult<Image>;

    /// Replace the url of any image, including subtype images
    async fn update_img_url(&self, id: Id, img_url: &str) -> RepoResult<()>;

    /// Delete an image row; subtype rows sharing the id go with it
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user together with its image row
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Persist username, email and image url
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Replace the stored password hash
    async fn update_password(&self, id: Id, hashed_password: &str) -> RepoResult<()>;

    /// Delete a user with its owned servers, authored messages and reactions
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Load the user with owned servers and authored messages fully expanded
    async fn load_tree(&self, id: Id) -> RepoResult<Option<UserTree>>;
}

// ============================================================================
// Server Repository
// ============================================================================

#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Find server by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Server>>;

    /// List servers owned by a user
    async fn find_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Server>>;

    /// Create a new server together with its image row
    async fn create(&self, server: &NewServer) -> RepoResult<Server>;

    /// Persist name, DM flag, owner and image url
    async fn update(&self, server: &Server) -> RepoResult<()>;

    /// Delete a server with its channels and everything in them
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Load the server with channels, messages and reactions expanded
    async fn load_tree(&self, id: Id) -> RepoResult<Option<ServerTree>>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Channel>>;

    /// List all channels in a server
    async fn find_by_server(&self, server_id: Id) -> RepoResult<Vec<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &NewChannel) -> RepoResult<Channel>;

    /// Persist name and server
    async fn update(&self, channel: &Channel) -> RepoResult<()>;

    /// Delete a channel with its messages and their reactions
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Load the channel with messages and reactions expanded
    async fn load_tree(&self, id: Id) -> RepoResult<Option<ChannelTree>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Message>>;

    /// List messages in a channel, oldest first
    async fn find_by_channel(&self, channel_id: Id) -> RepoResult<Vec<Message>>;

    /// List messages written by a user, oldest first
    async fn find_by_author(&self, user_id: Id) -> RepoResult<Vec<Message>>;

    /// Create a new message together with its image row
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;

    /// Persist text and image url
    async fn update(&self, message: &Message) -> RepoResult<()>;

    /// Delete a message with its reactions
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Load the message with its reactions
    async fn load_tree(&self, id: Id) -> RepoResult<Option<MessageTree>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find reaction by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Reaction>>;

    /// List reactions on a message
    async fn find_by_message(&self, message_id: Id) -> RepoResult<Vec<Reaction>>;

    /// List reactions made by a user
    async fn find_by_user(&self, user_id: Id) -> RepoResult<Vec<Reaction>>;

    /// Create a new reaction
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction>;

    /// Delete a reaction
    async fn delete(&self, id: Id) -> RepoResult<()>;
}
