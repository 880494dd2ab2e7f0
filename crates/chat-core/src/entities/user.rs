//! User entity - a chat account
//!
//! The entity only ever carries the salted hash. Hashing a plaintext password
//! happens in `chat-common` (`Authenticatable`), which writes the result
//! through [`User::set_password_hash`].

use crate::entities::image::{Image, ImageKind};
use crate::value_objects::Id;

/// User entity, extends [`Image`]
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub image: Image,
    pub username: String,
    pub email: String,
    hashed_password: String,
}

impl User {
    /// Build a User from stored values
    pub fn new(
        id: Id,
        username: String,
        email: String,
        hashed_password: String,
        img_url: String,
    ) -> Self {
        Self {
            image: Image::for_subtype(id, ImageKind::User, img_url),
            username,
            email,
            hashed_password,
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.image.id
    }

    /// Stored password hash (PHC string)
    #[inline]
    pub fn password_hash(&self) -> &str {
        &self.hashed_password
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, hashed_password: String) {
        self.hashed_password = hashed_password;
    }

    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }
}

// Hand-written so the hash never lands in logs.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("image", &self.image)
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Input for creating a user
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub img_url: String,
}

impl NewUser {
    pub fn new(username: String, email: String, hashed_password: String) -> Self {
        Self {
            username,
            email,
            hashed_password,
            img_url: String::new(),
        }
    }

    pub fn with_img_url(mut self, img_url: impl Into<String>) -> Self {
        self.img_url = img_url.into();
        self
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("img_url", &self.img_url)
            .finish_non_exhaustive()
    }
}
