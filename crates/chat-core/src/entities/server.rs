//! Server entity - a group of channels, optionally a direct-message server

use crate::entities::image::{Image, ImageKind};
use crate::value_objects::Id;

/// Server entity, extends [`Image`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub image: Image,
    pub name: String,
    /// Marks direct-message servers
    pub dm: bool,
    pub owner_id: Id,
}

impl Server {
    pub fn new(id: Id, name: String, dm: bool, owner_id: Id, img_url: String) -> Self {
        Self {
            image: Image::for_subtype(id, ImageKind::Server, img_url),
            name,
            dm,
            owner_id,
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.image.id
    }

    #[inline]
    pub fn is_dm(&self) -> bool {
        self.dm
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.owner_id == user_id
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub fn transfer_ownership(&mut self, new_owner: Id) {
        self.owner_id = new_owner;
    }
}

/// Input for creating a server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServer {
    pub name: String,
    pub dm: bool,
    pub owner_id: Id,
    pub img_url: String,
}

impl NewServer {
    pub fn new(name: String, owner_id: Id) -> Self {
        Self {
            name,
            dm: false,
            owner_id,
            img_url: String::new(),
        }
    }

    /// Mark the new server as a direct-message server
    pub fn direct_message(mut self) -> Self {
        self.dm = true;
        self
    }

    pub fn with_img_url(mut self, img_url: impl Into<String>) -> Self {
        self.img_url = img_url.into();
        self
    }
}
