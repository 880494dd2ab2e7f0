//! Image entity - base identity for anything with a displayable picture
//!
//! Users, Servers and Messages each own exactly one Image row that shares
//! their id. The `type` discriminator on that row says which subtype it is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Id;

/// Discriminator stored in `images.type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Image,
    User,
    Server,
    Message,
}

impl ImageKind {
    /// Discriminator value as stored in the database
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::User => "user",
            Self::Server => "server",
            Self::Message => "message",
        }
    }

    /// Whether rows of this kind extend the Image row with a subtype table
    #[inline]
    pub const fn is_subtype(self) -> bool {
        !matches!(self, Self::Image)
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "user" => Ok(Self::User),
            "server" => Ok(Self::Server),
            "message" => Ok(Self::Message),
            other => Err(DomainError::UnknownImageType(other.to_string())),
        }
    }
}

/// Image entity (row of the `images` table)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Id,
    pub kind: ImageKind,
    pub type_id: i64,
    pub img_url: String,
}

impl Image {
    /// Image record for a subtype row; `type_id` mirrors the shared id
    pub fn for_subtype(id: Id, kind: ImageKind, img_url: String) -> Self {
        Self {
            id,
            kind,
            type_id: id.into_inner(),
            img_url,
        }
    }

    /// Check whether an image url has been set
    #[inline]
    pub fn has_url(&self) -> bool {
        !self.img_url.is_empty()
    }

    /// Replace the image url
    pub fn set_img_url(&mut self, img_url: String) {
        self.img_url = img_url;
    }
}

/// Input for a standalone Image row (discriminator `image`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewImage {
    pub type_id: i64,
    pub img_url: String,
}

impl NewImage {
    pub fn new(type_id: i64, img_url: impl Into<String>) -> Self {
        Self {
            type_id,
            img_url: img_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_discriminator() {
        for kind in [
            ImageKind::Image,
            ImageKind::User,
            ImageKind::Server,
            ImageKind::Message,
        ] {
            assert_eq!(kind.as_str().parse::<ImageKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_discriminator() {
        let err = "channel".parse::<ImageKind>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownImageType(ref t) if t == "channel"));
    }

    #[test]
    fn test_is_subtype() {
        assert!(!ImageKind::Image.is_subtype());
        assert!(ImageKind::User.is_subtype());
        assert!(ImageKind::Server.is_subtype());
        assert!(ImageKind::Message.is_subtype());
    }

    #[test]
    fn test_for_subtype_mirrors_id() {
        let image = Image::for_subtype(Id::new(12), ImageKind::Server, String::new());
        assert_eq!(image.type_id, 12);
        assert_eq!(image.kind, ImageKind::Server);
        assert!(!image.has_url());
    }
}
