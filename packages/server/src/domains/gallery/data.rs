use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::gallery::models::GalleryImage;

/// Gallery image GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A photo in the society gallery")]
pub struct GalleryImageData {
    /// Unique identifier
    pub id: String,

    /// Image URL
    pub image: String,

    /// Caption shown under the image
    pub caption: Option<String>,

    /// Whether visitors can see this image
    pub is_active: bool,
}

impl From<GalleryImage> for GalleryImageData {
    fn from(image: GalleryImage) -> Self {
        Self {
            id: image.id.to_string(),
            image: image.image,
            caption: image.caption,
            is_active: image.is_active,
        }
    }
}
