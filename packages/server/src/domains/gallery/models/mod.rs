pub mod gallery_image;

pub use gallery_image::GalleryImage;
