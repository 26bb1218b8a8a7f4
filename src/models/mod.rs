// models/mod.rs - Item Model and Sample Data

mod item;
pub mod provider;

pub use item::GalleryItem;
