// models/item.rs - Gallery Item Model

/// A single entry in the sample data set.
///
/// `image` is a stable seed consumed by the placeholder synthesizer in
/// [`crate::models::provider`], standing in for a bundled photo asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Short display id, rendered bold in list rows and large in the detail pane
    pub id: String,
    /// Human-readable caption shown next to the id in list rows
    pub title: String,
    /// Seed for the synthesized placeholder image
    pub image: u32,
}

impl GalleryItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, image: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image,
        }
    }
}
