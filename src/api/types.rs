use serde::{Deserialize, Serialize};

/// Number of records the listing endpoint returns per page.
///
/// This is fixed by the remote source, not configurable here.
pub const PAGE_SIZE: usize = 30;

/// One photo entry from the listing API.
///
/// Records are immutable once fetched. `id` identifies the source image, but
/// the listing has been observed to repeat ids across pages, so nothing may
/// assume uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub author: String,
    /// Full-resolution pixel width, always positive.
    pub width: u32,
    /// Full-resolution pixel height, always positive.
    pub height: u32,
    /// Page on picsum.photos describing the photo.
    pub url: String,
    /// Direct URL of the full-resolution image bytes.
    pub download_url: String,
}

impl ImageRecord {
    /// Aspect ratio (width / height) of the source image.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// URL of a server-side resized variant at `target_width` pixels,
    /// preserving the aspect ratio. Used for grid thumbnails so the full
    /// multi-megapixel original never has to be decoded.
    pub fn thumb_url(&self, target_width: u32) -> String {
        let width = self.width.max(1);
        let height = (u64::from(self.height) * u64::from(target_width) / u64::from(width)).max(1);
        format!(
            "https://picsum.photos/id/{}/{}/{}",
            self.id, target_width, height
        )
    }
}
