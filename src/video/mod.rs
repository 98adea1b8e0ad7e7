mod metadata;
mod thumbnails;

pub use metadata::{DurationProbe, FixedProbe, ProbeError};
pub use thumbnails::{PlaceholderThumbnailer, ThumbnailProvider, ThumbnailStrip, ThumbnailTask};
