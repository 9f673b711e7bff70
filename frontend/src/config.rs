//! Compile-time settings for the meme editor.

/// Template listing endpoint, fetched once when the editor mounts.
pub const TEMPLATES_URL: &str = "https://api.imgflip.com/get_memes";

/// Image shown before the user asks for a random template.
pub const DEFAULT_IMAGE_URL: &str = "https://i.imgflip.com/1bij.jpg";

/// Device-pixel multiplier applied to the exported raster.
pub const EXPORT_SCALE: f64 = 2.0;
pub const EXPORT_MIME: &str = "image/png";
pub const EXPORT_FILE_PREFIX: &str = "meme-";
pub const EXPORT_FILE_EXTENSION: &str = ".png";

pub const EXPORT_FAILED_ALERT: &str = "Failed to download meme. Please try again.";
pub const EXPORT_DONE_TOAST: &str = "Meme downloaded.";

/// Outline drawn around exported caption glyphs, matching the preview's text shadow.
pub const CAPTION_OUTLINE_COLOR: &str = "#000";
pub const CAPTION_FALLBACK_FONT: &str = "bold 32px Impact, sans-serif";
pub const CAPTION_FALLBACK_COLOR: &str = "#fff";
pub const CAPTION_LINE_HEIGHT: f64 = 1.2;

pub const TOAST_DURATION_MS: u32 = 3000;
