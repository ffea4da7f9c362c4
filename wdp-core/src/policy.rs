use crate::domain::ImageSource;

/// What to do with one source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Write the original bytes unchanged.
    CopyRaw,
    /// Decode and write a fresh JPEG at the requested quality.
    ReEncode,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::CopyRaw => "copy-raw",
            Decision::ReEncode => "re-encode",
        }
    }
}

/// Raw copy only at full quality and only for `.jpg` names (any case).
/// `.jpeg` sources are re-encoded even at 1.0.
pub fn decide(source: &ImageSource, quality: f32) -> Decision {
    if quality == 1.0 && source.name().to_lowercase().ends_with(".jpg") {
        Decision::CopyRaw
    } else {
        Decision::ReEncode
    }
}
