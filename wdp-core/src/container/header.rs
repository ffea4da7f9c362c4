pub const PROTOCOL_VERSION: &str = "1.0.0";

pub const PROTOCOL_VERSION_ENTRY: &str = "protocolVersion";
pub const TOTAL_IMAGES_ENTRY: &str = "totalImages";

/// Header of a WDP container: written once, ahead of every image entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader<'a> {
    pub protocol_version: &'a str,
    pub total_images: i32,
}

impl<'a> ContainerHeader<'a> {
    pub fn new(total_images: i32) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            total_images,
        }
    }

    /// `totalImages` payload: big-endian two's complement, exactly 4 bytes.
    pub fn count_bytes(&self) -> [u8; 4] {
        self.total_images.to_be_bytes()
    }
}

/// Entry name for the image at `index`. Always `.jpg`, even for raw copies.
pub fn image_entry_name(index: usize) -> String {
    format!("image{index}.jpg")
}
