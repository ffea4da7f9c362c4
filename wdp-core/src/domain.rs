// wdp_core/src/domain.rs
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{Result, WdpError};

/// Where the bytes of an [`ImageSource`] come from.
#[derive(Clone, Debug)]
pub enum SourceData {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// One input image: a readable byte source plus the original file name,
/// which is what the raw-copy decision looks at.
#[derive(Clone, Debug)]
pub struct ImageSource {
    name: String,
    data: SourceData,
}

impl ImageSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            data: SourceData::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data: SourceData::Bytes(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.data {
            SourceData::Path(p) => Some(p),
            SourceData::Bytes(_) => None,
        }
    }

    /// Read the whole source. A file that cannot be read is fatal for the
    /// pack, so the error names the path.
    pub fn read_bytes(&self) -> Result<Cow<'_, [u8]>> {
        match &self.data {
            SourceData::Path(p) => std::fs::read(p)
                .map(Cow::Owned)
                .map_err(|source| WdpError::ReadSource {
                    path: p.clone(),
                    source,
                }),
            SourceData::Bytes(b) => Ok(Cow::Borrowed(b)),
        }
    }
}

/// Ordered sources plus the target quality. Source order is entry order.
#[derive(Clone, Debug)]
pub struct PackRequest {
    pub sources: Vec<ImageSource>,
    pub quality: f32,
}

impl PackRequest {
    pub fn new(sources: Vec<ImageSource>, quality: f32) -> Self {
        Self { sources, quality }
    }
}
