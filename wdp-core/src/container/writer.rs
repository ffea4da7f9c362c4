use std::collections::HashSet;
use std::io::{Seek, Write};

use tracing::trace;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::header::{ContainerHeader, PROTOCOL_VERSION_ENTRY, TOTAL_IMAGES_ENTRY};
use crate::error::{Result, WdpError};

/// Storage method for every entry of a container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EntryMethod {
    #[default]
    Deflated,
    Stored,
}

impl From<EntryMethod> for CompressionMethod {
    fn from(m: EntryMethod) -> Self {
        match m {
            EntryMethod::Deflated => CompressionMethod::Deflated,
            EntryMethod::Stored => CompressionMethod::Stored,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Opened,
    HeaderWritten,
    Closed,
}

/// Forward-only writer for the named entries of a WDP container.
///
/// Call order is `open`, `write_header` once, any number of `write_entry`,
/// then `close`. Anything else yields [`WdpError::InvalidState`]. Dropping
/// the writer without `close` still finalizes the zip directory, so a pack
/// aborted midway leaves a readable container holding the entries written
/// so far.
pub struct ContainerWriter<W: Write + Seek> {
    zip: Option<ZipWriter<W>>,
    state: State,
    names: HashSet<String>,
    options: FileOptions,
}

impl<W: Write + Seek> ContainerWriter<W> {
    pub fn open(sink: W, method: EntryMethod, modified: DateTime) -> Self {
        Self {
            zip: Some(ZipWriter::new(sink)),
            state: State::Opened,
            names: HashSet::new(),
            options: FileOptions::default()
                .compression_method(method.into())
                .last_modified_time(modified),
        }
    }

    pub fn write_header(&mut self, header: &ContainerHeader<'_>) -> Result<()> {
        match self.state {
            State::Opened => {}
            State::HeaderWritten => return Err(WdpError::InvalidState("header already written")),
            State::Closed => return Err(WdpError::InvalidState("container is closed")),
        }
        self.put(PROTOCOL_VERSION_ENTRY, header.protocol_version.as_bytes())?;
        self.put(TOTAL_IMAGES_ENTRY, &header.count_bytes())?;
        self.state = State::HeaderWritten;
        Ok(())
    }

    pub fn write_entry(&mut self, name: &str, payload: &[u8]) -> Result<()> {
        match self.state {
            State::HeaderWritten => self.put(name, payload),
            State::Opened => Err(WdpError::InvalidState(
                "header must be written before image entries",
            )),
            State::Closed => Err(WdpError::InvalidState("container is closed")),
        }
    }

    /// Write the central directory and hand the sink back.
    pub fn close(&mut self) -> Result<W> {
        if self.state == State::Closed {
            return Err(WdpError::InvalidState("container is closed"));
        }
        self.state = State::Closed;
        let mut zip = self
            .zip
            .take()
            .ok_or(WdpError::InvalidState("container is closed"))?;
        Ok(zip.finish()?)
    }

    fn put(&mut self, name: &str, payload: &[u8]) -> Result<()> {
        if self.names.contains(name) {
            return Err(WdpError::DuplicateEntry(name.to_string()));
        }
        let zip = self
            .zip
            .as_mut()
            .ok_or(WdpError::InvalidState("container is closed"))?;
        zip.start_file(name, self.options)?;
        zip.write_all(payload)?;
        self.names.insert(name.to_string());
        trace!(entry = name, bytes = payload.len(), "entry written");
        Ok(())
    }
}
