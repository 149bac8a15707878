//! JSON-backed layout source.
//!
//! Reads a serialized layout dump (one [`PageLayout`] per page) produced by
//! an external extraction run. Undecodable input is a document-level
//! failure; there is no partial recovery at this stage.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{LayoutSource, PageLayout};

/// A layout dump loaded fully into memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLayoutSource {
    /// Pages in source order.
    pages: Vec<PageLayout>,
}

impl JsonLayoutSource {
    /// Create a source directly from page layouts.
    pub fn new(pages: Vec<PageLayout>) -> Self {
        Self { pages }
    }

    /// Load a layout dump from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Decode a layout dump from raw JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let pages: Vec<PageLayout> = serde_json::from_slice(data)?;
        Ok(Self { pages })
    }
}

impl LayoutSource for JsonLayoutSource {
    fn page_count(&self) -> Result<u32> {
        Ok(self.pages.len() as u32)
    }

    fn load_page(&self, number: u32) -> Result<PageLayout> {
        if number == 0 {
            return Err(Error::PageOutOfRange(number, self.pages.len() as u32));
        }
        self.pages
            .get((number - 1) as usize)
            .cloned()
            .ok_or_else(|| Error::PageOutOfRange(number, self.pages.len() as u32))
    }
}
