//! Archive sinks for generated parts.
//!
//! [`PotxPackage`](crate::PotxPackage) and [`Bundle`](crate::Bundle) only
//! need "add a named entry" and "finish"; [`ZipPackage`] writes a real ZIP,
//! [`MemoryArchive`] keeps the entries for inspection.

use std::collections::HashSet;
use std::io::{Cursor, Read, Seek, Write};

use zip::read::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::{PotxError, Result};

/// DEFLATE level used for every entry
pub const COMPRESSION_LEVEL: i64 = 9;

/// Something parts can be written into
pub trait PackageArchive {
    /// What [`PackageArchive::finish`] produces
    type Output;

    /// Add a binary entry; a path may only be written once
    fn add_bytes(&mut self, path: &str, bytes: &[u8]) -> Result<()>;

    /// Add a UTF-8 text entry
    fn add_text(&mut self, path: &str, text: &str) -> Result<()> {
        self.add_bytes(path, text.as_bytes())
    }

    /// Whether an entry exists
    fn contains(&self, path: &str) -> bool;

    /// Close the archive
    fn finish(self) -> Result<Self::Output>;
}

/// A DEFLATE-compressed ZIP archive
pub struct ZipPackage<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    paths: HashSet<String>,
}

impl ZipPackage<Cursor<Vec<u8>>> {
    /// A ZIP archive built in memory
    pub fn in_memory() -> Self {
        Self::new(Cursor::new(Vec::new()))
    }

    /// Finish and return the archive bytes
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        Ok(self.finish()?.into_inner())
    }
}

impl<W: Write + Seek> ZipPackage<W> {
    pub fn new(writer: W) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL));
        Self {
            zip: ZipWriter::new(writer),
            options,
            paths: HashSet::new(),
        }
    }
}

impl<W: Write + Seek> PackageArchive for ZipPackage<W> {
    type Output = W;

    fn add_bytes(&mut self, path: &str, bytes: &[u8]) -> Result<()> {
        if !self.paths.insert(path.to_string()) {
            return Err(PotxError::duplicate_part(path));
        }
        self.zip.start_file(path, self.options)?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}

/// Entries kept in memory, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryArchive {
    entries: Vec<(String, Vec<u8>)>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every file entry of a ZIP archive
    pub fn from_zip_bytes(bytes: &[u8]) -> Result<Self> {
        let mut zip = ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = Vec::with_capacity(zip.len());
        for i in 0..zip.len() {
            let mut file = zip.by_index(i)?;
            let name = file.name().to_string();
            if name.ends_with('/') {
                continue;
            }
            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            entries.push((name, contents));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, bytes)| bytes.as_slice())
    }

    /// An entry as text, if present and valid UTF-8
    pub fn get_text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Entry paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(p, b)| (p.as_str(), b.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PackageArchive for MemoryArchive {
    type Output = MemoryArchive;

    fn add_bytes(&mut self, path: &str, bytes: &[u8]) -> Result<()> {
        if self.contains(path) {
            return Err(PotxError::duplicate_part(path));
        }
        self.entries.push((path.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|(p, _)| p == path)
    }

    fn finish(self) -> Result<Self> {
        Ok(self)
    }
}
