//! Path-based convenience entry points.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::entity::Entity;
use crate::error::Result;
use crate::format::DEFAULT_MAX_DEPTH;
use crate::{reader, writer};

/// The main entry point for saving and loading MUG files.
///
/// These wrap the stream-level [`write`](crate::write) and
/// [`read`](crate::read) with buffered file I/O; anything that is not a
/// plain file on disk goes through the stream functions directly.
#[derive(Debug)]
pub struct Mug;

impl Mug {
    /// Serializes `root` to a file, truncating it if it exists.
    pub fn save<P: AsRef<Path>>(path: P, root: &Entity) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer::write(&mut writer, root)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes the document stored at `path` and returns its root.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Entity> {
        Self::load_with_limit(path, DEFAULT_MAX_DEPTH)
    }

    /// [`load`](Self::load) with an explicit nesting-depth limit.
    pub fn load_with_limit<P: AsRef<Path>>(path: P, max_depth: usize) -> Result<Entity> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        reader::read_with_limit(&mut reader, max_depth)
    }
}
