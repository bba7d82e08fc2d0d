use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::buffer::codec::encode_raster;
use crate::buffer::raster::Raster;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, OutputFormat};
use crate::foundation::error::{GlitchError, GlitchResult};

const FRAME_PREFIX: &str = "frame_";

/// File name of frame `idx` inside a sequence directory (`frame_0007.png`).
pub fn frame_file_name(idx: FrameIndex) -> String {
    format!("{FRAME_PREFIX}{:04}.png", idx.0)
}

/// Writes each frame as a numbered PNG into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    paths: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir`, which is created on `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            paths: Vec::new(),
        }
    }

    /// Paths written so far, in push order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> GlitchResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            GlitchError::encode(format!("create frame dir '{}': {e}", self.dir.display()))
        })?;
        self.paths.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Raster) -> GlitchResult<()> {
        let path = self.dir.join(frame_file_name(idx));
        let file = File::create(&path).map_err(|e| {
            GlitchError::encode(format!("create frame file '{}': {e}", path.display()))
        })?;
        encode_raster(frame, BufWriter::new(file), OutputFormat::Png)?;
        tracing::debug!(path = %path.display(), "wrote frame");
        self.paths.push(path);
        Ok(())
    }

    fn end(&mut self) -> GlitchResult<()> {
        Ok(())
    }
}

/// List the frame files in `dir`, ordered by numeric frame index.
///
/// Files that do not follow the `frame_<n>.png` pattern are ignored.
pub fn sorted_frame_paths(dir: &Path) -> GlitchResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        GlitchError::encode(format!("read frame dir '{}': {e}", dir.display()))
    })?;

    let mut frames = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| GlitchError::encode(format!("read frame dir entry: {e}")))?
            .path();
        if let Some(n) = frame_number(&path) {
            frames.push((n, path));
        }
    }
    frames.sort_by_key(|(n, _)| *n);
    Ok(frames.into_iter().map(|(_, path)| path).collect())
}

fn frame_number(path: &Path) -> Option<u64> {
    if path.extension()? != "png" {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix(FRAME_PREFIX)?
        .parse()
        .ok()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png_seq.rs"]
mod tests;
