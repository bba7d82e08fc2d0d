//! Frame sinks.
//!
//! Sinks consume rendered frames in index order and are driven by `Glitcher::render_animation`.

/// Looping animated GIF output.
pub mod gif;
/// Numbered PNG files in a directory.
pub mod png_seq;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
