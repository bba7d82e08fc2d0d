use std::path::Path;

/// Largest value of a 16-bit color channel.
pub const MAXC: u32 = (1 << 16) - 1;

/// JPEG quality used for final encodes.
pub const JPEG_QUALITY: u8 = 80;

/// Zero-based frame index. Still images render as frame 1.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Index used when rendering a single still image.
    pub const STILL: FrameIndex = FrameIndex(1);

    /// Whether the index is even.
    pub fn is_even(self) -> bool {
        self.0.is_multiple_of(2)
    }

    /// Whether the index is a multiple of `period`. A zero period never matches.
    pub fn is_multiple_of(self, period: u64) -> bool {
        period != 0 && self.0.is_multiple_of(period)
    }
}

/// A color channel addressable by channel-oriented effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Channel {
    /// Byte offset of the channel inside an RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Parse `red`, `green` or `blue` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Channel::Red),
            "green" => Some(Channel::Green),
            "blue" => Some(Channel::Blue),
            _ => None,
        }
    }
}

/// Horizontal walk or permutation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward smaller x, or the `(r,g,b) -> (g,b,r)` permutation.
    Left,
    /// Toward larger x, or the `(r,g,b) -> (b,r,g)` permutation.
    Right,
}

impl Direction {
    /// Map the configuration flag (`true` means left) to a direction.
    pub fn from_left_flag(left: bool) -> Self {
        if left { Direction::Left } else { Direction::Right }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Output container for a finished frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG.
    #[default]
    Png,
    /// JPEG at [`JPEG_QUALITY`].
    Jpeg,
}

impl OutputFormat {
    /// Infer the format from a file extension (`.jpg`/`.jpeg` or `.png`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
