use crate::color::ops::{Rgba8, Rgba16, over16};
use crate::foundation::error::{GlitchError, GlitchResult};
use crate::foundation::math::{expand_u8, narrow_u16};

/// A premultiplied RGBA8 pixel grid with bounds `[0, width) x [0, height)`.
///
/// Coordinates are signed so effects can address pixels past the edges: reads there yield
/// transparent black and writes are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// A fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// A raster filled with one premultiplied color.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> Self {
        Self {
            width,
            height,
            data: px.repeat(width as usize * height as usize),
        }
    }

    /// Wrap premultiplied, row-major, tightly packed RGBA8 bytes.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> GlitchResult<Self> {
        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| GlitchError::validation("raster size overflow"))?;
        if data.len() != expected_len {
            return Err(GlitchError::validation(
                "raster data must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width as a signed coordinate.
    pub fn w(&self) -> i32 {
        self.width as i32
    }

    /// Height as a signed coordinate.
    pub fn h(&self) -> i32 {
        self.height as i32
    }

    /// Premultiplied RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume into premultiplied RGBA8 bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Whether `(x, y)` lies inside the bounds.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.w() && y < self.h()
    }

    fn idx(&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// 8-bit pixel; transparent black outside the bounds.
    pub fn at(&self, x: i32, y: i32) -> Rgba8 {
        if !self.contains(x, y) {
            return [0; 4];
        }
        let i = self.idx(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// 16-bit pixel (`v * 0x101` per channel); zero outside the bounds.
    pub fn at16(&self, x: i32, y: i32) -> Rgba16 {
        self.at(x, y).map(expand_u8)
    }

    /// Store an 8-bit pixel; ignored outside the bounds.
    pub fn set(&mut self, x: i32, y: i32, px: Rgba8) {
        if !self.contains(x, y) {
            return;
        }
        let i = self.idx(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Store a 16-bit pixel, keeping the high byte of each channel.
    pub fn set16(&mut self, x: i32, y: i32, px: Rgba16) {
        self.set(x, y, px.map(narrow_u16));
    }

    /// Replace every pixel of `[x0, x1) x [y0, y1)` (clipped to the bounds) with `px`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, px: Rgba8) {
        for y in y0.max(0)..y1.min(self.h()) {
            for x in x0.max(0)..x1.min(self.w()) {
                self.set(x, y, px);
            }
        }
    }

    /// Copy every pixel from `src`, which must share the same extent.
    pub fn copy_from(&mut self, src: &Raster) -> GlitchResult<()> {
        if src.width != self.width || src.height != self.height {
            return Err(GlitchError::validation(
                "copy_from expects rasters of equal extent",
            ));
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Composite `src` over `self` through a uniform mask of 16-bit alpha `mask`.
    ///
    /// Destination pixel `p` samples `src` at `p + offset`; destination pixels whose sample falls
    /// outside `src` are left untouched.
    pub fn draw_over(&mut self, src: &Raster, offset: (i32, i32), mask: u32) {
        let (dx, dy) = offset;
        let y_start = 0.max(-dy);
        let y_end = self.h().min(src.h() - dy);
        let x_start = 0.max(-dx);
        let x_end = self.w().min(src.w() - dx);
        for y in y_start..y_end {
            for x in x_start..x_end {
                let out = over16(self.at16(x, y), src.at16(x + dx, y + dy), mask);
                self.set16(x, y, out);
            }
        }
    }

    /// Visit every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Rgba8)> + '_ {
        let w = self.width as usize;
        self.data.chunks_exact(4).enumerate().map(move |(i, px)| {
            (
                (i % w) as i32,
                (i / w) as i32,
                [px[0], px[1], px[2], px[3]],
            )
        })
    }

    /// Apply `f` to every pixel in place.
    pub fn map_in_place(&mut self, mut f: impl FnMut(Rgba8) -> Rgba8) {
        for px in self.data.chunks_exact_mut(4) {
            let out = f([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/raster.rs"]
mod tests;
