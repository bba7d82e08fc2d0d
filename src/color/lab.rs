//! CIE L*a*b* conversions (D65 white point) used by the Noise effect.
//!
//! `L` is kept in `[0, 1]` rather than `[0, 100]`; only blending happens in this space so the
//! scale is irrelevant to callers.

const WHITE_D65: [f64; 3] = [0.95047, 1.0, 1.08883];

/// A color in CIE L*a*b*.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// Lightness, `0..=1` for in-gamut colors.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

/// Decode one sRGB-encoded channel (`0..=1`) to linear light.
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light channel to sRGB.
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn linear_to_xyz([r, g, b]: [f64; 3]) -> [f64; 3] {
    [
        0.412_390_799_265_959_5 * r + 0.357_584_339_383_878 * g + 0.180_480_788_401_834_3 * b,
        0.212_639_005_871_510_4 * r + 0.715_168_678_767_756 * g + 0.072_192_315_360_733_7 * b,
        0.019_330_818_715_591_85 * r + 0.119_194_779_794_626 * g + 0.950_532_152_249_660_6 * b,
    ]
}

fn xyz_to_linear([x, y, z]: [f64; 3]) -> [f64; 3] {
    [
        3.240_969_941_904_521 * x - 1.537_383_177_570_093_5 * y - 0.498_610_760_293_003_3 * z,
        -0.969_243_636_280_879_8 * x + 1.875_967_501_507_720_7 * y + 0.041_555_057_407_175_6 * z,
        0.055_630_079_696_993_6 * x - 0.203_976_958_888_976_57 * y + 1.056_971_514_242_878_6 * z,
    ]
}

fn lab_f(t: f64) -> f64 {
    if t > 6.0 / 29.0 * 6.0 / 29.0 * 6.0 / 29.0 {
        t.cbrt()
    } else {
        t / 3.0 * 29.0 / 6.0 * 29.0 / 6.0 + 4.0 / 29.0
    }
}

fn lab_finv(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * 6.0 / 29.0 * 6.0 / 29.0 * (t - 4.0 / 29.0)
    }
}

impl Lab {
    /// Convert linear RGB to Lab.
    pub fn from_linear_rgb(rgb: [f64; 3]) -> Self {
        let [x, y, z] = linear_to_xyz(rgb);
        let fy = lab_f(y / WHITE_D65[1]);
        Self {
            l: 1.16 * fy - 0.16,
            a: 5.0 * (lab_f(x / WHITE_D65[0]) - fy),
            b: 2.0 * (fy - lab_f(z / WHITE_D65[2])),
        }
    }

    /// Convert sRGB-encoded channels (`0..=1`) to Lab.
    pub fn from_srgb([r, g, b]: [f64; 3]) -> Self {
        Self::from_linear_rgb([srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)])
    }

    /// Convert back to sRGB-encoded channels. Out-of-gamut values are not clamped.
    pub fn to_srgb(self) -> [f64; 3] {
        let l = (self.l + 0.16) / 1.16;
        let xyz = [
            WHITE_D65[0] * lab_finv(l + 0.2 * self.a),
            WHITE_D65[1] * lab_finv(l),
            WHITE_D65[2] * lab_finv(l - 0.5 * self.b),
        ];
        xyz_to_linear(xyz).map(linear_to_srgb)
    }

    /// Linear interpolation toward `other` by `t`.
    pub fn lerp(self, other: Lab, t: f64) -> Lab {
        Lab {
            l: self.l + t * (other.l - self.l),
            a: self.a + t * (other.a - self.a),
            b: self.b + t * (other.b - self.b),
        }
    }
}

/// Blend an sRGB color toward a linear-RGB color in Lab space, returning sRGB.
pub fn blend_lab(base_srgb: [f64; 3], target_linear: [f64; 3], t: f64) -> [f64; 3] {
    Lab::from_srgb(base_srgb)
        .lerp(Lab::from_linear_rgb(target_linear), t)
        .to_srgb()
}

#[cfg(test)]
#[path = "../../tests/unit/color/lab.rs"]
mod tests;
