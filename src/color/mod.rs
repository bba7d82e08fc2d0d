//! Shared color primitives: hex parsing, 16-bit blend math, channel permutation and Lab blending.

pub(crate) mod lab;
pub(crate) mod ops;
