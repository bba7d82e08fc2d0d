//! Shared primitives: core value types, the error taxonomy, integer color math and the RNG handle.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
pub(crate) mod rng;
