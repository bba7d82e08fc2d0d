//! Orchestration: configuration, effect plan, per-frame rules and frame rendering.

pub(crate) mod config;
pub(crate) mod plan;
pub(crate) mod render;
pub(crate) mod rules;
