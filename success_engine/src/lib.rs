#![forbid(unsafe_code)]

/// Model v1 — Immutable. Behavioral changes require model_v2.
pub const MODEL_VERSION: u32 = 1;

pub mod arithmetic;
pub mod domain;
pub mod graph;
pub mod model;
pub mod validate;
pub mod hashing;
