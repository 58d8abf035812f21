#![forbid(unsafe_code)]

//! SuccessModel v1.0 — Presentation Derivations
//!
//! Read-only consumers of the frozen model v1.0: gauge geometry,
//! dependency-graph layout, single-team comparison, step-by-step
//! breakdown, fixed-decimal formatting, and the recompute-on-change
//! calculator session.
//!
//! No model logic lives here — all probability math is delegated to
//! `success_engine`. Float appears only where output feeds SVG
//! geometry (`gauge`, `layout`); everything else stays fixed-point.

pub mod calculator;
pub mod gauge;
pub mod layout;
pub mod comparison;
pub mod breakdown;
pub mod format;
