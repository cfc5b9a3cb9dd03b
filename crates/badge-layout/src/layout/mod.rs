//! Geometry resolution
//!
//! Pure layout math: how many items fit on a physical page, and where each
//! logo sits inside an item's header container. No I/O, no shared state.

mod capacity;
mod logos;

pub use capacity::{PageCapacity, page_capacity};
pub use logos::{LogoFrame, LogoPlacement, place_logo, place_logos};
