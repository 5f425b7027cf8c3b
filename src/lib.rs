//! Framepack - Library for assembling image sequences into animated GIFs
//! and sprite sheets
//!
//! This library provides functionality to:
//! - Collect frames from a folder of images or from a horizontal strip image
//! - Composite frames onto a uniform transparent canvas and encode them as
//!   an animated GIF with per-frame timing and loop control
//! - Lay out a folder of images as a single-row sprite sheet with centered,
//!   size-normalized cells

pub mod animation;
pub mod cli;
pub mod collect;
pub mod error;
pub mod sheet;
pub mod sort;
