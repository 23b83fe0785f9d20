//! Grid cell model for color-clicking puzzles.
//!
//! A [`Cell`] owns its coordinates, its color, a one-way click state and an
//! [`AnimationState`] the board drives frame by frame. Boards, rendering and
//! win conditions live outside this crate.

#![no_std]

extern crate alloc;

pub use animation::*;
pub use cell::*;
pub use click::*;
pub use color::*;
pub use error::*;
pub use types::*;

mod animation;
mod cell;
mod click;
mod color;
mod error;
mod types;
