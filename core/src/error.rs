use alloc::string::String;
use thiserror::Error;

use crate::Tick;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Animation property {name:?} must be a finite number")]
    NonFiniteValue { name: String },
    #[error("Animation is not running")]
    NotRunning,
    #[error("Stopped animation must be at tick 0 with no properties, got tick {tick}")]
    StaleState { tick: Tick },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Color has no hex digits")]
    MissingDigits,
    #[error("Color must have 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("Color contains a non-hex digit")]
    InvalidDigit,
}

pub type Result<T> = core::result::Result<T, AnimationError>;
