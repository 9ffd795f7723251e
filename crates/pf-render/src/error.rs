//! Error types for mapping and frame scheduling.

use pf_core::Generation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid canvas size: {width} x {height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Frame for generation {frame} replayed over background of generation {background}")]
    StaleGeneration {
        frame: Generation,
        background: Generation,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
