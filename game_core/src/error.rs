use std::fmt;

/// Errors raised by the simulation core
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoreError {
    /// Tried to rescale a vector whose current length is zero or not finite
    InvalidVectorOperation { target: f32 },
    /// Arena dimensions must be finite and positive
    InvalidArena { width: f32, height: f32 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidVectorOperation { target } => {
                write!(f, "cannot rescale a zero-length vector to length {}", target)
            }
            CoreError::InvalidArena { width, height } => {
                write!(f, "invalid arena size {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for CoreError {}
