//! Constructor argument validation.

use crate::traits::Diagnostic;
use core::fmt::{self, Display};

/// An argument passed to a constructor violated its documented contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A required text argument was empty or whitespace only.
    Required { name: &'static str },
    /// A numeric argument was outside its documented range.
    OutOfRange { name: &'static str, value: usize, min: usize },
}

impl ArgumentError {
    /// Name of the offending argument.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required { name } | Self::OutOfRange { name, .. } => name,
        }
    }
}

impl Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { name } => write!(f, "{name} is required and cannot be blank"),
            Self::OutOfRange { name, value, min } => {
                write!(f, "{name} is out of range: {value} (minimum is {min})")
            }
        }
    }
}

impl core::error::Error for ArgumentError {}

impl Diagnostic for ArgumentError {}

/// Fails with [`ArgumentError::Required`] when `value` is blank.
#[inline]
pub(crate) fn required(value: &str, name: &'static str) -> Result<(), ArgumentError> {
    if crate::traits::diagnostic::is_blank(value) {
        return Err(ArgumentError::Required { name });
    }
    Ok(())
}

/// Fails with [`ArgumentError::OutOfRange`] when `value < min`.
#[inline]
pub(crate) fn at_least(value: usize, min: usize, name: &'static str) -> Result<(), ArgumentError> {
    if value < min {
        return Err(ArgumentError::OutOfRange { name, value, min });
    }
    Ok(())
}
