//! Core traits of the error model.
//!
//! - [`Diagnostic`]: the capability set every renderable error exposes
//! - [`UserFacingResultExt`]: wraps or promotes `Result` errors as user-facing
//! - [`ParseResultExt`]: attaches a source path to a failed parse
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::Diagnostic;
//! use error_trail::{Fault, UserFacingError};
//!
//! let err = UserFacingError::with_cause("Upload failed", Fault::new("503 from storage"));
//! let cause = err.inner().unwrap();
//!
//! assert_eq!(cause.message(), "503 from storage");
//! assert!(cause.as_user_facing().is_none());
//! ```

pub mod diagnostic;
pub mod result_ext;

pub use diagnostic::{AsStdError, Data, Diagnostic};
pub use result_ext::{ParseResultExt, UserFacingResultExt};
