//! Error handling for quadrant.
//!
//! Route parsing is total and never fails. The errors here come from the
//! edges of the crate:
//!
//! - **Navigation errors**: the history/document host refused an operation
//!   (a browser `SecurityError` on `pushState`, a missing `window`, ...)
//! - **CLI errors**: bad arguments to the `quadrant` route inspector
//! - **Unified error type**: `QuadrantError` wraps both, with a category,
//!   error code, and user message, and `QuadrantResult<T>` aliases it
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Navigation | History or document host failure | Yes |
//! | User | Invalid input on the command line | No |
//! | Configuration | Invalid environment configuration | No |

mod category;
mod cli;
mod navigation;
mod quadrant_error;
mod result;

pub use category::ErrorCategory;
pub use cli::CliError;
pub use navigation::NavigationError;
pub use quadrant_error::QuadrantError;
pub use result::QuadrantResult;
