//! Result type alias for quadrant operations.

use super::quadrant_error::QuadrantError;

/// Type alias for Results using QuadrantError.
///
/// # Example
///
/// ```ignore
/// use quadrant::error::QuadrantResult;
///
/// fn open_about(router: &Router) -> QuadrantResult<()> {
///     router.navigate("/about", false)
/// }
/// ```
pub type QuadrantResult<T> = Result<T, QuadrantError>;
