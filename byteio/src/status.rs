//! Status-return error handling.
//!
//! Every fallible operation in this crate reports failure through
//! [Result]. Some call-sites — poll loops, FFI-adjacent glue, code that
//! treats failure as just another branch — are better served by a status
//! check than by propagation. This module adapts the one to the other:
//! [capture] converts a failure into `None` and parks the error in a
//! thread-local slot, and [last_error] retrieves it, clearing the slot.
//!
//! The adapter never reimplements an operation. Both conventions route
//! through the same primitive, so they can be mixed freely per call-site.
//!
//! # Examples
//!
//! ```rust
//! use byteio::{status, Read as _};
//!
//! let mut source = byteio::Cursor::new(&b"abc"[..]);
//! let mut buf = [0; 3];
//!
//! if status::capture(|| source.read(&mut buf)).is_none() {
//!     eprintln!("read failed: {}", status::last_error().unwrap());
//! }
//! ```

use std::cell::Cell;

use crate::{Error, Result};

thread_local! {
    /// The last error captured on this thread.
    static LAST_ERROR: Cell<Option<Error>> = Cell::new(None);
}

/// Run the given fallible operation, converting failure into a status.
///
/// On success the value is returned. On failure `None` is returned and the
/// error is parked in this thread's slot, where [last_error] can pick it
/// up; a previously parked error is replaced.
///
/// # Examples
///
/// ```rust
/// use byteio::{status, BufRead as _};
///
/// let mut source = byteio::Cursor::new(&b"ab"[..]);
///
/// // Consuming more than is buffered is an error in the result
/// // convention, a `None` in the status convention.
/// assert!(status::capture(|| source.consume(3)).is_none());
/// assert!(status::last_error().is_some());
///
/// // The source is untouched either way.
/// assert_eq!(source.fill(2)?, b"ab");
/// # Ok::<_, byteio::Error>(())
/// ```
pub fn capture<T, F>(op: F) -> Option<T>
where
    F: FnOnce() -> Result<T>,
{
    match op() {
        Ok(value) => Some(value),
        Err(error) => {
            LAST_ERROR.with(|slot| slot.set(Some(error)));
            None
        }
    }
}

/// Take the last error captured on this thread.
///
/// Returns `None` if no operation has failed since the last call. Taking
/// the error clears the slot.
pub fn last_error() -> Option<Error> {
    LAST_ERROR.with(|slot| slot.take())
}
