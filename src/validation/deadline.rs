//! Deadline checks against ambient time
//!
//! `now` is passed in explicitly; callers read it once per validation call
//! from the execution environment (see the engine's `Clock`), never from the
//! request itself.

use crate::error::{Result, RouterError};
use crate::types::Timestamp;

/// Check that a deadline is neither expired nor unreasonably far out
///
/// Succeeds iff `now <= deadline <= now + max_extension`. The upper bound
/// saturates, so `max_extension = u64::MAX` disables it. Both violations
/// report the same error kind with the observed `now`.
pub fn ensure_valid(deadline: Timestamp, now: Timestamp, max_extension: Timestamp) -> Result<()> {
    if deadline < now || deadline > now.saturating_add(max_extension) {
        return Err(RouterError::DeadlineExpired { deadline, now });
    }
    Ok(())
}
