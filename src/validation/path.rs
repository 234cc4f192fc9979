//! Swap path well-formedness
//!
//! A path is the ordered token sequence a multi-hop swap routes through.
//! Bounding its length and rejecting repeated tokens keeps route complexity
//! caller-bounded, which is the router's sandwich-attack mitigation.

use crate::error::{Result, RouterError};
use crate::types::Address;
use crate::validation::address::ensure_exists;

/// Minimum number of hops in any swap path
pub const MIN_PATH_LENGTH: usize = 2;

/// Check that a swap path is well-formed
///
/// Rules, in order: length within `2..=max_len`, every hop a real address,
/// no address repeated anywhere in the path. The duplicate scan is all-pairs;
/// paths are short and caller-bounded, so no set structure is warranted. The
/// first duplicate in (lowest first index, then lowest second index) order is
/// the one reported.
pub fn ensure_well_formed(path: &[Address], max_len: usize) -> Result<()> {
    if path.len() < MIN_PATH_LENGTH || path.len() > max_len {
        return Err(RouterError::InvalidPath {
            length: path.len(),
            min_len: MIN_PATH_LENGTH,
            max_len,
        });
    }

    for hop in path {
        ensure_exists(*hop)?;
    }

    for i in 0..path.len() {
        for j in (i + 1)..path.len() {
            if path[i] == path[j] {
                return Err(RouterError::DuplicateAddressInPath {
                    address: path[i],
                    first: i,
                    second: j,
                });
            }
        }
    }

    Ok(())
}
