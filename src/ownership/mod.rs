//! Single-owner access control
//!
//! One mutable owner cell gates every administrative operation. The guard
//! lives in the router's state and all mutation funnels through the two
//! guarded setters here; the surrounding execution environment serializes
//! calls, so no locking is involved.
//!
//! Renouncement sets the owner to the null sentinel. That state is terminal:
//! the sentinel never matches any caller, so no privileged operation can
//! succeed afterwards. Recovery is redeployment, which is out of scope.

use tracing::info;

use crate::error::{Result, RouterError};
use crate::types::Address;

/// Notification emitted on every owner mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Single-owner guard for privileged router operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipGuard {
    owner: Address,
}

impl OwnershipGuard {
    /// Create a guard owned by `initial_owner`
    ///
    /// Fails with `InvalidAddress` if the initial owner is the null
    /// sentinel; a guard must never start out renounced.
    pub fn new(initial_owner: Address) -> Result<(Self, OwnershipTransferred)> {
        if initial_owner.is_zero() {
            return Err(RouterError::InvalidAddress(initial_owner));
        }
        let event = OwnershipTransferred {
            previous_owner: Address::ZERO,
            new_owner: initial_owner,
        };
        info!(owner = %initial_owner, "ownership initialized");
        Ok((
            Self {
                owner: initial_owner,
            },
            event,
        ))
    }

    /// Current owner; the null sentinel once renounced
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Require that `caller` is the current owner
    ///
    /// Runs before any side effect of a guarded operation. A renounced
    /// guard rejects every caller, including the null sentinel itself.
    pub fn require_owner(&self, caller: Address) -> Result<()> {
        if self.owner.is_zero() || caller != self.owner {
            return Err(RouterError::Unauthorized { caller });
        }
        Ok(())
    }

    /// Transfer ownership to `new_owner`
    ///
    /// Restricted to the current owner; the authorization check runs before
    /// the null check on the target, and nothing mutates on failure.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<OwnershipTransferred> {
        self.require_owner(caller)?;
        if new_owner.is_zero() {
            return Err(RouterError::InvalidAddress(new_owner));
        }
        let event = OwnershipTransferred {
            previous_owner: self.owner,
            new_owner,
        };
        self.owner = new_owner;
        info!(previous = %event.previous_owner, new = %event.new_owner, "ownership transferred");
        Ok(event)
    }

    /// Renounce ownership, permanently disabling privileged operations
    pub fn renounce_ownership(&mut self, caller: Address) -> Result<OwnershipTransferred> {
        self.require_owner(caller)?;
        let event = OwnershipTransferred {
            previous_owner: self.owner,
            new_owner: Address::ZERO,
        };
        self.owner = Address::ZERO;
        info!(previous = %event.previous_owner, "ownership renounced");
        Ok(event)
    }

    /// True once ownership has been renounced
    pub fn is_renounced(&self) -> bool {
        self.owner.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address([n; 20])
    }

    #[test]
    fn test_new_rejects_zero_owner() {
        assert_eq!(
            OwnershipGuard::new(Address::ZERO).unwrap_err(),
            RouterError::InvalidAddress(Address::ZERO)
        );
    }

    #[test]
    fn test_new_emits_initial_event() {
        let (guard, event) = OwnershipGuard::new(addr(1)).unwrap();
        assert_eq!(guard.owner(), addr(1));
        assert_eq!(event.previous_owner, Address::ZERO);
        assert_eq!(event.new_owner, addr(1));
    }

    #[test]
    fn test_require_owner() {
        let (guard, _) = OwnershipGuard::new(addr(1)).unwrap();
        assert!(guard.require_owner(addr(1)).is_ok());
        assert_eq!(
            guard.require_owner(addr(2)),
            Err(RouterError::Unauthorized { caller: addr(2) })
        );
    }

    #[test]
    fn test_transfer_swaps_privileges() {
        let (mut guard, _) = OwnershipGuard::new(addr(1)).unwrap();
        let event = guard.transfer_ownership(addr(1), addr(2)).unwrap();
        assert_eq!(event.previous_owner, addr(1));
        assert_eq!(event.new_owner, addr(2));
        assert_eq!(guard.owner(), addr(2));
        assert!(guard.require_owner(addr(2)).is_ok());
        assert!(guard.require_owner(addr(1)).is_err());
    }

    #[test]
    fn test_transfer_requires_owner_before_target_check() {
        let (mut guard, _) = OwnershipGuard::new(addr(1)).unwrap();
        // Unauthorized caller with a null target: authorization error wins
        assert_eq!(
            guard.transfer_ownership(addr(2), Address::ZERO),
            Err(RouterError::Unauthorized { caller: addr(2) })
        );
        assert_eq!(guard.owner(), addr(1));
    }

    #[test]
    fn test_transfer_rejects_zero_target() {
        let (mut guard, _) = OwnershipGuard::new(addr(1)).unwrap();
        assert_eq!(
            guard.transfer_ownership(addr(1), Address::ZERO),
            Err(RouterError::InvalidAddress(Address::ZERO))
        );
        // No partial effect
        assert_eq!(guard.owner(), addr(1));
    }

    #[test]
    fn test_renounce_is_terminal() {
        let (mut guard, _) = OwnershipGuard::new(addr(1)).unwrap();
        let event = guard.renounce_ownership(addr(1)).unwrap();
        assert_eq!(event.new_owner, Address::ZERO);
        assert!(guard.is_renounced());
        // Nobody passes the guard again, not even the old owner or the
        // sentinel itself
        assert!(guard.require_owner(addr(1)).is_err());
        assert!(guard.require_owner(Address::ZERO).is_err());
        assert!(guard.transfer_ownership(addr(1), addr(2)).is_err());
        assert!(guard.renounce_ownership(Address::ZERO).is_err());
    }
}
