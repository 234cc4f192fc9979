//! Address existence and protected-address checks

use crate::error::{Result, RouterError};
use crate::types::Address;

/// Check that an address is not the null sentinel
pub fn ensure_exists(address: Address) -> Result<()> {
    if address.is_zero() {
        return Err(RouterError::InvalidAddress(address));
    }
    Ok(())
}

/// Check that an address does not match a protected infrastructure address
///
/// Used to block transfers targeted at the factory or the router itself.
pub fn ensure_not_protected(address: Address, protected: Address) -> Result<()> {
    if address == protected {
        return Err(RouterError::InvalidAddress(address));
    }
    Ok(())
}

/// Check that two tokens form a valid pair: both exist and are distinct
pub fn ensure_token_pair(token_a: Address, token_b: Address) -> Result<()> {
    ensure_exists(token_a)?;
    ensure_exists(token_b)?;
    if token_a == token_b {
        return Err(RouterError::InvalidAddress(token_a));
    }
    Ok(())
}

/// Check that a recipient exists and is neither the factory nor the router
pub fn ensure_recipient(recipient: Address, factory: Address, router: Address) -> Result<()> {
    ensure_exists(recipient)?;
    ensure_not_protected(recipient, factory)?;
    ensure_not_protected(recipient, router)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address([n; 20])
    }

    #[test]
    fn test_exists_rejects_zero_only() {
        assert_eq!(
            ensure_exists(Address::ZERO),
            Err(RouterError::InvalidAddress(Address::ZERO))
        );
        assert!(ensure_exists(addr(1)).is_ok());
    }

    #[test]
    fn test_not_protected() {
        assert!(ensure_not_protected(addr(1), addr(2)).is_ok());
        assert_eq!(
            ensure_not_protected(addr(2), addr(2)),
            Err(RouterError::InvalidAddress(addr(2)))
        );
    }

    #[test]
    fn test_token_pair_rejects_identical() {
        assert!(ensure_token_pair(addr(1), addr(2)).is_ok());
        assert_eq!(
            ensure_token_pair(addr(1), addr(1)),
            Err(RouterError::InvalidAddress(addr(1)))
        );
    }

    #[test]
    fn test_token_pair_rejects_zero_first() {
        // Existence is checked before distinctness, token A first
        assert_eq!(
            ensure_token_pair(Address::ZERO, Address::ZERO),
            Err(RouterError::InvalidAddress(Address::ZERO))
        );
        assert_eq!(
            ensure_token_pair(addr(1), Address::ZERO),
            Err(RouterError::InvalidAddress(Address::ZERO))
        );
    }

    #[test]
    fn test_recipient_blocks_infra_addresses() {
        let factory = addr(0xfa);
        let router = addr(0xf0);
        assert!(ensure_recipient(addr(1), factory, router).is_ok());
        assert_eq!(
            ensure_recipient(factory, factory, router),
            Err(RouterError::InvalidAddress(factory))
        );
        assert_eq!(
            ensure_recipient(router, factory, router),
            Err(RouterError::InvalidAddress(router))
        );
        assert_eq!(
            ensure_recipient(Address::ZERO, factory, router),
            Err(RouterError::InvalidAddress(Address::ZERO))
        );
    }
}
