#![no_main]
use dex_router_guard::{validation, Address, RouterError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the path scan: any byte stream becomes a hop list, the check must
    // never panic and any reported duplicate must actually exist at the
    // reported positions

    if data.is_empty() {
        return;
    }
    let max_len = (data[0] as usize % 32).max(2);
    let path: Vec<Address> = data[1..]
        .chunks_exact(20)
        .map(|chunk| {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(chunk);
            Address(bytes)
        })
        .collect();

    match validation::ensure_path_well_formed(&path, max_len) {
        Ok(()) => {
            assert!(path.len() >= 2 && path.len() <= max_len);
        }
        Err(RouterError::DuplicateAddressInPath { address, first, second }) => {
            assert!(first < second && second < path.len());
            assert_eq!(path[first], address);
            assert_eq!(path[second], address);
        }
        Err(RouterError::InvalidPath { length, .. }) => {
            assert_eq!(length, path.len());
        }
        Err(RouterError::InvalidAddress(a)) => {
            assert!(a.is_zero());
        }
        Err(_) => unreachable!("path check raised an unrelated error"),
    }
});
