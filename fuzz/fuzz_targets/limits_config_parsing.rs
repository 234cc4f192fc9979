#![no_main]
use dex_router_guard::ValidationLimits;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz TOML limits parsing: arbitrary input must parse or fail cleanly,
    // and anything that parses and validates must satisfy the documented
    // floor on path length

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(limits) = toml::from_str::<ValidationLimits>(text) {
        if limits.validate().is_ok() {
            assert!(limits.max_path_length >= 2);
            assert!(limits.min_liquidity > 0);
        }
    }
});
