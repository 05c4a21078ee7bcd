#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — the parser is total by contract.
        let _ = viescheck::vies::parse_check_vat_response(s);
    }
});
