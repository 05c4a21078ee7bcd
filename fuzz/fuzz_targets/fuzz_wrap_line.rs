#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, u8)| {
    let (line, width) = input;
    for piece in viescheck::report::wrap_line(&line, width as usize) {
        // Width bound must hold for every non-zero width.
        if width > 0 {
            assert!(piece.chars().count() <= width as usize);
        }
    }
});
