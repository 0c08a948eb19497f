//! Fuzz target for color hex parsing.
//!
//! `Rgba::from_hex` must return `None` for bad input, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use segstrip::color::Rgba;

fuzz_target!(|data: &str| {
    let _ = Rgba::from_hex(data);
    let _ = data.parse::<Rgba>();

    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    // Suffixes and prefixes at char boundaries
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
        let _ = Rgba::from_hex(&data[..i]);
    }
});
