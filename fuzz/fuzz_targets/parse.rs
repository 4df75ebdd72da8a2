#![no_main]

use libfuzzer_sys::fuzz_target;
use phpdoc_types::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 must come back as an error, never a panic
    if let Ok(tokens) = lexer::tokenize_bytes(data) {
        if let Ok(ty) = parser::parse_type(tokens) {
            // Whatever parses must render to something that parses again
            let rendered = ty.to_string();
            if let Err(err) = phpdoc_types::parse_type(&rendered) {
                panic!("{rendered:?} does not reparse: {err}");
            }
        }
    }
});
