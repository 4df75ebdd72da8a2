#![no_main]

use libfuzzer_sys::fuzz_target;
use phpdoc_types::TagValueParser;

fuzz_target!(|data: &str| {
    let parser = TagValueParser::default();
    let _ = parser.parse_param_str(data);
    let _ = parser.parse_return_str(data);
});
