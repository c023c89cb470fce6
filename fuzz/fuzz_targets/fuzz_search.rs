#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sufdex::{IndexConfig, SuffixIndex};

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
    case_insensitive: bool,
}

fuzz_target!(|input: Input| {
    // Search must agree with a naive scan and never index out of bounds
    let config = IndexConfig {
        case_insensitive: input.case_insensitive,
        ..Default::default()
    };
    let index = SuffixIndex::with_config(input.text.clone(), config).unwrap();

    let (text, pattern) = if input.case_insensitive {
        (input.text.to_ascii_lowercase(), input.pattern.to_ascii_lowercase())
    } else {
        (input.text, input.pattern)
    };
    let expected: Vec<usize> = (0..text.len())
        .filter(|&i| text[i..].starts_with(&pattern))
        .collect();

    assert_eq!(index.search_sorted(&pattern), expected);
    assert_eq!(index.count(&pattern), expected.len());
});
