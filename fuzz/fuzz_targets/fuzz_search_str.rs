#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Text and pattern are split at the first newline
    let (text, pattern) = data.split_once('\n').unwrap_or((data, ""));
    let index = sufdex::SuffixIndex::from_text(text);
    let pattern: Vec<char> = pattern.chars().collect();

    let found = index.search(&pattern);
    assert!(found.len() <= index.len());
    assert_eq!(found.is_empty(), index.range(&pattern).is_none());
    for &offset in &found {
        assert!(index.text()[offset..].starts_with(&pattern));
    }
});
