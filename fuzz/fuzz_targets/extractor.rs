#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use readstash::extractor::{ExtractLimits, extract};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);
    let url = Url::parse("https://example.com").unwrap();

    // The extractor should never panic regardless of input
    let _ = extract(&html, &url, &ExtractLimits::default());
});
