#![no_main]

use libfuzzer_sys::fuzz_target;
use chronoscope::analysis::analyze;
use chronoscope::ingest::parse_samples;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string
    if let Ok(input) = std::str::from_utf8(data) {
        // Neither parsing nor analysis may panic on any accepted input
        if let Ok(set) = parse_samples(input) {
            let _ = analyze(&set.samples).map(|result| result.observations());
        }
    }
});
