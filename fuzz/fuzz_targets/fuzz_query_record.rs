#![no_main]

use libfuzzer_sys::fuzz_target;
use querydoc::QueryRecord;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Anything that parses must survive a serialize/parse cycle
        if let Ok(record) = QueryRecord::from_json(input) {
            if let Ok(json) = record.to_json() {
                let reparsed = QueryRecord::from_json(&json);
                assert!(reparsed.is_ok());
                if let Ok(reparsed) = reparsed {
                    assert_eq!(reparsed.method, record.method);
                    assert_eq!(reparsed.queries.len(), record.queries.len());
                }
            }
        }
    }
});
