#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlsplit::{MemorySinkProvider, SplitConfig, Splitter};

fuzz_target!(|data: Vec<u8>| {
    for read_size in [1, 7, 4096] {
        let config = SplitConfig::new("-- T")
            .unwrap()
            .with_read_size(read_size);
        let splitter = Splitter::new(config);

        let mut sinks = MemorySinkProvider::new();
        let summary = splitter.split_bytes(&data, &mut sinks).unwrap();

        // Verify: concatenated sinks reproduce the input byte for byte
        assert_eq!(sinks.concatenated(), data);
        assert_eq!(summary.total_bytes, data.len() as u64);

        // Verify: empty input produces no sinks, otherwise at least one
        if data.is_empty() {
            assert_eq!(summary.sink_count(), 0);
        } else {
            assert!(summary.sink_count() >= 1);
        }

        // Verify: segments tile [0, len) in order with dense seq numbers
        let mut expected_start = 0u64;
        for (i, segment) in summary.segments.iter().enumerate() {
            assert_eq!(segment.seq(), i as u32);
            assert_eq!(segment.start(), expected_start);
            assert_eq!(segment.len() as usize, sinks.contents()[i].len());
            expected_start = segment.end();
        }
        assert_eq!(expected_start, data.len() as u64);

        // Verify: determinism - a second run produces identical bytes
        let mut sinks2 = MemorySinkProvider::new();
        let splitter2 = Splitter::new(
            SplitConfig::new("-- T").unwrap().with_read_size(read_size),
        );
        splitter2.split_bytes(&data, &mut sinks2).unwrap();
        assert_eq!(sinks.contents(), sinks2.contents());
    }
});
