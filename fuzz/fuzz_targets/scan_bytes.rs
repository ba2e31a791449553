#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlsplit::{Scanner, SplitConfig};

fuzz_target!(|data: Vec<u8>| {
    let markers: &[&[u8]] = &[b"\n", b"--", b"-- Table structure for table"];

    for marker in markers {
        let config = SplitConfig::new(*marker).unwrap();

        // Reference: the whole input in one push
        let mut whole = Scanner::new(&config);
        let expected = whole.push(&data);

        // Verify: points are strictly increasing and line-anchored
        let mut last = None;
        for &point in &expected {
            if let Some(prev) = last {
                assert!(point > prev);
            }
            last = Some(point);

            let p = point as usize;
            assert!(p == 0 || data[p - 1] == b'\n');
            assert_eq!(&data[p..p + marker.len()], *marker);
        }

        // Verify: slicing independence across chunk sizes
        for chunk_size in [1, 2, 3, 5, 17] {
            let mut scanner = Scanner::new(&config);
            let mut points = Vec::new();
            for chunk in data.chunks(chunk_size) {
                points.extend(scanner.push(chunk));
            }
            assert_eq!(points, expected);
        }

        // Verify: reset gives a clean slate
        let mut reused = Scanner::new(&config);
        let _ = reused.push(&data);
        reused.reset();
        assert_eq!(reused.position(), 0);
        assert_eq!(reused.push(&data), expected);
    }
});
