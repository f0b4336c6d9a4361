#![no_main]

use libfuzzer_sys::fuzz_target;
use rgadata::format::DecodeConfig;
use rgadata::scan::ScanDocument;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Decoding must either succeed or return an error; it must never panic
    for skip_pvst in [false, true] {
        let config = DecodeConfig::default().with_skip_pvst(skip_pvst);
        if let Ok(scan) = ScanDocument::from_reader(Cursor::new(data), &config) {
            // Exercise the derived accessors on whatever decoded
            let _ = scan.latest_bounds();
            let _ = scan.nearest_sample(28.0);
            let _ = scan.amu_axis().take(4).count();
        }
    }
});
