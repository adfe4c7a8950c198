#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // must return records or a structured error, never panic
    let _ = forest_stand_loader::read_csv_from_bytes(data);
});
