#![no_main]

use libfuzzer_sys::fuzz_target;
use pumpcurve::pump::{parse_pumps, PumpCollection, PumpFileFormat};
use pumpcurve::table::{SelectionTable, TableOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Decoding and validation may reject the input, but must never panic
    for format in [PumpFileFormat::Toml, PumpFileFormat::Json] {
        let Ok(specs) = parse_pumps(text, format) else {
            continue;
        };
        if let Ok(pumps) = PumpCollection::from_specs(specs) {
            let _ = SelectionTable::build(&pumps, &TableOptions::default());
        }
    }
});
