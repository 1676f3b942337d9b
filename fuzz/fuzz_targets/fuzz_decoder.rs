#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // The decoder must either produce a record or fail with a DecodeError;
    // it must never panic, whatever the input bytes are.
    match vamas::parser::VamasParser::from_reader(Cursor::new(data)) {
        Ok(parser) => {
            // Walk the query interface of whatever was decoded.
            let experiment = parser.experiment();
            for block in &experiment.blocks {
                let _ = block.abscissa_axis();
                let _ = block.datetime();
                for v in 0..block.ordinate.variables() {
                    let _ = block.ordinate_series(v);
                    let _ = block.variable_label(v);
                }
            }
        }
        Err(_) => {
            // Malformed input is expected to fail gracefully.
        }
    }
});
