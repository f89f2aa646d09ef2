#![no_main]

use libfuzzer_sys::fuzz_target;
use tabstat::aggregator::analyze;
use tabstat::table::TableLoader;

fuzz_target!(|data: &[u8]| {
    // Loading and analysing arbitrary bytes may fail but must never panic
    if let Ok(table) = TableLoader::new().load_reader(data) {
        let _ = analyze(&table, None);
    }
});
