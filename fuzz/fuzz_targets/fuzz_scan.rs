#![no_main]

use libfuzzer_sys::fuzz_target;
use sigcarve::{ScanEngine, SignatureCatalog};
use std::num::NonZeroUsize;

fuzz_target!(|data: &[u8]| {
    let catalog = SignatureCatalog::builtin();
    let Ok(engine) = ScanEngine::new(&catalog) else {
        return;
    };

    let limit = data.first().and_then(|b| NonZeroUsize::new(*b as usize));
    let matches = engine.scan(data, limit);

    if let Some(limit) = limit {
        assert!(matches.len() <= limit.get());
    }
    for (index, m) in matches.iter().enumerate() {
        assert_eq!(m.id(), index as u64 + 1);
        assert!(m.end() <= data.len() as u64);
        assert!(m.size() >= m.signature().header().len() as u64);
    }
});
