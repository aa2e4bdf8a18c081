#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the whole validation path: schema resolution, compilation and
/// error collection. Unsupported documents must come back as errors.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let options = sbom_utility::ValidationOptions::default();
        let _ = sbom_utility::validate_document(&value, "fuzz", &options);
    }
});
