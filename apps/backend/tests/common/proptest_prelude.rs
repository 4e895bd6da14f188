// Shared proptest configuration for integration tests.
//
// Env knobs:
// - PROPTEST_CASES: cases per property (default 16 here; matches are slow-ish).

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(16)
        .max(1);
    proptest::prelude::ProptestConfig {
        cases,
        failure_persistence: None,
        ..proptest::prelude::ProptestConfig::default()
    }
}
