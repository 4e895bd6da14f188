#![cfg(test)]

//! Test logging for the library's unit tests; see `backend_test_support::logging`.

pub fn init() {
    backend_test_support::logging::init();
}
