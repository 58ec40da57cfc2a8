//! The process-wide entry points.
//!
//! All steps share one global store, so they run in a single test.

use std::sync::Arc;
use settings_store::global;
use settings_store::resource::{clear_context_resolver, set_context_resolver, ResourceStream};

mod common;
use common::*;

const FIXTURE: &str = "/resources/settings.properties";

#[test]
fn test_global_store_lifecycle() {
    // The global store maps locations under the working directory, which
    // cargo sets to the package root.
    let _clear = clear_context_resolver();
    global::set_source(FIXTURE);
    global::reset();

    assert_eq!(global::get_value("some.key", "Some nonexisting value"), "Some nonexisting value");
    assert_eq!(settings_store::get_value(EXISTING_KEY_1, "X"), EXISTING_VALUE_1);
    assert_eq!(settings_store::get_value(EXISTING_KEY_2, "X"), EXISTING_VALUE_2);

    // Unknown location.
    global::reset();
    global::set_source("/non-existing-test-settings.properties");
    assert_eq!(global::get_value(EXISTING_KEY_1, "X"), "X");

    // Unreadable stream from the context resolver.
    global::reset();
    global::set_source(FIXTURE);
    {
        let _guard = set_context_resolver(Arc::new(InterceptingResolver::new(|| {
            Box::new(NonReadingStream) as Box<dyn ResourceStream>
        })));
        assert_eq!(global::get_value(EXISTING_KEY_1, "X"), "X");
    }

    // Stream that fails to close.
    global::reset();
    let bytes = std::fs::read(resource_root().join("settings.properties")).unwrap();
    {
        let _guard = set_context_resolver(Arc::new(InterceptingResolver::new(move || {
            Box::new(NonClosingStream::new(bytes.clone())) as Box<dyn ResourceStream>
        })));
        assert_eq!(global::get_value(EXISTING_KEY_1, "X"), EXISTING_VALUE_1);
        assert_eq!(global::get_value(EXISTING_KEY_2, "X"), EXISTING_VALUE_2);
    }

    assert!(global::store().load_status().unwrap().generation >= 4);
}
