pub mod builder;
pub mod catalog;
pub mod fixtures;
pub mod stub;

pub use builder::PdfBuilder;
pub use catalog::TestCatalog;
pub use fixtures::TestLibrary;
pub use stub::{FlakyStorage, ModelStub, StubLoader};

/// Route `tracing` output through the test harness. Safe to call from
/// every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
