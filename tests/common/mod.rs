// Common test utilities and fixtures


// Re-export commonly used items
#[allow(unused_imports)]
pub use fixtures::TestTree;
#[allow(unused_imports)]
pub use helpers::{create_test_services, test_config, total_files};
