/// Host ABI boundary: host callbacks and the exported function table

pub mod host;
pub mod interface;

pub use host::{HostApi, RefGlobals};
pub use interface::{RefInterface, REF_API_VERSION};

// Mock host for tests
#[cfg(test)]
pub mod mock_host;
