/// Graphics device module - immediate-mode graphics context trait and types

pub mod graphics_context;

pub use graphics_context::*;

// Mock graphics context for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_context;
