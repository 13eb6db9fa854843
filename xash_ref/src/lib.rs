/*!
# Xash Ref

Display output pipeline of the Xash3D OpenGL renderer plugin.

This crate holds the API-agnostic part of the renderer: it decides what
to draw and in which state, while a `GraphicsContext` backend (see the
`xash_ref_gl` crate) turns it into real GL calls.

## Architecture

- **RenderTargetManager**: internal-resolution framebuffer used for display scaling
- **set_display_transform**: validates rotation/offset/scale and drives the target
- **present**: stretches the internal frame onto the screen
- **set_2d_mode**: switches between UI and full-screen projections
- **TextureParmFacade**: answers the host's texture and renderer parameter queries
- **RefContext**: owns everything above; `RefInterface` is the table the host calls

The host talks to the renderer through `HostApi` and receives the export
table from `Engine::get_ref_api`.
*/

// Internal modules
mod error;
mod engine;
mod config;
mod context;
pub mod log;
pub mod graphics_device;
pub mod display;
pub mod texture;
pub mod draw;
pub mod ref_api;

// Main xref namespace module
pub mod xref {
    // Error types
    pub use crate::error::{Error, Result};

    // Plugin entry point and logger
    pub use crate::engine::Engine;

    // Load-time settings and the renderer context
    pub use crate::config::Config;
    pub use crate::context::RefContext;

    // Host ABI
    pub use crate::ref_api::{HostApi, RefGlobals, RefInterface, REF_API_VERSION};

    // Graphics backend trait
    pub use crate::graphics_device::GraphicsContext;

    // Texture metadata
    pub use crate::texture::{TextureDescriptor, TextureFlags, TextureLookup, TextureTable};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Graphics context types for backend implementations
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Display pipeline stages
    pub mod display {
        pub use crate::display::*;
    }

    // 2D drawing helpers
    pub mod draw {
        pub use crate::draw::*;
    }
}

// Re-export math library at crate root
pub use glam;
