/// Texture metadata, renderer texture bookkeeping and the parameter facade

pub mod texture_descriptor;
pub mod texture_table;
pub mod renderer_state;
pub mod parm;

pub use texture_descriptor::{TextureDescriptor, TextureFlags, TEXTURE_TARGET_2D};
pub use texture_table::{TextureLookup, TextureTable};
pub use renderer_state::{RendererState, MAX_LIGHTMAPS, MAX_LIGHTSTYLES, SKYBOX_SIDES};
pub use parm::{RefParm, TextureParmFacade, override_texture_source_size};
