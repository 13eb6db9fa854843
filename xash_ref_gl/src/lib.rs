/*!
# Xash Ref - OpenGL Backend

OpenGL 3.3 core / GLES 3 implementation of the `xash_ref` graphics context,
built on glow.

The host creates and makes current the GL context, wraps it in a
`glow::Context` and hands a `GlGraphicsContext` to
`xash_ref::xref::Engine::get_ref_api`.

```no_run
use xash_ref::xref::{Config, Engine, REF_API_VERSION};
use xash_ref_gl::xref_gl::{GlConfig, GlGraphicsContext};
# fn load(
#     gl: glow::Context,
#     host: Box<dyn xash_ref::xref::HostApi>,
# ) -> xash_ref::xref::Result<()> {
let context = GlGraphicsContext::new(gl, GlConfig::default())?;
let (api, mut ctx) = Engine::get_ref_api(
    REF_API_VERSION,
    Box::new(context),
    host,
    Box::new(xash_ref::xref::TextureTable::new()),
    Config::default(),
)?;
(api.set_2d_mode)(&mut ctx, true);
# Ok(())
# }
```
*/

#![deny(unsafe_code)]

mod gl_config;
mod gl_context;
mod gl_debug;
mod gl_format;
mod gl_matrix_stack;
mod gl_quad_program;

// Main xref_gl namespace module
pub mod xref_gl {
    pub use crate::gl_config::GlConfig;
    pub use crate::gl_context::GlGraphicsContext;
    pub use crate::gl_debug::gl_error_name;
}
