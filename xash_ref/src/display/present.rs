/// Present stage: stretch the internal-resolution frame onto the screen.

use crate::display::render_target::RenderTargetManager;
use crate::graphics_device::{GraphicsContext, Capability, MatrixMode, axis_aligned_quad};
use crate::engine_trace;

const LOG_SOURCE: &str = "xref::Present";

/// Blit the scale render target to the default framebuffer.
///
/// Does nothing at all when no target is active. Otherwise draws one
/// full-screen textured quad under a temporary orthographic projection,
/// then restores both matrix stacks (model-view left selected) and the
/// caller's blend and depth-test enables. Culling stays disabled and 2D
/// texturing stays enabled afterwards.
pub fn present(manager: &RenderTargetManager, gl: &mut dyn GraphicsContext, screen_width: i32, screen_height: i32) {
    let Some(target) = manager.target() else {
        return;
    };

    engine_trace!(LOG_SOURCE, "Blit {}x{} -> {}x{}",
        target.width, target.height, screen_width, screen_height);

    gl.bind_framebuffer(None);

    let blend_was_enabled = gl.is_enabled(Capability::Blend);
    let depth_was_enabled = gl.is_enabled(Capability::DepthTest);

    gl.disable(Capability::DepthTest);
    gl.disable(Capability::CullFace);
    gl.enable(Capability::Texture2D);

    let w = screen_width as f32;
    let h = screen_height as f32;

    gl.matrix_mode(MatrixMode::Projection);
    gl.push_matrix();
    gl.load_identity();
    gl.ortho(0.0, w, 0.0, h, -1.0, 1.0);

    gl.matrix_mode(MatrixMode::ModelView);
    gl.push_matrix();
    gl.load_identity();

    gl.active_texture(0);
    gl.bind_texture(Some(target.texture));
    gl.draw_quad(&axis_aligned_quad(0.0, 0.0, w, h, 0.0, 0.0, 1.0, 1.0));
    gl.bind_texture(None);

    gl.pop_matrix();
    gl.matrix_mode(MatrixMode::Projection);
    gl.pop_matrix();
    gl.matrix_mode(MatrixMode::ModelView);

    if depth_was_enabled {
        gl.enable(Capability::DepthTest);
    }
    if blend_was_enabled {
        gl.enable(Capability::Blend);
    } else {
        gl.disable(Capability::Blend);
    }
}

#[cfg(test)]
#[path = "present_tests.rs"]
mod tests;
