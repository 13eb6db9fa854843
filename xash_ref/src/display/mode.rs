/// 2D/3D projection mode switch.
///
/// UI drawing runs in a Y-down orthographic space. With a display scale
/// above 1 the UI is confined to a centered viewport of the scaled size
/// and its coordinate space shrinks accordingly.

use crate::graphics_device::{GraphicsContext, Capability, MatrixMode, Rect};
use crate::engine_trace;

const LOG_SOURCE: &str = "xref::Mode";

/// Depth range used by both 2D projections
const ORTHO_DEPTH: f32 = 99999.0;

/// Centered UI viewport for a display scale (values below 1 count as 1)
pub fn scaled_ui_viewport(native_width: i32, native_height: i32, display_scale: f32) -> Rect {
    let scale = effective_scale(display_scale);
    let scaled_w = (native_width as f32 / scale) as i32;
    let scaled_h = (native_height as f32 / scale) as i32;
    Rect::new(
        (native_width - scaled_w) / 2,
        (native_height - scaled_h) / 2,
        scaled_w,
        scaled_h,
    )
}

fn effective_scale(display_scale: f32) -> f32 {
    // NaN also falls back to 1
    if display_scale >= 1.0 { display_scale } else { 1.0 }
}

/// Switch between UI (2D) and full-screen projections.
///
/// `enable == true` sets up the scaled UI space and disables depth test and
/// culling. `enable == false` restores a full-screen Y-down orthographic
/// projection with a full-screen viewport and scissor.
pub fn set_2d_mode(
    gl: &mut dyn GraphicsContext,
    native_width: i32,
    native_height: i32,
    display_scale: f32,
    enable: bool,
) {
    let w = native_width as f32;
    let h = native_height as f32;

    if enable {
        let scale = effective_scale(display_scale);
        let viewport = scaled_ui_viewport(native_width, native_height, scale);
        engine_trace!(LOG_SOURCE, "2D mode: scale {} viewport {:?}", scale, viewport);

        gl.viewport(viewport);
        gl.scissor(viewport);

        gl.matrix_mode(MatrixMode::Projection);
        gl.load_identity();
        gl.ortho(0.0, w / scale, h / scale, 0.0, -ORTHO_DEPTH, ORTHO_DEPTH);
        gl.matrix_mode(MatrixMode::ModelView);
        gl.load_identity();

        gl.disable(Capability::DepthTest);
        gl.disable(Capability::CullFace);
    } else {
        gl.matrix_mode(MatrixMode::Projection);
        gl.load_identity();
        gl.ortho(0.0, w, h, 0.0, -ORTHO_DEPTH, ORTHO_DEPTH);
        gl.matrix_mode(MatrixMode::ModelView);
        gl.load_identity();

        let full = Rect::new(0, 0, native_width, native_height);
        gl.viewport(full);
        gl.scissor(full);
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
