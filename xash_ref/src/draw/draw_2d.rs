/// Orthographic 2D drawing: textured pictures, flat fills, screen clear.

use crate::graphics_device::{
    GraphicsContext, Capability, BlendFactor, TexEnvMode, TextureHandle, axis_aligned_quad,
};
use crate::texture::TextureLookup;

/// Entity render modes the host passes to fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Normal,
    TransColor,
    TransTexture,
    Glow,
    TransAlpha,
    TransAdd,
}

impl RenderMode {
    /// Map the host code; unknown codes draw as `Normal`
    pub fn from_raw(code: i32) -> Self {
        match code {
            1 => RenderMode::TransColor,
            2 => RenderMode::TransTexture,
            3 => RenderMode::Glow,
            4 => RenderMode::TransAlpha,
            5 => RenderMode::TransAdd,
            _ => RenderMode::Normal,
        }
    }
}

/// GPU handle of a host texture index (`None` when unknown or not uploaded)
pub fn gpu_texture(textures: &dyn TextureLookup, index: i32) -> Option<TextureHandle> {
    textures
        .texture(index)
        .filter(|t| t.texnum != 0)
        .map(|t| TextureHandle(t.texnum))
}

/// Draw a textured quad with explicit texture coordinates
#[allow(clippy::too_many_arguments)]
pub fn draw_stretch_pic(
    gl: &mut dyn GraphicsContext,
    textures: &dyn TextureLookup,
    x: f32, y: f32, w: f32, h: f32,
    s1: f32, t1: f32, s2: f32, t2: f32,
    texture: i32,
) {
    gl.active_texture(0);
    gl.bind_texture(gpu_texture(textures, texture));
    gl.draw_quad(&axis_aligned_quad(x, y, w, h, s1, t1, s2, t2));
}

/// Fill a rectangle with a flat blended color
#[allow(clippy::too_many_arguments)]
pub fn fill_rgba(
    gl: &mut dyn GraphicsContext,
    mode: RenderMode,
    x: f32, y: f32, w: f32, h: f32,
    r: u8, g: u8, b: u8, a: u8,
) {
    gl.disable(Capability::Texture2D);
    gl.enable(Capability::Blend);
    gl.tex_env_mode(TexEnvMode::Modulate);

    if mode == RenderMode::TransAdd {
        gl.blend_func(BlendFactor::SrcAlpha, BlendFactor::One);
    } else {
        gl.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    }

    gl.color4ub(r, g, b, a);
    gl.draw_quad(&axis_aligned_quad(x, y, w, h, 0.0, 0.0, 1.0, 1.0));

    gl.enable(Capability::Texture2D);
    gl.disable(Capability::Blend);
}

/// Clear the bound framebuffer's color to transparent black
pub fn clear_screen(gl: &mut dyn GraphicsContext) {
    gl.clear_color(0.0, 0.0, 0.0, 0.0);
    gl.clear_color_buffer();
}

#[cfg(test)]
#[path = "draw_2d_tests.rs"]
mod tests;
