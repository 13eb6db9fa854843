/// Raw BGRA frame drawing and uploading (cinematics, video textures).
///
/// Without NPOT support frames are point-resampled to power-of-two sizes
/// (width rounded down, height rounded up) before upload. Sizes above the
/// hardware limit are fatal.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsContext, Capability, TexEnvMode, TexImageDesc, PixelFormat, Rect,
    TextureHandle, axis_aligned_quad,
};
use crate::texture::TextureLookup;
use crate::engine_error;

use super::resample::{nearest_pow, resample_texture};

/// GL_RGBA
const RAW_INTERNAL_FORMAT: u32 = 0x1908;

const LOG_SOURCE: &str = "xref::StretchRaw";

/// Smallest and largest edge for uploaded raw textures on NPOT contexts
const MIN_RAW_SIZE: i32 = 128;

fn check_hardware_limit(what: &'static str, cols: i32, rows: i32, max: i32) -> Result<()> {
    for size in [cols, rows] {
        if size > max {
            engine_error!(LOG_SOURCE, "{}: size {} exceeds hardware limits ({})", what, size, max);
            return Err(Error::HardwareLimit { what, size, max });
        }
    }
    Ok(())
}

fn check_frame(cols: i32, rows: i32, data: &[u8]) -> Result<()> {
    if cols <= 0 || rows <= 0 {
        return Err(Error::InvalidDimensions { width: cols, height: rows });
    }
    let needed = cols as usize * rows as usize * 4;
    if data.len() < needed {
        return Err(Error::InvalidResource(format!(
            "raw frame {}x{} needs {} bytes, got {}", cols, rows, needed, data.len()
        )));
    }
    Ok(())
}

/// Resample `data` to `width` x `height` unless it already has that size
fn fit_frame(data: &[u8], cols: i32, rows: i32, width: i32, height: i32) -> Cow<'_, [u8]> {
    if cols == width && rows == height {
        Cow::Borrowed(data)
    } else {
        Cow::Owned(resample_texture(data, cols, rows, width, height))
    }
}

/// Draw a raw BGRA frame through the cinematic texture.
///
/// When the frame size matches the texture only a dirty frame is
/// re-uploaded (sub-image). A size change resizes the texture descriptor
/// and re-allocates the image when dirty.
#[allow(clippy::too_many_arguments)]
pub fn draw_stretch_raw(
    gl: &mut dyn GraphicsContext,
    textures: &mut dyn TextureLookup,
    cin_texture: i32,
    x: f32, y: f32, w: f32, h: f32,
    cols: i32, rows: i32,
    data: &[u8],
    dirty: bool,
) -> Result<()> {
    check_frame(cols, rows, data)?;

    let caps = *gl.capabilities();
    let (width, height) = if caps.npot_textures {
        (cols, rows)
    } else {
        (nearest_pow(cols, true), nearest_pow(rows, false))
    };
    check_hardware_limit("draw_stretch_raw", width, height, caps.max_texture_size)?;

    let Some(tex) = textures.texture_mut(cin_texture) else {
        return Err(Error::InvalidResource(format!("cinematic texture {}", cin_texture)));
    };
    let raw = fit_frame(data, cols, rows, width, height);

    gl.disable(Capability::Blend);
    gl.disable(Capability::AlphaTest);
    gl.tex_env_mode(TexEnvMode::Replace);

    gl.active_texture(0);
    gl.bind_texture(Some(TextureHandle(tex.texnum)).filter(|t| t.0 != 0));

    if tex.width == width && tex.height == height {
        if dirty {
            gl.tex_sub_image_2d(Rect::new(0, 0, width, height), PixelFormat::Bgra8, &raw);
        }
    } else {
        tex.update_size(width, height);
        if dirty {
            gl.tex_image_2d(
                &TexImageDesc {
                    width,
                    height,
                    internal_format: RAW_INTERNAL_FORMAT,
                    source_format: PixelFormat::Bgra8,
                },
                Some(&raw),
            );
        }
    }

    gl.draw_quad(&axis_aligned_quad(x, y, w, h, 0.0, 0.0, 1.0, 1.0));
    Ok(())
}

/// Upload a raw BGRA frame into an arbitrary texture.
///
/// The target size is the requested `width` x `height`, rounded to powers
/// of two without NPOT support or clamped to 128..=max otherwise. The
/// texture keeps its active unit; its sampler is re-derived from its flags.
#[allow(clippy::too_many_arguments)]
pub fn upload_stretch_raw(
    gl: &mut dyn GraphicsContext,
    textures: &mut dyn TextureLookup,
    texture: i32,
    cols: i32, rows: i32,
    width: i32, height: i32,
    data: &[u8],
) -> Result<()> {
    check_frame(cols, rows, data)?;

    let caps = *gl.capabilities();
    let (width, height) = if caps.npot_textures {
        let max = caps.max_texture_size.max(MIN_RAW_SIZE);
        (width.clamp(MIN_RAW_SIZE, max), height.clamp(MIN_RAW_SIZE, max))
    } else {
        (nearest_pow(width, true), nearest_pow(height, false))
    };
    check_hardware_limit("upload_stretch_raw", width, height, caps.max_texture_size)?;

    let Some(tex) = textures.texture_mut(texture) else {
        return Err(Error::InvalidResource(format!("texture {}", texture)));
    };
    let raw = fit_frame(data, cols, rows, width, height);

    gl.bind_texture(Some(TextureHandle(tex.texnum)).filter(|t| t.0 != 0));
    tex.update_size(width, height);

    gl.tex_image_2d(
        &TexImageDesc {
            width,
            height,
            internal_format: tex.format,
            source_format: PixelFormat::Bgra8,
        },
        Some(&raw),
    );
    gl.set_sampler(&tex.sampler());
    Ok(())
}

#[cfg(test)]
#[path = "stretch_raw_tests.rs"]
mod tests;
