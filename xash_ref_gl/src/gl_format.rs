/// Conversions between the backend-neutral graphics types and GL enums

use xash_ref::xref::device::{
    BlendFactor, Capability, FramebufferStatus, PixelFormat, TextureFilter, TextureWrap,
};

/// How a capability is realized by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    /// A real glEnable/glDisable target
    Native(u32),
    /// Fixed-function state emulated by the quad shader
    Emulated,
}

pub fn capability_kind(cap: Capability) -> CapabilityKind {
    match cap {
        Capability::Blend => CapabilityKind::Native(glow::BLEND),
        Capability::DepthTest => CapabilityKind::Native(glow::DEPTH_TEST),
        Capability::CullFace => CapabilityKind::Native(glow::CULL_FACE),
        Capability::ScissorTest => CapabilityKind::Native(glow::SCISSOR_TEST),
        Capability::Texture2D | Capability::AlphaTest => CapabilityKind::Emulated,
    }
}

pub fn blend_factor_to_gl(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::One => glow::ONE,
        BlendFactor::SrcAlpha => glow::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => glow::ONE_MINUS_SRC_ALPHA,
    }
}

pub fn filter_to_gl(filter: TextureFilter) -> i32 {
    match filter {
        TextureFilter::Nearest => glow::NEAREST as i32,
        TextureFilter::Linear => glow::LINEAR as i32,
    }
}

pub fn wrap_to_gl(wrap: TextureWrap) -> i32 {
    match wrap {
        TextureWrap::Repeat => glow::REPEAT as i32,
        TextureWrap::ClampToEdge => glow::CLAMP_TO_EDGE as i32,
    }
}

/// Upload format for a pixel layout.
///
/// GLES has no BGRA upload format; BGRA data is swizzled on the CPU
/// first (see `bgra_to_rgba`) and uploaded as RGBA.
pub fn pixel_format_to_gl(format: PixelFormat, gles: bool) -> u32 {
    match format {
        PixelFormat::Rgba8 => glow::RGBA,
        PixelFormat::Bgra8 if gles => glow::RGBA,
        PixelFormat::Bgra8 => glow::BGRA,
    }
}

/// True when `format` must be swizzled before upload
pub fn needs_swizzle(format: PixelFormat, gles: bool) -> bool {
    gles && format == PixelFormat::Bgra8
}

/// Swap the red and blue channels of tightly packed 4-byte pixels.
/// A trailing partial pixel is copied unchanged.
pub fn bgra_to_rgba(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for pixel in out.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    out
}

pub fn framebuffer_status_from_gl(status: u32) -> FramebufferStatus {
    if status == glow::FRAMEBUFFER_COMPLETE {
        FramebufferStatus::Complete
    } else {
        FramebufferStatus::Incomplete(status)
    }
}

/// Internal formats GLES 3 accepts for unsized uploads
pub fn internal_format_for_upload(internal_format: u32, gles: bool) -> i32 {
    if !gles {
        return internal_format as i32;
    }
    match internal_format {
        glow::RGB | glow::RGB8 => glow::RGB8 as i32,
        _ => glow::RGBA8 as i32,
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
