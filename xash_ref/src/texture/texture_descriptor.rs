/// Texture descriptor as seen by the renderer-facing queries.
///
/// Decoding and uploading textures is the job of the host-side texture
/// subsystem; the renderer only reads these descriptors (and, for raw
/// frame uploads, resizes them).

use bitflags::bitflags;

use crate::graphics_device::{SamplerDesc, TextureFilter, TextureWrap};

/// GL_TEXTURE_2D
pub const TEXTURE_TARGET_2D: u32 = 0x0DE1;

bitflags! {
    /// Texture creation flags (bit values match the host's TF_* constants)
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct TextureFlags: u32 {
        const NEAREST        = 1 << 0;
        const KEEP_SOURCE    = 1 << 1;
        const NOFLIP_TGA     = 1 << 2;
        const EXPAND_SOURCE  = 1 << 3;
        const RECTANGLE      = 1 << 5;
        const CUBEMAP        = 1 << 6;
        const DEPTHMAP       = 1 << 7;
        const QUAKEPAL       = 1 << 8;
        const LUMINANCE      = 1 << 9;
        const SKYSIDE        = 1 << 10;
        const CLAMP          = 1 << 11;
        const NOMIPMAP       = 1 << 12;
        const HAS_LUMA       = 1 << 13;
        const MAKELUMA       = 1 << 14;
        const NORMALMAP      = 1 << 15;
        const HAS_ALPHA      = 1 << 16;
        const FORCE_COLOR    = 1 << 17;
        const UPDATE         = 1 << 18;
        const BORDER         = 1 << 19;
        const TEXTURE_3D     = 1 << 20;
        const ATLAS_PAGE     = 1 << 21;
        const ALPHACONTRAST  = 1 << 22;
        const IMG_UPLOADED   = 1 << 25;
    }
}

/// Metadata of one loaded texture
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescriptor {
    /// Diagnostic name ("*white", "gfx/env/desertup", ...)
    pub name: String,
    /// Size of the uploaded image
    pub width: i32,
    pub height: i32,
    /// Size of the source image before any resampling
    pub src_width: i32,
    pub src_height: i32,
    /// GPU internal format code
    pub format: u32,
    /// Custom encode kind (normal map packing etc.)
    pub encode: i32,
    pub num_mips: i32,
    /// Depth (3D textures) or layer count
    pub depth: i32,
    /// GPU texture name, 0 when not uploaded
    pub texnum: u32,
    /// GPU target code (GL_TEXTURE_2D...)
    pub target: u32,
    pub flags: TextureFlags,
    /// Detail texture scale
    pub x_scale: f32,
    pub y_scale: f32,
    /// Fog color and density (water volumes)
    pub fog_params: [u8; 4],
    /// GPU memory used, in bytes
    pub size: usize,
}

impl TextureDescriptor {
    /// RGBA8 2D texture with a single mip and matching source size
    pub fn new(name: &str, width: i32, height: i32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            src_width: width,
            src_height: height,
            format: 0x8058,
            encode: 0,
            num_mips: 1,
            depth: 1,
            texnum: 0,
            target: TEXTURE_TARGET_2D,
            flags: TextureFlags::empty(),
            x_scale: 1.0,
            y_scale: 1.0,
            fog_params: [0; 4],
            size: rgba_size(width, height),
        }
    }

    /// Builder-style flag setter
    pub fn with_flags(mut self, flags: TextureFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builder-style GPU handle setter
    pub fn with_texnum(mut self, texnum: u32) -> Self {
        self.texnum = texnum;
        self
    }

    /// Resize the uploaded image, keeping the source size and recomputing memory use
    pub fn update_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.size = rgba_size(width, height);
    }

    /// Sampler state derived from the flags
    pub fn sampler(&self) -> SamplerDesc {
        let filter = if self.flags.contains(TextureFlags::NEAREST) {
            TextureFilter::Nearest
        } else {
            TextureFilter::Linear
        };
        let wrap = if self.flags.contains(TextureFlags::CLAMP) {
            TextureWrap::ClampToEdge
        } else {
            TextureWrap::Repeat
        };
        SamplerDesc { min_filter: filter, mag_filter: filter, wrap_s: wrap, wrap_t: wrap }
    }
}

fn rgba_size(width: i32, height: i32) -> usize {
    width.max(0) as usize * height.max(0) as usize * 4
}

#[cfg(test)]
#[path = "texture_descriptor_tests.rs"]
mod tests;
