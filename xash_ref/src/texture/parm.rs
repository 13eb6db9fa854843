/// Texture parameter facade.
///
/// Answers the host's integer parameter queries about textures and
/// renderer state. Codes the renderer does not own are forwarded to the
/// engine. Unknown texture indices answer 0; the facade never panics on
/// host input.

use crate::graphics_device::GraphicsContext;
use crate::ref_api::HostApi;
use crate::engine_warn;

use super::renderer_state::RendererState;
use super::texture_descriptor::{TextureDescriptor, TextureFlags};
use super::texture_table::TextureLookup;

/// Parameter codes answered by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefParm {
    TexWidth,
    TexHeight,
    TexSrcWidth,
    TexSrcHeight,
    TexSkybox,
    TexSkyTexnum,
    TexLightmap,
    TexTarget,
    TexTexnum,
    TexFlags,
    TexDepth,
    TexGlFormat,
    TexEncode,
    TexMipCount,
    ActiveTmu,
    LightStyleValue,
    MaxImageUnits,
    RebuildGamma,
    GlContextType,
    GlesWrapper,
    StencilActive,
    TexMemory,
    TexFiltering,
}

impl RefParm {
    /// Map a host code, `None` for codes the engine answers itself
    pub fn from_raw(code: i32) -> Option<Self> {
        let parm = match code {
            1 => RefParm::TexWidth,
            2 => RefParm::TexHeight,
            3 => RefParm::TexSrcWidth,
            4 => RefParm::TexSrcHeight,
            5 => RefParm::TexSkybox,
            6 => RefParm::TexSkyTexnum,
            7 => RefParm::TexLightmap,
            8 => RefParm::TexTarget,
            9 => RefParm::TexTexnum,
            10 => RefParm::TexFlags,
            11 => RefParm::TexDepth,
            12 => RefParm::TexGlFormat,
            13 => RefParm::TexEncode,
            14 => RefParm::TexMipCount,
            26 => RefParm::ActiveTmu,
            27 => RefParm::LightStyleValue,
            28 => RefParm::MaxImageUnits,
            30 => RefParm::RebuildGamma,
            33 => RefParm::GlContextType,
            34 => RefParm::GlesWrapper,
            35 => RefParm::StencilActive,
            37 => RefParm::TexMemory,
            -0x10000 => RefParm::TexFiltering,
            _ => return None,
        };
        Some(parm)
    }

    /// Host code of this parameter
    pub fn code(&self) -> i32 {
        match self {
            RefParm::TexWidth => 1,
            RefParm::TexHeight => 2,
            RefParm::TexSrcWidth => 3,
            RefParm::TexSrcHeight => 4,
            RefParm::TexSkybox => 5,
            RefParm::TexSkyTexnum => 6,
            RefParm::TexLightmap => 7,
            RefParm::TexTarget => 8,
            RefParm::TexTexnum => 9,
            RefParm::TexFlags => 10,
            RefParm::TexDepth => 11,
            RefParm::TexGlFormat => 12,
            RefParm::TexEncode => 13,
            RefParm::TexMipCount => 14,
            RefParm::ActiveTmu => 26,
            RefParm::LightStyleValue => 27,
            RefParm::MaxImageUnits => 28,
            RefParm::RebuildGamma => 30,
            RefParm::GlContextType => 33,
            RefParm::GlesWrapper => 34,
            RefParm::StencilActive => 35,
            RefParm::TexMemory => 37,
            RefParm::TexFiltering => -0x10000,
        }
    }
}

/// Borrowed view over everything a parameter query may read
pub struct TextureParmFacade<'a> {
    pub textures: &'a dyn TextureLookup,
    pub state: &'a RendererState,
    pub gl: &'a dyn GraphicsContext,
    pub host: &'a dyn HostApi,
    /// Name of the global nearest-filtering cvar
    pub nearest_cvar: &'a str,
}

impl<'a> TextureParmFacade<'a> {
    /// Answer a host parameter query
    pub fn get_parm(&self, parm: i32, arg: i32) -> i32 {
        let Some(kind) = RefParm::from_raw(parm) else {
            return self.host.engine_get_parm(parm, arg);
        };

        let caps = self.gl.capabilities();
        match kind {
            RefParm::TexWidth => self.texture_field(arg, |t| t.width),
            RefParm::TexHeight => self.texture_field(arg, |t| t.height),
            RefParm::TexSrcWidth => self.texture_field(arg, |t| t.src_width),
            RefParm::TexSrcHeight => self.texture_field(arg, |t| t.src_height),
            RefParm::TexTarget => self.texture_field(arg, |t| t.target as i32),
            RefParm::TexTexnum => self.texture_field(arg, |t| t.texnum as i32),
            RefParm::TexFlags => self.texture_field(arg, |t| t.flags.bits() as i32),
            RefParm::TexDepth => self.texture_field(arg, |t| t.depth),
            RefParm::TexGlFormat => self.texture_field(arg, |t| t.format as i32),
            RefParm::TexEncode => self.texture_field(arg, |t| t.encode),
            RefParm::TexMipCount => self.texture_field(arg, |t| t.num_mips),
            RefParm::TexSkybox => match self.state.skybox(arg) {
                Some(texture) => texture,
                None => {
                    engine_warn!("xref::TextureParm", "Skybox side {} out of range", arg);
                    0
                }
            },
            RefParm::TexSkyTexnum => self.state.sky_texnum,
            RefParm::TexLightmap => self.state.lightmap(arg),
            RefParm::LightStyleValue => self.state.lightstyle(arg),
            RefParm::ActiveTmu => self.gl.active_texture_unit() as i32,
            RefParm::MaxImageUnits => caps.max_texture_units,
            RefParm::RebuildGamma => caps.software_gamma_update as i32,
            RefParm::GlContextType => caps.context_type,
            RefParm::GlesWrapper => caps.wrapper,
            RefParm::StencilActive => caps.stencil as i32,
            RefParm::TexMemory => i32::try_from(self.textures.memory_usage()).unwrap_or(i32::MAX),
            RefParm::TexFiltering => {
                if arg < 0 {
                    self.global_filtering() as i32
                } else {
                    self.textures
                        .texture(arg)
                        .map_or(0, |t| self.filtering_enabled(t) as i32)
                }
            }
        }
    }

    /// Detail texture scale; only the provided slots are written
    pub fn detail_scale_for_texture(&self, texture: i32, x_scale: Option<&mut f32>, y_scale: Option<&mut f32>) {
        let Some(tex) = self.textures.texture(texture) else {
            return;
        };
        if let Some(x) = x_scale {
            *x = tex.x_scale;
        }
        if let Some(y) = y_scale {
            *y = tex.y_scale;
        }
    }

    /// Fog color and density; only the provided slots are written
    pub fn extra_parms_for_texture(
        &self,
        texture: i32,
        red: Option<&mut u8>,
        green: Option<&mut u8>,
        blue: Option<&mut u8>,
        density: Option<&mut u8>,
    ) {
        let Some(tex) = self.textures.texture(texture) else {
            return;
        };
        for (slot, value) in [red, green, blue, density].into_iter().zip(tex.fog_params) {
            if let Some(slot) = slot {
                *slot = value;
            }
        }
    }

    /// Source image size; only the provided slots are written
    pub fn texture_parms(&self, texture: i32, width: Option<&mut i32>, height: Option<&mut i32>) {
        let Some(tex) = self.textures.texture(texture) else {
            return;
        };
        if let Some(w) = width {
            *w = tex.src_width;
        }
        if let Some(h) = height {
            *h = tex.src_height;
        }
    }

    fn texture_field(&self, index: i32, field: impl Fn(&TextureDescriptor) -> i32) -> i32 {
        self.textures.texture(index).map_or(0, field)
    }

    fn global_filtering(&self) -> bool {
        self.host.cvar_float(self.nearest_cvar) == 0.0
    }

    fn filtering_enabled(&self, texture: &TextureDescriptor) -> bool {
        !texture.flags.contains(TextureFlags::NEAREST) && self.global_filtering()
    }
}

/// Override the recorded source size of a texture (unknown index ignored)
pub fn override_texture_source_size(textures: &mut dyn TextureLookup, texture: i32, width: i32, height: i32) {
    if let Some(tex) = textures.texture_mut(texture) {
        tex.src_width = width;
        tex.src_height = height;
    }
}

#[cfg(test)]
#[path = "parm_tests.rs"]
mod tests;
