/// OpenGL backend configuration

use xash_ref::xref::device::ContextCapabilities;

/// How the host created the GL context, plus overrides for buggy drivers
#[derive(Debug, Clone, PartialEq)]
pub struct GlConfig {
    /// The context is OpenGL ES 3 rather than desktop core 3.3
    pub gles: bool,
    /// Context flavor reported to the host through the parameter query
    pub context_type: i32,
    /// GLES wrapper reported to the host (0 = none)
    pub wrapper: i32,
    /// The default framebuffer has a stencil buffer
    pub stencil: bool,
    /// Gamma is applied in software (textures rebuilt on gamma change)
    pub software_gamma_update: bool,
    /// Cap on the driver's MAX_TEXTURE_SIZE
    pub max_texture_size: Option<i32>,
    /// Force NPOT support on or off instead of trusting the context
    pub npot_textures: Option<bool>,
    /// glCheckFramebufferStatus is usable (some loaders lack the entry point)
    pub framebuffer_status_query: bool,
    /// Check glGetError after every call and log failures
    pub check_errors: bool,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self {
            gles: false,
            context_type: 0,
            wrapper: 0,
            stencil: false,
            software_gamma_update: false,
            max_texture_size: None,
            npot_textures: None,
            framebuffer_status_query: true,
            check_errors: cfg!(feature = "gl-debug"),
        }
    }
}

impl GlConfig {
    /// Combine driver limits with the configured overrides.
    ///
    /// GL 3.3 and GLES 3 both guarantee NPOT textures, so that defaults
    /// to supported.
    pub fn capabilities(&self, driver_max_texture_size: i32, driver_texture_units: i32) -> ContextCapabilities {
        let max_texture_size = match self.max_texture_size {
            Some(cap) => driver_max_texture_size.min(cap),
            None => driver_max_texture_size,
        };

        ContextCapabilities {
            framebuffer_status_query: self.framebuffer_status_query,
            npot_textures: self.npot_textures.unwrap_or(true),
            max_texture_size,
            max_texture_units: driver_texture_units,
            stencil: self.stencil,
            context_type: self.context_type,
            wrapper: self.wrapper,
            software_gamma_update: self.software_gamma_update,
        }
    }
}

#[cfg(test)]
#[path = "gl_config_tests.rs"]
mod tests;
