/// Scale render target manager.
///
/// Owns the single off-screen color target the 3D scene is rendered into
/// when the display runs at an internal resolution below the native one.
/// The target is either fully active (texture + framebuffer, both sized)
/// or fully inactive; there is no partial state.

use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsContext, TextureHandle, FramebufferHandle, FramebufferStatus,
    SamplerDesc, TexImageDesc, PixelFormat,
};
use crate::{engine_debug, engine_error, engine_trace, engine_warn};

/// GL_RGBA8
const TARGET_INTERNAL_FORMAT: u32 = 0x8058;

const LOG_SOURCE: &str = "xref::RenderTarget";

/// An allocated off-screen color target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRenderTarget {
    pub texture: TextureHandle,
    pub framebuffer: FramebufferHandle,
    pub width: i32,
    pub height: i32,
}

/// Per-axis display scale currently in effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    pub x: f32,
    pub y: f32,
}

impl ScaleState {
    pub const IDENTITY: ScaleState = ScaleState { x: 1.0, y: 1.0 };

    pub fn is_identity(&self) -> bool {
        self.x == 1.0 && self.y == 1.0
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Render-target lifecycle for internal-resolution rendering
#[derive(Debug, Default)]
pub struct RenderTargetManager {
    target: Option<ScaleRenderTarget>,
    scale: ScaleState,
}

impl RenderTargetManager {
    /// Create an inactive manager (no target, identity scale)
    pub fn new() -> Self {
        Self::default()
    }

    // ===== LIFECYCLE =====

    /// (Re)create the off-screen target at `width` x `height`.
    ///
    /// Any existing target is released first and the scale reset to
    /// identity, so on error the manager is always left inactive.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either dimension is not positive (nothing allocated)
    /// - `HardwareLimit` if either dimension exceeds the max texture size (fatal)
    /// - `AllocationFailed` if the texture or framebuffer could not be created
    /// - `IncompleteFramebuffer` if the completeness query rejects the target
    pub fn create(&mut self, gl: &mut dyn GraphicsContext, width: i32, height: i32) -> Result<()> {
        self.destroy(gl);

        if width <= 0 || height <= 0 {
            engine_warn!(LOG_SOURCE, "Refusing scale render target of {}x{}", width, height);
            return Err(Error::InvalidDimensions { width, height });
        }

        let max = gl.capabilities().max_texture_size;
        let size = width.max(height);
        if size > max {
            engine_error!(LOG_SOURCE, "Scale render target {}x{} exceeds max texture size {}", width, height, max);
            return Err(Error::HardwareLimit { what: "RenderTarget", size, max });
        }

        match allocate(gl, width, height) {
            Ok(target) => {
                engine_debug!(LOG_SOURCE, "Created scale render target {}x{} (fbo {}, tex {})",
                    width, height, target.framebuffer.0, target.texture.0);
                self.target = Some(target);
                Ok(())
            }
            Err(e) => {
                engine_warn!(LOG_SOURCE, "Failed to create scale render target {}x{}: {}", width, height, e);
                Err(e)
            }
        }
    }

    /// Release the target if present and reset size and scale.
    ///
    /// Calling it on an inactive manager does nothing.
    pub fn destroy(&mut self, gl: &mut dyn GraphicsContext) {
        if let Some(target) = self.target.take() {
            gl.delete_framebuffer(target.framebuffer);
            gl.delete_texture(target.texture);
            engine_debug!(LOG_SOURCE, "Destroyed scale render target {}x{}", target.width, target.height);
        }
        self.scale = ScaleState::IDENTITY;
    }

    /// Bind the off-screen framebuffer when active, otherwise the screen
    pub fn bind_for_scene(&self, gl: &mut dyn GraphicsContext) {
        let framebuffer = self.target.map(|t| t.framebuffer);
        engine_trace!(LOG_SOURCE, "Bind for scene: {:?}", framebuffer.map(|f| f.0));
        gl.bind_framebuffer(framebuffer);
    }

    /// Record the scale that produced the current target.
    ///
    /// Ignored while inactive: an inactive manager always reports identity.
    pub(crate) fn set_scale(&mut self, x: f32, y: f32) {
        if self.target.is_some() {
            self.scale = ScaleState { x, y };
        }
    }

    // ===== ACCESSORS =====

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&ScaleRenderTarget> {
        self.target.as_ref()
    }

    /// Width of the target, 0 when inactive
    pub fn width(&self) -> i32 {
        self.target.map_or(0, |t| t.width)
    }

    /// Height of the target, 0 when inactive
    pub fn height(&self) -> i32 {
        self.target.map_or(0, |t| t.height)
    }

    pub fn scale(&self) -> ScaleState {
        self.scale
    }
}

/// Allocate texture + framebuffer, releasing whatever was created on failure.
///
/// The default framebuffer is bound again before returning.
fn allocate(gl: &mut dyn GraphicsContext, width: i32, height: i32) -> Result<ScaleRenderTarget> {
    let texture = gl.gen_texture()
        .ok_or_else(|| Error::AllocationFailed("render target texture".to_string()))?;

    gl.bind_texture(Some(texture));
    gl.set_sampler(&SamplerDesc::LINEAR_CLAMP);
    gl.tex_image_2d(
        &TexImageDesc {
            width,
            height,
            internal_format: TARGET_INTERNAL_FORMAT,
            source_format: PixelFormat::Rgba8,
        },
        None,
    );
    gl.bind_texture(None);

    let framebuffer = match gl.gen_framebuffer() {
        Some(framebuffer) => framebuffer,
        None => {
            gl.delete_texture(texture);
            return Err(Error::AllocationFailed("render target framebuffer".to_string()));
        }
    };

    gl.bind_framebuffer(Some(framebuffer));
    gl.framebuffer_texture_2d(texture);

    let status = if gl.capabilities().framebuffer_status_query {
        gl.check_framebuffer_status()
    } else {
        FramebufferStatus::Complete
    };

    gl.bind_framebuffer(None);

    match status {
        FramebufferStatus::Complete => Ok(ScaleRenderTarget { texture, framebuffer, width, height }),
        FramebufferStatus::Incomplete(code) => {
            gl.delete_framebuffer(framebuffer);
            gl.delete_texture(texture);
            Err(Error::IncompleteFramebuffer(code))
        }
    }
}

#[cfg(test)]
#[path = "render_target_tests.rs"]
mod tests;
