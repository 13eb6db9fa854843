//! `GraphicsContext` implementation over glow.
//!
//! Texture and framebuffer handles are the raw GL object names, so the
//! host's own texture numbers can be bound directly. Objects created
//! through this context are tracked and released by `destroy`.
//!
//! Fixed-function state missing from core GL (2D texturing toggle, alpha
//! test, texture environment, current color, matrix stacks) is mirrored on
//! the CPU and handed to the quad program at draw time.

use std::num::NonZeroU32;

use glam::Mat4;
use rustc_hash::FxHashSet;
use xash_ref::xref::{GraphicsContext, Result};
use xash_ref::xref::device::{
    BlendFactor, Capability, ContextCapabilities, FramebufferHandle, FramebufferStatus,
    MatrixMode, PixelFormat, QuadVertex, Rect, SamplerDesc, TexEnvMode, TexImageDesc,
    TextureHandle, ortho_matrix,
};
use xash_ref::{engine_bail, engine_info, engine_warn};

use crate::gl_config::GlConfig;
use crate::gl_debug;
use crate::gl_format::{self, CapabilityKind};
use crate::gl_matrix_stack::MatrixStack;
use crate::gl_quad_program::{QuadProgram, QuadUniforms};

const LOG_SOURCE: &str = "xref::gl";

pub struct GlGraphicsContext {
    gl: glow::Context,
    config: GlConfig,
    caps: ContextCapabilities,
    quad: QuadProgram,

    owned_textures: FxHashSet<u32>,
    owned_framebuffers: FxHashSet<u32>,

    active_unit: u32,
    /// Texture bound on each unit, by GL name
    bound_textures: Vec<Option<u32>>,

    texture_2d: bool,
    alpha_test: bool,
    alpha_ref: f32,
    tex_env: TexEnvMode,
    color: [u8; 4],

    mode: MatrixMode,
    projection: MatrixStack,
    model_view: MatrixStack,

    destroyed: bool,
}

fn native_texture(handle: TextureHandle) -> Option<glow::Texture> {
    NonZeroU32::new(handle.0).map(glow::NativeTexture)
}

fn native_framebuffer(handle: FramebufferHandle) -> Option<glow::Framebuffer> {
    NonZeroU32::new(handle.0).map(glow::NativeFramebuffer)
}

impl GlGraphicsContext {
    /// Wrap a current GL context.
    ///
    /// Queries driver limits and builds the quad program.
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` when the quad shaders fail to
    /// compile or link, `Error::BackendError` when no context is current or
    /// GL refuses to create the program or its buffers.
    #[allow(unsafe_code)]
    pub fn new(gl: glow::Context, config: GlConfig) -> Result<Self> {
        use glow::HasContext;

        // SAFETY: plain integer queries on the current context.
        let (max_size, max_units, version) = unsafe {
            (
                gl.get_parameter_i32(glow::MAX_TEXTURE_SIZE),
                gl.get_parameter_i32(glow::MAX_TEXTURE_IMAGE_UNITS),
                gl.get_parameter_string(glow::VERSION),
            )
        };
        if max_size <= 0 {
            engine_bail!(LOG_SOURCE, "No usable GL context (MAX_TEXTURE_SIZE = {})", max_size);
        }
        let caps = config.capabilities(max_size, max_units);

        let quad = QuadProgram::new(&gl, config.gles)?;

        engine_info!(LOG_SOURCE, "GL context: {} (max texture {}, {} units, {})",
            version, caps.max_texture_size, caps.max_texture_units,
            if config.gles { "GLES" } else { "desktop" });

        let units = usize::try_from(caps.max_texture_units.max(1)).unwrap_or(1);

        Ok(Self {
            gl,
            config,
            caps,
            quad,
            owned_textures: FxHashSet::default(),
            owned_framebuffers: FxHashSet::default(),
            active_unit: 0,
            bound_textures: vec![None; units],
            texture_2d: false,
            alpha_test: false,
            alpha_ref: 0.0,
            tex_env: TexEnvMode::Modulate,
            color: [255; 4],
            mode: MatrixMode::ModelView,
            projection: MatrixStack::new("projection"),
            model_view: MatrixStack::new("modelview"),
            destroyed: false,
        })
    }

    /// Underlying glow context
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn config(&self) -> &GlConfig {
        &self.config
    }

    /// Release every object created through this context. Safe to call twice.
    #[allow(unsafe_code)]
    pub fn destroy(&mut self) {
        use glow::HasContext;

        if self.destroyed {
            return;
        }
        self.quad.destroy(&self.gl);

        for name in self.owned_framebuffers.drain() {
            if let Some(fb) = native_framebuffer(FramebufferHandle(name)) {
                // SAFETY: fb was created by this context and not yet deleted.
                unsafe { self.gl.delete_framebuffer(fb) };
            }
        }
        for name in self.owned_textures.drain() {
            if let Some(tex) = native_texture(TextureHandle(name)) {
                // SAFETY: tex was created by this context and not yet deleted.
                unsafe { self.gl.delete_texture(tex) };
            }
        }
        self.destroyed = true;
    }

    fn check(&self, operation: &str) {
        if self.config.check_errors {
            gl_debug::check_errors(&self.gl, operation);
        }
    }

    fn stack_mut(&mut self) -> &mut MatrixStack {
        match self.mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::ModelView => &mut self.model_view,
        }
    }

    fn bound_on_active_unit(&self) -> Option<u32> {
        self.bound_textures.get(self.active_unit as usize).copied().flatten()
    }
}

impl GraphicsContext for GlGraphicsContext {
    fn capabilities(&self) -> &ContextCapabilities {
        &self.caps
    }

    // ===== TEXTURES =====

    #[allow(unsafe_code)]
    fn gen_texture(&mut self) -> Option<TextureHandle> {
        use glow::HasContext;

        // SAFETY: object creation has no preconditions.
        match unsafe { self.gl.create_texture() } {
            Ok(tex) => {
                self.owned_textures.insert(tex.0.get());
                Some(TextureHandle(tex.0.get()))
            }
            Err(e) => {
                engine_warn!(LOG_SOURCE, "create_texture failed: {}", e);
                None
            }
        }
    }

    #[allow(unsafe_code)]
    fn delete_texture(&mut self, texture: TextureHandle) {
        use glow::HasContext;

        let Some(tex) = native_texture(texture) else {
            return;
        };
        self.owned_textures.remove(&texture.0);
        for slot in &mut self.bound_textures {
            if *slot == Some(texture.0) {
                *slot = None;
            }
        }
        // SAFETY: deleting an unknown name is a no-op in GL.
        unsafe { self.gl.delete_texture(tex) };
        self.check("delete_texture");
    }

    #[allow(unsafe_code)]
    fn active_texture(&mut self, unit: u32) {
        use glow::HasContext;

        if unit as usize >= self.bound_textures.len() {
            engine_warn!(LOG_SOURCE, "Texture unit {} out of range ({} units)", unit, self.bound_textures.len());
            return;
        }
        self.active_unit = unit;
        // SAFETY: unit is below MAX_TEXTURE_IMAGE_UNITS.
        unsafe { self.gl.active_texture(glow::TEXTURE0 + unit) };
    }

    fn active_texture_unit(&self) -> u32 {
        self.active_unit
    }

    #[allow(unsafe_code)]
    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        use glow::HasContext;

        let native = texture.and_then(native_texture);
        if let Some(slot) = self.bound_textures.get_mut(self.active_unit as usize) {
            *slot = native.map(|t| t.0.get());
        }
        // SAFETY: names come from GL (ours or the host's).
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, native) };
        self.check("bind_texture");
    }

    #[allow(unsafe_code)]
    fn set_sampler(&mut self, sampler: &SamplerDesc) {
        use glow::HasContext;

        // SAFETY: parameters are valid enums for TEXTURE_2D.
        unsafe {
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, gl_format::filter_to_gl(sampler.min_filter));
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, gl_format::filter_to_gl(sampler.mag_filter));
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, gl_format::wrap_to_gl(sampler.wrap_s));
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, gl_format::wrap_to_gl(sampler.wrap_t));
        }
        self.check("set_sampler");
    }

    #[allow(unsafe_code)]
    fn tex_image_2d(&mut self, desc: &TexImageDesc, data: Option<&[u8]>) {
        use glow::HasContext;

        let gles = self.config.gles;
        let swizzled = match data {
            Some(bytes) if gl_format::needs_swizzle(desc.source_format, gles) => Some(gl_format::bgra_to_rgba(bytes)),
            _ => None,
        };
        let pixels = swizzled.as_deref().or(data);

        // SAFETY: pixels is either None or a slice of at least width*height*4
        // bytes, checked by the callers.
        unsafe {
            self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                gl_format::internal_format_for_upload(desc.internal_format, gles),
                desc.width,
                desc.height,
                0,
                gl_format::pixel_format_to_gl(desc.source_format, gles),
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(pixels),
            );
        }
        self.check("tex_image_2d");
    }

    #[allow(unsafe_code)]
    fn tex_sub_image_2d(&mut self, region: Rect, format: PixelFormat, data: &[u8]) {
        use glow::HasContext;

        let gles = self.config.gles;
        let swizzled;
        let pixels = if gl_format::needs_swizzle(format, gles) {
            swizzled = gl_format::bgra_to_rgba(data);
            &swizzled[..]
        } else {
            data
        };

        // SAFETY: region lies inside the bound texture; callers size data.
        unsafe {
            self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            self.gl.tex_sub_image_2d(
                glow::TEXTURE_2D,
                0,
                region.x,
                region.y,
                region.width,
                region.height,
                gl_format::pixel_format_to_gl(format, gles),
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            );
        }
        self.check("tex_sub_image_2d");
    }

    // ===== FRAMEBUFFERS =====

    #[allow(unsafe_code)]
    fn gen_framebuffer(&mut self) -> Option<FramebufferHandle> {
        use glow::HasContext;

        // SAFETY: object creation has no preconditions.
        match unsafe { self.gl.create_framebuffer() } {
            Ok(fb) => {
                self.owned_framebuffers.insert(fb.0.get());
                Some(FramebufferHandle(fb.0.get()))
            }
            Err(e) => {
                engine_warn!(LOG_SOURCE, "create_framebuffer failed: {}", e);
                None
            }
        }
    }

    #[allow(unsafe_code)]
    fn delete_framebuffer(&mut self, framebuffer: FramebufferHandle) {
        use glow::HasContext;

        let Some(fb) = native_framebuffer(framebuffer) else {
            return;
        };
        self.owned_framebuffers.remove(&framebuffer.0);
        // SAFETY: deleting an unknown name is a no-op in GL.
        unsafe { self.gl.delete_framebuffer(fb) };
        self.check("delete_framebuffer");
    }

    #[allow(unsafe_code)]
    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferHandle>) {
        use glow::HasContext;

        // SAFETY: None binds the default framebuffer.
        unsafe { self.gl.bind_framebuffer(glow::FRAMEBUFFER, framebuffer.and_then(native_framebuffer)) };
        self.check("bind_framebuffer");
    }

    #[allow(unsafe_code)]
    fn framebuffer_texture_2d(&mut self, texture: TextureHandle) {
        use glow::HasContext;

        // SAFETY: a framebuffer is bound by the caller.
        unsafe {
            self.gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                glow::COLOR_ATTACHMENT0,
                glow::TEXTURE_2D,
                native_texture(texture),
                0,
            );
        }
        self.check("framebuffer_texture_2d");
    }

    #[allow(unsafe_code)]
    fn check_framebuffer_status(&mut self) -> FramebufferStatus {
        use glow::HasContext;

        // SAFETY: status query on the bound framebuffer.
        let status = unsafe { self.gl.check_framebuffer_status(glow::FRAMEBUFFER) };
        gl_format::framebuffer_status_from_gl(status)
    }

    // ===== STATE =====

    #[allow(unsafe_code)]
    fn enable(&mut self, cap: Capability) {
        use glow::HasContext;

        match gl_format::capability_kind(cap) {
            // SAFETY: target is a valid glEnable capability.
            CapabilityKind::Native(target) => unsafe { self.gl.enable(target) },
            CapabilityKind::Emulated => match cap {
                Capability::Texture2D => self.texture_2d = true,
                Capability::AlphaTest => self.alpha_test = true,
                _ => {}
            },
        }
    }

    #[allow(unsafe_code)]
    fn disable(&mut self, cap: Capability) {
        use glow::HasContext;

        match gl_format::capability_kind(cap) {
            // SAFETY: target is a valid glDisable capability.
            CapabilityKind::Native(target) => unsafe { self.gl.disable(target) },
            CapabilityKind::Emulated => match cap {
                Capability::Texture2D => self.texture_2d = false,
                Capability::AlphaTest => self.alpha_test = false,
                _ => {}
            },
        }
    }

    #[allow(unsafe_code)]
    fn is_enabled(&self, cap: Capability) -> bool {
        use glow::HasContext;

        match gl_format::capability_kind(cap) {
            // SAFETY: target is a valid glIsEnabled capability.
            CapabilityKind::Native(target) => unsafe { self.gl.is_enabled(target) },
            CapabilityKind::Emulated => match cap {
                Capability::Texture2D => self.texture_2d,
                Capability::AlphaTest => self.alpha_test,
                _ => false,
            },
        }
    }

    #[allow(unsafe_code)]
    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        use glow::HasContext;

        // SAFETY: both factors map to valid blend enums.
        unsafe { self.gl.blend_func(gl_format::blend_factor_to_gl(src), gl_format::blend_factor_to_gl(dst)) };
    }

    fn tex_env_mode(&mut self, mode: TexEnvMode) {
        self.tex_env = mode;
    }

    fn alpha_func_greater(&mut self, reference: f32) {
        self.alpha_ref = reference;
    }

    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.color = [r, g, b, a];
    }

    #[allow(unsafe_code)]
    fn viewport(&mut self, rect: Rect) {
        use glow::HasContext;

        // SAFETY: negative sizes raise GL_INVALID_VALUE, nothing worse.
        unsafe { self.gl.viewport(rect.x, rect.y, rect.width, rect.height) };
    }

    #[allow(unsafe_code)]
    fn scissor(&mut self, rect: Rect) {
        use glow::HasContext;

        // SAFETY: as for viewport.
        unsafe { self.gl.scissor(rect.x, rect.y, rect.width, rect.height) };
    }

    #[allow(unsafe_code)]
    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        use glow::HasContext;

        // SAFETY: values are clamped by GL.
        unsafe { self.gl.clear_color(r, g, b, a) };
    }

    #[allow(unsafe_code)]
    fn clear_color_buffer(&mut self) {
        use glow::HasContext;

        // SAFETY: clears the bound framebuffer.
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) };
        self.check("clear");
    }

    // ===== MATRICES =====

    fn matrix_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    fn push_matrix(&mut self) {
        self.stack_mut().push();
    }

    fn pop_matrix(&mut self) {
        self.stack_mut().pop();
    }

    fn load_identity(&mut self) {
        self.stack_mut().load_identity();
    }

    fn ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        self.stack_mut().multiply(ortho_matrix(left, right, bottom, top, near, far));
    }

    fn current_matrix(&self, mode: MatrixMode) -> Mat4 {
        match mode {
            MatrixMode::Projection => self.projection.top(),
            MatrixMode::ModelView => self.model_view.top(),
        }
    }

    // ===== DRAWING =====

    fn draw_quad(&mut self, vertices: &[QuadVertex; 4]) {
        let uniforms = QuadUniforms {
            mvp: self.projection.top() * self.model_view.top(),
            color: self.color,
            textured: self.texture_2d && self.bound_on_active_unit().is_some(),
            tex_env: self.tex_env,
            texture_unit: self.active_unit,
            alpha_test: self.alpha_test,
            alpha_ref: self.alpha_ref,
        };
        self.quad.draw(&self.gl, vertices, &uniforms);
        self.check("draw_quad");
    }
}

impl Drop for GlGraphicsContext {
    fn drop(&mut self) {
        self.destroy();
    }
}
