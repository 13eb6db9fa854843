/// Mock GraphicsContext for unit tests (no GPU required)
///
/// Records every state-mutating call in a command log and mirrors the state
/// a real context would hold (bindings, toggles, matrix stacks, viewport),
/// so tests can assert both the call sequence and the resulting state.
/// Failure knobs let tests exercise allocation and completeness failures.

use glam::Mat4;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graphics_device::{
    GraphicsContext, ContextCapabilities, TextureHandle, FramebufferHandle,
    Capability, MatrixMode, FramebufferStatus, SamplerDesc, TexImageDesc,
    PixelFormat, BlendFactor, TexEnvMode, Rect, QuadVertex, ortho_matrix,
};

/// A quad captured by `draw_quad`, with the state it was drawn under
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnQuad {
    pub vertices: [QuadVertex; 4],
    pub texture: Option<TextureHandle>,
    pub textured: bool,
    pub framebuffer: Option<FramebufferHandle>,
    pub projection: Mat4,
    pub model_view: Mat4,
}

#[derive(Debug)]
pub struct MockGraphicsContext {
    pub caps: ContextCapabilities,

    /// Every mutating call, in order
    pub commands: Vec<String>,

    // ----- failure injection -----
    pub fail_gen_texture: bool,
    pub fail_gen_framebuffer: bool,
    pub framebuffer_status: FramebufferStatus,

    // ----- mirrored state -----
    next_handle: u32,
    pub live_textures: FxHashSet<TextureHandle>,
    pub live_framebuffers: FxHashSet<FramebufferHandle>,
    pub attachments: FxHashMap<FramebufferHandle, TextureHandle>,
    pub texture_images: FxHashMap<TextureHandle, TexImageDesc>,
    pub texture_samplers: FxHashMap<TextureHandle, SamplerDesc>,
    pub enabled: FxHashSet<Capability>,
    pub bound_framebuffer: Option<FramebufferHandle>,
    pub bound_texture: Option<TextureHandle>,
    pub active_unit: u32,
    pub viewport: Rect,
    pub scissor: Rect,
    pub blend: Option<(BlendFactor, BlendFactor)>,
    pub tex_env: Option<TexEnvMode>,
    pub color: [u8; 4],
    pub clear_color: [f32; 4],
    pub uploads: Vec<(Rect, PixelFormat, usize)>,
    pub quads: Vec<DrawnQuad>,
    mode: MatrixMode,
    projection: Vec<Mat4>,
    model_view: Vec<Mat4>,
}

impl MockGraphicsContext {
    pub fn new() -> Self {
        Self::with_capabilities(ContextCapabilities::default())
    }

    pub fn with_capabilities(caps: ContextCapabilities) -> Self {
        Self {
            caps,
            commands: Vec::new(),
            fail_gen_texture: false,
            fail_gen_framebuffer: false,
            framebuffer_status: FramebufferStatus::Complete,
            next_handle: 1,
            live_textures: FxHashSet::default(),
            live_framebuffers: FxHashSet::default(),
            attachments: FxHashMap::default(),
            texture_images: FxHashMap::default(),
            texture_samplers: FxHashMap::default(),
            enabled: FxHashSet::default(),
            bound_framebuffer: None,
            bound_texture: None,
            active_unit: 0,
            viewport: Rect::default(),
            scissor: Rect::default(),
            blend: None,
            tex_env: None,
            color: [255; 4],
            clear_color: [0.0; 4],
            uploads: Vec::new(),
            quads: Vec::new(),
            mode: MatrixMode::ModelView,
            projection: vec![Mat4::IDENTITY],
            model_view: vec![Mat4::IDENTITY],
        }
    }

    /// Forget recorded commands and quads, keep state
    pub fn clear_log(&mut self) {
        self.commands.clear();
        self.quads.clear();
        self.uploads.clear();
    }

    /// Depth of the given matrix stack (1 = nothing pushed)
    pub fn stack_depth(&self, mode: MatrixMode) -> usize {
        match mode {
            MatrixMode::Projection => self.projection.len(),
            MatrixMode::ModelView => self.model_view.len(),
        }
    }

    /// Currently selected matrix stack
    pub fn current_mode(&self) -> MatrixMode {
        self.mode
    }

    /// Set or clear a capability without logging (test setup)
    pub fn preset(&mut self, cap: Capability, on: bool) {
        if on {
            self.enabled.insert(cap);
        } else {
            self.enabled.remove(&cap);
        }
    }

    fn alloc_handle(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn stack_mut(&mut self) -> &mut Vec<Mat4> {
        match self.mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::ModelView => &mut self.model_view,
        }
    }

    fn record(&mut self, command: String) {
        self.commands.push(command);
    }
}

impl GraphicsContext for MockGraphicsContext {
    fn capabilities(&self) -> &ContextCapabilities {
        &self.caps
    }

    fn gen_texture(&mut self) -> Option<TextureHandle> {
        self.record("gen_texture".to_string());
        if self.fail_gen_texture {
            return None;
        }
        let handle = TextureHandle(self.alloc_handle());
        self.live_textures.insert(handle);
        Some(handle)
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.record(format!("delete_texture({})", texture.0));
        self.live_textures.remove(&texture);
        self.texture_images.remove(&texture);
        self.texture_samplers.remove(&texture);
    }

    fn active_texture(&mut self, unit: u32) {
        self.record(format!("active_texture({})", unit));
        self.active_unit = unit;
    }

    fn active_texture_unit(&self) -> u32 {
        self.active_unit
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        self.record(format!("bind_texture({:?})", texture.map(|t| t.0)));
        self.bound_texture = texture;
    }

    fn set_sampler(&mut self, sampler: &SamplerDesc) {
        self.record("set_sampler".to_string());
        if let Some(texture) = self.bound_texture {
            self.texture_samplers.insert(texture, *sampler);
        }
    }

    fn tex_image_2d(&mut self, desc: &TexImageDesc, _data: Option<&[u8]>) {
        self.record(format!("tex_image_2d({}x{})", desc.width, desc.height));
        if let Some(texture) = self.bound_texture {
            self.texture_images.insert(texture, *desc);
        }
    }

    fn tex_sub_image_2d(&mut self, region: Rect, format: PixelFormat, data: &[u8]) {
        self.record(format!("tex_sub_image_2d({}x{})", region.width, region.height));
        self.uploads.push((region, format, data.len()));
    }

    fn gen_framebuffer(&mut self) -> Option<FramebufferHandle> {
        self.record("gen_framebuffer".to_string());
        if self.fail_gen_framebuffer {
            return None;
        }
        let handle = FramebufferHandle(self.alloc_handle());
        self.live_framebuffers.insert(handle);
        Some(handle)
    }

    fn delete_framebuffer(&mut self, framebuffer: FramebufferHandle) {
        self.record(format!("delete_framebuffer({})", framebuffer.0));
        self.live_framebuffers.remove(&framebuffer);
        self.attachments.remove(&framebuffer);
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferHandle>) {
        self.record(format!("bind_framebuffer({:?})", framebuffer.map(|f| f.0)));
        self.bound_framebuffer = framebuffer;
    }

    fn framebuffer_texture_2d(&mut self, texture: TextureHandle) {
        self.record(format!("framebuffer_texture_2d({})", texture.0));
        if let Some(framebuffer) = self.bound_framebuffer {
            self.attachments.insert(framebuffer, texture);
        }
    }

    fn check_framebuffer_status(&mut self) -> FramebufferStatus {
        self.record("check_framebuffer_status".to_string());
        self.framebuffer_status
    }

    fn enable(&mut self, cap: Capability) {
        self.record(format!("enable({:?})", cap));
        self.enabled.insert(cap);
    }

    fn disable(&mut self, cap: Capability) {
        self.record(format!("disable({:?})", cap));
        self.enabled.remove(&cap);
    }

    fn is_enabled(&self, cap: Capability) -> bool {
        self.enabled.contains(&cap)
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.record(format!("blend_func({:?}, {:?})", src, dst));
        self.blend = Some((src, dst));
    }

    fn tex_env_mode(&mut self, mode: TexEnvMode) {
        self.record(format!("tex_env_mode({:?})", mode));
        self.tex_env = Some(mode);
    }

    fn alpha_func_greater(&mut self, reference: f32) {
        self.record(format!("alpha_func_greater({})", reference));
    }

    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.record(format!("color4ub({}, {}, {}, {})", r, g, b, a));
        self.color = [r, g, b, a];
    }

    fn viewport(&mut self, rect: Rect) {
        self.record(format!("viewport({}, {}, {}, {})", rect.x, rect.y, rect.width, rect.height));
        self.viewport = rect;
    }

    fn scissor(&mut self, rect: Rect) {
        self.record(format!("scissor({}, {}, {}, {})", rect.x, rect.y, rect.width, rect.height));
        self.scissor = rect;
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.record("clear_color".to_string());
        self.clear_color = [r, g, b, a];
    }

    fn clear_color_buffer(&mut self) {
        self.record("clear_color_buffer".to_string());
    }

    fn matrix_mode(&mut self, mode: MatrixMode) {
        self.record(format!("matrix_mode({:?})", mode));
        self.mode = mode;
    }

    fn push_matrix(&mut self) {
        self.record("push_matrix".to_string());
        let stack = self.stack_mut();
        let top = *stack.last().unwrap();
        stack.push(top);
    }

    fn pop_matrix(&mut self) {
        self.record("pop_matrix".to_string());
        let stack = self.stack_mut();
        assert!(stack.len() > 1, "matrix stack underflow");
        stack.pop();
    }

    fn load_identity(&mut self) {
        self.record("load_identity".to_string());
        *self.stack_mut().last_mut().unwrap() = Mat4::IDENTITY;
    }

    fn ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        self.record(format!("ortho({}, {}, {}, {}, {}, {})", left, right, bottom, top, near, far));
        let top_matrix = self.stack_mut().last_mut().unwrap();
        *top_matrix = *top_matrix * ortho_matrix(left, right, bottom, top, near, far);
    }

    fn current_matrix(&self, mode: MatrixMode) -> Mat4 {
        match mode {
            MatrixMode::Projection => *self.projection.last().unwrap(),
            MatrixMode::ModelView => *self.model_view.last().unwrap(),
        }
    }

    fn draw_quad(&mut self, vertices: &[QuadVertex; 4]) {
        self.record("draw_quad".to_string());
        self.quads.push(DrawnQuad {
            vertices: *vertices,
            texture: self.bound_texture,
            textured: self.enabled.contains(&Capability::Texture2D),
            framebuffer: self.bound_framebuffer,
            projection: *self.projection.last().unwrap(),
            model_view: *self.model_view.last().unwrap(),
        });
    }
}

#[cfg(test)]
#[path = "mock_graphics_context_tests.rs"]
mod tests;
