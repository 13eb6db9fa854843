/// GraphicsContext trait - immediate-mode graphics context interface
///
/// Everything the display pipeline does to the GPU goes through this trait:
/// texture and framebuffer objects, capability toggles, the projection and
/// model-view matrix stacks, viewport/scissor and immediate quads. Backends
/// (e.g. the glow-based OpenGL backend) implement it; tests use the mock.

use glam::Mat4;

// ============================================================================
// Handles
// ============================================================================

/// Opaque GPU texture handle (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Opaque GPU framebuffer handle (never zero; the screen is `None`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FramebufferHandle(pub u32);

// ============================================================================
// Enumerations
// ============================================================================

/// Toggleable pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Blend,
    DepthTest,
    CullFace,
    Texture2D,
    AlphaTest,
    ScissorTest,
}

/// Matrix stack selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    Projection,
    ModelView,
}

/// Result of the framebuffer completeness query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete,
    /// Any other status, with the raw API code
    Incomplete(u32),
}

/// Texture minification/magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

/// Texture coordinate wrap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    ClampToEdge,
}

/// Pixel layout of data handed to an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
    Bgra8,
}

/// Blend factor for `blend_func`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
}

/// How sampled texels combine with the current color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexEnvMode {
    Modulate,
    Replace,
}

// ============================================================================
// Plain data
// ============================================================================

/// Sampler state applied to the bound 2D texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerDesc {
    pub min_filter: TextureFilter,
    pub mag_filter: TextureFilter,
    pub wrap_s: TextureWrap,
    pub wrap_t: TextureWrap,
}

impl SamplerDesc {
    /// Linear filtering, clamp-to-edge on both axes (render target textures)
    pub const LINEAR_CLAMP: SamplerDesc = SamplerDesc {
        min_filter: TextureFilter::Linear,
        mag_filter: TextureFilter::Linear,
        wrap_s: TextureWrap::ClampToEdge,
        wrap_t: TextureWrap::ClampToEdge,
    };
}

/// Storage allocation for the bound 2D texture (level 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexImageDesc {
    pub width: i32,
    pub height: i32,
    /// Backend internal format code (e.g. GL_RGBA8)
    pub internal_format: u32,
    /// Layout of the source pixels
    pub source_format: PixelFormat,
}

/// Integer rectangle in window coordinates (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// One corner of an immediate-mode quad
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl QuadVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self { position: [x, y], uv: [u, v] }
    }
}

/// Build the four corners of an axis-aligned quad, wound
/// (x, y) → (x+w, y) → (x+w, y+h) → (x, y+h).
pub fn axis_aligned_quad(
    x: f32, y: f32, w: f32, h: f32,
    s1: f32, t1: f32, s2: f32, t2: f32,
) -> [QuadVertex; 4] {
    [
        QuadVertex::new(x, y, s1, t1),
        QuadVertex::new(x + w, y, s2, t1),
        QuadVertex::new(x + w, y + h, s2, t2),
        QuadVertex::new(x, y + h, s1, t2),
    ]
}

/// Backend capabilities, queried once at context creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextCapabilities {
    /// The framebuffer completeness query is available. When false,
    /// completeness is assumed whenever both handles were allocated.
    pub framebuffer_status_query: bool,
    /// Non-power-of-two textures are supported
    pub npot_textures: bool,
    /// Largest 2D texture dimension
    pub max_texture_size: i32,
    /// Number of texture image units
    pub max_texture_units: i32,
    /// A stencil buffer is attached and enabled
    pub stencil: bool,
    /// Context flavor reported to the host (0 = desktop GL, 1 = GLES1, 2 = GLES2...)
    pub context_type: i32,
    /// GLES wrapper in use (0 = none)
    pub wrapper: i32,
    /// Gamma is applied in software and textures need rebuilding on change
    pub software_gamma_update: bool,
}

impl Default for ContextCapabilities {
    fn default() -> Self {
        Self {
            framebuffer_status_query: true,
            npot_textures: true,
            max_texture_size: 4096,
            max_texture_units: 4,
            stencil: false,
            context_type: 0,
            wrapper: 0,
            software_gamma_update: false,
        }
    }
}

// ============================================================================
// GraphicsContext trait
// ============================================================================

/// Immediate-mode graphics context
///
/// A single logical context bound to the rendering thread. All calls are
/// synchronous state mutations; nothing is deferred.
pub trait GraphicsContext {
    /// Backend capabilities
    fn capabilities(&self) -> &ContextCapabilities;

    // ===== TEXTURES =====

    /// Allocate a texture object, `None` when the backend returns no handle
    fn gen_texture(&mut self) -> Option<TextureHandle>;

    /// Release a texture object
    fn delete_texture(&mut self, texture: TextureHandle);

    /// Select the active texture unit
    fn active_texture(&mut self, unit: u32);

    /// Currently active texture unit
    fn active_texture_unit(&self) -> u32;

    /// Bind a 2D texture on the active unit (`None` unbinds)
    fn bind_texture(&mut self, texture: Option<TextureHandle>);

    /// Apply sampler state to the bound texture
    fn set_sampler(&mut self, sampler: &SamplerDesc);

    /// Allocate level-0 storage for the bound texture, optionally uploading data
    fn tex_image_2d(&mut self, desc: &TexImageDesc, data: Option<&[u8]>);

    /// Replace a region of the bound texture
    fn tex_sub_image_2d(&mut self, region: Rect, format: PixelFormat, data: &[u8]);

    // ===== FRAMEBUFFERS =====

    /// Allocate a framebuffer object, `None` when the backend returns no handle
    fn gen_framebuffer(&mut self) -> Option<FramebufferHandle>;

    /// Release a framebuffer object
    fn delete_framebuffer(&mut self, framebuffer: FramebufferHandle);

    /// Bind a framebuffer for drawing (`None` = default/screen)
    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferHandle>);

    /// Attach a texture as color attachment 0 of the bound framebuffer
    fn framebuffer_texture_2d(&mut self, texture: TextureHandle);

    /// Completeness of the bound framebuffer.
    ///
    /// Only meaningful when `capabilities().framebuffer_status_query` is true.
    fn check_framebuffer_status(&mut self) -> FramebufferStatus;

    // ===== STATE =====

    fn enable(&mut self, cap: Capability);
    fn disable(&mut self, cap: Capability);
    fn is_enabled(&self, cap: Capability) -> bool;

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);
    fn tex_env_mode(&mut self, mode: TexEnvMode);
    /// Alpha test passes fragments with alpha greater than `reference`
    fn alpha_func_greater(&mut self, reference: f32);
    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8);

    fn viewport(&mut self, rect: Rect);
    fn scissor(&mut self, rect: Rect);

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);
    /// Clear the color buffer of the bound framebuffer
    fn clear_color_buffer(&mut self);

    // ===== MATRICES =====

    fn matrix_mode(&mut self, mode: MatrixMode);
    fn push_matrix(&mut self);
    fn pop_matrix(&mut self);
    fn load_identity(&mut self);
    /// Multiply the current matrix by an orthographic projection
    fn ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32);
    /// Current matrix of the given stack
    fn current_matrix(&self, mode: MatrixMode) -> Mat4;

    // ===== DRAWING =====

    /// Draw a textured (or flat, when 2D texturing is disabled) quad
    fn draw_quad(&mut self, vertices: &[QuadVertex; 4]);
}

/// Orthographic projection with the same convention as glOrtho
pub fn ortho_matrix(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, near, far)
}
