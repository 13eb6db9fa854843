/// Renderer context: the single owned object behind every exported call.
///
/// Holds the graphics context, the host callbacks, the texture lookup, the
/// render-target manager and renderer bookkeeping. Each exported operation
/// is a method here; the host-facing ABI table (`RefInterface`) points at
/// them. Fatal errors are reported through `HostApi::host_error`.

use crate::config::Config;
use crate::display::{
    self, RenderTargetManager, DisplayTransformRequest, ScreenRotation, TransformOutcome,
};
use crate::draw::{self, RenderMode};
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsContext;
use crate::ref_api::HostApi;
use crate::texture::{self, RendererState, TextureLookup, TextureParmFacade, SKYBOX_SIDES};
use crate::{engine_error, engine_info, engine_warn};

const LOG_SOURCE: &str = "xref::Context";

pub struct RefContext {
    gl: Box<dyn GraphicsContext>,
    host: Box<dyn HostApi>,
    textures: Box<dyn TextureLookup>,
    render_target: RenderTargetManager,
    state: RendererState,
    config: Config,
    shut_down: bool,
}

impl RefContext {
    pub fn new(
        gl: Box<dyn GraphicsContext>,
        host: Box<dyn HostApi>,
        textures: Box<dyn TextureLookup>,
        config: Config,
    ) -> Self {
        Self {
            gl,
            host,
            textures,
            render_target: RenderTargetManager::new(),
            state: RendererState::new(),
            config,
            shut_down: false,
        }
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn render_target(&self) -> &RenderTargetManager {
        &self.render_target
    }

    pub fn state(&self) -> &RendererState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RendererState {
        &mut self.state
    }

    pub fn gl(&self) -> &dyn GraphicsContext {
        &*self.gl
    }

    pub fn gl_mut(&mut self) -> &mut dyn GraphicsContext {
        &mut *self.gl
    }

    pub fn textures(&self) -> &dyn TextureLookup {
        &*self.textures
    }

    pub fn textures_mut(&mut self) -> &mut dyn TextureLookup {
        &mut *self.textures
    }

    /// Name the host uses for this renderer's config file
    pub fn config_name(&self) -> &str {
        &self.config.renderer_name
    }

    // ===== ERROR DELIVERY =====

    /// Forward a fatal error to the host, log anything else.
    ///
    /// Returns the legacy success flag (always false).
    fn report(&mut self, error: Error) -> bool {
        if error.is_fatal() {
            engine_error!(LOG_SOURCE, "{}", error);
            self.host.host_error(&error.to_string());
        } else {
            engine_warn!(LOG_SOURCE, "{}", error);
        }
        false
    }

    fn finish(&mut self, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => self.report(e),
        }
    }

    fn screen_size(&self) -> (i32, i32) {
        let globals = self.host.globals();
        (globals.width, globals.height)
    }

    // ===== DISPLAY PIPELINE =====

    /// Apply a display transform request, reporting each component.
    ///
    /// A fatal hardware-limit error is sent to the host and reported as
    /// nothing accepted for the scale component.
    pub fn apply_display_transform(&mut self, request: &DisplayTransformRequest) -> TransformOutcome {
        let screen = self.screen_size();
        let fallback = self.config.fallback_size();
        match display::set_display_transform(&mut self.render_target, &mut *self.gl, request, screen, fallback) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.report(e);
                TransformOutcome {
                    rotation_accepted: !request.rotation.is_rotated(),
                    offset_accepted: request.offset_x == 0 && request.offset_y == 0,
                    scale_accepted: false,
                }
            }
        }
    }

    /// Legacy entry: true only when every component was accepted
    pub fn set_display_transform(&mut self, rotation: i32, offset_x: i32, offset_y: i32, scale_x: f32, scale_y: f32) -> bool {
        let request = DisplayTransformRequest {
            rotation: ScreenRotation::from_raw(rotation),
            offset_x,
            offset_y,
            scale_x,
            scale_y,
        };
        self.apply_display_transform(&request).fully_accepted()
    }

    pub fn create_scale_render_target(&mut self, width: i32, height: i32) -> bool {
        let result = self.render_target.create(&mut *self.gl, width, height);
        self.finish(result)
    }

    pub fn destroy_scale_render_target(&mut self) {
        self.render_target.destroy(&mut *self.gl);
    }

    pub fn bind_render_target_for_scene(&mut self) {
        self.render_target.bind_for_scene(&mut *self.gl);
    }

    /// Stretch the internal frame over the host's current screen size
    pub fn blit_scale_render_target_to_screen(&mut self) {
        let (width, height) = self.screen_size();
        display::present(&self.render_target, &mut *self.gl, width, height);
    }

    pub fn set_2d_mode(&mut self, enable: bool) {
        let (width, height) = self.screen_size();
        let scale = self.host.cvar_float(&self.config.display_scale_cvar);
        display::set_2d_mode(&mut *self.gl, width, height, scale, enable);
    }

    // ===== 2D DRAWING =====

    pub fn clear_screen(&mut self) {
        draw::clear_screen(&mut *self.gl);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_stretch_pic(&mut self, x: f32, y: f32, w: f32, h: f32, s1: f32, t1: f32, s2: f32, t2: f32, texture: i32) {
        draw::draw_stretch_pic(&mut *self.gl, &*self.textures, x, y, w, h, s1, t1, s2, t2, texture);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_rgba(&mut self, render_mode: i32, x: f32, y: f32, w: f32, h: f32, r: u8, g: u8, b: u8, a: u8) {
        draw::fill_rgba(&mut *self.gl, RenderMode::from_raw(render_mode), x, y, w, h, r, g, b, a);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_stretch_raw(&mut self, x: f32, y: f32, w: f32, h: f32, cols: i32, rows: i32, data: &[u8], dirty: bool) {
        let result = draw::draw_stretch_raw(
            &mut *self.gl, &mut *self.textures, self.state.cin_texture,
            x, y, w, h, cols, rows, data, dirty,
        );
        self.finish(result);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn upload_stretch_raw(&mut self, texture: i32, cols: i32, rows: i32, width: i32, height: i32, data: &[u8]) {
        let result = draw::upload_stretch_raw(
            &mut *self.gl, &mut *self.textures, texture, cols, rows, width, height, data,
        );
        self.finish(result);
    }

    // ===== TEXTURE PARAMETERS =====

    fn parm_facade(&self) -> TextureParmFacade<'_> {
        TextureParmFacade {
            textures: &*self.textures,
            state: &self.state,
            gl: &*self.gl,
            host: &*self.host,
            nearest_cvar: &self.config.nearest_filter_cvar,
        }
    }

    pub fn get_parm(&self, parm: i32, arg: i32) -> i32 {
        self.parm_facade().get_parm(parm, arg)
    }

    pub fn detail_scale_for_texture(&self, texture: i32, x_scale: Option<&mut f32>, y_scale: Option<&mut f32>) {
        self.parm_facade().detail_scale_for_texture(texture, x_scale, y_scale);
    }

    pub fn extra_parms_for_texture(
        &self,
        texture: i32,
        red: Option<&mut u8>,
        green: Option<&mut u8>,
        blue: Option<&mut u8>,
        density: Option<&mut u8>,
    ) {
        self.parm_facade().extra_parms_for_texture(texture, red, green, blue, density);
    }

    pub fn texture_parms(&self, texture: i32, width: Option<&mut i32>, height: Option<&mut i32>) {
        self.parm_facade().texture_parms(texture, width, height);
    }

    pub fn override_texture_source_size(&mut self, texture: i32, width: i32, height: i32) {
        texture::override_texture_source_size(&mut *self.textures, texture, width, height);
    }

    // ===== SKY / FRAME =====

    pub fn setup_sky(&mut self, sides: [i32; SKYBOX_SIDES]) {
        self.state.setup_sky(sides);
    }

    pub fn set_sky_clouds_textures(&mut self, solid: i32, alpha: i32) {
        self.state.set_sky_clouds(solid, alpha);
    }

    pub fn frame_time(&self) -> f32 {
        self.state.frame_time
    }

    pub fn set_frame_time(&mut self, seconds: f32) {
        self.state.frame_time = seconds;
    }

    // ===== LIFECYCLE =====

    /// Release GPU resources owned by the renderer. Safe to call twice.
    ///
    /// A target created after an earlier shutdown is released as well.
    pub fn shutdown(&mut self) {
        self.render_target.destroy(&mut *self.gl);
        if !self.shut_down {
            self.shut_down = true;
            engine_info!(LOG_SOURCE, "Renderer shut down");
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl Drop for RefContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
