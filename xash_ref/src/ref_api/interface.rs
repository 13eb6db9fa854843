/// Export table handed to the host after a successful version handshake.

use crate::context::RefContext;
use crate::texture::SKYBOX_SIDES;

/// ABI version this plugin implements
pub const REF_API_VERSION: i32 = 9;

/// Renderer entry points, in host table order
#[derive(Clone, Copy)]
pub struct RefInterface {
    pub config_name: fn(&RefContext) -> &str,

    // ----- display pipeline -----
    pub set_display_transform: fn(&mut RefContext, i32, i32, i32, f32, f32) -> bool,
    pub create_scale_render_target: fn(&mut RefContext, i32, i32) -> bool,
    pub destroy_scale_render_target: fn(&mut RefContext),
    pub bind_render_target_for_scene: fn(&mut RefContext),
    pub blit_scale_render_target_to_screen: fn(&mut RefContext),
    pub set_2d_mode: fn(&mut RefContext, bool),

    // ----- 2D drawing -----
    pub clear_screen: fn(&mut RefContext),
    pub draw_stretch_pic: fn(&mut RefContext, f32, f32, f32, f32, f32, f32, f32, f32, i32),
    pub fill_rgba: fn(&mut RefContext, i32, f32, f32, f32, f32, u8, u8, u8, u8),
    pub draw_stretch_raw: fn(&mut RefContext, f32, f32, f32, f32, i32, i32, &[u8], bool),
    pub upload_stretch_raw: fn(&mut RefContext, i32, i32, i32, i32, i32, &[u8]),

    // ----- texture parameters -----
    pub get_parm: fn(&RefContext, i32, i32) -> i32,
    pub detail_scale_for_texture: fn(&RefContext, i32, Option<&mut f32>, Option<&mut f32>),
    pub extra_parms_for_texture:
        fn(&RefContext, i32, Option<&mut u8>, Option<&mut u8>, Option<&mut u8>, Option<&mut u8>),
    pub texture_parms: fn(&RefContext, i32, Option<&mut i32>, Option<&mut i32>),
    pub override_texture_source_size: fn(&mut RefContext, i32, i32, i32),

    // ----- sky / frame / lifecycle -----
    pub setup_sky: fn(&mut RefContext, [i32; SKYBOX_SIDES]),
    pub set_sky_clouds_textures: fn(&mut RefContext, i32, i32),
    pub frame_time: fn(&RefContext) -> f32,
    pub shutdown: fn(&mut RefContext),
}

impl RefInterface {
    /// Table pointing at the `RefContext` methods
    pub fn new() -> Self {
        Self {
            config_name: RefContext::config_name,
            set_display_transform: RefContext::set_display_transform,
            create_scale_render_target: RefContext::create_scale_render_target,
            destroy_scale_render_target: RefContext::destroy_scale_render_target,
            bind_render_target_for_scene: RefContext::bind_render_target_for_scene,
            blit_scale_render_target_to_screen: RefContext::blit_scale_render_target_to_screen,
            set_2d_mode: RefContext::set_2d_mode,
            clear_screen: RefContext::clear_screen,
            draw_stretch_pic: RefContext::draw_stretch_pic,
            fill_rgba: RefContext::fill_rgba,
            draw_stretch_raw: RefContext::draw_stretch_raw,
            upload_stretch_raw: RefContext::upload_stretch_raw,
            get_parm: RefContext::get_parm,
            detail_scale_for_texture: RefContext::detail_scale_for_texture,
            extra_parms_for_texture: RefContext::extra_parms_for_texture,
            texture_parms: RefContext::texture_parms,
            override_texture_source_size: RefContext::override_texture_source_size,
            setup_sky: RefContext::setup_sky,
            set_sky_clouds_textures: RefContext::set_sky_clouds_textures,
            frame_time: RefContext::frame_time,
            shutdown: RefContext::shutdown,
        }
    }
}

impl Default for RefInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RefInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefInterface")
            .field("version", &REF_API_VERSION)
            .finish_non_exhaustive()
    }
}
