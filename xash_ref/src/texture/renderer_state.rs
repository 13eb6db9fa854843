/// Renderer-side texture bookkeeping: sky, lightmaps, light styles and
/// the cinematic texture used for raw frames.

pub const MAX_LIGHTMAPS: usize = 256;
pub const MAX_LIGHTSTYLES: usize = 256;
pub const SKYBOX_SIDES: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct RendererState {
    /// Host texture index per skybox side (0 = none)
    pub skybox_textures: [i32; SKYBOX_SIDES],
    pub sky_texnum: i32,
    /// Quake-style two-layer sky
    pub solid_sky_texture: i32,
    pub alpha_sky_texture: i32,
    pub lightmap_textures: [i32; MAX_LIGHTMAPS],
    pub lightstyle_values: [i32; MAX_LIGHTSTYLES],
    /// Texture raw cinematic frames are streamed into
    pub cin_texture: i32,
    /// Duration of the last frame, in seconds
    pub frame_time: f32,
}

impl RendererState {
    pub fn new() -> Self {
        Self {
            skybox_textures: [0; SKYBOX_SIDES],
            sky_texnum: 0,
            solid_sky_texture: 0,
            alpha_sky_texture: 0,
            lightmap_textures: [0; MAX_LIGHTMAPS],
            lightstyle_values: [0; MAX_LIGHTSTYLES],
            cin_texture: 0,
            frame_time: 0.0,
        }
    }

    /// Lightmap slot, index clamped into range
    pub fn lightmap(&self, index: i32) -> i32 {
        self.lightmap_textures[clamp_index(index, MAX_LIGHTMAPS)]
    }

    /// Light style value, index clamped into range
    pub fn lightstyle(&self, index: i32) -> i32 {
        self.lightstyle_values[clamp_index(index, MAX_LIGHTSTYLES)]
    }

    /// Skybox side, `None` when out of range
    pub fn skybox(&self, side: i32) -> Option<i32> {
        usize::try_from(side).ok().and_then(|s| self.skybox_textures.get(s).copied())
    }

    pub fn setup_sky(&mut self, sides: [i32; SKYBOX_SIDES]) {
        self.skybox_textures = sides;
    }

    pub fn set_sky_clouds(&mut self, solid: i32, alpha: i32) {
        self.solid_sky_texture = solid;
        self.alpha_sky_texture = alpha;
    }
}

impl Default for RendererState {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_index(index: i32, len: usize) -> usize {
    index.clamp(0, len as i32 - 1) as usize
}

#[cfg(test)]
#[path = "renderer_state_tests.rs"]
mod tests;
