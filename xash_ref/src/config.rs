/// Renderer configuration

/// Settings fixed at load time
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Renderer name reported to the host (config file suffix, menus)
    pub renderer_name: String,
    /// Screen size assumed while the host has not reported one
    pub fallback_width: i32,
    pub fallback_height: i32,
    /// Console variable holding the UI display scale
    pub display_scale_cvar: String,
    /// Console variable forcing nearest texture filtering
    pub nearest_filter_cvar: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            renderer_name: "opengl".to_string(),
            fallback_width: 640,
            fallback_height: 480,
            display_scale_cvar: "vid_scale".to_string(),
            nearest_filter_cvar: "gl_texture_nearest".to_string(),
        }
    }
}

impl Config {
    pub fn fallback_size(&self) -> (i32, i32) {
        (self.fallback_width, self.fallback_height)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
