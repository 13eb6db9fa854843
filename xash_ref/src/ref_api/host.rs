/// Services the host engine provides to the renderer.

/// Host globals the display pipeline reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefGlobals {
    /// Physical screen size in pixels, 0 when not yet known
    pub width: i32,
    pub height: i32,
}

/// Host engine callbacks
pub trait HostApi {
    /// Current host globals
    fn globals(&self) -> RefGlobals;

    /// Value of a console variable, 0.0 when it does not exist
    fn cvar_float(&self, name: &str) -> f32;

    /// Engine-side answer for parameter codes the renderer does not own
    fn engine_get_parm(&self, parm: i32, arg: i32) -> i32;

    /// Report an unrecoverable error to the host (it usually aborts the map)
    fn host_error(&mut self, message: &str);
}
