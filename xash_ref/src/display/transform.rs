/// Display transform controller.
///
/// Maps a host display transform request onto the render-target manager.
/// Only scaling is supported: a scale other than 1 renders the scene into
/// a smaller off-screen target which the present stage stretches back to
/// the screen. Rotation and offsets are reported as not accepted.

use crate::display::render_target::RenderTargetManager;
use crate::error::Result;
use crate::graphics_device::GraphicsContext;
use crate::{engine_info, engine_warn};

const LOG_SOURCE: &str = "xref::DisplayTransform";

/// Screen rotation requested by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRotation {
    None,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Positive code this plugin does not know
    Unknown(i32),
}

impl ScreenRotation {
    /// Convert the host's integer code (zero and negatives mean no rotation)
    pub fn from_raw(code: i32) -> Self {
        match code {
            i32::MIN..=0 => ScreenRotation::None,
            1 => ScreenRotation::Rotate90,
            2 => ScreenRotation::Rotate180,
            3 => ScreenRotation::Rotate270,
            other => ScreenRotation::Unknown(other),
        }
    }

    pub fn is_rotated(&self) -> bool {
        *self != ScreenRotation::None
    }
}

/// A display transform as requested by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransformRequest {
    pub rotation: ScreenRotation,
    pub offset_x: i32,
    pub offset_y: i32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl DisplayTransformRequest {
    /// No rotation, no offset, scale 1
    pub fn identity() -> Self {
        Self { rotation: ScreenRotation::None, offset_x: 0, offset_y: 0, scale_x: 1.0, scale_y: 1.0 }
    }

    /// Uniform or per-axis scale only
    pub fn scale(scale_x: f32, scale_y: f32) -> Self {
        Self { scale_x, scale_y, ..Self::identity() }
    }

    fn wants_scale(&self) -> bool {
        self.scale_x != 1.0 || self.scale_y != 1.0
    }
}

/// Which parts of a request were honored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOutcome {
    pub rotation_accepted: bool,
    pub offset_accepted: bool,
    pub scale_accepted: bool,
}

impl TransformOutcome {
    /// Legacy boolean result: every component accepted
    pub fn fully_accepted(&self) -> bool {
        self.rotation_accepted && self.offset_accepted && self.scale_accepted
    }
}

/// Screen size with non-positive axes replaced by the fallback
pub fn resolve_screen_size(screen_size: (i32, i32), fallback_size: (i32, i32)) -> (i32, i32) {
    let w = if screen_size.0 <= 0 { fallback_size.0 } else { screen_size.0 };
    let h = if screen_size.1 <= 0 { fallback_size.1 } else { screen_size.1 };
    (w, h)
}

/// Internal render size for one axis: `floor(screen / scale)`, at least 1
pub fn scaled_axis(screen: i32, scale: f32) -> i32 {
    let size = (screen as f32 * (1.0 / scale)) as i32;
    size.max(1)
}

/// Apply a display transform request.
///
/// Rejected components are reported in the outcome and logged; they never
/// roll back work done for the other components. A partially rejected
/// request may therefore still leave a new render target in place.
///
/// # Errors
///
/// Only fatal errors from the render-target manager (hardware limits)
/// are returned; every other failure is folded into the outcome.
pub fn set_display_transform(
    manager: &mut RenderTargetManager,
    gl: &mut dyn GraphicsContext,
    request: &DisplayTransformRequest,
    screen_size: (i32, i32),
    fallback_size: (i32, i32),
) -> Result<TransformOutcome> {
    let mut outcome = TransformOutcome {
        rotation_accepted: true,
        offset_accepted: true,
        scale_accepted: true,
    };

    if request.rotation.is_rotated() {
        engine_warn!(LOG_SOURCE, "Rotation transform not supported ({:?})", request.rotation);
        outcome.rotation_accepted = false;
    }

    if request.offset_x != 0 || request.offset_y != 0 {
        engine_warn!(LOG_SOURCE, "Offset transform not supported ({}, {})",
            request.offset_x, request.offset_y);
        outcome.offset_accepted = false;
    }

    if !request.wants_scale() {
        manager.destroy(gl);
        return Ok(outcome);
    }

    if !(request.scale_x > 0.0 && request.scale_y > 0.0)
        || !request.scale_x.is_finite()
        || !request.scale_y.is_finite()
    {
        engine_warn!(LOG_SOURCE, "Scale transform {}x{} not supported", request.scale_x, request.scale_y);
        outcome.scale_accepted = false;
        return Ok(outcome);
    }

    let (screen_w, screen_h) = resolve_screen_size(screen_size, fallback_size);
    let rt_w = scaled_axis(screen_w, request.scale_x);
    let rt_h = scaled_axis(screen_h, request.scale_y);

    match manager.create(gl, rt_w, rt_h) {
        Ok(()) => {
            manager.set_scale(request.scale_x, request.scale_y);
            engine_info!(LOG_SOURCE, "Scale transform enabled: internal RT {}x{} -> screen {}x{}",
                rt_w, rt_h, screen_w, screen_h);
        }
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            engine_warn!(LOG_SOURCE, "Scale transform not supported ({})", e);
            outcome.scale_accepted = false;
        }
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
