/// Display output pipeline: internal-resolution render target, display
/// transform, present stage and the 2D/3D mode switch.

pub mod render_target;
pub mod transform;
pub mod present;
pub mod mode;

pub use render_target::{RenderTargetManager, ScaleRenderTarget, ScaleState};
pub use transform::{
    ScreenRotation, DisplayTransformRequest, TransformOutcome,
    set_display_transform, scaled_axis, resolve_screen_size,
};
pub use present::present;
pub use mode::{set_2d_mode, scaled_ui_viewport};
