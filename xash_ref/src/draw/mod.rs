/// Orthographic 2D drawing used by the host UI and cinematics

pub mod draw_2d;
pub mod stretch_raw;
pub mod resample;

pub use draw_2d::{RenderMode, draw_stretch_pic, fill_rgba, clear_screen, gpu_texture};
pub use stretch_raw::{draw_stretch_raw, upload_stretch_raw};
pub use resample::{nearest_pow, resample_texture};
