/// GL error checking routed through the engine logger

use xash_ref::engine_warn;

/// Symbolic name of a glGetError code
pub fn gl_error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unknown GL error",
    }
}

/// Drain the GL error queue, logging each error against `operation`.
///
/// Returns the number of errors found.
#[allow(unsafe_code)]
pub fn check_errors(gl: &glow::Context, operation: &str) -> u32 {
    use glow::HasContext;

    let mut count = 0;
    // The queue holds one flag per error kind; bound the loop in case a
    // lost context keeps reporting.
    for _ in 0..16 {
        // SAFETY: glGetError has no preconditions.
        let code = unsafe { gl.get_error() };
        if code == glow::NO_ERROR {
            break;
        }
        engine_warn!("xref::gl", "{} failed: {} (0x{:04X})", operation, gl_error_name(code), code);
        count += 1;
    }
    count
}
