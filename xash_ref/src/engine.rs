/// Xash renderer plugin - loader entry point and global logger
///
/// The host loads the plugin, asks for the export table with the ABI
/// version it was built against and keeps the returned `RefContext` for the
/// lifetime of the renderer. Logging is routed through a process-wide,
/// replaceable logger so the host can redirect it to its console.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

use crate::config::Config;
use crate::context::RefContext;
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsContext;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use crate::ref_api::{HostApi, RefInterface, REF_API_VERSION};
use crate::texture::TextureLookup;

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Plugin entry points and logging
///
/// # Example
///
/// ```no_run
/// use xash_ref::xref::{Engine, Config, REF_API_VERSION};
/// # fn load(
/// #     gl: Box<dyn xash_ref::xref::GraphicsContext>,
/// #     host: Box<dyn xash_ref::xref::HostApi>,
/// #     textures: Box<dyn xash_ref::xref::TextureLookup>,
/// # ) -> xash_ref::xref::Result<()> {
/// let (api, mut ctx) = Engine::get_ref_api(REF_API_VERSION, gl, host, textures, Config::default())?;
///
/// (api.set_display_transform)(&mut ctx, 0, 0, 0, 2.0, 2.0);
/// (api.bind_render_target_for_scene)(&mut ctx);
/// // ... scene rendering ...
/// (api.blit_scale_render_target_to_screen)(&mut ctx);
/// (api.shutdown)(&mut ctx);
/// # Ok(())
/// # }
/// ```
pub struct Engine;

impl Engine {
    /// Version handshake: build the export table and a fresh renderer context.
    ///
    /// # Errors
    ///
    /// Returns `Error::VersionMismatch` when `version` is not
    /// `REF_API_VERSION`. Nothing is created in that case.
    pub fn get_ref_api(
        version: i32,
        gl: Box<dyn GraphicsContext>,
        host: Box<dyn HostApi>,
        textures: Box<dyn TextureLookup>,
        config: Config,
    ) -> Result<(RefInterface, RefContext)> {
        if version != REF_API_VERSION {
            let error = Error::VersionMismatch { expected: REF_API_VERSION, got: version };
            crate::engine_error!("xref::Engine", "{}", error);
            return Err(error);
        }

        let caps = *gl.capabilities();
        crate::engine_info!("xref::Engine",
            "Renderer '{}' loaded (API {}, max texture {}, {} texture units, NPOT {})",
            config.renderer_name, version, caps.max_texture_size, caps.max_texture_units,
            caps.npot_textures);

        Ok((RefInterface::new(), RefContext::new(gl, host, textures, config)))
    }

    // ===== LOGGER API =====

    /// Set a custom logger
    ///
    /// Replaces the default logger with a custom implementation, e.g. one
    /// forwarding to the host console.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use xash_ref::xref::Engine;
    /// use xash_ref::xref::log::{Logger, LogEntry};
    ///
    /// struct HostConsole;
    ///
    /// impl Logger for HostConsole {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Con_Printf...
    ///     }
    /// }
    ///
    /// Engine::set_logger(HostConsole);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error!, engine_err! and engine_bail!.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
