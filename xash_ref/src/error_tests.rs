//! Unit tests for error.rs
//!
//! Tests Error variants, their Display output, fatality classification
//! and the engine_err!/engine_bail! macros.

use crate::error::{Error, Result};
use serial_test::serial;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("glCreateTexture returned 0".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("glCreateTexture returned 0"));
}

#[test]
fn test_invalid_dimensions_display() {
    let err = Error::InvalidDimensions { width: 0, height: -4 };
    assert_eq!(format!("{}", err), "Invalid dimensions: 0x-4");
}

#[test]
fn test_incomplete_framebuffer_display_is_hex() {
    let err = Error::IncompleteFramebuffer(0x8CD6);
    assert_eq!(format!("{}", err), "Framebuffer incomplete: status 0x8CD6");
}

#[test]
fn test_hardware_limit_display() {
    let err = Error::HardwareLimit { what: "draw_stretch_raw", size: 8192, max: 4096 };
    let display = format!("{}", err);
    assert!(display.contains("draw_stretch_raw"));
    assert!(display.contains("8192"));
    assert!(display.contains("exceeds hardware limits"));
}

#[test]
fn test_version_mismatch_display() {
    let err = Error::VersionMismatch { expected: 9, got: 8 };
    let display = format!("{}", err);
    assert!(display.contains("expected 9"));
    assert!(display.contains("got 8"));
}

// ============================================================================
// FATALITY
// ============================================================================

#[test]
fn test_only_hardware_limit_is_fatal() {
    assert!(Error::HardwareLimit { what: "x", size: 2, max: 1 }.is_fatal());

    assert!(!Error::BackendError("x".to_string()).is_fatal());
    assert!(!Error::InvalidResource("x".to_string()).is_fatal());
    assert!(!Error::InitializationFailed("x".to_string()).is_fatal());
    assert!(!Error::InvalidDimensions { width: 0, height: 0 }.is_fatal());
    assert!(!Error::AllocationFailed("x".to_string()).is_fatal());
    assert!(!Error::IncompleteFramebuffer(0).is_fatal());
    assert!(!Error::VersionMismatch { expected: 1, got: 2 }.is_fatal());
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::AllocationFailed("framebuffer".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_names_variant() {
    let debug = format!("{:?}", Error::InvalidDimensions { width: 1, height: 0 });
    assert!(debug.contains("InvalidDimensions"));

    let debug = format!("{:?}", Error::IncompleteFramebuffer(1));
    assert!(debug.contains("IncompleteFramebuffer"));
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::HardwareLimit { what: "upload_stretch_raw", size: 9000, max: 8192 };
    assert_eq!(err.clone(), err);
}

// ============================================================================
// RESULT AND MACROS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::AllocationFailed("texture".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert_eq!(outer(), Err(Error::AllocationFailed("texture".to_string())));
}

#[test]
#[serial]
fn test_engine_err_builds_backend_error() {
    let err = crate::engine_err!("xref::test", "code {}", 7);
    assert_eq!(err, Error::BackendError("code 7".to_string()));
}

#[test]
#[serial]
fn test_engine_bail_returns_early() {
    fn check(value: i32) -> Result<i32> {
        if value < 0 {
            crate::engine_bail!("xref::test", "negative value {}", value);
        }
        Ok(value)
    }

    assert_eq!(check(3), Ok(3));
    assert_eq!(check(-1), Err(Error::BackendError("negative value -1".to_string())));
}
