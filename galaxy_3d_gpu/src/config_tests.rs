//! Unit tests for config.rs

use crate::config::GraphicsDeviceOptions;
use crate::error::Error;
use crate::format::PixelFormat;
use crate::log::LogSeverity;

#[test]
fn test_default_options() {
    let options = GraphicsDeviceOptions::default();
    assert_eq!(options.debug, cfg!(debug_assertions));
    assert!(options.swapchain_depth_format.is_none());
    assert!(options.min_log_severity <= LogSeverity::Info);
    assert!(options.validate().is_ok());
}

#[test]
fn test_with_depth_sets_depth_format() {
    let options = GraphicsDeviceOptions::with_depth(PixelFormat::D24_UNorm_S8_UInt);
    assert_eq!(options.swapchain_depth_format, Some(PixelFormat::D24_UNorm_S8_UInt));
    assert!(options.validate().is_ok());
}

#[test]
fn test_depth_capable_color_formats_are_accepted() {
    assert!(GraphicsDeviceOptions::with_depth(PixelFormat::R32_Float).validate().is_ok());
    assert!(GraphicsDeviceOptions::with_depth(PixelFormat::R16_UNorm).validate().is_ok());
}

#[test]
fn test_non_depth_swapchain_format_is_rejected() {
    let options = GraphicsDeviceOptions::with_depth(PixelFormat::R8_G8_B8_A8_UNorm);
    match options.validate() {
        Err(Error::InvalidDescription(msg)) => assert!(msg.contains("R8_G8_B8_A8_UNorm")),
        other => panic!("expected InvalidDescription, got {:?}", other),
    }
}
