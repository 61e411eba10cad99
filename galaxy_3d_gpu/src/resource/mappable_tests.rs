/// Unit tests for mappable.rs

use std::sync::Arc;

use crate::error::Error;
use crate::format::PixelFormat;
use crate::resource::mock_device::{MockBuffer, MockGraphicsDevice, MockTexture};
use crate::resource::{
    validate_map_request, BufferDescription, BufferUsage, DeviceResource, GraphicsDevice, MapMode,
    TextureDescription, TextureUsage,
};

// ============================================================================
// MAP MODE
// ============================================================================

#[test]
fn test_map_mode_access() {
    assert!(MapMode::Read.is_readable());
    assert!(!MapMode::Read.is_writable());

    assert!(!MapMode::Write.is_readable());
    assert!(MapMode::Write.is_writable());

    assert!(MapMode::ReadWrite.is_readable());
    assert!(MapMode::ReadWrite.is_writable());
}

#[test]
fn test_map_mode_staging_requirement() {
    assert!(MapMode::Read.requires_staging());
    assert!(MapMode::ReadWrite.requires_staging());
    assert!(!MapMode::Write.requires_staging());
}

// ============================================================================
// VALIDATE MAP REQUEST
// ============================================================================

#[test]
fn test_read_on_non_staging_texture_is_rejected() {
    let device: Arc<dyn GraphicsDevice> = MockGraphicsDevice::new();
    let desc = TextureDescription::texture_2d(8, 8, 1, 1, PixelFormat::R8_UNorm, TextureUsage::SAMPLED);
    let texture = MockTexture::new(device, desc, "diffuse");

    for mode in [MapMode::Read, MapMode::ReadWrite] {
        assert_eq!(
            validate_map_request(&texture, mode, 0),
            Err(Error::InvalidMapMode { mode, resource: "diffuse".to_string() })
        );
    }
}

#[test]
fn test_write_on_non_staging_buffer_is_allowed() {
    let device: Arc<dyn GraphicsDevice> = MockGraphicsDevice::new();
    let buffer = MockBuffer::new(device, BufferDescription::new(128, BufferUsage::UNIFORM), "camera");

    let mapped = validate_map_request(&buffer, MapMode::Write, 0).unwrap();
    assert_eq!(mapped.resource_name, "camera");
    assert_eq!(mapped.mode, MapMode::Write);
    assert_eq!(mapped.subresource, 0);
    assert_eq!(mapped.layout.size_in_bytes, 128);
}

#[test]
fn test_read_on_staging_texture_exposes_layout() {
    let device: Arc<dyn GraphicsDevice> = MockGraphicsDevice::new();
    let desc = TextureDescription::texture_2d(16, 16, 5, 2, PixelFormat::R8_G8_B8_A8_UNorm, TextureUsage::STAGING);
    let texture = MockTexture::new(device, desc.clone(), "readback");

    let mapped = validate_map_request(&texture, MapMode::Read, 6).unwrap();
    assert_eq!(mapped.layout, crate::layout::mapped_layout(&desc, 6).unwrap());
    assert_eq!(mapped.layout.offset, 1364 + 1024);
}

#[test]
fn test_out_of_range_subresource_is_rejected() {
    let device: Arc<dyn GraphicsDevice> = MockGraphicsDevice::new();
    let desc = TextureDescription::texture_2d(16, 16, 2, 1, PixelFormat::R8_UNorm, TextureUsage::STAGING);
    let texture = MockTexture::new(device, desc, "small");

    assert_eq!(
        validate_map_request(&texture, MapMode::Write, 2),
        Err(Error::SubresourceOutOfRange { subresource: 2, count: 2 })
    );
}

// ============================================================================
// DEVICE MAP / UNMAP
// ============================================================================

#[test]
fn test_device_map_and_unmap_through_capability() {
    let mock = MockGraphicsDevice::new();
    let device: Arc<dyn GraphicsDevice> = mock.clone();
    let buffer = MockBuffer::new(device.clone(), BufferDescription::new(64, BufferUsage::STAGING), "staging");

    let mappable = buffer.as_mappable().unwrap();
    let mapped = device.map(mappable, MapMode::ReadWrite, 0).unwrap();
    assert_eq!(mapped.mode, MapMode::ReadWrite);
    device.unmap(mappable, 0).unwrap();

    assert_eq!(mock.calls(), vec!["map staging 0".to_string(), "unmap staging 0".to_string()]);
}

#[test]
fn test_rejected_map_is_not_recorded() {
    let mock = MockGraphicsDevice::new();
    let device: Arc<dyn GraphicsDevice> = mock.clone();
    let buffer = MockBuffer::new(device.clone(), BufferDescription::new(64, BufferUsage::VERTEX), "vertices");

    assert!(device.map(&buffer, MapMode::Read, 0).is_err());
    assert!(mock.calls().is_empty());
}
