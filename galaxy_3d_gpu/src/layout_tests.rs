//! Unit tests for the subresource layout calculator

use crate::error::Error;
use crate::format::PixelFormat;
use crate::layout::*;
use crate::resource::{TextureDescription, TextureUsage};

fn rgba8_256() -> TextureDescription {
    TextureDescription::texture_2d(256, 256, 9, 1, PixelFormat::R8_G8_B8_A8_UNorm, TextureUsage::SAMPLED)
}

fn bc1_64_layers(array_layers: u32) -> TextureDescription {
    TextureDescription::texture_2d(64, 64, 7, array_layers, PixelFormat::BC1_Rgba_UNorm, TextureUsage::STAGING)
}

// ============================================================================
// DIMENSIONS
// ============================================================================

#[test]
fn test_clamp() {
    assert_eq!(clamp(5, 1, 10), 5);
    assert_eq!(clamp(0, 1, 10), 1);
    assert_eq!(clamp(11, 1, 10), 10);
}

#[test]
fn test_mip_dimension_matches_repeated_halving() {
    for base in [1u32, 2, 3, 5, 7, 64, 100, 255, 256, 1000, 4096] {
        for mip in 0..16 {
            let mut expected = base;
            for _ in 0..mip {
                expected /= 2;
            }
            assert_eq!(mip_dimension(base, mip), expected.max(1), "base {} mip {}", base, mip);
        }
    }
}

#[test]
fn test_mip_dimension_never_zero_past_chain_end() {
    assert_eq!(mip_dimension(1024, 31), 1);
    assert_eq!(mip_dimension(1024, 32), 1);
    assert_eq!(mip_dimension(u32::MAX, 40), 1);
}

#[test]
fn test_mip_dimensions_are_independent() {
    let description = TextureDescription::texture_3d(64, 16, 4, 7, PixelFormat::R8_UNorm, TextureUsage::SAMPLED);
    assert_eq!(mip_dimensions(&description, 0), (64, 16, 4));
    assert_eq!(mip_dimensions(&description, 2), (16, 4, 1));
    assert_eq!(mip_dimensions(&description, 5), (2, 1, 1));
}

#[test]
fn test_max_mip_levels() {
    assert_eq!(max_mip_levels(1, 1, 1), 1);
    assert_eq!(max_mip_levels(256, 256, 1), 9);
    assert_eq!(max_mip_levels(300, 20, 1), 9);
    assert_eq!(max_mip_levels(4, 4, 64), 7);
}

// ============================================================================
// SUBRESOURCE INDEXING
// ============================================================================

#[test]
fn test_subresource_index_round_trip() {
    let description = bc1_64_layers(3);
    assert_eq!(subresource_count(&description), 21);

    for index in 0..subresource_count(&description) {
        let (mip, layer) = mip_level_and_array_layer(&description, index);
        assert!(mip < description.mip_levels);
        assert!(layer < description.array_layers);
        assert_eq!(layer * description.mip_levels + mip, index);
        assert_eq!(subresource_index(&description, mip, layer), Some(index));
    }
}

#[test]
fn test_subresource_indexing_past_u32_is_checked() {
    let description = TextureDescription::texture_2d(2, 2, 2, 1 << 31, PixelFormat::R8_UNorm, TextureUsage::STAGING);
    assert_eq!(subresource_count(&description), u32::MAX);
    assert_eq!(subresource_index(&description, 1, (1 << 31) - 1), Some(u32::MAX));
    assert_eq!(subresource_index(&description, 0, 1 << 31), None);
}

#[test]
fn test_mip_level_and_array_layer_values() {
    let description = bc1_64_layers(3);
    assert_eq!(mip_level_and_array_layer(&description, 0), (0, 0));
    assert_eq!(mip_level_and_array_layer(&description, 6), (6, 0));
    assert_eq!(mip_level_and_array_layer(&description, 7), (0, 1));
    assert_eq!(mip_level_and_array_layer(&description, 16), (2, 2));
}

// ============================================================================
// OFFSETS
// ============================================================================

#[test]
fn test_mip_offset_uncompressed() {
    let description = rgba8_256();
    assert_eq!(compute_mip_offset(&description, 0), Ok(0));
    assert_eq!(compute_mip_offset(&description, 1), Ok(256 * 256 * 4));
    assert_eq!(compute_mip_offset(&description, 2), Ok(256 * 256 * 4 + 128 * 128 * 4));
}

#[test]
fn test_mip_offset_compressed_floors_storage_at_block_size() {
    let description = bc1_64_layers(1);
    // 64: 16x16 blocks, 32: 8x8, 16: 4x4, 8: 2x2, 4: 1x1
    assert_eq!(compute_mip_offset(&description, 5), Ok(2048 + 512 + 128 + 32 + 8));
    // 2x2 and 1x1 mips still occupy one full block each
    assert_eq!(mip_storage_size(&description, 5), Ok(8));
    assert_eq!(mip_storage_size(&description, 6), Ok(8));
    assert_eq!(layer_pitch(&description), Ok(2744));
}

#[test]
fn test_mip_offset_3d_texture() {
    let description = TextureDescription::texture_3d(8, 8, 8, 3, PixelFormat::R8_UNorm, TextureUsage::STAGING);
    assert_eq!(compute_mip_offset(&description, 1), Ok(512));
    assert_eq!(compute_mip_offset(&description, 2), Ok(512 + 64));
    assert_eq!(layer_pitch(&description), Ok(512 + 64 + 8));
}

#[test]
fn test_array_layer_offset_zero_for_first_layer() {
    assert_eq!(compute_array_layer_offset(&bc1_64_layers(4), 0), Ok(0));
    assert_eq!(compute_array_layer_offset(&rgba8_256(), 0), Ok(0));
}

#[test]
fn test_array_layer_offset_is_linear() {
    let description = bc1_64_layers(4);
    let first = compute_array_layer_offset(&description, 1).unwrap();
    for layer in 1..4 {
        assert_eq!(compute_array_layer_offset(&description, layer), Ok(first * u64::from(layer)));
    }
}

#[test]
fn test_layer_offset_equals_sum_of_mip_sizes() {
    for description in [rgba8_256(), bc1_64_layers(2)] {
        let sum: u64 = (0..description.mip_levels)
            .map(|mip| mip_storage_size(&description, mip).unwrap())
            .sum();
        assert_eq!(compute_array_layer_offset(&description, 1), Ok(sum));
    }
}

#[test]
fn test_subresource_offset_combines_layer_and_mip() {
    let description = bc1_64_layers(3);
    assert_eq!(compute_subresource_offset(&description, 0, 0), Ok(0));
    assert_eq!(compute_subresource_offset(&description, 2, 1), Ok(2744 + 2048 + 512));
    assert_eq!(total_size(&description), Ok(2744 * 3));
}

#[test]
fn test_unaligned_compressed_mip_is_error() {
    // 12x12 BC1: mip 1 is 6x6, which is neither block-aligned nor below 4
    let description = TextureDescription::texture_2d(12, 12, 2, 1, PixelFormat::BC1_Rgb_UNorm, TextureUsage::STAGING);
    assert_eq!(compute_mip_offset(&description, 1), Ok(3 * 3 * 8));
    assert_eq!(
        compute_mip_offset(&description, 2),
        Err(Error::UnalignedCompressedRegion { width: 6, height: 6, format: PixelFormat::BC1_Rgb_UNorm })
    );
    assert!(compute_array_layer_offset(&description, 1).is_err());
}

// ============================================================================
// MAPPED LAYOUT
// ============================================================================

#[test]
fn test_mapped_layout_linear_texture() {
    let description = TextureDescription::texture_2d(16, 16, 5, 2, PixelFormat::R8_G8_B8_A8_UNorm, TextureUsage::STAGING);
    // Layer pitch: 1024 + 256 + 64 + 16 + 4
    let layout = mapped_layout(&description, 6).unwrap();
    assert_eq!(layout.offset, 1364 + 1024);
    assert_eq!(layout.row_pitch, 8 * 4);
    assert_eq!(layout.depth_pitch, 8 * 8 * 4);
    assert_eq!(layout.size_in_bytes, 8 * 8 * 4);
}

#[test]
fn test_mapped_layout_compressed_small_mip() {
    let description = bc1_64_layers(1);
    let layout = mapped_layout(&description, 6).unwrap();
    assert_eq!(layout.offset, 2736);
    assert_eq!(layout.row_pitch, 8);
    assert_eq!(layout.depth_pitch, 8);
    assert_eq!(layout.size_in_bytes, 8);
}

#[test]
fn test_mapped_layout_rejects_out_of_range_subresource() {
    let description = TextureDescription::texture_2d(16, 16, 5, 2, PixelFormat::R8_UNorm, TextureUsage::STAGING);
    assert_eq!(
        mapped_layout(&description, 10),
        Err(Error::SubresourceOutOfRange { subresource: 10, count: 10 })
    );
}

#[test]
fn test_mapped_layout_rejects_overflowing_subresource_grid() {
    let description = TextureDescription::texture_2d(2, 2, 2, 1 << 31, PixelFormat::R8_UNorm, TextureUsage::STAGING);
    assert!(matches!(mapped_layout(&description, 0), Err(Error::InvalidDescription(_))));
    assert!(matches!(mapped_layout(&description, u32::MAX), Err(Error::InvalidDescription(_))));
}

#[test]
fn test_array_layer_offset_overflow_is_error() {
    // 2^62-byte layers: layer 4 starts past u64
    let description = TextureDescription::texture_3d(
        1 << 20, 1 << 20, 1 << 18, 1, PixelFormat::R32_G32_B32_A32_Float, TextureUsage::STAGING,
    );
    assert_eq!(compute_array_layer_offset(&description, 2), Ok(1 << 63));
    assert!(matches!(compute_array_layer_offset(&description, 4), Err(Error::InvalidDescription(_))));
    assert!(compute_subresource_offset(&description, 0, 4).is_err());
}

#[test]
fn test_mapped_layout_of_very_wide_row() {
    let description = TextureDescription::texture_1d(1 << 28, 1, 1, PixelFormat::R32_G32_B32_A32_Float, TextureUsage::STAGING);
    let layout = mapped_layout(&description, 0).unwrap();
    assert_eq!(layout.row_pitch, 16 * (1u64 << 28));
    assert_eq!(layout.depth_pitch, layout.row_pitch);
    assert_eq!(layout.size_in_bytes, layout.row_pitch);
}
