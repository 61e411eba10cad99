//! Subresource layout calculator
//!
//! Pure functions over a `TextureDescription` computing mip dimensions and
//! byte offsets of subresources in linear (staging) storage.
//!
//! Storage is layer-major, mip-minor: each array layer stores its full mip
//! chain contiguously, and layers follow one another. Mip dimensions are
//! floored at 1 and, for block-compressed formats, storage dimensions are
//! never rounded below the 4x4 block.

use crate::error::{Error, Result};
use crate::resource::TextureDescription;

/// Byte placement and pitches of one subresource in linear storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubresourceLayout {
    /// Offset from the start of the resource
    pub offset: u64,
    /// Size of the subresource
    pub size_in_bytes: u64,
    /// Bytes between consecutive storage rows
    pub row_pitch: u64,
    /// Bytes between consecutive depth slices
    pub depth_pitch: u64,
}

/// Clamp `value` into `[min, max]`
pub fn clamp(value: u32, min: u32, max: u32) -> u32 {
    if value <= min {
        min
    } else if value >= max {
        max
    } else {
        value
    }
}

/// Size of `base_dimension` at `mip_level`: halved per level, never below 1
pub fn mip_dimension(base_dimension: u32, mip_level: u32) -> u32 {
    base_dimension.checked_shr(mip_level).unwrap_or(0).max(1)
}

/// (width, height, depth) of a mip level
pub fn mip_dimensions(description: &TextureDescription, mip_level: u32) -> (u32, u32, u32) {
    (
        mip_dimension(description.width, mip_level),
        mip_dimension(description.height, mip_level),
        mip_dimension(description.depth, mip_level),
    )
}

/// Length of the full mip chain of a texture with these base dimensions
pub fn max_mip_levels(width: u32, height: u32, depth: u32) -> u32 {
    let largest = width.max(height).max(depth).max(1);
    u32::BITS - largest.leading_zeros()
}

/// Number of subresources (mip levels x array layers)
///
/// Saturates at `u32::MAX`; `TextureDescription::validate` rejects grids that large.
pub fn subresource_count(description: &TextureDescription) -> u32 {
    description.mip_levels.saturating_mul(description.array_layers)
}

/// Subresource index of (mip_level, array_layer), `None` if it does not fit in a `u32`
pub fn subresource_index(description: &TextureDescription, mip_level: u32, array_layer: u32) -> Option<u32> {
    array_layer
        .checked_mul(description.mip_levels)?
        .checked_add(mip_level)
}

/// (mip_level, array_layer) addressed by a subresource index
///
/// # Panics
///
/// Panics if `description.mip_levels` is zero; validated descriptions never are.
pub fn mip_level_and_array_layer(description: &TextureDescription, subresource: u32) -> (u32, u32) {
    let array_layer = subresource / description.mip_levels;
    let mip_level = subresource - array_layer * description.mip_levels;
    (mip_level, array_layer)
}

/// Storage size of one mip level of one array layer
///
/// Width and height are raised to the format's block dimension before sizing.
pub fn mip_storage_size(description: &TextureDescription, mip_level: u32) -> Result<u64> {
    let block = description.format.block_dimension();
    let (width, height, depth) = mip_dimensions(description, mip_level);
    description.format.region_size(width.max(block), height.max(block), depth)
}

/// Byte offset of `mip_level` within one array layer's mip chain
pub fn compute_mip_offset(description: &TextureDescription, mip_level: u32) -> Result<u64> {
    let mut offset = 0;
    for level in 0..mip_level {
        offset += mip_storage_size(description, level)?;
    }
    Ok(offset)
}

/// Byte size of one array layer (its whole mip chain)
pub fn layer_pitch(description: &TextureDescription) -> Result<u64> {
    compute_mip_offset(description, description.mip_levels)
}

/// Byte offset of `array_layer` from the start of the texture
pub fn compute_array_layer_offset(description: &TextureDescription, array_layer: u32) -> Result<u64> {
    if array_layer == 0 {
        return Ok(0);
    }
    let pitch = layer_pitch(description)?;
    match pitch.checked_mul(u64::from(array_layer)) {
        Some(offset) => Ok(offset),
        None => crate::gpu_bail!("galaxy3d::layout", Error::InvalidDescription(format!(
            "offset of array layer {} overflows u64 (layer pitch {})",
            array_layer, pitch
        ))),
    }
}

/// Byte offset of (mip_level, array_layer) from the start of the texture
///
/// Meaningful for staging textures (CPU-visible linear storage). The
/// calculator does not check the usage flags; callers must.
pub fn compute_subresource_offset(
    description: &TextureDescription,
    mip_level: u32,
    array_layer: u32,
) -> Result<u64> {
    let layer_offset = compute_array_layer_offset(description, array_layer)?;
    let mip_offset = compute_mip_offset(description, mip_level)?;
    match layer_offset.checked_add(mip_offset) {
        Some(offset) => Ok(offset),
        None => crate::gpu_bail!("galaxy3d::layout", Error::InvalidDescription(format!(
            "offset of mip {} in array layer {} overflows u64",
            mip_level, array_layer
        ))),
    }
}

/// Total byte size of the texture in linear storage
pub fn total_size(description: &TextureDescription) -> Result<u64> {
    compute_array_layer_offset(description, description.array_layers)
}

/// Layout a host mapping of `subresource` exposes
///
/// # Errors
///
/// Returns `InvalidDescription` if the mip/layer grid does not fit in a
/// `u32`, `SubresourceOutOfRange` if `subresource` is past the grid, and
/// propagates region sizing errors.
pub fn mapped_layout(description: &TextureDescription, subresource: u32) -> Result<SubresourceLayout> {
    let Some(count) = description.mip_levels.checked_mul(description.array_layers) else {
        crate::gpu_bail!("galaxy3d::layout", Error::InvalidDescription(format!(
            "{} mip levels x {} array layers overflows the subresource index",
            description.mip_levels, description.array_layers
        )));
    };
    if subresource >= count {
        crate::gpu_bail!("galaxy3d::layout", Error::SubresourceOutOfRange { subresource, count });
    }

    let (mip_level, array_layer) = mip_level_and_array_layer(description, subresource);
    let (width, height, depth) = mip_dimensions(description, mip_level);
    let format = description.format;

    let row_pitch = format.row_pitch(width);
    let depth_pitch = format.depth_pitch(row_pitch, height);

    Ok(SubresourceLayout {
        offset: compute_subresource_offset(description, mip_level, array_layer)?,
        size_in_bytes: depth_pitch * u64::from(depth),
        row_pitch,
        depth_pitch,
    })
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
