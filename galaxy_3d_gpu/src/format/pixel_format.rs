/// Pixel formats and their sizing/classification rules
///
/// Every query resolves through `FORMAT_TABLE`, a static array indexed by the
/// enum discriminant and built at compile time from `describe()`.

use crate::error::{Error, Result};

/// Texel encoding of a texture or render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum PixelFormat {
    // 8-bit single channel
    R8_UNorm,
    R8_SNorm,
    R8_UInt,
    R8_SInt,

    // 16-bit single channel
    R16_UNorm,
    R16_SNorm,
    R16_UInt,
    R16_SInt,
    R16_Float,

    // 32-bit single channel
    R32_UInt,
    R32_SInt,
    R32_Float,

    // Two channels
    R8_G8_UNorm,
    R8_G8_SNorm,
    R8_G8_UInt,
    R8_G8_SInt,
    R16_G16_UNorm,
    R16_G16_SNorm,
    R16_G16_UInt,
    R16_G16_SInt,
    R16_G16_Float,
    R32_G32_UInt,
    R32_G32_SInt,
    R32_G32_Float,

    // Four channels, 8 bits
    R8_G8_B8_A8_UNorm,
    R8_G8_B8_A8_UNorm_SRgb,
    R8_G8_B8_A8_SNorm,
    R8_G8_B8_A8_UInt,
    R8_G8_B8_A8_SInt,
    B8_G8_R8_A8_UNorm,
    B8_G8_R8_A8_UNorm_SRgb,

    // Packed
    R10_G10_B10_A2_UNorm,
    R10_G10_B10_A2_UInt,
    R11_G11_B10_Float,

    // Four channels, 16/32 bits
    R16_G16_B16_A16_UNorm,
    R16_G16_B16_A16_SNorm,
    R16_G16_B16_A16_UInt,
    R16_G16_B16_A16_SInt,
    R16_G16_B16_A16_Float,
    R32_G32_B32_A32_UInt,
    R32_G32_B32_A32_SInt,
    R32_G32_B32_A32_Float,

    // Depth/stencil
    D24_UNorm_S8_UInt,
    D32_Float_S8_UInt,

    // Block-compressed (BCn)
    BC1_Rgb_UNorm,
    BC1_Rgb_UNorm_SRgb,
    BC1_Rgba_UNorm,
    BC1_Rgba_UNorm_SRgb,
    BC2_UNorm,
    BC2_UNorm_SRgb,
    BC3_UNorm,
    BC3_UNorm_SRgb,
    BC4_UNorm,
    BC4_SNorm,
    BC5_UNorm,
    BC5_SNorm,
    BC7_UNorm,
    BC7_UNorm_SRgb,

    // Block-compressed (ETC2)
    ETC2_R8_G8_B8_UNorm,
    ETC2_R8_G8_B8_A1_UNorm,
    ETC2_R8_G8_B8_A8_UNorm,
}

/// Sizing and classification entry of one pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Bytes per texel (0 for block-compressed formats)
    pub texel_size: u32,
    /// Bytes per 4x4 block (0 for linear formats)
    pub block_size: u32,
    /// Canonical member of the format's view family
    pub view_family: PixelFormat,
    /// Usable as a depth (or depth/stencil) attachment
    pub depth_stencil: bool,
    /// Carries a stencil aspect
    pub stencil: bool,
}

impl FormatInfo {
    const fn linear(texel_size: u32, view_family: PixelFormat) -> Self {
        Self { texel_size, block_size: 0, view_family, depth_stencil: false, stencil: false }
    }

    const fn block(block_size: u32, view_family: PixelFormat) -> Self {
        Self { texel_size: 0, block_size, view_family, depth_stencil: false, stencil: false }
    }

    const fn depth(mut self) -> Self {
        self.depth_stencil = true;
        self
    }

    const fn depth_stencil(mut self) -> Self {
        self.depth_stencil = true;
        self.stencil = true;
        self
    }

    /// Returns true if this entry describes a block-compressed format
    pub const fn is_compressed(&self) -> bool {
        self.block_size != 0
    }
}

const fn describe(format: PixelFormat) -> FormatInfo {
    use PixelFormat::*;

    match format {
        R8_UNorm | R8_SNorm | R8_UInt | R8_SInt => FormatInfo::linear(1, R8_UNorm),

        // R16_UNorm and R32_Float double as D16/D32 depth targets
        R16_UNorm => FormatInfo::linear(2, R16_Float).depth(),
        R16_SNorm | R16_UInt | R16_SInt | R16_Float => FormatInfo::linear(2, R16_Float),
        R8_G8_UNorm | R8_G8_SNorm | R8_G8_UInt | R8_G8_SInt => FormatInfo::linear(2, R8_G8_UNorm),

        R32_Float => FormatInfo::linear(4, R32_Float).depth(),
        R32_UInt | R32_SInt => FormatInfo::linear(4, R32_Float),
        R16_G16_UNorm | R16_G16_SNorm | R16_G16_UInt | R16_G16_SInt | R16_G16_Float => {
            FormatInfo::linear(4, R16_G16_Float)
        }
        R8_G8_B8_A8_UNorm | R8_G8_B8_A8_UNorm_SRgb | R8_G8_B8_A8_SNorm | R8_G8_B8_A8_UInt
        | R8_G8_B8_A8_SInt => FormatInfo::linear(4, R8_G8_B8_A8_UNorm),
        B8_G8_R8_A8_UNorm | B8_G8_R8_A8_UNorm_SRgb => FormatInfo::linear(4, B8_G8_R8_A8_UNorm),
        R10_G10_B10_A2_UNorm | R10_G10_B10_A2_UInt => FormatInfo::linear(4, R10_G10_B10_A2_UNorm),
        R11_G11_B10_Float => FormatInfo::linear(4, R11_G11_B10_Float),
        D24_UNorm_S8_UInt => FormatInfo::linear(4, D24_UNorm_S8_UInt).depth_stencil(),

        D32_Float_S8_UInt => FormatInfo::linear(5, D32_Float_S8_UInt).depth_stencil(),

        R16_G16_B16_A16_UNorm | R16_G16_B16_A16_SNorm | R16_G16_B16_A16_UInt
        | R16_G16_B16_A16_SInt | R16_G16_B16_A16_Float => FormatInfo::linear(8, R16_G16_B16_A16_Float),
        R32_G32_UInt | R32_G32_SInt | R32_G32_Float => FormatInfo::linear(8, R32_G32_Float),

        R32_G32_B32_A32_UInt | R32_G32_B32_A32_SInt | R32_G32_B32_A32_Float => {
            FormatInfo::linear(16, R32_G32_B32_A32_Float)
        }

        BC1_Rgb_UNorm | BC1_Rgb_UNorm_SRgb | BC1_Rgba_UNorm | BC1_Rgba_UNorm_SRgb => {
            FormatInfo::block(8, BC1_Rgba_UNorm)
        }
        BC2_UNorm | BC2_UNorm_SRgb => FormatInfo::block(16, BC2_UNorm),
        BC3_UNorm | BC3_UNorm_SRgb => FormatInfo::block(16, BC3_UNorm),
        BC4_UNorm | BC4_SNorm => FormatInfo::block(8, BC4_UNorm),
        BC5_UNorm | BC5_SNorm => FormatInfo::block(16, BC5_UNorm),
        BC7_UNorm | BC7_UNorm_SRgb => FormatInfo::block(16, BC7_UNorm),

        // ETC2 variants have no typed siblings; each is its own family
        ETC2_R8_G8_B8_UNorm => FormatInfo::block(8, ETC2_R8_G8_B8_UNorm),
        ETC2_R8_G8_B8_A1_UNorm => FormatInfo::block(8, ETC2_R8_G8_B8_A1_UNorm),
        ETC2_R8_G8_B8_A8_UNorm => FormatInfo::block(16, ETC2_R8_G8_B8_A8_UNorm),
    }
}

const fn build_table() -> [FormatInfo; PixelFormat::COUNT] {
    let mut table = [describe(PixelFormat::R8_UNorm); PixelFormat::COUNT];
    let mut i = 0;
    while i < PixelFormat::COUNT {
        table[i] = describe(PixelFormat::ALL[i]);
        i += 1;
    }
    table
}

// ALL must list variants in declaration order for table indexing to hold
const _: () = {
    let mut i = 0;
    while i < PixelFormat::COUNT {
        assert!(PixelFormat::ALL[i] as usize == i);
        i += 1;
    }
};

static FORMAT_TABLE: [FormatInfo; PixelFormat::COUNT] = build_table();

impl PixelFormat {
    /// Every pixel format, in declaration order
    pub const ALL: [PixelFormat; 61] = {
        use PixelFormat::*;
        [
            R8_UNorm, R8_SNorm, R8_UInt, R8_SInt,
            R16_UNorm, R16_SNorm, R16_UInt, R16_SInt, R16_Float,
            R32_UInt, R32_SInt, R32_Float,
            R8_G8_UNorm, R8_G8_SNorm, R8_G8_UInt, R8_G8_SInt,
            R16_G16_UNorm, R16_G16_SNorm, R16_G16_UInt, R16_G16_SInt, R16_G16_Float,
            R32_G32_UInt, R32_G32_SInt, R32_G32_Float,
            R8_G8_B8_A8_UNorm, R8_G8_B8_A8_UNorm_SRgb, R8_G8_B8_A8_SNorm, R8_G8_B8_A8_UInt,
            R8_G8_B8_A8_SInt, B8_G8_R8_A8_UNorm, B8_G8_R8_A8_UNorm_SRgb,
            R10_G10_B10_A2_UNorm, R10_G10_B10_A2_UInt, R11_G11_B10_Float,
            R16_G16_B16_A16_UNorm, R16_G16_B16_A16_SNorm, R16_G16_B16_A16_UInt,
            R16_G16_B16_A16_SInt, R16_G16_B16_A16_Float,
            R32_G32_B32_A32_UInt, R32_G32_B32_A32_SInt, R32_G32_B32_A32_Float,
            D24_UNorm_S8_UInt, D32_Float_S8_UInt,
            BC1_Rgb_UNorm, BC1_Rgb_UNorm_SRgb, BC1_Rgba_UNorm, BC1_Rgba_UNorm_SRgb,
            BC2_UNorm, BC2_UNorm_SRgb, BC3_UNorm, BC3_UNorm_SRgb,
            BC4_UNorm, BC4_SNorm, BC5_UNorm, BC5_SNorm,
            BC7_UNorm, BC7_UNorm_SRgb,
            ETC2_R8_G8_B8_UNorm, ETC2_R8_G8_B8_A1_UNorm, ETC2_R8_G8_B8_A8_UNorm,
        ]
    };

    /// Number of pixel formats
    pub const COUNT: usize = Self::ALL.len();

    /// Decode a raw format tag (declaration index)
    ///
    /// Returns `None` for tags this build does not know about.
    pub fn from_raw(raw: u32) -> Option<PixelFormat> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Table entry for this format
    pub fn info(self) -> &'static FormatInfo {
        &FORMAT_TABLE[self as usize]
    }

    /// Returns true for every BC1-BC7 and ETC2 format
    pub fn is_compressed(self) -> bool {
        self.info().is_compressed()
    }

    /// Storage granularity in texels along X and Y (4 for compressed formats, 1 otherwise)
    pub fn block_dimension(self) -> u32 {
        if self.is_compressed() { 4 } else { 1 }
    }

    /// Bytes per texel of a linear format
    ///
    /// # Errors
    ///
    /// Returns `CompressedFormatSize` for block-compressed formats, which have
    /// no per-texel size.
    pub fn size_in_bytes(self) -> Result<u32> {
        let info = self.info();
        if info.is_compressed() {
            crate::gpu_bail!("galaxy3d::format", Error::CompressedFormatSize(self));
        }
        Ok(info.texel_size)
    }

    /// Bytes per 4x4 block of a compressed format
    ///
    /// # Errors
    ///
    /// Returns `NotCompressedFormat` for linear formats, without logging.
    pub fn block_size_in_bytes(self) -> Result<u32> {
        let info = self.info();
        if !info.is_compressed() {
            return Err(Error::NotCompressedFormat(self));
        }
        Ok(info.block_size)
    }

    /// Number of storage rows covering `height` texel rows
    ///
    /// One compressed row covers 4 texel rows.
    pub fn num_rows(self, height: u32) -> u32 {
        if self.is_compressed() {
            height.div_ceil(4)
        } else {
            height
        }
    }

    /// Bytes between two consecutive storage rows of a `width`-texel wide image
    pub fn row_pitch(self, width: u32) -> u64 {
        let info = self.info();
        if info.is_compressed() {
            u64::from(width.div_ceil(4)) * u64::from(info.block_size)
        } else {
            u64::from(width) * u64::from(info.texel_size)
        }
    }

    /// Bytes between two consecutive depth slices
    pub fn depth_pitch(self, row_pitch: u64, height: u32) -> u64 {
        row_pitch * u64::from(self.num_rows(height))
    }

    /// Byte size of a `width` x `height` x `depth` region
    ///
    /// # Errors
    ///
    /// For compressed formats, `width` and `height` must each be a multiple
    /// of 4 or smaller than 4; otherwise `UnalignedCompressedRegion` is returned.
    pub fn region_size(self, width: u32, height: u32, depth: u32) -> Result<u64> {
        let info = self.info();
        if info.is_compressed() {
            let aligned = |v: u32| v % 4 == 0 || v < 4;
            if !aligned(width) || !aligned(height) {
                crate::gpu_bail!("galaxy3d::format",
                    Error::UnalignedCompressedRegion { width, height, format: self });
            }
            let blocks_wide = u64::from(width / 4);
            let blocks_high = u64::from(height / 4);
            Ok(blocks_wide * blocks_high * u64::from(depth) * u64::from(info.block_size))
        } else {
            Ok(u64::from(width) * u64::from(height) * u64::from(depth) * u64::from(info.texel_size))
        }
    }

    /// Canonical representative of the format's view family
    ///
    /// Formats without typed siblings (depth/stencil, R11G11B10, ETC2) map to themselves.
    pub fn view_family(self) -> PixelFormat {
        self.info().view_family
    }

    /// Returns true if a view of `self` may alias storage created as `real_format`
    pub fn is_view_compatible_with(self, real_format: PixelFormat) -> bool {
        if real_format.is_compressed() {
            self.is_srgb_counterpart(real_format)
        } else {
            self.view_family() == real_format.view_family()
        }
    }

    /// Returns true if `self` and `real_format` are the same layout differing
    /// only in sRGB encoding
    ///
    /// Only identical formats are recognized for now.
    // TODO: pair sRGB/linear compressed formats once the per-backend sRGB view rules are settled
    pub fn is_srgb_counterpart(self, real_format: PixelFormat) -> bool {
        self == real_format
    }

    /// Returns true for formats carrying a stencil aspect
    pub fn is_stencil_format(self) -> bool {
        self.info().stencil
    }

    /// Returns true for formats usable as depth/stencil attachments
    pub fn is_depth_stencil_format(self) -> bool {
        self.info().depth_stencil
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        PixelFormat::from_raw(raw)
            .ok_or_else(|| Error::InvalidDescription(format!("unknown pixel format tag {}", raw)))
    }
}

#[cfg(test)]
#[path = "pixel_format_tests.rs"]
mod tests;
