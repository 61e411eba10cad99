/// Vertex attribute element encodings

/// Element encoding of a vertex attribute as seen by a shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum ShaderDataType {
    // 32-bit float
    Float1,
    Float2,
    Float3,
    Float4,

    // 8-bit unsigned
    Byte2_Norm,
    Byte2,
    Byte4_Norm,
    Byte4,

    // 8-bit signed
    SByte2_Norm,
    SByte2,
    SByte4_Norm,
    SByte4,

    // 16-bit unsigned
    UShort2_Norm,
    UShort2,
    UShort4_Norm,
    UShort4,

    // 16-bit signed
    Short2_Norm,
    Short2,
    Short4_Norm,
    Short4,

    // 32-bit integer
    Int1,
    Int2,
    Int3,
    Int4,
    UInt1,
    UInt2,
    UInt3,
    UInt4,

    // 16-bit float
    Half1,
    Half2,
    Half4,
}

impl ShaderDataType {
    /// Every shader data type, in declaration order
    pub const ALL: [ShaderDataType; 31] = {
        use ShaderDataType::*;
        [
            Float1, Float2, Float3, Float4,
            Byte2_Norm, Byte2, Byte4_Norm, Byte4,
            SByte2_Norm, SByte2, SByte4_Norm, SByte4,
            UShort2_Norm, UShort2, UShort4_Norm, UShort4,
            Short2_Norm, Short2, Short4_Norm, Short4,
            Int1, Int2, Int3, Int4,
            UInt1, UInt2, UInt3, UInt4,
            Half1, Half2, Half4,
        ]
    };

    /// Decode a raw element tag (declaration index)
    pub fn from_raw(raw: u32) -> Option<ShaderDataType> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Size in bytes of one attribute (element count x element width)
    pub fn size_in_bytes(self) -> u32 {
        use ShaderDataType::*;

        match self {
            Byte2_Norm | Byte2 | SByte2_Norm | SByte2 | Half1 => 2,

            Float1 | UInt1 | Int1 | Byte4_Norm | Byte4 | SByte4_Norm | SByte4 | UShort2_Norm
            | UShort2 | Short2_Norm | Short2 | Half2 => 4,

            Float2 | UInt2 | Int2 | UShort4_Norm | UShort4 | Short4_Norm | Short4 | Half4 => 8,

            Float3 | UInt3 | Int3 => 12,

            Float4 | UInt4 | Int4 => 16,
        }
    }

    /// Number of components (1 to 4)
    pub fn element_count(self) -> u32 {
        use ShaderDataType::*;

        match self {
            Float1 | UInt1 | Int1 | Half1 => 1,

            Float2 | Byte2_Norm | Byte2 | SByte2_Norm | SByte2 | UShort2_Norm | UShort2
            | Short2_Norm | Short2 | UInt2 | Int2 | Half2 => 2,

            Float3 | UInt3 | Int3 => 3,

            Float4 | Byte4_Norm | Byte4 | SByte4_Norm | SByte4 | UShort4_Norm | UShort4
            | Short4_Norm | Short4 | UInt4 | Int4 | Half4 => 4,
        }
    }

    /// Returns true if integer components are normalized to [0, 1] or [-1, 1]
    pub fn is_normalized(self) -> bool {
        use ShaderDataType::*;
        matches!(
            self,
            Byte2_Norm | Byte4_Norm | SByte2_Norm | SByte4_Norm | UShort2_Norm | UShort4_Norm
                | Short2_Norm | Short4_Norm
        )
    }
}

#[cfg(test)]
#[path = "shader_data_type_tests.rs"]
mod tests;
