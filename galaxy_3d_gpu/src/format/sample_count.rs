/// Multisample counts

/// Number of samples per texel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleCount {
    #[default]
    X1,
    X2,
    X4,
    X8,
    X16,
    X32,
}

impl SampleCount {
    /// Every sample count, lowest first
    pub const ALL: [SampleCount; 6] = [
        SampleCount::X1,
        SampleCount::X2,
        SampleCount::X4,
        SampleCount::X8,
        SampleCount::X16,
        SampleCount::X32,
    ];

    /// Sample count for a plain integer
    ///
    /// Integers outside {1, 2, 4, 8, 16, 32} map to `X1`.
    pub fn from_u32(samples: u32) -> SampleCount {
        match samples {
            1 => SampleCount::X1,
            2 => SampleCount::X2,
            4 => SampleCount::X4,
            8 => SampleCount::X8,
            16 => SampleCount::X16,
            32 => SampleCount::X32,
            _ => SampleCount::X1,
        }
    }

    /// Plain integer value of this sample count
    pub fn as_u32(self) -> u32 {
        match self {
            SampleCount::X1 => 1,
            SampleCount::X2 => 2,
            SampleCount::X4 => 4,
            SampleCount::X8 => 8,
            SampleCount::X16 => 16,
            SampleCount::X32 => 32,
        }
    }

    /// Returns true for anything above a single sample
    pub fn is_multisampled(self) -> bool {
        self != SampleCount::X1
    }
}

impl From<u32> for SampleCount {
    fn from(samples: u32) -> Self {
        SampleCount::from_u32(samples)
    }
}

impl From<SampleCount> for u32 {
    fn from(count: SampleCount) -> Self {
        count.as_u32()
    }
}

#[cfg(test)]
#[path = "sample_count_tests.rs"]
mod tests;
