#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::result::InvalidSetting;

/// Resolution in full resolution mode, and in 10-bit mode at ±2 g.
pub const FINEST_RESOLUTION: f32 = 0.004;

/// POWER_CTL measure bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasurementMode {
    Standby = 0b0,
    Ready = 0b1,
}

impl MeasurementMode {
    pub const ALL: [Self; 2] = [Self::Standby, Self::Ready];
}

impl Default for MeasurementMode {
    fn default() -> Self {
        Self::Standby
    }
}

impl From<MeasurementMode> for u8 {
    fn from(mode: MeasurementMode) -> Self {
        mode as u8
    }
}

impl TryFrom<u8> for MeasurementMode {
    type Error = InvalidSetting;

    fn try_from(value: u8) -> Result<Self, InvalidSetting> {
        match value {
            0b0 => Ok(Self::Standby),
            0b1 => Ok(Self::Ready),
            _ => Err(InvalidSetting::InvalidMeasurementMode(value)),
        }
    }
}

/// DATA_FORMAT FULL_RES bit.
///
/// In `LowRes` the output is always 10 bits wide, so the scale factor grows
/// with the range. In `HighRes` the output width grows with the range instead
/// and the scale factor stays at 4 mg/LSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResolutionMode {
    LowRes = 0b0,
    HighRes = 0b1,
}

impl ResolutionMode {
    pub const ALL: [Self; 2] = [Self::LowRes, Self::HighRes];
}

impl Default for ResolutionMode {
    fn default() -> Self {
        Self::LowRes
    }
}

impl From<ResolutionMode> for u8 {
    fn from(mode: ResolutionMode) -> Self {
        mode as u8
    }
}

impl TryFrom<u8> for ResolutionMode {
    type Error = InvalidSetting;

    fn try_from(value: u8) -> Result<Self, InvalidSetting> {
        match value {
            0b0 => Ok(Self::LowRes),
            0b1 => Ok(Self::HighRes),
            _ => Err(InvalidSetting::InvalidResolutionMode(value)),
        }
    }
}

/// DATA_FORMAT range bits, full scale of ±2 g up to ±16 g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccelerationRange {
    G2 = 0b00,
    G4 = 0b01,
    G8 = 0b10,
    G16 = 0b11,
}

impl AccelerationRange {
    pub const ALL: [Self; 4] = [Self::G2, Self::G4, Self::G8, Self::G16];

    /// g per count of a 10-bit sample at this range.
    pub fn get_resolution(&self) -> f32 {
        match *self {
            AccelerationRange::G2 => 0.004,
            AccelerationRange::G4 => 0.008,
            AccelerationRange::G8 => 0.016,
            AccelerationRange::G16 => 0.031,
        }
    }
}

impl Default for AccelerationRange {
    fn default() -> Self {
        Self::G2
    }
}

impl From<AccelerationRange> for u8 {
    fn from(range: AccelerationRange) -> Self {
        range as u8
    }
}

impl TryFrom<u8> for AccelerationRange {
    type Error = InvalidSetting;

    fn try_from(value: u8) -> Result<Self, InvalidSetting> {
        match value {
            0b00 => Ok(Self::G2),
            0b01 => Ok(Self::G4),
            0b10 => Ok(Self::G8),
            0b11 => Ok(Self::G16),
            _ => Err(InvalidSetting::InvalidAccelerationRange(value)),
        }
    }
}

/// g per count for a (resolution mode, range) pair.
pub fn resolution(mode: ResolutionMode, range: AccelerationRange) -> f32 {
    match mode {
        ResolutionMode::LowRes => range.get_resolution(),
        ResolutionMode::HighRes => FINEST_RESOLUTION,
    }
}
