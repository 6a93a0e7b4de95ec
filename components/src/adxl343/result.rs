use core::{convert::Infallible, fmt};

pub type Result<T, I2cError> = core::result::Result<T, Error<I2cError>>;

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<I2cError> {
    InvalidDevice(u8),
    InvalidSetting(InvalidSetting),
    I2cError(I2cError),
}

impl<I2cError> fmt::Display for Error<I2cError>
where
    I2cError: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            InvalidDevice(v) => write!(f, "Invalid device with id {:#04x}", v),
            InvalidSetting(e) => fmt::Display::fmt(&e, f),
            I2cError(e) => fmt::Debug::fmt(&e, f),
        }
    }
}

impl<I2cError> From<InvalidSetting> for Error<I2cError> {
    fn from(e: InvalidSetting) -> Self {
        Error::InvalidSetting(e)
    }
}

impl<I2cError> From<Infallible> for Error<I2cError> {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

/// A raw value that is not part of a setting's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidSetting {
    InvalidMeasurementMode(u8),
    InvalidResolutionMode(u8),
    InvalidAccelerationRange(u8),
}

impl fmt::Display for InvalidSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InvalidSetting::*;

        match *self {
            InvalidMeasurementMode(v) => write!(f, "Invalid measurement mode {:#04b}", v),
            InvalidResolutionMode(v) => write!(f, "Invalid resolution mode {:#04b}", v),
            InvalidAccelerationRange(v) => write!(f, "Invalid acceleration range {:#04b}", v),
        }
    }
}
