use core::marker::PhantomData;

use nalgebra::Vector3;

use self::{
    config::{AccelerationRange, MeasurementMode, ResolutionMode, FINEST_RESOLUTION},
    register::{Field, Register},
    result::{Error, Result},
};
use crate::bus::RegisterBus;

pub mod config;
mod register;
pub mod result;

pub const I2C_ADDR: u8 = 0x53;
pub const I2C_ADDR_ALT: u8 = 0x1D;

pub const DEV_ID: u8 = 0xE5;

pub const STANDARD_GRAVITY: f32 = 9.80665;

/// ADXL343 three-axis accelerometer.
///
/// The bus is borrowed for every call and never stored, so several devices
/// can share it. The driver keeps the g per count factor of the committed
/// resolution mode and range, it is not re-read from the device when
/// converting samples.
pub struct Adxl343<BUS>
where
    BUS: RegisterBus,
{
    addr: u8,
    resolution: f32,
    _bus: PhantomData<BUS>,
}

impl<BUS, I2cError> Adxl343<BUS>
where
    BUS: RegisterBus<Error = I2cError>,
{
    pub fn new(i2c: &mut BUS) -> Result<Self, I2cError> {
        Self::with_address(I2C_ADDR, i2c)
    }

    /// Checks the device id, starts measuring and switches to full resolution.
    ///
    /// Nothing is written if the id does not match.
    pub fn with_address(addr: u8, i2c: &mut BUS) -> Result<Self, I2cError> {
        let dev_id = Self::who_am_i(addr, i2c)?;

        if dev_id != DEV_ID {
            return Err(Error::InvalidDevice(dev_id));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("ADXL343 detected at {=u8:#x}", addr);

        Self::write_field(addr, i2c, register::MEASURE, MeasurementMode::Ready.into())?;
        Self::write_field(addr, i2c, register::FULL_RES, ResolutionMode::HighRes.into())?;

        Ok(Self {
            addr,
            resolution: FINEST_RESOLUTION,
            _bus: PhantomData::default(),
        })
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// g per count applied to raw samples.
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    pub fn measurement_mode(&self, i2c: &mut BUS) -> Result<MeasurementMode, I2cError> {
        let bits = Self::read_field(self.addr, i2c, register::MEASURE)?;
        Ok(MeasurementMode::try_from(bits)?)
    }

    pub fn set_measurement_mode<M>(&mut self, i2c: &mut BUS, mode: M) -> Result<(), I2cError>
    where
        M: TryInto<MeasurementMode>,
        Error<I2cError>: From<M::Error>,
    {
        let mode: MeasurementMode = mode.try_into()?;

        Self::write_field(self.addr, i2c, register::MEASURE, mode.into())?;

        #[cfg(feature = "defmt")]
        defmt::trace!("measurement mode set to {}", mode);

        Ok(())
    }

    pub fn resolution_mode(&self, i2c: &mut BUS) -> Result<ResolutionMode, I2cError> {
        let bits = Self::read_field(self.addr, i2c, register::FULL_RES)?;
        Ok(ResolutionMode::try_from(bits)?)
    }

    /// Switching to `LowRes` picks up the resolution of the range currently
    /// configured on the device.
    pub fn set_resolution_mode<M>(&mut self, i2c: &mut BUS, mode: M) -> Result<(), I2cError>
    where
        M: TryInto<ResolutionMode>,
        Error<I2cError>: From<M::Error>,
    {
        let mode: ResolutionMode = mode.try_into()?;
        let range = self.acceleration_range(i2c)?;
        let resolution = config::resolution(mode, range);

        Self::write_field(self.addr, i2c, register::FULL_RES, mode.into())?;
        self.resolution = resolution;

        #[cfg(feature = "defmt")]
        defmt::trace!("resolution mode set to {}, {} g/LSB", mode, resolution);

        Ok(())
    }

    pub fn acceleration_range(&self, i2c: &mut BUS) -> Result<AccelerationRange, I2cError> {
        let bits = Self::read_field(self.addr, i2c, register::RANGE)?;
        Ok(AccelerationRange::try_from(bits)?)
    }

    /// Only affects the resolution while the device is in `LowRes`.
    pub fn set_acceleration_range<R>(&mut self, i2c: &mut BUS, range: R) -> Result<(), I2cError>
    where
        R: TryInto<AccelerationRange>,
        Error<I2cError>: From<R::Error>,
    {
        let range: AccelerationRange = range.try_into()?;
        let mode = self.resolution_mode(i2c)?;
        let resolution = config::resolution(mode, range);

        Self::write_field(self.addr, i2c, register::RANGE, range.into())?;
        self.resolution = resolution;

        #[cfg(feature = "defmt")]
        defmt::trace!("acceleration range set to {}, {} g/LSB", range, resolution);

        Ok(())
    }

    /// The whole POWER_CTL register. Writing it does not touch the cached
    /// resolution.
    pub fn power_control(&self, i2c: &mut BUS) -> Result<u8, I2cError> {
        let mut buf = [0; 1];
        Self::read_register(self.addr, i2c, Register::POWER_CTL, &mut buf)?;
        Ok(buf[0])
    }

    pub fn set_power_control(&mut self, i2c: &mut BUS, value: u8) -> Result<(), I2cError> {
        Self::write_register(self.addr, i2c, Register::POWER_CTL, value)
    }

    /// Raw counts of all three axes, read in one transaction.
    pub fn raw_acceleration(&self, i2c: &mut BUS) -> Result<Vector3<i16>, I2cError> {
        let mut buf = [0; 6];
        Self::read_register(self.addr, i2c, Register::DATAX0, &mut buf)?;

        Ok(Vector3::new(
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ))
    }

    /// Acceleration in m/s².
    pub fn acceleration(&self, i2c: &mut BUS) -> Result<Vector3<f32>, I2cError> {
        let raw = self.raw_acceleration(i2c)?;

        Ok(raw.map(|v| v as f32 * STANDARD_GRAVITY * self.resolution))
    }

    fn who_am_i(addr: u8, i2c: &mut BUS) -> Result<u8, I2cError> {
        let mut buf = [0; 1];
        Self::read_register(addr, i2c, Register::DEVID, &mut buf)?;
        Ok(buf[0])
    }

    fn read_field(addr: u8, i2c: &mut BUS, field: Field) -> Result<u8, I2cError> {
        match i2c.read_bits(addr, field.reg as u8, field.width, field.offset) {
            Ok(v) => Ok(v),
            Err(e) => Err(Error::I2cError(e)),
        }
    }

    fn write_field(addr: u8, i2c: &mut BUS, field: Field, value: u8) -> Result<(), I2cError> {
        match i2c.write_bits(addr, field.reg as u8, field.width, field.offset, value) {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::I2cError(e)),
        }
    }

    fn read_register(
        addr: u8,
        i2c: &mut BUS,
        reg: Register,
        buf: &mut [u8],
    ) -> Result<(), I2cError> {
        match i2c.read_registers(addr, reg as u8, buf) {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::I2cError(e)),
        }
    }

    fn write_register(addr: u8, i2c: &mut BUS, reg: Register, value: u8) -> Result<(), I2cError> {
        match i2c.write_register(addr, reg as u8, value) {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::I2cError(e)),
        }
    }
}
