use embedded_hal::blocking::i2c;

/// Register level access to a device sitting on a serial bus.
///
/// Implementors only provide raw byte transactions; field access is built on
/// top of them. Errors are the transport's own and are never interpreted here.
pub trait RegisterBus {
    type Error;

    /// Reads `buf.len()` consecutive registers starting at `reg` in a single
    /// transaction.
    fn read_registers(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads a `width` bit wide field located `offset` bits into `reg`.
    fn read_bits(&mut self, addr: u8, reg: u8, width: u8, offset: u8) -> Result<u8, Self::Error> {
        let mut buf = [0; 1];
        self.read_registers(addr, reg, &mut buf)?;
        Ok(extract_bits(buf[0], width, offset))
    }

    /// Read-modify-write of a `width` bit wide field, bits outside of the
    /// field keep their current value.
    fn write_bits(
        &mut self,
        addr: u8,
        reg: u8,
        width: u8,
        offset: u8,
        value: u8,
    ) -> Result<(), Self::Error> {
        let mut buf = [0; 1];
        self.read_registers(addr, reg, &mut buf)?;
        self.write_register(addr, reg, insert_bits(buf[0], width, offset, value))
    }
}

impl<I2C, I2cError> RegisterBus for I2C
where
    I2C: i2c::Write<Error = I2cError> + i2c::WriteRead<Error = I2cError>,
{
    type Error = I2cError;

    fn read_registers(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), I2cError> {
        self.write_read(addr, &[reg], buf)
    }

    fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), I2cError> {
        self.write(addr, &[reg, value])
    }
}

const fn mask(width: u8) -> u8 {
    if width >= 8 {
        0xFF
    } else {
        (1 << width) - 1
    }
}

pub(crate) const fn extract_bits(byte: u8, width: u8, offset: u8) -> u8 {
    (byte >> offset) & mask(width)
}

pub(crate) const fn insert_bits(byte: u8, width: u8, offset: u8, value: u8) -> u8 {
    let field = mask(width) << offset;
    (byte & !field) | ((value << offset) & field)
}
