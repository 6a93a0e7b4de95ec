#[allow(dead_code, non_camel_case_types)]
#[derive(Debug, Clone, Copy)]
pub enum Register {
    DEVID = 0x00,
    THRESH_TAP = 0x1D,
    OFSX = 0x1E,
    OFSY = 0x1F,
    OFSZ = 0x20,
    DUR = 0x21,
    LATENT = 0x22,
    WINDOW = 0x23,
    THRESH_ACT = 0x24,
    THRESH_INACT = 0x25,
    TIME_INACT = 0x26,
    ACT_INACT_CTL = 0x27,
    THRESH_FF = 0x28,
    TIME_FF = 0x29,
    TAP_AXES = 0x2A,
    ACT_TAP_STATUS = 0x2B,
    BW_RATE = 0x2C,
    POWER_CTL = 0x2D,
    INT_ENABLE = 0x2E,
    INT_MAP = 0x2F,
    INT_SOURCE = 0x30,
    DATA_FORMAT = 0x31,
    DATAX0 = 0x32,
    DATAX1 = 0x33,
    DATAY0 = 0x34,
    DATAY1 = 0x35,
    DATAZ0 = 0x36,
    DATAZ1 = 0x37,
    FIFO_CTL = 0x38,
    FIFO_STATUS = 0x39,
}

/// A bit field inside a single register.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub reg: Register,
    pub width: u8,
    pub offset: u8,
}

pub const MEASURE: Field = Field {
    reg: Register::POWER_CTL,
    width: 1,
    offset: 3,
};

pub const FULL_RES: Field = Field {
    reg: Register::DATA_FORMAT,
    width: 1,
    offset: 3,
};

pub const RANGE: Field = Field {
    reg: Register::DATA_FORMAT,
    width: 2,
    offset: 0,
};
