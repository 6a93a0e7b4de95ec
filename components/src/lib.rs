#![cfg_attr(not(test), no_std)]

pub mod adxl343;
pub mod bus;
