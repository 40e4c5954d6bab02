use thiserror::Error;

#[derive(Error, Debug)]
pub enum Fat16Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed boot sector: signature is {sig0:#04X} {sig1:#04X}, expected 0x55 0xAA")]
    MalformedBootSector { sig0: u8, sig1: u8 },

    #[error("Image too short for boot sector: need {needed} bytes, have {available} bytes")]
    TooShort { needed: usize, available: usize },

    #[error(
        "Root directory out of range: {length} bytes at offset {offset}, image has {available} bytes"
    )]
    OutOfRange {
        offset: u64,
        length: u64,
        available: u64,
    },

    #[error("Directory slot {index} truncated: {available} of 32 bytes present")]
    TruncatedSlot { index: usize, available: usize },
}
