use std::fmt;

use serde::{Serialize, Serializer};

pub const ATTR_READ_ONLY: u8 = 0x01;
pub const ATTR_HIDDEN: u8 = 0x02;
pub const ATTR_SYSTEM: u8 = 0x04;
pub const ATTR_VOLUME_ID: u8 = 0x08;
pub const ATTR_DIRECTORY: u8 = 0x10;
pub const ATTR_ARCHIVE: u8 = 0x20;
pub const ATTR_LONG_NAME: u8 = ATTR_READ_ONLY | ATTR_HIDDEN | ATTR_SYSTEM | ATTR_VOLUME_ID;
const ATTR_RESERVED: u8 = 0xC0;

/// Status letters in bit order, lowest bit first.
const STATUS_FLAGS: [(u8, char); 6] = [
    (ATTR_READ_ONLY, 'r'),
    (ATTR_HIDDEN, 'h'),
    (ATTR_SYSTEM, 's'),
    (ATTR_VOLUME_ID, 'v'),
    (ATTR_DIRECTORY, 'd'),
    (ATTR_ARCHIVE, 'a'),
];

/// Attribute byte of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes(pub u8);

impl Attributes {
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Six characters, `rhsvda`, with `-` for each clear bit.
    pub fn status(&self) -> String {
        STATUS_FLAGS
            .iter()
            .map(|&(mask, c)| if self.0 & mask != 0 { c } else { '-' })
            .collect()
    }

    /// `/` when bit 0x08 is set, otherwise a space.
    ///
    /// Listings have always tested 0x08 here, which is the volume label bit,
    /// not [`ATTR_DIRECTORY`]. Use [`Attributes::is_directory`] for the real
    /// directory flag.
    pub fn kind(&self) -> char {
        if self.0 & ATTR_VOLUME_ID != 0 {
            '/'
        } else {
            ' '
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.0 & ATTR_READ_ONLY != 0
    }

    pub fn is_hidden(&self) -> bool {
        self.0 & ATTR_HIDDEN != 0
    }

    pub fn is_system(&self) -> bool {
        self.0 & ATTR_SYSTEM != 0
    }

    pub fn is_volume_label(&self) -> bool {
        self.0 & ATTR_VOLUME_ID != 0
    }

    pub fn is_directory(&self) -> bool {
        self.0 & ATTR_DIRECTORY != 0
    }

    pub fn is_archive(&self) -> bool {
        self.0 & ATTR_ARCHIVE != 0
    }

    pub fn is_long_name(&self) -> bool {
        self.0 & 0x3F == ATTR_LONG_NAME
    }

    /// False for combinations no FAT driver writes: reserved bits set, or a
    /// volume label that also claims to be a directory. Long-name slots
    /// count as conventional.
    pub fn is_conventional(&self) -> bool {
        if self.0 & ATTR_RESERVED != 0 {
            return false;
        }
        if self.is_long_name() {
            return true;
        }
        !(self.is_volume_label() && self.is_directory())
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status())
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.status())
    }
}

pub fn status_string(attributes: u8) -> String {
    Attributes(attributes).status()
}

pub fn kind_indicator(attributes: u8) -> char {
    Attributes(attributes).kind()
}
