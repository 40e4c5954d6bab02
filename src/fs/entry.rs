//! 32-byte short directory entries.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use super::attributes::Attributes;
use super::datetime::{decode_date, DecodedDate, DecodedTime, FatTimestamp};
use super::name::{decode_name, NAME_LEN};

pub const DIR_ENTRY_SIZE: usize = 32;

// Field offsets within a directory entry
const OFF_ATTRIBUTES: usize = 11;
const OFF_RESERVED_NT: usize = 12;
const OFF_CREATION_TENTHS: usize = 13;
const OFF_CREATION_TIME: usize = 14;
const OFF_CREATION_DATE: usize = 16;
const OFF_LAST_ACCESS_DATE: usize = 18;
const OFF_CLUSTER_HIGH: usize = 20;
const OFF_WRITE_TIME: usize = 22;
const OFF_WRITE_DATE: usize = 24;
const OFF_CLUSTER_LOW: usize = 26;
const OFF_FILE_SIZE: usize = 28;

/// A decoded root directory entry. All fields are copied out of the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(skip)]
    pub raw_name: [u8; NAME_LEN],
    pub attributes: Attributes,
    pub reserved_nt: u8,
    /// Hundredths of a second added to the creation time.
    pub creation_time_tenths: u8,
    pub created: FatTimestamp,
    pub last_access_date: DecodedDate,
    /// Always 0 on FAT16.
    pub first_cluster_high: u16,
    pub last_write: FatTimestamp,
    pub first_cluster_low: u16,
    pub file_size: u32,
}

impl DirectoryEntry {
    pub fn decode(slot: &[u8; DIR_ENTRY_SIZE]) -> Self {
        let mut raw_name = [0u8; NAME_LEN];
        raw_name.copy_from_slice(&slot[..NAME_LEN]);

        let u16_at = |off: usize| LittleEndian::read_u16(&slot[off..off + 2]);

        Self {
            name: decode_name(&raw_name),
            raw_name,
            attributes: Attributes(slot[OFF_ATTRIBUTES]),
            reserved_nt: slot[OFF_RESERVED_NT],
            creation_time_tenths: slot[OFF_CREATION_TENTHS],
            created: FatTimestamp::from_raw(u16_at(OFF_CREATION_DATE), u16_at(OFF_CREATION_TIME)),
            last_access_date: decode_date(u16_at(OFF_LAST_ACCESS_DATE)),
            first_cluster_high: u16_at(OFF_CLUSTER_HIGH),
            last_write: FatTimestamp::from_raw(u16_at(OFF_WRITE_DATE), u16_at(OFF_WRITE_TIME)),
            first_cluster_low: u16_at(OFF_CLUSTER_LOW),
            file_size: LittleEndian::read_u32(&slot[OFF_FILE_SIZE..OFF_FILE_SIZE + 4]),
        }
    }

    /// Six-character attribute status, e.g. `r----a`.
    pub fn status(&self) -> String {
        self.attributes.status()
    }

    pub fn kind(&self) -> char {
        self.attributes.kind()
    }

    pub fn last_write_date(&self) -> DecodedDate {
        self.last_write.date
    }

    pub fn last_write_time(&self) -> DecodedTime {
        self.last_write.time
    }

    /// First sector-unit of the file as listed: `first_cluster_low * sectors_per_cluster`.
    /// Not adjusted for the data region start or the two reserved clusters.
    pub fn block(&self, sectors_per_cluster: u8) -> u32 {
        self.first_cluster_low as u32 * sectors_per_cluster as u32
    }
}

/// Decode one slot.
pub fn decode_entry(slot: &[u8; DIR_ENTRY_SIZE]) -> DirectoryEntry {
    DirectoryEntry::decode(slot)
}
