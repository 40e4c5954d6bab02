//! FAT16 on-disk structure decoding.
//!
//! Everything here works on a byte buffer already in memory:
//! boot sector → root directory region → slots → decoded entries.

pub mod attributes;
pub mod boot_sector;
pub mod datetime;
pub mod entry;
pub mod name;
pub mod region;
pub mod scanner;
pub mod volume;

pub use attributes::{kind_indicator, status_string, Attributes};
pub use boot_sector::{BootSector, BootSectorInfo, BOOT_SECTOR_SIZE};
pub use datetime::{decode_date, decode_time, DecodedDate, DecodedTime, FatTimestamp};
pub use entry::{decode_entry, DirectoryEntry, DIR_ENTRY_SIZE};
pub use name::{decode_name, decode_raw_name};
pub use region::RootDirRegion;
pub use scanner::DirectoryScanner;
pub use volume::Fat16Volume;

use crate::error::Fat16Error;

/// Decode every live root directory entry of `image`.
///
/// Stops at the first structural error.
pub fn read_root_directory(image: &[u8]) -> Result<Vec<DirectoryEntry>, Fat16Error> {
    Fat16Volume::open(image)?.root_entries()?.collect()
}
