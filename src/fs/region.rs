use log::debug;
use serde::Serialize;

use super::boot_sector::{BootSector, BOOT_SECTOR_SIZE};
use super::entry::DIR_ENTRY_SIZE;
use crate::error::Fat16Error;

/// Location of the fixed root directory region within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootDirRegion {
    /// Byte offset from the start of the image.
    pub offset: usize,
    /// Number of 32-byte slots, free and deleted ones included.
    pub entry_count: u16,
}

impl RootDirRegion {
    /// Locate the root directory for an image of `image_len` bytes.
    ///
    /// The region starts right after the FAT copies, which are taken to
    /// follow a single 512-byte boot sector:
    /// `512 + fat_count * sectors_per_fat_16 * bytes_per_sector`.
    /// `reserved_sector_count` is not applied.
    pub fn locate(boot: &BootSector<'_>, image_len: usize) -> Result<Self, Fat16Error> {
        let fats_len = boot.fat_count() as u64 * boot.fat_size_bytes();
        let offset = BOOT_SECTOR_SIZE as u64 + fats_len;
        let length = boot.root_dir_entry_count() as u64 * DIR_ENTRY_SIZE as u64;
        let available = image_len as u64;

        if offset + length > available {
            return Err(Fat16Error::OutOfRange {
                offset,
                length,
                available,
            });
        }

        debug!(
            "root directory: {} slots at offset {offset}",
            boot.root_dir_entry_count()
        );
        Ok(Self {
            offset: offset as usize,
            entry_count: boot.root_dir_entry_count(),
        })
    }

    pub fn byte_len(&self) -> usize {
        self.entry_count as usize * DIR_ENTRY_SIZE
    }

    pub fn end(&self) -> usize {
        self.offset + self.byte_len()
    }
}
