use log::{info, warn};

use super::boot_sector::BootSector;
use super::region::RootDirRegion;
use super::scanner::DirectoryScanner;
use crate::error::Fat16Error;

/// A FAT16 image held in memory by the caller.
///
/// Borrows the image; the boot sector view and every scanner derived from
/// it borrow the same buffer.
#[derive(Debug, Clone, Copy)]
pub struct Fat16Volume<'a> {
    image: &'a [u8],
    boot: BootSector<'a>,
}

impl<'a> Fat16Volume<'a> {
    /// Decode the boot sector. A bad signature is logged and kept as a
    /// diagnostic; only a buffer shorter than one sector fails.
    pub fn open(image: &'a [u8]) -> Result<Self, Fat16Error> {
        let boot = BootSector::new(image)?;
        if let Some(diag) = boot.signature_diagnostic() {
            warn!("{diag}");
        }
        info!(
            "FAT16 volume: {} bytes/sector, {} FAT(s) of {} sectors, {} root entries",
            boot.bytes_per_sector(),
            boot.fat_count(),
            boot.sectors_per_fat_16(),
            boot.root_dir_entry_count()
        );
        Ok(Self { image, boot })
    }

    pub fn boot_sector(&self) -> &BootSector<'a> {
        &self.boot
    }

    pub fn image_len(&self) -> usize {
        self.image.len()
    }

    /// `Some(MalformedBootSector)` when the boot signature is wrong.
    pub fn diagnostic(&self) -> Option<Fat16Error> {
        self.boot.signature_diagnostic()
    }

    pub fn root_dir_region(&self) -> Result<RootDirRegion, Fat16Error> {
        RootDirRegion::locate(&self.boot, self.image.len())
    }

    /// Live root directory entries in slot order.
    pub fn root_entries(&self) -> Result<DirectoryScanner<'a>, Fat16Error> {
        let region = self.root_dir_region()?;
        Ok(DirectoryScanner::new(self.image, &region))
    }
}
