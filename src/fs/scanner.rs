use log::{debug, trace};

use super::entry::{DirectoryEntry, DIR_ENTRY_SIZE};
use super::name::{SLOT_DELETED, SLOT_FREE};
use super::region::RootDirRegion;
use crate::error::Fat16Error;

/// Walks the root directory slots in on-disk order.
///
/// Free (0x00) and deleted (0xE5) slots are skipped. A free slot does not
/// end the scan; every slot up to the declared count is visited. A slot
/// with fewer than 32 bytes left yields `TruncatedSlot` and ends the scan.
pub struct DirectoryScanner<'a> {
    data: &'a [u8],
    slot_count: usize,
    index: usize,
    done: bool,
}

impl<'a> DirectoryScanner<'a> {
    /// Scan the located root directory region of `image`.
    pub fn new(image: &'a [u8], region: &RootDirRegion) -> Self {
        let start = region.offset.min(image.len());
        Self::over_slots(&image[start..], region.entry_count as usize)
    }

    /// Scan `slot_count` slots from the start of `data`.
    pub fn over_slots(data: &'a [u8], slot_count: usize) -> Self {
        Self {
            data,
            slot_count,
            index: 0,
            done: false,
        }
    }

    /// Index of the next slot to be examined.
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a> Iterator for DirectoryScanner<'a> {
    type Item = Result<DirectoryEntry, Fat16Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.index < self.slot_count {
            let index = self.index;
            self.index += 1;

            let off = index * DIR_ENTRY_SIZE;
            let slot: &[u8; DIR_ENTRY_SIZE] = match self
                .data
                .get(off..off + DIR_ENTRY_SIZE)
                .and_then(|s| s.try_into().ok())
            {
                Some(slot) => slot,
                None => {
                    self.done = true;
                    return Some(Err(Fat16Error::TruncatedSlot {
                        index,
                        available: self.data.len().saturating_sub(off),
                    }));
                }
            };

            match slot[0] {
                SLOT_FREE => {
                    trace!("slot {index}: free");
                    continue;
                }
                SLOT_DELETED => {
                    debug!("slot {index}: deleted");
                    continue;
                }
                _ => {}
            }

            let entry = DirectoryEntry::decode(slot);
            if !entry.attributes.is_conventional() {
                debug!(
                    "slot {index}: unusual attribute bits {:#04X} on {}",
                    entry.attributes.bits(),
                    entry.name
                );
            }
            return Some(Ok(entry));
        }
        self.done = true;
        None
    }
}
