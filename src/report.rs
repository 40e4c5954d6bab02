//! Text and JSON rendering of a decoded volume.

use std::io::{self, Write};

use serde::Serialize;

use crate::fs::{BootSector, BootSectorInfo, DirectoryEntry, RootDirRegion};

/// Legend for the status column.
pub const STATUS_LEGEND: &str = "Entry status description:
  r\tRead Only
  h\tHidden
  s\tSystem
  v\tVolume Label
  d\tDirectory
  a\tArchive";

const LABEL_WIDTH: usize = 40;

/// Which timestamps to print for each entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Also print creation time and last access date.
    pub all_dates: bool,
}

/// Print the boot sector summary block.
pub fn write_boot_summary<W: Write>(out: &mut W, boot: &BootSector<'_>) -> io::Result<()> {
    let rows: [(&str, u64); 8] = [
        ("Sector size:", boot.bytes_per_sector() as u64),
        ("Sectors per cluster:", boot.sectors_per_cluster() as u64),
        ("FAT copy number:", boot.fat_count() as u64),
        ("FAT copy size in bytes:", boot.fat_size_bytes()),
        ("FAT copy size in sectors:", boot.sectors_per_fat_16() as u64),
        ("Root directory size:", boot.root_dir_entry_count() as u64),
        ("Root directory entry count:", boot.root_dir_entry_count() as u64),
        ("Reserved sectors count:", boot.reserved_sector_count() as u64),
    ];
    for (label, value) in rows {
        writeln!(out, "{:<width$} {}", label, value, width = LABEL_WIDTH)?;
    }
    let signature = if boot.has_valid_signature() {
        "correct"
    } else {
        "incorrect"
    };
    writeln!(
        out,
        "{:<width$} {}",
        "Check signature:",
        signature,
        width = LABEL_WIDTH
    )
}

/// Print the root directory table, one row per entry.
pub fn write_entry_table<'e, W, I>(
    out: &mut W,
    sectors_per_cluster: u8,
    entries: I,
    options: TableOptions,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'e DirectoryEntry>,
{
    if options.all_dates {
        writeln!(
            out,
            "{:^6}\t{:^10}\t{:^19}\t{:^19}\t{:^10}\t{:>7}\t{:>5}\tfile name",
            "status", "size", "last modified", "created", "accessed", "cluster", "block"
        )?;
    } else {
        writeln!(
            out,
            "{:^6}\t{:^10}\t{:^19}\t{:>7}\t{:>5}\tfile name",
            "status", "size", "last modified", "cluster", "block"
        )?;
    }

    for entry in entries {
        write!(
            out,
            "{:>6}\t{:>10}\t{:>19}\t",
            entry.status(),
            entry.file_size,
            entry.last_write.to_string()
        )?;
        if options.all_dates {
            write!(
                out,
                "{:>19}\t{:>10}\t",
                entry.created.to_string(),
                entry.last_access_date.to_string()
            )?;
        }
        writeln!(
            out,
            "{:>7}\t{:>5}\t{}{}",
            entry.first_cluster_low,
            entry.block(sectors_per_cluster),
            entry.name,
            entry.kind()
        )?;
    }
    Ok(())
}

/// Everything decoded from one image, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeReport {
    pub source: String,
    pub boot_sector: BootSectorInfo,
    pub root_directory: RootDirRegion,
    pub entries: Vec<EntryRecord>,
}

/// One row of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    #[serde(flatten)]
    pub entry: DirectoryEntry,
    pub kind: char,
    pub block: u32,
    /// False when the attribute byte is a combination no FAT driver writes.
    pub conventional_attributes: bool,
}

impl VolumeReport {
    pub fn new(
        source: impl Into<String>,
        boot: &BootSector<'_>,
        region: RootDirRegion,
        entries: Vec<DirectoryEntry>,
    ) -> Self {
        let sectors_per_cluster = boot.sectors_per_cluster();
        let entries = entries
            .into_iter()
            .map(|entry| EntryRecord {
                kind: entry.kind(),
                block: entry.block(sectors_per_cluster),
                conventional_attributes: entry.attributes.is_conventional(),
                entry,
            })
            .collect();
        Self {
            source: source.into(),
            boot_sector: boot.info(),
            root_directory: region,
            entries,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
