//! FAT12/16 boot sector.
//!
//! [`BootSector`] is a borrowed view over sector zero. Fields are read on
//! demand from fixed byte offsets; nothing depends on host struct layout.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use super::name::decode_oem_string;
use crate::error::Fat16Error;

/// Size of the boot sector region at the start of the image.
pub const BOOT_SECTOR_SIZE: usize = 512;

const SIGNATURE_0: u8 = 0x55;
const SIGNATURE_1: u8 = 0xAA;

// Field offsets within the boot sector
const OFF_JUMP: usize = 0;
const OFF_OEM_ID: usize = 3;
const OFF_BYTES_PER_SECTOR: usize = 11;
const OFF_SECTORS_PER_CLUSTER: usize = 13;
const OFF_RESERVED_SECTORS: usize = 14;
const OFF_FAT_COUNT: usize = 16;
const OFF_ROOT_ENTRY_COUNT: usize = 17;
const OFF_TOTAL_SECTORS_16: usize = 19;
const OFF_MEDIA_TYPE: usize = 21;
const OFF_SECTORS_PER_FAT_16: usize = 22;
const OFF_SECTORS_PER_TRACK: usize = 24;
const OFF_HEAD_COUNT: usize = 26;
const OFF_HIDDEN_SECTORS: usize = 28;
const OFF_TOTAL_SECTORS_32: usize = 32;
const OFF_DRIVE_NUMBER: usize = 36;
const OFF_BOOT_SIGNATURE: usize = 38;
const OFF_VOLUME_SERIAL: usize = 39;
const OFF_VOLUME_LABEL: usize = 43;
const OFF_FS_TYPE: usize = 54;
const OFF_SIGNATURE: usize = 510;

#[derive(Debug, Clone, Copy)]
pub struct BootSector<'a> {
    bytes: &'a [u8],
}

impl<'a> BootSector<'a> {
    /// View the first 512 bytes of `image` as a boot sector.
    ///
    /// Only the length is checked. A bad signature is reported through
    /// [`BootSector::signature_diagnostic`] and does not stop decoding.
    pub fn new(image: &'a [u8]) -> Result<Self, Fat16Error> {
        if image.len() < BOOT_SECTOR_SIZE {
            return Err(Fat16Error::TooShort {
                needed: BOOT_SECTOR_SIZE,
                available: image.len(),
            });
        }
        Ok(Self {
            bytes: &image[..BOOT_SECTOR_SIZE],
        })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    fn u16_at(&self, offset: usize) -> u16 {
        LittleEndian::read_u16(&self.bytes[offset..offset + 2])
    }

    fn u32_at(&self, offset: usize) -> u32 {
        LittleEndian::read_u32(&self.bytes[offset..offset + 4])
    }

    pub fn jump(&self) -> [u8; 3] {
        [
            self.bytes[OFF_JUMP],
            self.bytes[OFF_JUMP + 1],
            self.bytes[OFF_JUMP + 2],
        ]
    }

    pub fn oem_id(&self) -> String {
        decode_oem_string(&self.bytes[OFF_OEM_ID..OFF_OEM_ID + 8])
    }

    pub fn bytes_per_sector(&self) -> u16 {
        self.u16_at(OFF_BYTES_PER_SECTOR)
    }

    pub fn sectors_per_cluster(&self) -> u8 {
        self.bytes[OFF_SECTORS_PER_CLUSTER]
    }

    pub fn reserved_sector_count(&self) -> u16 {
        self.u16_at(OFF_RESERVED_SECTORS)
    }

    pub fn fat_count(&self) -> u8 {
        self.bytes[OFF_FAT_COUNT]
    }

    /// Number of 32-byte slots in the root directory, free ones included.
    pub fn root_dir_entry_count(&self) -> u16 {
        self.u16_at(OFF_ROOT_ENTRY_COUNT)
    }

    pub fn total_sectors_16(&self) -> u16 {
        self.u16_at(OFF_TOTAL_SECTORS_16)
    }

    pub fn media_type(&self) -> u8 {
        self.bytes[OFF_MEDIA_TYPE]
    }

    pub fn sectors_per_fat_16(&self) -> u16 {
        self.u16_at(OFF_SECTORS_PER_FAT_16)
    }

    pub fn sectors_per_track(&self) -> u16 {
        self.u16_at(OFF_SECTORS_PER_TRACK)
    }

    pub fn head_count(&self) -> u16 {
        self.u16_at(OFF_HEAD_COUNT)
    }

    pub fn hidden_sectors(&self) -> u32 {
        self.u32_at(OFF_HIDDEN_SECTORS)
    }

    pub fn total_sectors_32(&self) -> u32 {
        self.u32_at(OFF_TOTAL_SECTORS_32)
    }

    /// The 16-bit count when non-zero, otherwise the 32-bit one.
    pub fn total_sectors(&self) -> u32 {
        match self.total_sectors_16() {
            0 => self.total_sectors_32(),
            n => n as u32,
        }
    }

    pub fn drive_number(&self) -> u8 {
        self.bytes[OFF_DRIVE_NUMBER]
    }

    /// 0x29 when serial, label and type fields are present.
    pub fn boot_signature(&self) -> u8 {
        self.bytes[OFF_BOOT_SIGNATURE]
    }

    pub fn volume_serial_number(&self) -> u32 {
        self.u32_at(OFF_VOLUME_SERIAL)
    }

    pub fn volume_label(&self) -> String {
        decode_oem_string(&self.bytes[OFF_VOLUME_LABEL..OFF_VOLUME_LABEL + 11])
            .trim_end()
            .to_string()
    }

    pub fn file_system_type(&self) -> String {
        decode_oem_string(&self.bytes[OFF_FS_TYPE..OFF_FS_TYPE + 8])
            .trim_end()
            .to_string()
    }

    pub fn boot_sector_sig0(&self) -> u8 {
        self.bytes[OFF_SIGNATURE]
    }

    pub fn boot_sector_sig1(&self) -> u8 {
        self.bytes[OFF_SIGNATURE + 1]
    }

    pub fn has_valid_signature(&self) -> bool {
        self.boot_sector_sig0() == SIGNATURE_0 && self.boot_sector_sig1() == SIGNATURE_1
    }

    /// `MalformedBootSector` when the trailing bytes are not 0x55 0xAA.
    pub fn signature_diagnostic(&self) -> Option<Fat16Error> {
        if self.has_valid_signature() {
            None
        } else {
            Some(Fat16Error::MalformedBootSector {
                sig0: self.boot_sector_sig0(),
                sig1: self.boot_sector_sig1(),
            })
        }
    }

    /// Size of one FAT copy in bytes.
    pub fn fat_size_bytes(&self) -> u64 {
        self.sectors_per_fat_16() as u64 * self.bytes_per_sector() as u64
    }

    /// Copy the decoded fields out of the buffer.
    pub fn info(&self) -> BootSectorInfo {
        BootSectorInfo {
            oem_id: self.oem_id(),
            bytes_per_sector: self.bytes_per_sector(),
            sectors_per_cluster: self.sectors_per_cluster(),
            reserved_sector_count: self.reserved_sector_count(),
            fat_count: self.fat_count(),
            root_dir_entry_count: self.root_dir_entry_count(),
            total_sectors: self.total_sectors(),
            media_type: self.media_type(),
            sectors_per_fat_16: self.sectors_per_fat_16(),
            fat_size_bytes: self.fat_size_bytes(),
            sectors_per_track: self.sectors_per_track(),
            head_count: self.head_count(),
            hidden_sectors: self.hidden_sectors(),
            drive_number: self.drive_number(),
            boot_signature: self.boot_signature(),
            volume_serial_number: self.volume_serial_number(),
            volume_label: self.volume_label(),
            file_system_type: self.file_system_type(),
            signature_valid: self.has_valid_signature(),
        }
    }
}

/// Owned copy of the boot sector fields, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootSectorInfo {
    pub oem_id: String,
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sector_count: u16,
    pub fat_count: u8,
    pub root_dir_entry_count: u16,
    pub total_sectors: u32,
    pub media_type: u8,
    pub sectors_per_fat_16: u16,
    pub fat_size_bytes: u64,
    pub sectors_per_track: u16,
    pub head_count: u16,
    pub hidden_sectors: u32,
    pub drive_number: u8,
    pub boot_signature: u8,
    pub volume_serial_number: u32,
    pub volume_label: String,
    pub file_system_type: String,
    pub signature_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sector() -> Vec<u8> {
        let mut bpb = vec![0u8; BOOT_SECTOR_SIZE];
        bpb[0..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
        bpb[3..11].copy_from_slice(b"MSDOS5.0");
        LittleEndian::write_u16(&mut bpb[11..13], 2048);
        bpb[13] = 8;
        LittleEndian::write_u16(&mut bpb[14..16], 4);
        bpb[16] = 2;
        LittleEndian::write_u16(&mut bpb[17..19], 512);
        LittleEndian::write_u16(&mut bpb[19..21], 0);
        bpb[21] = 0xF8;
        LittleEndian::write_u16(&mut bpb[22..24], 200);
        LittleEndian::write_u16(&mut bpb[24..26], 63);
        LittleEndian::write_u16(&mut bpb[26..28], 255);
        LittleEndian::write_u32(&mut bpb[28..32], 2048);
        LittleEndian::write_u32(&mut bpb[32..36], 409_600);
        bpb[36] = 0x80;
        bpb[38] = 0x29;
        LittleEndian::write_u32(&mut bpb[39..43], 0x1234_ABCD);
        bpb[43..54].copy_from_slice(b"TESTVOL    ");
        bpb[54..62].copy_from_slice(b"FAT16   ");
        bpb[510] = 0x55;
        bpb[511] = 0xAA;
        bpb
    }

    #[test]
    fn test_fields_little_endian() {
        let bpb = sample_sector();
        let boot = BootSector::new(&bpb).unwrap();
        assert_eq!(boot.jump(), [0xEB, 0x3C, 0x90]);
        assert_eq!(boot.oem_id(), "MSDOS5.0");
        assert_eq!(boot.bytes_per_sector(), 2048);
        assert_eq!(boot.sectors_per_cluster(), 8);
        assert_eq!(boot.reserved_sector_count(), 4);
        assert_eq!(boot.fat_count(), 2);
        assert_eq!(boot.root_dir_entry_count(), 512);
        assert_eq!(boot.media_type(), 0xF8);
        assert_eq!(boot.sectors_per_fat_16(), 200);
        assert_eq!(boot.sectors_per_track(), 63);
        assert_eq!(boot.head_count(), 255);
        assert_eq!(boot.hidden_sectors(), 2048);
        assert_eq!(boot.drive_number(), 0x80);
        assert_eq!(boot.boot_signature(), 0x29);
        assert_eq!(boot.volume_serial_number(), 0x1234_ABCD);
        assert_eq!(boot.volume_label(), "TESTVOL");
        assert_eq!(boot.file_system_type(), "FAT16");
        assert_eq!(boot.fat_size_bytes(), 200 * 2048);
    }

    #[test]
    fn test_total_sectors_falls_back_to_32_bit() {
        let mut bpb = sample_sector();
        assert_eq!(BootSector::new(&bpb).unwrap().total_sectors(), 409_600);
        LittleEndian::write_u16(&mut bpb[19..21], 40_000);
        assert_eq!(BootSector::new(&bpb).unwrap().total_sectors(), 40_000);
    }

    #[test]
    fn test_signature() {
        let mut bpb = sample_sector();
        let boot = BootSector::new(&bpb).unwrap();
        assert!(boot.has_valid_signature());
        assert!(boot.signature_diagnostic().is_none());

        bpb[511] = 0x00;
        let boot = BootSector::new(&bpb).unwrap();
        assert!(!boot.has_valid_signature());
        assert!(matches!(
            boot.signature_diagnostic(),
            Some(Fat16Error::MalformedBootSector { sig0: 0x55, sig1: 0x00 })
        ));
        // Fields still decode.
        assert_eq!(boot.bytes_per_sector(), 2048);
    }

    #[test]
    fn test_values_pass_through_unchecked() {
        let mut bpb = sample_sector();
        bpb[13] = 3;
        LittleEndian::write_u16(&mut bpb[11..13], 100);
        let boot = BootSector::new(&bpb).unwrap();
        assert_eq!(boot.sectors_per_cluster(), 3);
        assert_eq!(boot.bytes_per_sector(), 100);
    }

    #[test]
    fn test_short_buffer() {
        let bpb = vec![0u8; 511];
        assert!(matches!(
            BootSector::new(&bpb),
            Err(Fat16Error::TooShort { needed: 512, available: 511 })
        ));
    }

    #[test]
    fn test_view_limited_to_sector() {
        let mut image = sample_sector();
        image.extend_from_slice(&[0xFF; 1024]);
        let boot = BootSector::new(&image).unwrap();
        assert_eq!(boot.as_bytes().len(), BOOT_SECTOR_SIZE);
    }

    #[test]
    fn test_info_snapshot() {
        let bpb = sample_sector();
        let info = BootSector::new(&bpb).unwrap().info();
        assert_eq!(info.bytes_per_sector, 2048);
        assert_eq!(info.root_dir_entry_count, 512);
        assert_eq!(info.volume_label, "TESTVOL");
        assert!(info.signature_valid);
    }
}
