//! Decoder for the boot sector and root directory of FAT16 volume images.

pub mod error;
pub mod fs;
pub mod image;
pub mod report;

pub use error::Fat16Error;
pub use fs::{read_root_directory, DirectoryEntry, Fat16Volume};
