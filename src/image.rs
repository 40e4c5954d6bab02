//! Loading volume images into memory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::Fat16Error;

/// Read a whole image from `reader`.
pub fn read_image<R: Read>(mut reader: R) -> Result<Vec<u8>, Fat16Error> {
    let mut image = Vec::new();
    reader.read_to_end(&mut image)?;
    Ok(image)
}

/// Read the image file at `path` into memory.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Fat16Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let image = read_image(BufReader::new(file))?;
    debug!("loaded {} bytes from {}", image.len(), path.display());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_read_image_from_cursor() {
        let data = vec![0xABu8; 4096];
        let image = read_image(Cursor::new(data.clone())).unwrap();
        assert_eq!(image, data);
    }

    #[test]
    fn test_load_image_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x55; 1000]).unwrap();
        file.flush().unwrap();

        let image = load_image(file.path()).unwrap();
        assert_eq!(image.len(), 1000);
    }

    #[test]
    fn test_load_image_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().join("missing.img")).unwrap_err();
        assert!(matches!(err, Fat16Error::Io(_)));
    }
}
