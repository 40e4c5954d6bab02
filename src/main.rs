mod cli;
mod logger;

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use cli::ReaderArgs;
use fat16_reader::fs::{DirectoryEntry, Fat16Volume};
use fat16_reader::image::load_image;
use fat16_reader::report::{write_boot_summary, write_entry_table, TableOptions, VolumeReport};

fn main() {
    let args = ReaderArgs::parse();
    let result = logger::init_logger(args.verbose)
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
        .and_then(|()| run(&args, &mut io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run<W: Write>(args: &ReaderArgs, out: &mut W) -> Result<()> {
    let image = load_image(&args.fs_file)
        .with_context(|| format!("cannot read {}", args.fs_file.display()))?;
    let volume = Fat16Volume::open(&image).context("cannot decode boot sector")?;
    let boot = volume.boot_sector();

    if args.json {
        let region = volume
            .root_dir_region()
            .context("cannot locate root directory")?;
        let entries = read_entries(&volume)?;
        let report = VolumeReport::new(args.fs_file.display().to_string(), boot, region, entries);
        writeln!(out, "{}", report.to_json()?)?;
        return Ok(());
    }

    // The boot summary goes out before the directory is located so it is
    // still shown when the root directory does not fit in the image.
    writeln!(out, "Read '{}' as FAT16 file system:", args.fs_file.display())?;
    write_boot_summary(out, boot)?;
    out.flush()?;

    let entries = read_entries(&volume)?;
    writeln!(out)?;
    writeln!(out, "Root dir entries info:")?;
    write_entry_table(
        out,
        boot.sectors_per_cluster(),
        &entries,
        TableOptions {
            all_dates: args.all_dates,
        },
    )?;
    Ok(())
}

fn read_entries(volume: &Fat16Volume<'_>) -> Result<Vec<DirectoryEntry>> {
    volume
        .root_entries()
        .context("cannot locate root directory")?
        .collect::<Result<_, _>>()
        .context("cannot read root directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn boot_sector_image(len: usize, sectors_per_fat: u16, root_entries: u16) -> Vec<u8> {
        let mut img = vec![0u8; len];
        img[11..13].copy_from_slice(&512u16.to_le_bytes());
        img[13] = 4;
        img[16] = 2;
        img[17..19].copy_from_slice(&root_entries.to_le_bytes());
        img[22..24].copy_from_slice(&sectors_per_fat.to_le_bytes());
        img[510] = 0x55;
        img[511] = 0xAA;
        img
    }

    fn args_for(path: &Path, extra: &[&str]) -> ReaderArgs {
        let mut argv = vec!["fat16-reader"];
        argv.extend_from_slice(extra);
        let path = path.to_str().unwrap();
        argv.push(path);
        ReaderArgs::try_parse_from(argv).unwrap()
    }

    fn write_image(dir: &Path, img: &[u8]) -> std::path::PathBuf {
        let path = dir.join("volume.img");
        std::fs::write(&path, img).unwrap();
        path
    }

    #[test]
    fn test_run_lists_root_directory() {
        let mut img = boot_sector_image(64 * 1024, 4, 16);
        let off = 512 + 2 * 4 * 512;
        img[off..off + 11].copy_from_slice(b"HELLO   TXT");
        img[off + 11] = 0x20;
        img[off + 22..off + 24].copy_from_slice(&((10u16 << 11) | (30 << 5)).to_le_bytes());
        img[off + 24..off + 26].copy_from_slice(&((41u16 << 9) | (6 << 5) | 15).to_le_bytes());
        img[off + 26..off + 28].copy_from_slice(&5u16.to_le_bytes());
        img[off + 28..off + 32].copy_from_slice(&1024u32.to_le_bytes());

        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), &img);
        let mut out = Vec::new();
        run(&args_for(&path, &[]), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Read '"));
        assert!(text.contains("Check signature:"));
        assert!(text.contains("Root dir entries info:"));
        assert!(text.contains("2021-07-16 10:30:00\t      5\t   20\tHELLO.TXT "));
    }

    #[test]
    fn test_run_prints_boot_summary_before_out_of_range() {
        let img = boot_sector_image(40_000, 32, 512);
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), &img);
        let mut out = Vec::new();

        let err = run(&args_for(&path, &[]), &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Sector size:"));
        assert!(text.contains("Root directory entry count:"));
        assert!(text.lines().any(|l| l.starts_with("Check signature:") && l.ends_with(" correct")));
        assert!(!text.contains("Root dir entries info:"));
    }

    #[test]
    fn test_run_json() {
        let img = boot_sector_image(64 * 1024, 4, 16);
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), &img);
        let mut out = Vec::new();
        run(&args_for(&path, &["--json"]), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["boot_sector"]["fat_count"], 2);
        assert_eq!(value["entries"].as_array().map(|a| a.len()), Some(0));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = run(&args_for(&dir.path().join("nope.img"), &[]), &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("cannot read"));
        assert!(out.is_empty());
    }
}
