//! Local file writer implementation
//!
//! Writes carved extents into a directory on the local filesystem and
//! records a SHA-256 digest of each file.

use crate::domain::entities::CarvedFile;
use crate::domain::repositories::{CarvedFileWriter, FileWriterError, WriteOptions, WriteOutcome};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Local file system writer
pub struct LocalFileWriter {
    output_dir: PathBuf,
    files_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl CarvedFileWriter for LocalFileWriter {
    fn new(output_dir: &Path) -> Result<Self, FileWriterError> {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(FileWriterError::NotADirectory(output_dir.to_path_buf()));
        }

        fs::create_dir_all(output_dir).map_err(|e| {
            if e.kind() == ErrorKind::PermissionDenied {
                FileWriterError::PermissionDenied(output_dir.to_path_buf())
            } else {
                FileWriterError::IoError(e)
            }
        })?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            files_written: AtomicUsize::new(0),
            bytes_written: AtomicU64::new(0),
        })
    }

    fn write(
        &self,
        match_id: u64,
        file_name: &str,
        data: &[u8],
        options: &WriteOptions,
    ) -> Result<WriteOutcome, FileWriterError> {
        let output_path = self.output_dir.join(file_name);

        if output_path.exists() && !options.overwrite {
            return Ok(WriteOutcome::Skipped(output_path));
        }

        let write_err = |source| FileWriterError::Write {
            path: output_path.clone(),
            source,
        };
        let mut output_file = File::create(&output_path).map_err(write_err)?;
        output_file.write_all(data).map_err(write_err)?;
        output_file.sync_all().map_err(write_err)?;

        let saved_size = data.len() as u64;
        let digest = hex::encode(Sha256::digest(data));

        self.files_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(saved_size, Ordering::Relaxed);

        Ok(WriteOutcome::Written(CarvedFile::new(
            match_id,
            output_path,
            saved_size,
            digest,
        )))
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn files_written(&self) -> usize {
        self.files_written.load(Ordering::Relaxed)
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let writer = LocalFileWriter::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(writer.files_written(), 0);
        assert_eq!(writer.bytes_written(), 0);
    }

    #[test]
    fn test_write_and_skip_existing() {
        let dir = TempDir::new().unwrap();
        let writer = LocalFileWriter::new(dir.path()).unwrap();
        let options = WriteOptions::default();

        let outcome = writer.write(1, "000000000007.jpg", b"abc", &options).unwrap();
        let WriteOutcome::Written(file) = outcome else {
            panic!("expected a written file");
        };
        assert_eq!(file.size(), 3);
        assert_eq!(
            file.sha256(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(fs::read(file.path()).unwrap(), b"abc");

        let again = writer.write(1, "000000000007.jpg", b"xyz", &options).unwrap();
        assert!(matches!(again, WriteOutcome::Skipped(_)));
        assert_eq!(fs::read(dir.path().join("000000000007.jpg")).unwrap(), b"abc");
        assert_eq!(writer.files_written(), 1);
    }

    #[test]
    fn test_overwrite() {
        let dir = TempDir::new().unwrap();
        let writer = LocalFileWriter::new(dir.path()).unwrap();
        let options = WriteOptions { overwrite: true };

        writer.write(1, "x.bin", b"old", &options).unwrap();
        writer.write(1, "x.bin", b"newer", &options).unwrap();

        assert_eq!(fs::read(dir.path().join("x.bin")).unwrap(), b"newer");
        assert_eq!(writer.files_written(), 2);
        assert_eq!(writer.bytes_written(), 8);
    }

    #[test]
    fn test_rejects_file_as_output_dir() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("not_a_dir");
        fs::write(&file_path, b"x").unwrap();
        assert!(matches!(
            LocalFileWriter::new(&file_path),
            Err(FileWriterError::NotADirectory(_))
        ));
    }
}
