use crate::ports::outbound::ContentComparator;
use crate::shared::Result;
use crate::snapshot_retention::domain::ComparisonOutcome;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024;

/// ByteComparator adapter comparing files in-process
///
/// Sizes are checked first; equal-sized files are streamed in fixed-size
/// chunks so large inventories are never loaded whole. I/O failures are
/// reported as `ComparisonOutcome::Trouble`.
pub struct ByteComparator;

impl ByteComparator {
    pub fn new() -> Self {
        Self
    }

    fn compare_files(latest: &Path, candidate: &Path) -> io::Result<bool> {
        let latest_file = File::open(latest)?;
        let candidate_file = File::open(candidate)?;

        if latest_file.metadata()?.len() != candidate_file.metadata()?.len() {
            return Ok(false);
        }

        let mut latest_reader = BufReader::new(latest_file);
        let mut candidate_reader = BufReader::new(candidate_file);
        let mut latest_buf = vec![0u8; CHUNK_SIZE];
        let mut candidate_buf = vec![0u8; CHUNK_SIZE];

        loop {
            let read = read_full(&mut latest_reader, &mut latest_buf)?;
            let candidate_read = read_full(&mut candidate_reader, &mut candidate_buf)?;

            if read != candidate_read || latest_buf[..read] != candidate_buf[..read] {
                return Ok(false);
            }
            if read == 0 {
                return Ok(true);
            }
        }
    }
}

impl Default for ByteComparator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills `buf` as far as the reader allows; short only at end of file
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

impl ContentComparator for ByteComparator {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn compare(&self, latest: &Path, candidate: &Path) -> Result<ComparisonOutcome> {
        Ok(match Self::compare_files(latest, candidate) {
            Ok(true) => ComparisonOutcome::Identical,
            Ok(false) => ComparisonOutcome::Different,
            Err(e) => ComparisonOutcome::Trouble {
                details: e.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn compare(latest: &[u8], candidate: &[u8]) -> ComparisonOutcome {
        let temp_dir = TempDir::new().unwrap();
        let latest_path = temp_dir.path().join("latest.txt");
        let candidate_path = temp_dir.path().join("candidate.txt.new");
        fs::write(&latest_path, latest).unwrap();
        fs::write(&candidate_path, candidate).unwrap();

        ByteComparator::new()
            .compare(&latest_path, &candidate_path)
            .unwrap()
    }

    #[test]
    fn test_identical_content() {
        assert_eq!(compare(b"A\nB\n", b"A\nB\n"), ComparisonOutcome::Identical);
    }

    #[test]
    fn test_empty_files_are_identical() {
        assert_eq!(compare(b"", b""), ComparisonOutcome::Identical);
    }

    #[test]
    fn test_appended_line_differs() {
        assert_eq!(compare(b"A\nB\n", b"A\nB\nC\n"), ComparisonOutcome::Different);
    }

    #[test]
    fn test_same_size_different_bytes() {
        assert_eq!(compare(b"A\nB\n", b"A\nb\n"), ComparisonOutcome::Different);
    }

    #[test]
    fn test_difference_beyond_first_chunk() {
        let mut latest = vec![b'x'; CHUNK_SIZE * 2 + 17];
        let candidate = latest.clone();
        assert_eq!(compare(&latest, &candidate), ComparisonOutcome::Identical);

        latest[CHUNK_SIZE + 3] = b'y';
        assert_eq!(compare(&latest, &candidate), ComparisonOutcome::Different);
    }

    #[test]
    fn test_unreadable_file_is_trouble() {
        let temp_dir = TempDir::new().unwrap();
        let candidate_path = temp_dir.path().join("candidate.txt.new");
        fs::write(&candidate_path, "A\n").unwrap();

        let outcome = ByteComparator::new()
            .compare(&temp_dir.path().join("missing.txt"), &candidate_path)
            .unwrap();

        assert!(matches!(outcome, ComparisonOutcome::Trouble { .. }));
    }
}
