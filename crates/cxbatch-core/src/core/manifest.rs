use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single structure-file path listed in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 1-based line number in the manifest source.
    pub line: usize,
    pub path: String,
}

/// The ordered list of structure files to process.
///
/// The manifest is read fully before any command is dispatched and is never
/// mutated afterwards. Duplicate entries are kept and processed independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn from_entries<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = paths
            .into_iter()
            .enumerate()
            .map(|(i, p)| ManifestEntry {
                line: i + 1,
                path: p.into(),
            })
            .collect();
        Self { entries }
    }

    /// Reads a manifest, one path per line.
    ///
    /// Surrounding whitespace (including `\r` left by CRLF files) is removed,
    /// matching how the host tokenizes `open` arguments. Lines that are empty
    /// after trimming are skipped.
    pub fn read_from(reader: impl BufRead) -> io::Result<Self> {
        let mut entries = Vec::new();
        for (idx, line_res) in reader.lines().enumerate() {
            let raw = line_res?;
            let path = raw.trim();
            if path.is_empty() {
                warn!("Skipping blank manifest line {}.", idx + 1);
                continue;
            }
            entries.push(ManifestEntry {
                line: idx + 1,
                path: path.to_string(),
            });
        }
        Ok(Self { entries })
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let wrap = |source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(wrap)?;
        let manifest = Self::read_from(BufReader::new(file)).map_err(wrap)?;
        debug!(
            "Read {} manifest entries from {:?}",
            manifest.len(),
            path
        );
        Ok(manifest)
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn paths(manifest: &Manifest) -> Vec<&str> {
        manifest.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn trailing_whitespace_and_newlines_are_stripped() {
        let input = "complex1.pdb  \ncomplex2.pdb\t\r\ncomplex3.pdb";
        let manifest = Manifest::read_from(Cursor::new(input)).unwrap();
        assert_eq!(
            paths(&manifest),
            vec!["complex1.pdb", "complex2.pdb", "complex3.pdb"]
        );
    }

    #[test]
    fn leading_whitespace_is_stripped() {
        let manifest =
            Manifest::read_from(Cursor::new("  indented.pdb\n\tcomplex2.pdb \n")).unwrap();
        assert_eq!(paths(&manifest), vec!["indented.pdb", "complex2.pdb"]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let manifest = Manifest::read_from(Cursor::new("a.pdb\nb.pdb\na.pdb\n")).unwrap();
        assert_eq!(paths(&manifest), vec!["a.pdb", "b.pdb", "a.pdb"]);
    }

    #[test]
    fn blank_lines_are_skipped_but_line_numbers_track_the_source() {
        let manifest = Manifest::read_from(Cursor::new("a.pdb\n\n   \nb.pdb\n")).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.entries()[0].line, 1);
        assert_eq!(manifest.entries()[1].line, 4);
    }

    #[test]
    fn empty_input_gives_empty_manifest() {
        let manifest = Manifest::read_from(Cursor::new("")).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn read_from_path_reads_file_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_Relaxed_files.txt");
        std::fs::write(&path, "x/one.pdb\nx/two.pdb\n").unwrap();

        let manifest = Manifest::read_from_path(&path).unwrap();
        assert_eq!(paths(&manifest), vec!["x/one.pdb", "x/two.pdb"]);
    }

    #[test]
    fn missing_manifest_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = Manifest::read_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
