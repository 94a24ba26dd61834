use std::path::Path;

use serde::{Deserialize, Serialize};

/// A file handed over by the upload surface. Only the name and size are
/// used; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Build a handle from a file on disk (metadata only). Non-UTF-8 bytes
    /// in the name become U+FFFD so the rest stays classifiable.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());
        Ok(Self::new(name, metadata.len()))
    }

    /// Lowercased extension including the dot, e.g. ".pdf".
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
    }

    pub fn display_size(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// Human-readable size: bytes below 1 KB, one decimal for KB and MB.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2_516_582), "2.4 MB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(UploadedFile::new("Report.PDF", 1).extension().as_deref(), Some(".pdf"));
        assert_eq!(UploadedFile::new("archive.tar.gz", 1).extension().as_deref(), Some(".gz"));
        assert_eq!(UploadedFile::new("README", 1).extension(), None);
    }

    #[test]
    fn from_path_reads_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Vendor_Contract.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[b'x'; 2048]).unwrap();
        drop(file);

        let upload = UploadedFile::from_path(&path).unwrap();
        assert_eq!(upload.name, "Vendor_Contract.txt");
        assert_eq!(upload.size_bytes, 2048);
        assert_eq!(upload.display_size(), "2.0 KB");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn from_path_keeps_non_utf8_name_readable() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"Q3_revenue_\xff\xfe.pdf"));
        std::fs::write(&path, b"data").unwrap();

        let upload = UploadedFile::from_path(&path).unwrap();
        assert!(upload.name.starts_with("Q3_revenue_"));
        assert!(upload.name.contains('\u{FFFD}'));
        assert_eq!(upload.extension().as_deref(), Some(".pdf"));
        assert_eq!(
            crate::pipeline::classify(&upload.name),
            crate::models::DocumentType::Financial
        );
    }

    #[test]
    fn from_path_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UploadedFile::from_path(&dir.path().join("missing.pdf")).is_err());
    }
}
