//! Reference file staging
//!
//! Files reach the stager either through the browse prompt or by being
//! dropped (pasted) onto the drop zone. Nothing is uploaded: the staged list
//! is display-only and is the single source of truth for what is shown.

use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

/// Largest accepted file (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// MIME types accepted without the `.zip` escape hatch
pub const ALLOWED_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "video/mp4",
    "video/quicktime",
    "application/pdf",
    "application/zip",
    "application/x-zip-compressed",
];

/// Why a file was not staged. The display text is shown to the user.
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("File {name} is too large (max 50MB)")]
    TooLarge { name: String, size_bytes: u64 },

    #[error("File type not supported for {name}")]
    UnsupportedType { name: String, mime_type: String },

    #[error("Could not read {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a file")]
    NotAFile { path: String },
}

/// A file offered for staging, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Build a candidate from a path on disk, guessing the MIME type from
    /// the extension.
    pub fn from_path(path: &Path) -> Result<Self, StagingError> {
        let display = path.display().to_string();
        let metadata = std::fs::metadata(path).map_err(|source| StagingError::Unreadable {
            path: display.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(StagingError::NotAFile { path: display });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(display);
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");

        Ok(Self::new(name, metadata.len(), mime_type))
    }
}

/// Size and type gate. Size is checked first.
pub fn validate_file(candidate: &FileCandidate) -> Result<(), StagingError> {
    if candidate.size_bytes > MAX_FILE_SIZE {
        return Err(StagingError::TooLarge {
            name: candidate.name.clone(),
            size_bytes: candidate.size_bytes,
        });
    }

    let allowed = ALLOWED_TYPES.contains(&candidate.mime_type.as_str());
    if !allowed && !candidate.name.ends_with(".zip") {
        return Err(StagingError::UnsupportedType {
            name: candidate.name.clone(),
            mime_type: candidate.mime_type.clone(),
        });
    }

    Ok(())
}

/// Human readable size on a 1024 scale, at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit < UNITS.len() - 1 && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = ((bytes as f64 / scale as f64) * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[unit])
}

/// Icon category derived from the MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Video,
    Pdf,
    Archive,
    Generic,
}

impl FileIcon {
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            FileIcon::Image
        } else if mime_type.starts_with("video/") {
            FileIcon::Video
        } else if mime_type == "application/pdf" {
            FileIcon::Pdf
        } else if mime_type.contains("zip") {
            FileIcon::Archive
        } else {
            FileIcon::Generic
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            FileIcon::Image => "🖼",
            FileIcon::Video => "🎞",
            FileIcon::Pdf => "📕",
            FileIcon::Archive => "🗜",
            FileIcon::Generic => "📄",
        }
    }
}

/// A file accepted by the client-side checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl StagedFile {
    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }

    pub fn icon(&self) -> FileIcon {
        FileIcon::from_mime(&self.mime_type)
    }
}

/// Ordered list of staged files plus the drop zone's visual state
#[derive(Debug, Default)]
pub struct FileStager {
    files: Vec<StagedFile>,
    /// Drop zone highlight while something hovers over it
    pub highlighted: bool,
}

impl FileStager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Validate and append one candidate
    pub fn stage(&mut self, candidate: FileCandidate) -> Result<&StagedFile, StagingError> {
        validate_file(&candidate)?;
        tracing::debug!(name = %candidate.name, size = candidate.size_bytes, "Staged file");
        self.files.push(StagedFile {
            id: Uuid::new_v4(),
            name: candidate.name,
            size_bytes: candidate.size_bytes,
            mime_type: candidate.mime_type,
        });
        Ok(&self.files[self.files.len() - 1])
    }

    /// Stage every path independently; one bad file does not stop the rest.
    /// Returns the errors for the rejected ones, in input order.
    pub fn stage_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Vec<StagingError> {
        let mut errors = Vec::new();
        for path in paths {
            let result = FileCandidate::from_path(path.as_ref()).and_then(|c| self.stage(c).map(|_| ()));
            if let Err(err) = result {
                tracing::debug!(error = %err, "Rejected file");
                errors.push(err);
            }
        }
        errors
    }

    /// Remove exactly the entry with this id. Returns whether it existed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }
}

/// Split a drop payload into paths.
///
/// Terminals deliver dropped files as pasted text: paths separated by
/// whitespace or newlines, with spaces either backslash-escaped or the
/// whole path quoted, and sometimes as `file://` URIs.
pub fn parse_drop_payload(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\\') => match chars.peek() {
                // Only shell escapes; other backslashes are Windows separators
                Some(&next) if is_escapable(next) => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(c),
            },
            (None, '\'' | '"') => quote = Some(c),
            (None, c) if c.is_whitespace() => flush_path(&mut current, &mut paths),
            (None, c) => current.push(c),
        }
    }
    flush_path(&mut current, &mut paths);

    paths
}

fn is_escapable(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\\' | '\'' | '"' | '(' | ')' | '&' | ';')
}

fn flush_path(current: &mut String, paths: &mut Vec<PathBuf>) {
    if current.is_empty() {
        return;
    }
    let raw = std::mem::take(current);
    let path = Url::parse(&raw)
        .ok()
        .filter(|url| url.scheme() == "file")
        .and_then(|url| url.to_file_path().ok())
        .unwrap_or_else(|| PathBuf::from(raw));
    paths.push(path);
}
