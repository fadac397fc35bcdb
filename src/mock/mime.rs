//! MIME type detection by file extension.

use std::collections::HashMap;

/// Extensions whose responses get `; charset=UTF-8` appended to the content type.
pub const TEXT_FILE_EXTENSIONS: [&str; 19] = [
    "html", "php", "js", "css", "txt", "text", "json", "xml", "xsm", "xsl", "xsd", "xslt", "dtd",
    "yml", "svg", "csv", "log", "sgml", "sgm",
];

/// Charset suffix appended to text content types.
pub const TEXT_CHARSET: &str = "; charset=UTF-8";

const DEFAULT_MIME_TYPES: &[(&str, &str)] = &[
    // Text
    ("html", "text/html"),
    ("htm", "text/html"),
    ("shtml", "text/html"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("txt", "text/plain"),
    ("text", "text/plain"),
    ("log", "text/plain"),
    ("conf", "text/plain"),
    ("md", "text/markdown"),
    ("sgml", "text/sgml"),
    ("sgm", "text/sgml"),
    ("yml", "text/yaml"),
    ("yaml", "text/yaml"),
    // Scripts and data
    ("js", "application/javascript"),
    ("mjs", "application/javascript"),
    ("json", "application/json"),
    ("map", "application/json"),
    ("xml", "application/xml"),
    ("xsl", "application/xml"),
    ("xsd", "application/xml"),
    ("xslt", "application/xslt+xml"),
    ("dtd", "application/xml-dtd"),
    ("xhtml", "application/xhtml+xml"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("wasm", "application/wasm"),
    ("bin", "application/octet-stream"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    // Fonts
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("eot", "application/vnd.ms-fontobject"),
    // Media
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
];

/// Extension of `path`: the text after its last `.`, unless the `.` is the
/// last character.
///
/// The whole string is searched, directories included, so `./mocks/readme`
/// yields `/mocks/readme`.
pub fn file_extension(path: &str) -> Option<&str> {
    match path.rfind('.') {
        Some(idx) if idx + 1 < path.len() => Some(&path[idx + 1..]),
        _ => None,
    }
}

/// Whether `extension` belongs to [`TEXT_FILE_EXTENSIONS`]. Case-sensitive.
pub fn is_text_extension(extension: &str) -> bool {
    TEXT_FILE_EXTENSIONS.contains(&extension)
}

/// Extension to MIME type lookup table.
///
/// `MimeTable::default()` carries the common web types; more can be
/// registered with [`MimeTable::with_type`]. Lookups are case-sensitive.
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// A table with no mappings at all.
    pub fn empty() -> Self {
        Self { types: HashMap::new() }
    }

    /// Add or replace the MIME type for an extension.
    pub fn with_type(mut self, extension: impl Into<String>, mime_type: impl Into<String>) -> Self {
        self.types.insert(extension.into(), mime_type.into());
        self
    }

    /// MIME type registered for `extension`.
    pub fn for_extension(&self, extension: &str) -> Option<&str> {
        self.types.get(extension).map(String::as_str)
    }

    /// MIME type guessed from the extension of `path`.
    pub fn for_path(&self, path: &str) -> Option<&str> {
        file_extension(path).and_then(|ext| self.for_extension(ext))
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        DEFAULT_MIME_TYPES
            .iter()
            .fold(Self::empty(), |table, (ext, mime)| table.with_type(*ext, *mime))
    }
}
