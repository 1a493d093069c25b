//! Options controlling how a localized strings tree is converted.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// Character encoding of the source `.strings` files.
///
/// The encoding is never guessed. A byte-order mark, when present, is stripped
/// and decides the UTF-16 byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl SourceEncoding {
    pub fn encoding(self) -> &'static Encoding {
        match self {
            SourceEncoding::Utf8 => UTF_8,
            SourceEncoding::Utf16Le => UTF_16LE,
            SourceEncoding::Utf16Be => UTF_16BE,
        }
    }
}

/// Which files inside an `.lproj` bundle are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFiles {
    /// Every file with a `.strings` extension.
    #[default]
    All,
    /// Only `Localizable.strings`.
    LocalizableOnly,
}

/// Default resource directory below the Android project root.
pub const DEFAULT_RES_DIR: &str = "res";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub encoding: SourceEncoding,
    pub source_files: SourceFiles,
    /// Resource directory name relative to the Android project root.
    pub res_dir: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            encoding: SourceEncoding::default(),
            source_files: SourceFiles::default(),
            res_dir: DEFAULT_RES_DIR.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file encoding.
    pub fn with_encoding(mut self, encoding: SourceEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets which `.strings` files are picked up in each bundle.
    pub fn with_source_files(mut self, source_files: SourceFiles) -> Self {
        self.source_files = source_files;
        self
    }

    /// Sets the resource directory name.
    pub fn with_res_dir(mut self, res_dir: impl Into<String>) -> Self {
        self.res_dir = res_dir.into();
        self
    }
}
