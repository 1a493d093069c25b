//! Core types shared by the locale mapper, the converter and reporters.

use std::path::{Path, PathBuf};

use unic_langid::LanguageIdentifier;

use crate::locale::{locale_code, output_directory_name};

/// Locale code that maps onto the default `values` resource directory.
pub const DEFAULT_LOCALE: &str = "en";

/// One `.lproj` bundle and the Android resource directory it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Name of the bundle directory, e.g. `de_DE.lproj`.
    pub source_directory_name: String,
    /// Portion of the directory name before the first `.`, e.g. `de_DE`.
    pub locale_code: String,
    /// Android resource directory name, e.g. `values-de_DE`.
    pub output_directory_name: String,
}

impl LocaleEntry {
    /// Builds an entry from a directory name, or `None` if the name is not an `.lproj` bundle.
    pub fn from_directory_name(name: &str) -> Option<Self> {
        if !name.contains(".lproj") {
            return None;
        }
        let code = locale_code(name);
        Some(LocaleEntry {
            source_directory_name: name.to_string(),
            locale_code: code.to_string(),
            output_directory_name: output_directory_name(code),
        })
    }

    pub fn is_default(&self) -> bool {
        self.locale_code == DEFAULT_LOCALE
    }

    /// Parses the locale code as a BCP 47 language identifier.
    ///
    /// Apple's `Base.lproj` and similar non-language bundles return `None`.
    pub fn parse_language_identifier(&self) -> Option<LanguageIdentifier> {
        self.locale_code.parse().ok()
    }
}

/// A single converted `"key" = "value";` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub raw_key: String,
    pub raw_value: String,
    /// Key after `.` and space were replaced; always a valid resource name.
    pub converted_key: String,
    /// Value after quote escaping and placeholder rewriting.
    pub converted_value: String,
    /// `false` when the value holds an explicit-index placeholder and the
    /// element must carry `formatted="false"`.
    pub formatted: bool,
}

/// Source file name that maps onto Android's `strings.xml`.
pub const LOCALIZABLE_STRINGS: &str = "Localizable.strings";

/// One source file and the resource file it is converted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionJob {
    /// Derives the destination inside `output_dir` from the source file name.
    pub fn new(source: impl Into<PathBuf>, output_dir: &Path) -> Self {
        let source = source.into();
        let destination = output_dir.join(destination_file_name(&source));
        ConversionJob {
            source,
            destination,
        }
    }
}

/// `Localizable.strings` becomes `strings.xml`; anything else becomes its
/// lower-cased basename with an `.xml` extension.
pub fn destination_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    if stem == "Localizable" {
        "strings.xml".to_string()
    } else {
        format!("{}.xml", stem.to_lowercase())
    }
}

/// Structured event emitted while converting a tree of `.lproj` bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionEvent {
    LocaleDiscovered {
        locale: LocaleEntry,
        output_dir: PathBuf,
    },
    /// The locale code does not parse as a language identifier; it is still converted.
    UnrecognizedLocale {
        locale: LocaleEntry,
    },
    EntryConverted {
        source: String,
        line: usize,
        key: String,
    },
    ParseSkipped {
        source: String,
        line: usize,
        content: String,
    },
    InvalidKey {
        source: String,
        line: usize,
        key: String,
    },
    FileConverted {
        source: PathBuf,
        destination: PathBuf,
        count: usize,
    },
    FileError {
        path: PathBuf,
        message: String,
    },
}

impl ConversionEvent {
    /// Whether the event describes something that was skipped or failed.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            ConversionEvent::UnrecognizedLocale { .. }
                | ConversionEvent::ParseSkipped { .. }
                | ConversionEvent::InvalidKey { .. }
                | ConversionEvent::FileError { .. }
        )
    }
}

/// Counts for one converted `.strings` stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    /// `<string>` elements written.
    pub strings_written: usize,
    /// Entry lines dropped as unparseable or with an invalid key.
    pub lines_skipped: usize,
}

/// Totals for one run over a localized strings root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub locales: usize,
    /// Bundles skipped because their output directory could not be created
    /// or their contents could not be listed.
    pub locales_failed: usize,
    pub files_converted: usize,
    pub files_failed: usize,
    pub strings_written: usize,
    pub lines_skipped: usize,
}

impl RunSummary {
    pub(crate) fn add_file(&mut self, stats: FileStats) {
        self.files_converted += 1;
        self.strings_written += stats.strings_written;
        self.lines_skipped += stats.lines_skipped;
    }
}
