//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strings2android::{ConvertOptions, SourceEncoding, SourceFiles, options::DEFAULT_RES_DIR};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert Apple .strings localizations into Android string resources",
    override_usage = "strings2android [OPTIONS] <LOCALIZED_STRINGS_ROOT> <ANDROID_PROJECT_ROOT>"
)]
pub struct Args {
    /// Directory holding the `*.lproj` bundles, followed by the Android project root
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Character encoding of the .strings files
    #[arg(long, value_enum, default_value_t = EncodingArg::Utf8)]
    pub encoding: EncodingArg,

    /// Which .strings files in each bundle to convert
    #[arg(long, value_enum, default_value_t = SourceFilesArg::All)]
    pub source_files: SourceFilesArg,

    /// Resource directory below the Android project root
    #[arg(long, default_value = DEFAULT_RES_DIR)]
    pub res_dir: String,

    /// Only print diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// The two positional roots, or `None` when a different number was given.
    pub fn roots(&self) -> Option<(&PathBuf, &PathBuf)> {
        match self.paths.as_slice() {
            [strings_root, android_root] => Some((strings_root, android_root)),
            _ => None,
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_encoding(self.encoding.into())
            .with_source_files(self.source_files.into())
            .with_res_dir(self.res_dir.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    /// Little-endian UTF-16; a byte-order mark overrides the byte order
    #[value(name = "utf-16le", alias = "utf-16")]
    Utf16Le,
    #[value(name = "utf-16be")]
    Utf16Be,
}

impl From<EncodingArg> for SourceEncoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Utf8 => SourceEncoding::Utf8,
            EncodingArg::Utf16Le => SourceEncoding::Utf16Le,
            EncodingArg::Utf16Be => SourceEncoding::Utf16Be,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceFilesArg {
    /// Every *.strings file
    All,
    /// Only Localizable.strings
    Localizable,
}

impl From<SourceFilesArg> for SourceFiles {
    fn from(value: SourceFilesArg) -> Self {
        match value {
            SourceFilesArg::All => SourceFiles::All,
            SourceFilesArg::Localizable => SourceFiles::LocalizableOnly,
        }
    }
}
