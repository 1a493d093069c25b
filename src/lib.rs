#![forbid(unsafe_code)]
//! Convert Apple `.strings` localization bundles into Android string resources.
//!
//! Every `<locale>.lproj` directory under a localized strings root becomes a
//! `values-<locale>` directory (plain `values` for English) under an Android
//! project's `res` directory, and each `.strings` file inside it becomes an XML
//! resource file: `Localizable.strings` turns into `strings.xml`, any other
//! `Name.strings` into `name.xml`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use strings2android::{ConvertOptions, NullReporter, convert_localization_files};
//!
//! let summary = convert_localization_files(
//!     "ios/MyApp",
//!     "android/app/src/main",
//!     &ConvertOptions::new(),
//!     &mut NullReporter,
//! )?;
//! assert_eq!(summary.files_failed, 0);
//! # Ok::<(), strings2android::Error>(())
//! ```
//!
//! # Conversion rules
//!
//! - Keys: `.` and spaces become `_`; keys that are still not valid Android
//!   resource names are skipped and reported.
//! - Values: `'` becomes `\'`, `%@` becomes `$1%s` (and the element is marked
//!   `formatted="false"`), `$@` becomes `%s`.
//! - Block comments (`/*` at the start of a line through `*/` at the end of a
//!   line) and blank lines are skipped; malformed lines are reported and skipped.

pub mod codec;
pub mod error;
pub mod formats;
pub mod locale;
pub mod options;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{convert_file, convert_localization_files, convert_reader},
    error::{EntryError, Error},
    options::{ConvertOptions, SourceEncoding, SourceFiles},
    traits::{NullReporter, Reporter},
    types::{
        ConversionEvent, ConversionJob, FileStats, LocaleEntry, RunSummary, StringEntry,
    },
};
