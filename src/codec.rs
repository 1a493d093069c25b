//! Conversion entry points: one stream, one file, or a whole tree of `.lproj` bundles.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::{
    error::{EntryError, Error},
    formats::{LineClassifier, LineKind, ResourcesWriter, parse_entry},
    locale::{discover_locales, ensure_output_directory, source_files},
    options::{ConvertOptions, SourceEncoding},
    traits::Reporter,
    types::{ConversionEvent, ConversionJob, FileStats, RunSummary},
};

/// Converts `.strings` lines from `reader` into a `<resources>` document on `writer`.
///
/// Lines that cannot be parsed or whose key is not a valid resource name are
/// reported and skipped. `source_label` identifies the input in those reports.
///
/// # Returns
///
/// How many `<string>` elements were written and how many entry lines were
/// skipped.
pub fn convert_reader<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    source_label: &str,
    reporter: &mut dyn Reporter,
) -> Result<FileStats, Error> {
    let mut resources = ResourcesWriter::start(writer)?;
    let mut classifier = LineClassifier::new();
    let mut lines_skipped = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if classifier.classify(&line) != LineKind::Entry {
            continue;
        }

        match parse_entry(&line) {
            Ok(entry) => {
                resources.write_entry(&entry)?;
                reporter.report(ConversionEvent::EntryConverted {
                    source: source_label.to_string(),
                    line: line_number,
                    key: entry.converted_key,
                });
            }
            Err(EntryError::Parse) => {
                lines_skipped += 1;
                reporter.report(ConversionEvent::ParseSkipped {
                    source: source_label.to_string(),
                    line: line_number,
                    content: line,
                });
            }
            Err(EntryError::InvalidKey { key }) => {
                lines_skipped += 1;
                reporter.report(ConversionEvent::InvalidKey {
                    source: source_label.to_string(),
                    line: line_number,
                    key,
                });
            }
        }
    }

    let stats = FileStats {
        strings_written: resources.count(),
        lines_skipped,
    };
    resources.finish()?.flush()?;
    Ok(stats)
}

/// Converts a single `.strings` file, overwriting the destination.
///
/// The source is opened before the destination, so a missing source never
/// truncates an existing resource file.
pub fn convert_file(
    job: &ConversionJob,
    options: &ConvertOptions,
    reporter: &mut dyn Reporter,
) -> Result<FileStats, Error> {
    let reader = open_source(&job.source, options.encoding)?;
    let destination =
        File::create(&job.destination).map_err(|e| Error::file_access(&job.destination, e))?;
    let writer = BufWriter::new(destination);

    let label = job.source.display().to_string();
    convert_reader(reader, writer, &label, reporter)
}

fn open_source(path: &Path, encoding: SourceEncoding) -> Result<impl BufRead, Error> {
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    // A byte-order mark wins over the configured encoding and is stripped.
    let decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding.encoding()))
        .bom_override(true)
        .build(file);
    Ok(BufReader::new(decoder))
}

/// Converts every `.lproj` bundle under `localized_strings_root` into
/// `<android_project_root>/<res_dir>/values[-<locale>]/`.
///
/// Only a `localized_strings_root` that cannot be listed is an error; any
/// failure with a single bundle or file is reported as
/// [`ConversionEvent::FileError`] and the run moves on.
///
/// # Example
///
/// ```rust,no_run
/// use strings2android::{ConvertOptions, NullReporter, convert_localization_files};
///
/// let summary = convert_localization_files(
///     "ios/MyApp",
///     "android/app/src/main",
///     &ConvertOptions::new(),
///     &mut NullReporter,
/// )?;
/// println!("{} strings written", summary.strings_written);
/// # Ok::<(), strings2android::Error>(())
/// ```
pub fn convert_localization_files<P: AsRef<Path>, Q: AsRef<Path>>(
    localized_strings_root: P,
    android_project_root: Q,
    options: &ConvertOptions,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, Error> {
    let strings_root = localized_strings_root.as_ref();
    let res_dir = android_project_root.as_ref().join(&options.res_dir);

    let mut summary = RunSummary::default();
    for locale in discover_locales(strings_root)? {
        summary.locales += 1;

        reporter.report(ConversionEvent::LocaleDiscovered {
            locale: locale.clone(),
            output_dir: res_dir.join(&locale.output_directory_name),
        });
        if locale.parse_language_identifier().is_none() {
            reporter.report(ConversionEvent::UnrecognizedLocale {
                locale: locale.clone(),
            });
        }

        let output_dir = match ensure_output_directory(&res_dir, &locale) {
            Ok(dir) => dir,
            Err(e) => {
                summary.locales_failed += 1;
                report_file_error(reporter, &res_dir.join(&locale.output_directory_name), &e);
                continue;
            }
        };

        let locale_dir = strings_root.join(&locale.source_directory_name);
        let sources = match source_files(&locale_dir, options.source_files) {
            Ok(sources) => sources,
            Err(e) => {
                summary.locales_failed += 1;
                report_file_error(reporter, &locale_dir, &e);
                continue;
            }
        };

        for source in sources {
            let job = ConversionJob::new(source, &output_dir);
            match convert_file(&job, options, reporter) {
                Ok(stats) => {
                    summary.add_file(stats);
                    reporter.report(ConversionEvent::FileConverted {
                        source: job.source,
                        destination: job.destination,
                        count: stats.strings_written,
                    });
                }
                Err(e) => {
                    summary.files_failed += 1;
                    report_file_error(reporter, &job.source, &e);
                }
            }
        }
    }
    Ok(summary)
}

fn report_file_error(reporter: &mut dyn Reporter, path: &Path, error: &Error) {
    reporter.report(ConversionEvent::FileError {
        path: path.to_path_buf(),
        message: error.to_string(),
    });
}
