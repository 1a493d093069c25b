//! Console presentation of conversion events.
//!
//! Progress goes to stdout, diagnostics to stderr.

use colored::Colorize;
use strings2android::{ConversionEvent, Reporter, RunSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Renders one event as a console line, or `None` if it is not shown.
pub fn render_event(event: &ConversionEvent, quiet: bool) -> Option<(Stream, String)> {
    let warning = "warning".bold().yellow();
    let error = "error".bold().red();

    match event {
        ConversionEvent::LocaleDiscovered { locale, output_dir } if !quiet => Some((
            Stream::Stdout,
            format!(
                "{} {} -> {}",
                "Converting".bold().green(),
                locale.source_directory_name,
                output_dir.display()
            ),
        )),
        ConversionEvent::UnrecognizedLocale { locale } => Some((
            Stream::Stderr,
            format!(
                "{}: `{}` is not a language code; writing `{}` anyway",
                warning, locale.locale_code, locale.output_directory_name
            ),
        )),
        ConversionEvent::ParseSkipped {
            source,
            line,
            content,
        } => Some((
            Stream::Stderr,
            format!(
                "{}: {}:{}: could not parse line contents '{}'",
                warning, source, line, content
            ),
        )),
        ConversionEvent::InvalidKey { source, line, key } => Some((
            Stream::Stderr,
            format!("{}: {}:{}: invalid key string '{}'", warning, source, line, key),
        )),
        ConversionEvent::FileConverted {
            destination, count, ..
        } if !quiet => Some((
            Stream::Stdout,
            format!("Wrote {} strings to {}", count, destination.display()),
        )),
        ConversionEvent::FileError { path, message } => Some((
            Stream::Stderr,
            format!("{}: {}: {}", error, path.display(), message),
        )),
        _ => None,
    }
}

pub fn render_summary(summary: &RunSummary) -> String {
    let mut line = format!(
        "{} {} strings in {} files across {} locales",
        "Finished".bold().green(),
        summary.strings_written,
        summary.files_converted,
        summary.locales
    );
    if summary.lines_skipped > 0 {
        line.push_str(&format!(", {} lines skipped", summary.lines_skipped));
    }
    if summary.files_failed > 0 {
        line.push_str(&format!(", {} files failed", summary.files_failed));
    }
    if summary.locales_failed > 0 {
        line.push_str(&format!(", {} locales failed", summary.locales_failed));
    }
    line
}

/// Prints events as they arrive.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        ConsoleReporter { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: ConversionEvent) {
        match render_event(&event, self.quiet) {
            Some((Stream::Stdout, line)) => println!("{}", line),
            Some((Stream::Stderr, line)) => eprintln!("{}", line),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use strings2android::LocaleEntry;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_parse_skipped_goes_to_stderr() {
        plain();
        let event = ConversionEvent::ParseSkipped {
            source: "/ios/sv.lproj/Localizable.strings".to_string(),
            line: 12,
            content: "oops".to_string(),
        };
        assert_eq!(
            render_event(&event, true),
            Some((
                Stream::Stderr,
                "warning: /ios/sv.lproj/Localizable.strings:12: could not parse line contents 'oops'"
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_invalid_key() {
        plain();
        let event = ConversionEvent::InvalidKey {
            source: "a.strings".to_string(),
            line: 2,
            key: "9lives".to_string(),
        };
        let (stream, line) = render_event(&event, false).unwrap();
        assert_eq!(stream, Stream::Stderr);
        assert_eq!(line, "warning: a.strings:2: invalid key string '9lives'");
    }

    #[test]
    fn test_progress_is_hidden_when_quiet() {
        plain();
        let event = ConversionEvent::FileConverted {
            source: PathBuf::from("en.lproj/Localizable.strings"),
            destination: PathBuf::from("res/values/strings.xml"),
            count: 4,
        };
        assert_eq!(
            render_event(&event, false),
            Some((
                Stream::Stdout,
                "Wrote 4 strings to res/values/strings.xml".to_string()
            ))
        );
        assert_eq!(render_event(&event, true), None);

        let locale = ConversionEvent::LocaleDiscovered {
            locale: LocaleEntry::from_directory_name("en.lproj").unwrap(),
            output_dir: PathBuf::from("res/values"),
        };
        assert!(render_event(&locale, true).is_none());
        assert!(render_event(&locale, false).is_some());
    }

    #[test]
    fn test_entry_events_are_not_printed() {
        let event = ConversionEvent::EntryConverted {
            source: "a.strings".to_string(),
            line: 1,
            key: "a".to_string(),
        };
        assert_eq!(render_event(&event, false), None);
    }

    #[test]
    fn test_file_error_is_shown_even_when_quiet() {
        plain();
        let event = ConversionEvent::FileError {
            path: PathBuf::from("sv.lproj/Localizable.strings"),
            message: "cannot access file".to_string(),
        };
        let (stream, line) = render_event(&event, true).unwrap();
        assert_eq!(stream, Stream::Stderr);
        assert_eq!(line, "error: sv.lproj/Localizable.strings: cannot access file");
    }

    #[test]
    fn test_summary() {
        plain();
        let summary = RunSummary {
            locales: 3,
            locales_failed: 0,
            files_converted: 2,
            files_failed: 1,
            strings_written: 10,
            lines_skipped: 2,
        };
        assert_eq!(
            render_summary(&summary),
            "Finished 10 strings in 2 files across 3 locales, 2 lines skipped, 1 files failed"
        );
    }

    #[test]
    fn test_summary_reports_failed_locales() {
        plain();
        let summary = RunSummary {
            locales: 2,
            locales_failed: 1,
            files_converted: 1,
            strings_written: 4,
            ..RunSummary::default()
        };
        assert_eq!(
            render_summary(&summary),
            "Finished 4 strings in 1 files across 2 locales, 1 locales failed"
        );
    }
}
