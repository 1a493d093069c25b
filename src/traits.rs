//! The reporting seam between the converter and whoever presents its progress.

use crate::types::ConversionEvent;

/// Receives structured events while files are converted.
///
/// The CLI prints them; tests collect them into a `Vec`.
///
/// # Example
///
/// ```rust
/// use strings2android::codec::convert_reader;
/// use strings2android::types::ConversionEvent;
///
/// let mut events: Vec<ConversionEvent> = Vec::new();
/// let mut out: Vec<u8> = Vec::new();
/// let stats = convert_reader("\"hi\" = \"Hi\";\n".as_bytes(), &mut out, "a.strings", &mut events)?;
/// assert_eq!(stats.strings_written, 1);
/// assert_eq!(events.len(), 1);
/// # Ok::<(), strings2android::Error>(())
/// ```
pub trait Reporter {
    fn report(&mut self, event: ConversionEvent);
}

impl Reporter for Vec<ConversionEvent> {
    fn report(&mut self, event: ConversionEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: ConversionEvent) {}
}
