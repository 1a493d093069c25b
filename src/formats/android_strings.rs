//! Streaming writer for Android `strings.xml` resource files.
//!
//! Only singular `<string>` elements are produced. The document has no XML
//! declaration, uses two-space indentation and `\n` line endings:
//!
//! ```xml
//! <resources>
//!   <string name="hello_world" formatted="false">Hi $1%s</string>
//! </resources>
//! ```

use std::io::Write;

use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::{error::Error, types::StringEntry};

const INDENT: &str = "  ";

/// Writes `<string>` elements one at a time inside a `<resources>` root.
///
/// Call [`ResourcesWriter::finish`] to close the root element; dropping the
/// writer early leaves an unterminated document.
pub struct ResourcesWriter<W: Write> {
    writer: Writer<W>,
    count: usize,
}

impl<W: Write> ResourcesWriter<W> {
    /// Opens the `<resources>` root element.
    pub fn start(inner: W) -> Result<Self, Error> {
        let mut writer = Writer::new(inner);
        writer.write_event(Event::Start(BytesStart::new("resources")))?;
        writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(ResourcesWriter { writer, count: 0 })
    }

    pub fn write_entry(&mut self, entry: &StringEntry) -> Result<(), Error> {
        let mut elem = BytesStart::new("string");
        elem.push_attribute(("name", entry.converted_key.as_str()));
        if !entry.formatted {
            elem.push_attribute(("formatted", "false"));
        }

        // `\'` and `"` must reach Android untouched, so only markup characters are escaped.
        let value = partial_escape(&entry.converted_value);

        self.writer.write_event(Event::Text(BytesText::new(INDENT)))?;
        self.writer.write_event(Event::Start(elem))?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(value)))?;
        self.writer.write_event(Event::End(BytesEnd::new("string")))?;
        self.writer.write_event(Event::Text(BytesText::new("\n")))?;
        self.count += 1;
        Ok(())
    }

    /// Number of `<string>` elements written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Closes the root element and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W, Error> {
        self.writer.write_event(Event::End(BytesEnd::new("resources")))?;
        self.writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(self.writer.into_inner())
    }
}
