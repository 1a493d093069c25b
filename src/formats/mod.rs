pub mod android_strings;
pub mod strings;

// Reexporting the most used pieces for easier access
pub use android_strings::ResourcesWriter;
pub use strings::{LineClassifier, LineKind, parse_entry};
