pub mod checker;
pub mod document;

pub use checker::{check_file, check_structure, CheckReport, SplunkHost, Violation};
pub use document::load_document;
