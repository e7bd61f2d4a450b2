pub mod config;
pub mod filters;
pub mod inventory;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CheckerArgs, Uuidv5Args};

pub use filters::{apply, uuidv5};
pub use inventory::{check_file, check_structure, CheckReport, Violation};
pub use utils::error::{HelperError, Result};
