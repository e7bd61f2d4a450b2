#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CheckerArgs, Uuidv5Args};

/// Location of the sample Terraform inventory, relative to the working directory.
pub const EXAMPLE_INVENTORY_PATH: &str = "inventory/terraform_inventory.json.example";

pub const LEGACY_WRAPPER_KEY: &str = "ansible_inventory";
pub const SPLUNK_VM_KEY: &str = "splunk_vm";
pub const SPLUNK_KEY: &str = "splunk";

/// Fields every `splunk_vm.splunk` entry must carry, in reporting order.
pub const REQUIRED_SPLUNK_FIELDS: [&str; 4] = ["ip", "hostname", "vmid", "ansible_connection"];
