use crate::filters::well_known_namespace;
use crate::utils::error::Result;
use crate::utils::validation::{validate_uuid, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "check-example-structure")]
#[command(version)]
#[command(
    about = "Verify that inventory/terraform_inventory.json.example has the flat splunk_vm structure"
)]
pub struct CheckerArgs {}

#[derive(Debug, Clone, Parser)]
#[command(name = "uuidv5")]
#[command(version)]
#[command(about = "Derive a deterministic (version 5) UUID from a name and a namespace")]
pub struct Uuidv5Args {
    /// Name to hash into the namespace (may be empty or start with '-')
    #[arg(allow_hyphen_values = true)]
    pub name: String,

    /// Namespace UUID, or one of the aliases dns, url, oid, x500
    #[arg(allow_hyphen_values = true)]
    pub namespace: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Uuidv5Args {
    /// The namespace as a UUID string, with aliases expanded.
    pub fn resolved_namespace(&self) -> String {
        well_known_namespace(&self.namespace)
            .map(|uuid| uuid.to_string())
            .unwrap_or_else(|| self.namespace.clone())
    }
}

impl Validate for Uuidv5Args {
    fn validate(&self) -> Result<()> {
        validate_uuid("namespace", &self.resolved_namespace())?;
        Ok(())
    }
}
