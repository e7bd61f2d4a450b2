use crate::utils::error::{HelperError, Result};
use uuid::Uuid;

/// Derives a name-based (version 5, SHA-1) UUID and returns it in canonical
/// lowercase hyphenated form.
///
/// `namespace` must be a UUID string; `name` may be anything, including empty.
pub fn uuidv5(name: &str, namespace: &str) -> Result<String> {
    let namespace_uuid =
        Uuid::parse_str(namespace).map_err(|source| HelperError::InvalidNamespace {
            value: namespace.to_string(),
            source,
        })?;

    let derived = Uuid::new_v5(&namespace_uuid, name.as_bytes());
    tracing::debug!(name, namespace, uuid = %derived, "derived uuidv5");

    Ok(derived.hyphenated().to_string())
}

/// Maps the RFC 4122 namespace aliases (`dns`, `url`, `oid`, `x500`) to
/// their UUIDs. Matching is case-insensitive.
pub fn well_known_namespace(alias: &str) -> Option<Uuid> {
    match alias.to_ascii_lowercase().as_str() {
        "dns" => Some(Uuid::NAMESPACE_DNS),
        "url" => Some(Uuid::NAMESPACE_URL),
        "oid" => Some(Uuid::NAMESPACE_OID),
        "x500" => Some(Uuid::NAMESPACE_X500),
        _ => None,
    }
}
