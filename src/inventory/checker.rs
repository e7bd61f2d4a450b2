use crate::config::{LEGACY_WRAPPER_KEY, REQUIRED_SPLUNK_FIELDS, SPLUNK_KEY, SPLUNK_VM_KEY};
use crate::inventory::document::load_document;
use crate::utils::error::{HelperError, Result};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// A single structural problem found in an inventory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `splunk_vm` is wrapped in the old `ansible_inventory` key.
    LegacyWrapper,
    MissingSplunkVm,
    MissingSplunk,
    MissingField(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LegacyWrapper => write!(
                f,
                "FAIL: '{LEGACY_WRAPPER_KEY}' key found at root - this is the OLD wrong structure. \
                 {SPLUNK_VM_KEY} must be at the root level, not nested under {LEGACY_WRAPPER_KEY}."
            ),
            Violation::MissingSplunkVm => {
                write!(f, "FAIL: '{SPLUNK_VM_KEY}' not found at root level")
            }
            Violation::MissingSplunk => {
                write!(f, "FAIL: '{SPLUNK_KEY}' not found under {SPLUNK_VM_KEY}")
            }
            Violation::MissingField(field) => {
                write!(f, "FAIL: '{field}' missing from {SPLUNK_VM_KEY}.{SPLUNK_KEY}")
            }
        }
    }
}

/// Address of the Splunk host, resolved once the structure checks pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplunkHost {
    pub ip: String,
    pub hostname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    source: String,
    violations: Vec<Violation>,
    host: Option<SplunkHost>,
}

impl CheckReport {
    pub fn is_pass(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn host(&self) -> Option<&SplunkHost> {
        self.host.as_ref()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_pass() {
            0
        } else {
            1
        }
    }

    /// Console lines for this report: every violation in detection order,
    /// or the PASS banner followed by the resolved ip and hostname.
    pub fn lines(&self) -> Vec<String> {
        if !self.is_pass() {
            return self.violations.iter().map(ToString::to_string).collect();
        }

        let mut lines = vec![format!("PASS: {} has correct flat structure", self.source)];
        if let Some(host) = &self.host {
            lines.push(format!("  splunk ip: {}", host.ip));
            lines.push(format!("  splunk hostname: {}", host.hostname));
        }
        lines
    }

    /// Converts the report into the resolved host, or every violation as a
    /// single error.
    pub fn into_host(self) -> Result<SplunkHost> {
        match self.host {
            Some(host) if self.violations.is_empty() => Ok(host),
            _ => Err(HelperError::StructuralViolation(self.violations)),
        }
    }

    fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// Runs every structural check against `document`. Violations accumulate;
/// nothing short-circuits except the nesting itself (fields under a missing
/// `splunk` cannot be checked).
pub fn check_structure(document: &Value) -> CheckReport {
    let mut violations = Vec::new();

    if has_key(document, LEGACY_WRAPPER_KEY) {
        violations.push(Violation::LegacyWrapper);
    }

    let mut host = None;
    match child(document, SPLUNK_VM_KEY) {
        None => violations.push(Violation::MissingSplunkVm),
        Some(splunk_vm) => match child(splunk_vm, SPLUNK_KEY) {
            None => violations.push(Violation::MissingSplunk),
            Some(splunk) => {
                for field in REQUIRED_SPLUNK_FIELDS {
                    if !has_key(splunk, field) {
                        violations.push(Violation::MissingField(field.to_string()));
                    }
                }
                if violations.is_empty() {
                    host = Some(SplunkHost {
                        ip: render_value(&splunk["ip"]),
                        hostname: render_value(&splunk["hostname"]),
                    });
                }
            }
        },
    }

    tracing::debug!("Structure check found {} violation(s)", violations.len());

    CheckReport {
        source: "document".to_string(),
        violations,
        host,
    }
}

/// Loads `path` and checks it. Load failures (missing file, invalid JSON)
/// are returned as errors; structural problems live in the report.
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<CheckReport> {
    let path = path.as_ref();
    let document = load_document(path)?;

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(check_structure(&document).with_source(source))
}

fn has_key(value: &Value, key: &str) -> bool {
    child(value, key).is_some()
}

// Only objects have keys; any other JSON value counts as empty.
fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|object| object.get(key))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
