//! Template filters, looked up by name the way a templating engine resolves
//! `{{ value | filter(arg) }}` expressions.

pub mod uuid_filter;

use crate::utils::error::{HelperError, Result};
use std::collections::BTreeMap;

pub use self::uuid_filter::{uuidv5, well_known_namespace};

/// A filter receives its positional string arguments, piped value first.
pub type FilterFn = fn(&[&str]) -> Result<String>;

pub fn filters() -> BTreeMap<&'static str, FilterFn> {
    let mut registry: BTreeMap<&'static str, FilterFn> = BTreeMap::new();
    registry.insert("uuidv5", uuidv5_filter);
    registry
}

pub fn apply(filter_name: &str, args: &[&str]) -> Result<String> {
    let filter = filters()
        .get(filter_name)
        .copied()
        .ok_or_else(|| HelperError::UnknownFilter {
            name: filter_name.to_string(),
        })?;

    filter(args)
}

fn uuidv5_filter(args: &[&str]) -> Result<String> {
    match args {
        [name, namespace] => uuidv5(name, namespace),
        _ => Err(HelperError::FilterArity {
            filter: "uuidv5".to_string(),
            expected: 2,
            got: args.len(),
        }),
    }
}
