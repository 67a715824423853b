//! Schema context options.
//!
//! Options are read from JSON (camelCase keys, every key optional):
//!
//! ```json
//! {
//!   "markupExtensionSuffix": "Extension",
//!   "simpleTypeWorkaround": true,
//!   "bindingSpecialization": true
//! }
//! ```

use crate::error::OptionsError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_MARKUP_EXTENSION_SUFFIX: &str = "Extension";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SchemaOptions {
    /// Suffix markup-extension type names may omit in documents
    /// (`{StaticResource}` for `StaticResourceExtension`).
    pub markup_extension_suffix: String,

    /// Resolve `clr-namespace:System` primitives (`sys:Double`) from the
    /// built-in table when the type provider does not know them.
    pub simple_type_workaround: bool,

    /// Build binding descriptors for types implementing the host binding
    /// interface.
    pub binding_specialization: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        SchemaOptions {
            markup_extension_suffix: DEFAULT_MARKUP_EXTENSION_SUFFIX.to_string(),
            simple_type_workaround: true,
            binding_specialization: true,
        }
    }
}

impl SchemaOptions {
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        let options: SchemaOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_path(path: &Path) -> Result<Self, OptionsError> {
        let json = std::fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if self.markup_extension_suffix.is_empty() {
            return Err(OptionsError::EmptySuffix);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
