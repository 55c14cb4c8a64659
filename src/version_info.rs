use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, VersionGenError};

/// Flat mapping of version fields produced by the external version tool.
///
/// Parsed fresh on each invocation and immutable afterwards, except for the
/// single derived `friendly_version` field added before template rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionInfo {
    fields: BTreeMap<String, Value>,
}

impl VersionInfo {
    /// Parses version info from the JSON document emitted by the version tool.
    ///
    /// The document must be a JSON object; anything else is a parse failure.
    pub fn from_json(text: &str) -> Result<Self> {
        let fields: BTreeMap<String, Value> = serde_json::from_str(text)?;
        Ok(VersionInfo { fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Looks up a field and renders it as template-substitutable text.
    ///
    /// Strings render without quotes; booleans and numbers use their JSON
    /// representation.
    pub fn render(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Derived friendly version: `{FullSemVer}+rev{ShortSha}`, with `-dirty`
    /// appended only when `UncommittedChanges` is truthy. No separator is
    /// emitted when the working tree is clean.
    ///
    /// Pure function of the parsed fields; missing `FullSemVer` or `ShortSha`
    /// is an error rather than an implicit placeholder.
    pub fn friendly_version(&self) -> Result<String> {
        let full_semver = self.require_str("FullSemVer")?;
        let short_sha = self.require_str("ShortSha")?;

        let dirty = self
            .fields
            .get("UncommittedChanges")
            .map(is_truthy)
            .unwrap_or(false);

        let mut friendly = format!("{}+rev{}", full_semver, short_sha);
        if dirty {
            friendly.push_str("-dirty");
        }
        Ok(friendly)
    }

    /// Computes `friendly_version` and stores it alongside the parsed fields.
    pub fn with_friendly_version(mut self) -> Result<Self> {
        let friendly = self.friendly_version()?;
        self.insert("friendly_version", Value::String(friendly));
        Ok(self)
    }

    fn require_str(&self, key: &str) -> Result<String> {
        self.render(key).ok_or_else(|| {
            VersionGenError::format(format!("version info is missing required key '{}'", key))
        })
    }
}

/// Truthiness of a version-info value: booleans as-is, numbers when non-zero,
/// strings when non-empty. An uncommitted-changes count of 0 is clean.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
