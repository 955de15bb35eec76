//! Helper utilities for rendering lock documents.

use toml_edit::{DocumentMut, Item, Value};

use crate::constants::LOCKFILE_HEADER;
use crate::core::LockfileError;

use super::LockDocument;

/// Render a document to its canonical on-disk text, header included.
///
/// The document is serialized with `toml`, then reshaped with `toml_edit` so
/// the layout does not depend on serializer defaults:
///
/// - exactly one blank line before every `[[package]]` table
/// - `dependencies` arrays on a single line, `["a", "b"]`
///
/// ```toml
/// # This file is automatically generated by quire.
/// # It is not intended for manual editing.
/// version = 1
///
/// [[package]]
/// name = "app-core"
/// version = "1.0.0"
/// dependencies = ["fmt"]
/// ```
pub(crate) fn render_lockfile(document: &LockDocument) -> Result<String, LockfileError> {
    let toml_str = toml::to_string(document).map_err(|e| LockfileError::Serialize {
        reason: e.to_string(),
    })?;
    let mut doc: DocumentMut = toml_str.parse().map_err(|e: toml_edit::TomlError| {
        LockfileError::Serialize {
            reason: e.to_string(),
        }
    })?;

    if let Some(Item::ArrayOfTables(packages)) = doc.get_mut("package") {
        for table in packages.iter_mut() {
            table.decor_mut().set_prefix("\n");
            table.decor_mut().set_suffix("");

            if let Some(Item::Value(Value::Array(dependencies))) = table.get_mut("dependencies") {
                dependencies.fmt();
                dependencies.set_trailing_comma(false);
                dependencies.set_trailing("");
            }
        }
    }
    doc.set_trailing("");

    let mut content = String::from(LOCKFILE_HEADER);
    content.push_str(&doc.to_string());
    Ok(content)
}
