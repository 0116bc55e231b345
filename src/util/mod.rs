//! Host introspection and JSON formatting helpers

use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Running kernel release string (e.g. "6.8.0-45-generic")
///
/// Read from procfs, the same value `uname -r` reports.
pub fn kernel_release() -> Result<String> {
    let release = fs::read_to_string("/proc/sys/kernel/osrelease")
        .context("failed to read /proc/sys/kernel/osrelease")?;
    Ok(release.trim_end().to_string())
}

/// Serialize `value` to `path` with sorted keys and 4-space indentation
///
/// Round-trips through `serde_json::Value`, whose object map keeps keys in
/// sorted order, so the on-disk document is stable regardless of struct
/// field order.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let value = serde_json::to_value(value).context("failed to serialize document")?;
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(file, formatter);
    value
        .serialize(&mut serializer)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Doc {
        zebra: u32,
        apple: u32,
        nested: Nested,
    }

    #[derive(Serialize)]
    struct Nested {
        beta: u32,
        alpha: u32,
    }

    #[test]
    fn test_kernel_release_nonempty() {
        let release = kernel_release().unwrap();
        assert!(!release.is_empty());
        assert!(!release.ends_with('\n'));
    }

    #[test]
    fn test_json_keys_sorted_and_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");

        let doc = Doc {
            zebra: 1,
            apple: 2,
            nested: Nested { beta: 3, alpha: 4 },
        };
        write_json_pretty(&path, &doc).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let apple = body.find("\"apple\"").unwrap();
        let nested = body.find("\"nested\"").unwrap();
        let zebra = body.find("\"zebra\"").unwrap();
        assert!(apple < nested && nested < zebra);

        // Nested maps are sorted too
        assert!(body.find("\"alpha\"").unwrap() < body.find("\"beta\"").unwrap());

        // 4-space indentation at the top level
        assert!(body.contains("\n    \"apple\""));
    }

    #[test]
    fn test_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        write_json_pretty(&path, &serde_json::json!({"a": 1, "b": [1, 2]})).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"][1], 2);
    }
}
