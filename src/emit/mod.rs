//! Generated source rendering.
//!
//! [`emit`] is a pure function of the model and metadata: the same inputs
//! always produce byte-identical text. The freshness check depends on this;
//! a regenerated file only matches its predecessor because nothing here
//! consults the environment.

mod metadata;

pub use metadata::GeneratedMetadata;

use crate::model::{ResourceEntry, ResourceKind, ResourceModel};

const INDENT: &str = "    ";

/// Render the model into generated source text.
///
/// Output shape: four metadata comment lines, a blank line, then one
/// top-level module containing a nested module per non-empty kind, each with
/// one `pub const` per entry in model order. Kinds with no entries produce
/// no nested module at all.
pub fn emit(model: &ResourceModel, metadata: &GeneratedMetadata) -> String {
    let mut out = String::new();

    for line in metadata.lines() {
        out.push_str("// ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("#[allow(non_upper_case_globals)]\n");
    out.push_str(&format!("pub mod {} {{\n", metadata.container));

    let mut groups: Vec<String> = Vec::new();
    if !model.booleans.is_empty() {
        groups.push(render_group(
            ResourceKind::Boolean,
            "bool",
            &model.booleans,
            |v| v.to_string(),
        ));
    }
    if !model.integers.is_empty() {
        groups.push(render_group(
            ResourceKind::Integer,
            "i32",
            &model.integers,
            |v| v.to_string(),
        ));
    }
    if !model.strings.is_empty() {
        groups.push(render_group(
            ResourceKind::String,
            "&str",
            &model.strings,
            |v| format!("\"{}\"", escape_str(v)),
        ));
    }
    out.push_str(&groups.join("\n"));

    out.push_str("}\n");
    out
}

fn render_group<T>(
    kind: ResourceKind,
    ty: &str,
    entries: &[ResourceEntry<T>],
    literal: impl Fn(&T) -> String,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{INDENT}pub mod {} {{\n", kind.container_ident()));
    for entry in entries {
        out.push_str(&format!(
            "{INDENT}{INDENT}pub const {}: {} = {};\n",
            entry.name,
            ty,
            literal(&entry.value)
        ));
    }
    out.push_str(&format!("{INDENT}}}\n"));
    out
}

/// Escape a string value for a double-quoted literal.
fn escape_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_metadata() -> GeneratedMetadata {
        GeneratedMetadata {
            fingerprint: "cafe1234".to_string(),
            module_path: "sgen::statics".to_string(),
            container: "s".to_string(),
            debug: false,
        }
    }

    fn sample_model() -> ResourceModel {
        let mut model = ResourceModel::new();
        model.booleans.push(ResourceEntry::new("dark_mode", true));
        model.integers.push(ResourceEntry::new("max_retries", 7));
        model
            .strings
            .push(ResourceEntry::new("label", "Hello".to_string()));
        model
    }

    #[test]
    fn test_emit_full_model() {
        let out = emit(&sample_model(), &sample_metadata());

        assert_eq!(
            out,
            "\
// cafe1234
// Module: sgen::statics
// Container: s
// Debug: false

#[allow(non_upper_case_globals)]
pub mod s {
    pub mod boolean {
        pub const dark_mode: bool = true;
    }

    pub mod integer {
        pub const max_retries: i32 = 7;
    }

    pub mod string {
        pub const label: &str = \"Hello\";
    }
}
"
        );
    }

    #[test]
    fn test_emit_is_deterministic() {
        let model = sample_model();
        let meta = sample_metadata();
        assert_eq!(emit(&model, &meta), emit(&model, &meta));
    }

    #[test]
    fn test_emit_empty_model_has_no_groups() {
        let out = emit(&ResourceModel::new(), &sample_metadata());

        assert_eq!(
            out,
            "\
// cafe1234
// Module: sgen::statics
// Container: s
// Debug: false

#[allow(non_upper_case_globals)]
pub mod s {
}
"
        );
    }

    #[test]
    fn test_emit_skips_empty_kinds() {
        let mut model = ResourceModel::new();
        model.integers.push(ResourceEntry::new("only", 1));

        let out = emit(&model, &sample_metadata());
        assert!(out.contains("pub mod integer"));
        assert!(!out.contains("pub mod boolean"));
        assert!(!out.contains("pub mod string"));
    }

    #[test]
    fn test_emit_preserves_model_order() {
        let mut model = ResourceModel::new();
        model.integers.push(ResourceEntry::new("zeta", 1));
        model.integers.push(ResourceEntry::new("alpha", 2));

        let out = emit(&model, &sample_metadata());
        let zeta = out.find("zeta").unwrap();
        let alpha = out.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_emit_escapes_strings() {
        let mut model = ResourceModel::new();
        model.strings.push(ResourceEntry::new(
            "tricky",
            "say \"hi\"\nback\\slash\ttab".to_string(),
        ));

        let out = emit(&model, &sample_metadata());
        assert!(out.contains(r#"pub const tricky: &str = "say \"hi\"\nback\\slash\ttab";"#));
    }

    #[test]
    fn test_emit_duplicate_names_render_twice() {
        let mut model = ResourceModel::new();
        model.strings.push(ResourceEntry::new("label", "a".to_string()));
        model.strings.push(ResourceEntry::new("label", "b".to_string()));

        let out = emit(&model, &sample_metadata());
        assert_eq!(out.matches("pub const label").count(), 2);
    }

    #[test]
    fn test_emit_snapshot() {
        let out = emit(&sample_model(), &sample_metadata());
        insta::assert_snapshot!(out.trim_end(), @r###"
        // cafe1234
        // Module: sgen::statics
        // Container: s
        // Debug: false

        #[allow(non_upper_case_globals)]
        pub mod s {
            pub mod boolean {
                pub const dark_mode: bool = true;
            }

            pub mod integer {
                pub const max_retries: i32 = 7;
            }

            pub mod string {
                pub const label: &str = "Hello";
            }
        }
        "###);
    }
}
