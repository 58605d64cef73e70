use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    Input,
    Filter,
    Output,
}

impl ProcessorKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ProcessorKind::Input => "input",
            ProcessorKind::Filter => "filter",
            ProcessorKind::Output => "output",
        }
    }

    #[must_use]
    pub fn all() -> &'static [ProcessorKind] {
        &[
            ProcessorKind::Input,
            ProcessorKind::Filter,
            ProcessorKind::Output,
        ]
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Option types that carry shared settings and never appear in blueprints'
/// help tables.
const COMMON_OPTIONS_TYPE: &str = "processors.CommonOptions";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessorOption {
    pub name: String,
    pub alias: Option<String>,
    pub doc: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub default_value: Option<String>,
    pub possible_values: Vec<String>,
    pub example: Option<String>,
}

impl ProcessorOption {
    #[must_use]
    pub fn identifier(&self) -> &str {
        match &self.alias {
            Some(alias) if !alias.is_empty() => alias,
            _ => &self.name,
        }
    }

    #[must_use]
    pub fn is_common(&self) -> bool {
        self.kind == COMMON_OPTIONS_TYPE
    }

    /// Default value as shown in documentation tables.
    #[must_use]
    pub fn default_display(&self) -> String {
        if let Some(v) = &self.default_value {
            return v.clone();
        }
        match self.kind.as_str() {
            "hash" => "{}",
            "array" => "[]",
            "string" => "\"\"",
            "int" | "int64" | "int32" => "0",
            "time.Duration" => "",
            _ => "?",
        }
        .to_string()
    }

    /// One `key => value` line for a configuration blueprint.
    #[must_use]
    pub fn example(&self) -> String {
        if let Some(example) = self.example.as_ref().filter(|e| !e.is_empty()) {
            return example.clone();
        }
        let key = self.identifier().to_lowercase();
        let value = match &self.default_value {
            Some(v) => v.clone(),
            None => match self.kind.as_str() {
                "hash" => "{}".to_string(),
                "array" => "[]".to_string(),
                "string" => "\"\"".to_string(),
                "int" | "int64" | "int32" => "123".to_string(),
                "time.Duration" => "30".to_string(),
                other => other.to_string(),
            },
        };
        format!("{key} => {value}")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProcessorDoc {
    pub name: String,
    pub kind: ProcessorKind,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub doc_short: String,
    #[serde(default)]
    pub options: Vec<ProcessorOption>,
}

impl ProcessorDoc {
    /// Stable palette id, e.g. `filter/grok`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }

    /// Configuration skeleton listing every option with an example value.
    #[must_use]
    pub fn blueprint(&self) -> String {
        let mut out = format!("{}{{\n", self.name);
        for option in &self.options {
            out.push('\t');
            out.push_str(&option.example());
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    /// Short description followed by a settings table.
    #[must_use]
    pub fn help(&self) -> String {
        let summary = if self.doc_short.is_empty() {
            self.doc.lines().next().unwrap_or_default()
        } else {
            self.doc_short.as_str()
        };
        let mut out = summary.to_string();

        let rows: Vec<&ProcessorOption> = self.options.iter().filter(|o| !o.is_common()).collect();
        if rows.is_empty() {
            return out;
        }

        out.push_str("\n\nSetting             Type        Required  Default\n");
        for o in rows {
            out.push_str(&format!(
                "{:<20}{:<12}{:<10}{}\n",
                o.identifier(),
                o.kind,
                o.required,
                o.default_display()
            ));
        }
        out.truncate(out.trim_end().len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, kind: &str) -> ProcessorOption {
        ProcessorOption {
            name: name.to_string(),
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_example_placeholders() {
        assert_eq!(option("Match", "hash").example(), "match => {}");
        assert_eq!(option("Tags", "array").example(), "tags => []");
        assert_eq!(option("Path", "string").example(), "path => \"\"");
        assert_eq!(option("Size", "int64").example(), "size => 123");
        assert_eq!(option("Interval", "time.Duration").example(), "interval => 30");
        assert_eq!(option("Codec", "codec").example(), "codec => codec");
    }

    #[test]
    fn test_example_prefers_explicit_then_default() {
        let mut o = option("Source", "string");
        o.default_value = Some("\"message\"".to_string());
        assert_eq!(o.example(), "source => \"message\"");

        o.example = Some("source => \"line\"".to_string());
        assert_eq!(o.example(), "source => \"line\"");
    }

    #[test]
    fn test_identifier_uses_alias() {
        let mut o = option("AddField", "hash");
        assert_eq!(o.identifier(), "AddField");
        o.alias = Some("add_field".to_string());
        assert_eq!(o.identifier(), "add_field");
        assert_eq!(o.example(), "add_field => {}");
    }

    #[test]
    fn test_default_display() {
        assert_eq!(option("x", "int").default_display(), "0");
        assert_eq!(option("x", "time.Duration").default_display(), "");
        assert_eq!(option("x", "bool").default_display(), "?");
    }

    #[test]
    fn test_blueprint_and_help() {
        let doc = ProcessorDoc {
            name: "grok".to_string(),
            kind: ProcessorKind::Filter,
            doc: "Parse arbitrary text.\nMore details.".to_string(),
            doc_short: String::new(),
            options: vec![
                option("Common", COMMON_OPTIONS_TYPE),
                ProcessorOption {
                    name: "Match".to_string(),
                    required: true,
                    ..option("Match", "hash")
                },
            ],
        };
        assert_eq!(doc.key(), "filter/grok");
        assert_eq!(
            doc.blueprint(),
            "grok{\n\tcommon => processors.CommonOptions\n\tmatch => {}\n}\n"
        );

        let help = doc.help();
        assert!(help.starts_with("Parse arbitrary text."));
        assert!(help.contains("Match"));
        assert!(!help.contains("Common"));
    }
}
