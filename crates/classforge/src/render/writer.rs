//! Rust scaffolding writer
//!
//! Emits one struct scaffold per resolved class. Classes owned by a package
//! land in a subdirectory named after the package; inheritance and
//! association facts that Rust structs cannot carry directly are surfaced
//! as comments above the struct.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, span, Level};

use crate::core::{DiagramError, Value};
use crate::model::{Class, ClassId, Diagram, TYPE_NOT_APPLICABLE};

/// Output options for the scaffolding writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Indent width in spaces for struct bodies
    pub indent: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Writes a resolved diagram as Rust struct scaffolding
pub struct ScaffoldWriter {
    config: WriterConfig,
}

impl ScaffoldWriter {
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write one source file per named class under `out_dir`, returning the
    /// paths written. A diagram with no classes is a render error.
    pub fn write(&self, diagram: &Diagram, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let write_span = span!(Level::INFO, "write_scaffolding", out = %out_dir.display());
        let _enter = write_span.enter();

        if diagram.classes().is_empty() {
            return Err(DiagramError::render_error("no classes to render").into());
        }
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;

        let mut written = Vec::new();
        for (index, class) in diagram.classes().iter().enumerate() {
            let Some(name) = class.name.as_deref().filter(|n| !n.trim().is_empty()) else {
                debug!("Skipping unnamed class");
                continue;
            };

            let mut dir = out_dir.to_path_buf();
            if let Some(package) = class.package() {
                if let Some(package_name) = diagram.package(package).name.as_deref() {
                    dir = dir.join(sanitize_filename(&snake_case(package_name)));
                    fs::create_dir_all(&dir)
                        .with_context(|| format!("failed to create {}", dir.display()))?;
                }
            }

            let file = dir.join(format!("{}.rs", sanitize_filename(&snake_case(name))));
            let body = self.render_class(diagram, ClassId(index), class);
            fs::write(&file, body)
                .with_context(|| format!("failed to write {}", file.display()))?;
            written.push(file);
        }

        info!(files = written.len(), "Scaffolding written");
        Ok(written)
    }

    fn render_class(&self, diagram: &Diagram, id: ClassId, class: &Class) -> String {
        let name = class.name.as_deref().unwrap_or_default();
        let indent = " ".repeat(self.config.indent);
        let mut out = String::new();

        out.push_str(&format!("//! Generated from class `{}`.\n\n", name));
        if class.is_abstract() {
            out.push_str("// Marked abstract in the source diagram.\n");
        }
        if let Some(superclass) = class.superclass() {
            if let Some(parent) = diagram.class(superclass).name.as_deref() {
                out.push_str(&format!("// Specializes `{}`.\n", pascal_case(parent)));
            }
        }
        for line in self.association_lines(diagram, id, class) {
            out.push_str(&format!("// {}\n", line));
        }

        out.push_str(&format!("pub struct {} {{\n", pascal_case(name)));
        for attribute in class.attributes() {
            let Some(field) = attribute.name.as_deref().filter(|n| !n.trim().is_empty())
            else {
                continue;
            };
            if let Some(visibility) = attribute.visibility.as_deref() {
                out.push_str(&format!("{indent}/// Visibility: {}\n", visibility));
            }
            out.push_str(&format!(
                "{indent}pub {}: {},\n",
                snake_case(field.trim()),
                rust_type(&attribute.attr_type)
            ));
        }
        out.push_str("}\n");
        out
    }

    /// Relationship facts for a class, phrased from its own point of view:
    /// outgoing ends become `has`, incoming ends become `belongs to`.
    fn association_lines(&self, diagram: &Diagram, id: ClassId, class: &Class) -> Vec<String> {
        let mut lines = Vec::new();
        for association in class.associations() {
            if association.multiplicity.to.is_some() && association.to != id {
                let count = if association.multiplicity.to == Some(Value::Int(1)) {
                    "one"
                } else {
                    "many"
                };
                let target = diagram
                    .class(association.to)
                    .name
                    .as_deref()
                    .unwrap_or_default();
                let mut line = format!("Has {} `{}`.", count, pascal_case(target));
                if let Some(label) = association.name.as_deref() {
                    line.push_str(&format!(" ({})", label));
                }
                lines.push(line);
            }
            if association.to == id {
                let source = diagram
                    .class(association.from)
                    .name
                    .as_deref()
                    .unwrap_or_default();
                lines.push(format!("Belongs to `{}`.", pascal_case(source)));
            }
        }
        lines
    }
}

impl Default for ScaffoldWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a declared attribute type onto a Rust type. Unknown types pass
/// through verbatim for the developer to fix up.
fn rust_type(declared: &str) -> String {
    if declared == TYPE_NOT_APPLICABLE {
        return "String".to_string();
    }
    match declared.trim().to_lowercase().as_str() {
        "string" | "text" => "String".to_string(),
        "int" | "integer" | "long" => "i64".to_string(),
        "bool" | "boolean" => "bool".to_string(),
        "float" | "double" | "decimal" => "f64".to_string(),
        _ => declared.trim().to_string(),
    }
}

/// Lower a name to snake_case, splitting on case boundaries, spaces, and
/// dashes
pub fn snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' || c == '-' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if (prev_lower || (prev_upper && next_lower)) && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Raise a name to PascalCase from snake, space, or dash separated words
pub fn pascal_case(input: &str) -> String {
    input
        .split(|c| c == '_' || c == ' ' || c == '-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Strip characters that are unsafe in file and folder names across OSes
pub fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '^' | ';' | '\\'))
        .collect()
}
