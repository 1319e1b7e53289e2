//! Minimal CLI: import → (render | edit)
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::node::{SchemaNode, Ty};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// derive a JSON Schema from example JSON, canonicalize an existing schema, or apply edits
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// derive a schema from example JSON document(s)
    Json(RenderOut),
    /// import existing JSON Schema document(s) and re-emit them canonically
    Schema(RenderOut),
    /// apply add/remove edits at a navigation path and print the result
    Edit(EditOp),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs; literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug)]
struct RenderOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EditOp {
    /// starting document (the empty root if omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// treat the input as an existing JSON Schema instead of example JSON
    #[arg(long)]
    as_schema: bool,

    /// navigation path below the root, dot-separated; `items` steps into arrays
    #[arg(long, default_value = "")]
    at: String,

    /// add or replace a property, NAME:TYPE or NAME:TYPE:required
    #[arg(long)]
    add: Vec<String>,

    /// remove a property by name
    #[arg(long)]
    remove: Vec<String>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_each(
        &self,
        mut apply: impl FnMut(Value) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        for source_path in resolve_file_path_patterns(&self.input)? {
            let shown = source_path.to_string_lossy().to_string();
            let text = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read {shown}"))?;
            let value: Value = crate::convert::parse_json(&text)
                .with_context(|| format!("failed to parse {shown}"))?;
            let value = match self.json_pointer.as_deref() {
                None => value,
                Some(pointer) => value
                    .pointer(pointer)
                    .cloned()
                    .with_context(|| format!("JSON pointer {pointer} selects nothing in {shown}"))?,
            };
            apply(value)?;
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Json(target) => render_inputs(target, |value| {
                crate::convert::from_json_value(value, "root")
            }),
            Command::Schema(target) => render_inputs(target, |value| {
                crate::convert::from_json_schema(value, "root")
            }),
            Command::Edit(op) => run_edit(op),
        }
    }
}

fn render_inputs(
    target: &RenderOut,
    convert: impl Fn(&Value) -> SchemaNode,
) -> anyhow::Result<()> {
    let mut rendered = Vec::new();
    target.input_settings.load_each(|value| {
        rendered.push(crate::emit::render(&convert(&value)));
        Ok(())
    })?;
    write_out(target.out.as_ref(), &rendered.join("\n"))
}

fn run_edit(op: &EditOp) -> anyhow::Result<()> {
    let root = match &op.input {
        None => SchemaNode::root(),
        Some(source_path) => {
            let shown = source_path.to_string_lossy().to_string();
            let text = std::fs::read_to_string(source_path)
                .with_context(|| format!("failed to read {shown}"))?;
            let imported = if op.as_schema {
                crate::convert::import_json_schema(&text)
            } else {
                crate::convert::import_json(&text)
            };
            imported.with_context(|| format!("failed to parse {shown}"))?
        }
    };

    let mut path = vec![root.name.clone()];
    path.extend(op.at.split('.').filter(|s| !s.is_empty()).map(str::to_string));

    let mut current = root;
    for spec in &op.add {
        let node = parse_add_spec(spec)?;
        current = crate::edit::add_at(&current, &path, node);
    }
    for name in &op.remove {
        current = crate::edit::remove_at(&current, &path, name);
    }

    write_out(op.out.as_ref(), &crate::emit::render(&current))
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn parse_add_spec(spec: &str) -> anyhow::Result<SchemaNode> {
    let mut parts = spec.splitn(3, ':');
    let name = parts
        .next()
        .filter(|s| !s.is_empty())
        .with_context(|| format!("property name missing in `{spec}`"))?;
    let label = parts.next().unwrap_or("string");
    let ty = Ty::from_label(label)
        .with_context(|| format!("unknown type `{label}` in `{spec}`"))?;
    let required = match parts.next() {
        None => false,
        Some("required") => true,
        Some(other) => anyhow::bail!("expected `required`, got `{other}` in `{spec}`"),
    };
    Ok(crate::edit::new_property(name, ty, required))
}

fn write_out(out: Option<&PathBuf>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, text)
                .with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();
        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // explicitly a glob and matched nothing -> surface as an error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
