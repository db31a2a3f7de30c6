//! CLI: description → (.ui file | validation report)
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, Args};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;

use ui_maker::{emit, fence, schema, Node};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert JSON UI descriptions into UI loader table-literal (.ui) files
#[derive(Parser, Debug)]
#[command(name = "ui-maker", version)]
pub struct CommandLineInterface {
    /// debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// convert descriptions and write .ui files
    Convert(ConvertOut),
    /// parse and validate descriptions without writing anything
    Check(CheckOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select the root node in each document (e.g. /layout)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; must yield exactly one node tree
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct ConvertOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .ui file (single input only; default `<stem>_generated.ui`, stdout for stdin)
    #[arg(short, long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// directory for generated files (default: next to each input)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// reject descriptions that fail schema validation
    #[arg(long)]
    strict: bool,
}

#[derive(clap::Parser, Debug)]
struct CheckOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Source {
    fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read source file {}", path.display())),
        }
    }
}

impl InputSettings {
    fn sources(&self) -> Result<Vec<Source>> {
        resolve_sources(&self.input)
    }

    /// Read, strip fences, select, pre-process and parse one input.
    fn load_node(&self, source: &Source) -> Result<Node> {
        let raw = source.read()?;
        let text = fence::strip_fences(&raw);
        log::debug!("{}: cleaned description starts with {:?}", source.label(), preview(text));

        if self.json_pointer.is_none() && self.jq_expr.is_none() {
            return Node::parse(text).with_context(|| source.label());
        }

        let mut value = serde_json::from_str::<Value>(text)
            .with_context(|| format!("failed to parse JSON source ({})", source.label()))?;
        if let Some(pointer) = self.json_pointer.as_ref() {
            value = value
                .pointer(pointer)
                .cloned()
                .with_context(|| format!("JSON pointer {pointer} matched nothing in {}", source.label()))?;
        }
        if let Some(jq_expr) = self.jq_expr.as_ref() {
            value = crate::jq_exec::run_jaq_single(jq_expr, &value).with_context(|| {
                format!("failed to apply jq expression to source ({})", source.label())
            })?;
        }
        Node::from_value(value).with_context(|| source.label())
    }
}

impl ConvertOut {
    fn destination(&self, source: &Source) -> Destination {
        if let Some(out) = self.out.as_ref() {
            return Destination::File(out.clone());
        }
        match source {
            Source::Stdin => match self.out_dir.as_ref() {
                Some(dir) => Destination::File(dir.join("stdin_generated.ui")),
                None => Destination::Stdout,
            },
            Source::File(path) => Destination::File(default_output_path(path, self.out_dir.as_deref())),
        }
    }

    fn convert_one(&self, source: &Source) -> Result<String> {
        let node = self.input_settings.load_node(source)?;
        if self.strict {
            schema::validate(&node).with_context(|| source.label())?;
        }
        Ok(emit::render_document(&node))
    }

    /// Convert every source (in parallel) and write the outputs; one result
    /// per source, in input order.
    fn convert_all(&self, sources: &[Source]) -> Vec<Result<Destination>> {
        let results: Vec<Result<String>> = sources
            .par_iter()
            .map(|source| self.convert_one(source))
            .collect();
        sources
            .iter()
            .zip(results)
            .map(|(source, result)| {
                result.and_then(|document| write_output(&self.destination(source), &document))
            })
            .collect()
    }

    fn run(&self) -> Result<bool> {
        let sources = self.input_settings.sources()?;
        if self.out.is_some() && sources.len() != 1 {
            bail!("--out takes exactly one input, got {}", sources.len());
        }
        log::info!("converting {} input(s)", sources.len());

        let mut all_ok = true;
        for (source, written) in sources.iter().zip(self.convert_all(&sources)) {
            match written {
                Ok(Destination::File(path)) => {
                    let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or_default();
                    eprintln!("{} {} → {} ({size} bytes)", "✔".green(), source.label(), path.display());
                }
                Ok(Destination::Stdout) => log::info!("{} written to stdout", source.label()),
                Err(error) => {
                    all_ok = false;
                    eprintln!("{} {error:#}", "✘".red());
                }
            }
        }
        Ok(all_ok)
    }
}

impl CheckOut {
    fn run(&self) -> Result<bool> {
        let mut all_ok = true;
        for source in self.input_settings.sources()? {
            let checked = self
                .input_settings
                .load_node(&source)
                .and_then(|node| schema::validate(&node).with_context(|| source.label()));
            match checked {
                Ok(()) => eprintln!("{} {}", "✔".green(), source.label()),
                Err(error) => {
                    all_ok = false;
                    eprintln!("{} {error:#}", "✘".red());
                }
            }
        }
        Ok(all_ok)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> ExitCode {
        let outcome = match &self.cmd {
            Command::Convert(target) => target.run(),
            Command::Check(target) => target.run(),
        };
        match outcome {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(error) => {
                eprintln!("{} {error:#}", "error:".red().bold());
                ExitCode::FAILURE
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(destination: &Destination, document: &str) -> Result<Destination> {
    match destination {
        Destination::Stdout => print!("{document}"),
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
    }
    Ok(destination.clone())
}

/// `dir/layout.json` → `dir/layout_generated.ui` (or inside `out_dir`).
fn default_output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_owned());
    let file_name = format!("{stem}_generated.ui");
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn preview(text: &str) -> String {
    text.chars().take(200).collect()
}

fn resolve_sources<I>(patterns: I) -> Result<Vec<Source>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<Source>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == "-" {
            if out.contains(&Source::Stdin) {
                bail!("stdin ('-') given more than once");
            }
            out.push(Source::Stdin);
        } else if has_glob_chars(pattern) {
            // Treat as a glob pattern
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
                let path = entry.with_context(|| format!("failed to read glob match for {pattern}"))?;
                matched_any = true;
                out.push(Source::File(path));
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(Source::File(PathBuf::from(pattern)));
        }
    }

    Ok(out)
}
