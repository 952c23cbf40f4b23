// ABOUTME: CLI for encoding podcast feeds with podfeed-feed.
// ABOUTME: Reads a JSON feed description from a file or stdin and writes RSS XML.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use podfeed_feed::{encode_to_vec, EncodeOptions, Feed, Indent, NamespaceDecl};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Encode a JSON feed description as a podcast RSS 2.0 document.
#[derive(Parser, Debug)]
#[command(name = "podfeed-cli")]
#[command(about = "Encode podcast feeds as RSS XML", long_about = None)]
struct Args {
    /// JSON feed file. Use "-" to read from stdin.
    input: String,

    /// Indent nested elements by N characters. Omit for single-line output.
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Indent with tabs instead of spaces (implies --indent 1 when no width is given).
    #[arg(long, default_value_t = false)]
    tabs: bool,

    /// Prefix the document with an XML declaration.
    #[arg(long, default_value_t = false)]
    declaration: bool,

    /// Skip the pre-encoding schema checks.
    #[arg(long, default_value_t = false)]
    no_validate: bool,

    /// Always declare this namespace prefix (repeatable).
    #[arg(long, value_name = "PREFIX")]
    declare: Vec<String>,

    /// Never declare this namespace prefix (repeatable).
    #[arg(long, value_name = "PREFIX")]
    suppress: Vec<String>,

    /// Write the document here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log encoder diagnostics to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let raw = load_bytes(&args.input)?;
    let mut feed: Feed = serde_json::from_slice(&raw)
        .with_context(|| format!("invalid feed JSON in {}", args.input))?;

    for prefix in &args.declare {
        feed.namespaces.set_by_prefix(prefix, NamespaceDecl::Declare)?;
    }
    for prefix in &args.suppress {
        feed.namespaces.set_by_prefix(prefix, NamespaceDecl::Suppress)?;
    }

    let xml = encode_to_vec(&feed, &encode_options(&args))?;
    tracing::debug!(bytes = xml.len(), "encoded feed");

    match args.output {
        Some(ref path) => {
            fs::write(path, &xml).with_context(|| format!("cannot write {}", path.display()))?
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&xml)?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn encode_options(args: &Args) -> EncodeOptions {
    let indent = match (args.indent, args.tabs) {
        (Some(width), true) => Some(Indent::tabs(width)),
        (None, true) => Some(Indent::tabs(1)),
        (Some(width), false) => Some(Indent::spaces(width)),
        (None, false) => None,
    };

    let opts = EncodeOptions::new()
        .xml_declaration(args.declaration)
        .validate(!args.no_validate);
    match indent {
        Some(indent) => opts.indent(indent),
        None => opts.compact(),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
