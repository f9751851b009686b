//! apidef Code Generator
//!
//! Generates a validated request struct or an exhaustive test table for one
//! endpoint definition.

use std::io::{self, Write};
use std::path::PathBuf;

use apidef_define::Catalog;
use apidef_definitions::define_catalog;
use apidef_gen::errors::GeneratorError;
use apidef_gen::invocation::GenerateRequest;
use apidef_gen::loader::load_definitions;
use apidef_gen::output::{generate, generate_to_file};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// apidef generator - request structs and test tables from endpoint definitions
#[derive(Parser, Debug)]
#[command(name = "apidef-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the endpoint to generate for (e.g. "/signup")
    #[arg(long)]
    path: Option<String>,

    /// Method of the endpoint to generate for (e.g. "POST")
    #[arg(long)]
    method: Option<String>,

    /// Generate the test-case table
    #[arg(long = "gen-tests", visible_alias = "genTests")]
    gen_tests: bool,

    /// Generate the request-body struct
    #[arg(long = "gen-structs", visible_alias = "genStructs")]
    gen_structs: bool,

    /// TOML definitions file (defaults to the built-in catalog)
    #[arg(short, long, value_name = "FILE")]
    definitions: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli)
}

fn run(cli: Cli) -> Result<(), GeneratorError> {
    let request = GenerateRequest::new(cli.path, cli.method, cli.gen_tests, cli.gen_structs)?;

    let catalog: Catalog = match &cli.definitions {
        Some(path) => load_definitions(path)?,
        None => define_catalog()?,
    };

    let endpoint = request.select(&catalog)?;
    info!(
        method = %request.method,
        path = %request.path,
        mode = %request.mode,
        "generating"
    );

    match &cli.output {
        Some(path) => generate_to_file(endpoint, request.mode, path)?,
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            generate(endpoint, request.mode, &mut lock)?;
            lock.flush()?;
        }
    }

    Ok(())
}

/// Logs go to stderr so generated text on stdout stays clean.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
