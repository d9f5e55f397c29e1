use clap::Parser;
use host::{DefinitionRequest, Resolver, ResolverConfig};
use log::{error, info};
use shared::GameDefinition;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// DSL directory containing the game definition
    #[arg(short = 'd', long, default_value = "./dsl")]
    dsl_dir: PathBuf,

    /// Load from the deprecated single-file definition instead of a DSL directory
    #[arg(long, conflicts_with = "dsl_dir")]
    legacy: bool,

    /// Single-file definition used with --legacy
    #[arg(long, default_value = "definition.json")]
    legacy_path: PathBuf,

    /// Definition slug to resolve and validate (repeatable)
    #[arg(short = 'g', long = "definition", required = true)]
    definitions: Vec<String>,

    /// Print accepted definitions as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Resolves every requested definition, then reports each one.
/// Exits with status 1 if the DSL directory is missing or any definition fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    let mut config = ResolverConfig::default().with_legacy_path(&args.legacy_path);
    if !args.legacy {
        let dsl_dir = std::env::current_dir()?.join(&args.dsl_dir);
        if !dsl_dir.exists() {
            error!("DSL directory not found: {}", dsl_dir.display());
            error!("Please ensure the DSL directory exists and contains your game definition.");
            std::process::exit(1);
        }
        info!("Using DSL directory: {}", dsl_dir.display());
        config = config.with_dsl_dir(dsl_dir);
    }
    let resolver = Resolver::new(config);

    // Resolutions are independent, run them side by side
    let handles: Vec<_> = args
        .definitions
        .iter()
        .map(|slug| {
            let resolver = resolver.clone();
            let request = DefinitionRequest::new(slug.clone());
            tokio::spawn(async move { resolver.load(request).await })
        })
        .collect();

    let mut failures = 0;
    for (slug, handle) in args.definitions.iter().zip(handles) {
        match handle.await? {
            Ok(definition) => report(&definition, args.json)?,
            Err(e) => {
                failures += 1;
                error!("{}: {}", slug, e);
            }
        }
    }

    if failures > 0 {
        error!(
            "{} of {} definitions failed",
            failures,
            args.definitions.len()
        );
        std::process::exit(1);
    }

    Ok(())
}

fn report(definition: &GameDefinition, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(definition)?);
    } else {
        println!(
            "{} ({} v{}): {} classes, {} states, {} actions",
            definition.id,
            definition.name,
            definition.version,
            definition.class_count(),
            definition.state_count(),
            definition.actions.len()
        );
    }
    Ok(())
}
