// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use import_rewrite::{
    Disposition, FileRelativeResolver, FunctionRegistry, ImportDeclaration, ImportMap,
    ImportSpecifier, Rewriter, load_import_map,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "import-rewrite")]
#[command(author, version, about = "Rewrite whole-module imports into per-member imports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a configuration file
    Check {
        /// Configuration file (TOML, or JSON by extension)
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show how an import of the given members would be rewritten
    Resolve {
        /// Configuration file (TOML, or JSON by extension)
        #[arg(short, long)]
        config: PathBuf,
        /// Module identifier as written in the import
        #[arg(short, long)]
        module: String,
        /// File containing the import (for relative modules)
        #[arg(long)]
        from: Option<PathBuf>,
        /// Default import binding
        #[arg(long)]
        default: Option<String>,
        /// Namespace import binding
        #[arg(long)]
        namespace: Option<String>,
        /// Named members, `Name` or `Name:alias`
        members: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => cmd_check(&config),
        Commands::Resolve {
            config,
            module,
            from,
            default,
            namespace,
            members,
        } => {
            let mut specifiers = Vec::new();
            if let Some(local) = default {
                specifiers.push(ImportSpecifier::default_import(local));
            }
            if let Some(local) = namespace {
                specifiers.push(ImportSpecifier::namespace(local));
            }
            specifiers.extend(members.iter().map(String::as_str).map(parse_member));

            let decl = ImportDeclaration::new(module, specifiers);
            cmd_resolve(&config, &decl, from.as_deref())
        }
    }
}

/// Load the configuration; the CLI cannot load function transforms
fn load(config: &Path) -> Result<ImportMap> {
    load_import_map(config, &FunctionRegistry::new())
        .with_context(|| format!("Failed to load configuration {}", config.display()))
}

fn cmd_check(config: &Path) -> Result<()> {
    let map = load(config)?;
    map.validate()?;

    for name in map.module_names() {
        let Some(module) = map.get(name) else {
            continue;
        };
        let transform = module.transform.as_ref().map_or("none", |t| t.kind());
        let style = module.style.as_ref().map_or("off", |s| s.name.as_str());
        println!(
            "{}: transform={} casing={} style={} prevent_full_import={} skip_default_conversion={}",
            name,
            transform,
            module.casing,
            style,
            module.prevent_full_import,
            module.skip_default_conversion
        );
    }

    println!("{} module(s) configured", map.len());
    Ok(())
}

fn cmd_resolve(config: &Path, decl: &ImportDeclaration, from: Option<&Path>) -> Result<()> {
    let map = load(config)?;
    let resolver =
        FileRelativeResolver::from_current_dir().context("Failed to read working directory")?;
    let mut rewriter = Rewriter::new(&map, &resolver);
    if let Some(file) = from {
        rewriter = rewriter.for_file(file);
    }

    info!("Resolving {}", decl);
    match rewriter.rewrite(decl)? {
        None => println!("{}\n(unchanged)", decl),
        Some(rewrite) => {
            let disposition = rewrite.disposition();
            if disposition == Disposition::InsertAfter {
                println!("{}", decl);
            }
            for out in rewrite.declarations() {
                println!("{}", out);
            }
            println!("({:?})", disposition);
        }
    }
    Ok(())
}

/// Parse `Name` or `Name:alias` into a named specifier
fn parse_member(arg: &str) -> ImportSpecifier {
    match arg.split_once(':') {
        Some((imported, local)) if !local.is_empty() => ImportSpecifier::aliased(imported, local),
        Some((imported, _)) => ImportSpecifier::named(imported),
        None => ImportSpecifier::named(arg),
    }
}
