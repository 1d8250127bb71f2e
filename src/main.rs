use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use mammoth_event_gen::codegen::{self, GenConfig};
use mammoth_event_gen::error::{Error, Result};
use mammoth_event_gen::schema;

#[cfg(feature = "download")]
const DEFAULT_SCHEMA_URL: &str = mammoth_event_gen::fetch::DEFAULT_BASE_URL;

/// Generate strongly-typed Kotlin analytics event tracking code.
///
/// Downloads the schema document for a project and version (or reads a
/// cached copy) and generates a Kotlin file with one function per event
/// and one enum class per string-enum type.
#[derive(Parser)]
#[command(name = "mammoth-event-gen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a schema document and cache it locally.
    #[cfg(feature = "download")]
    DownloadSchema {
        /// Project id.
        #[arg(long, default_value = "whitelabel")]
        project: String,

        /// Schema version; empty selects the latest published revision.
        #[arg(long, default_value = "")]
        schema_version: String,

        /// Output file for the cached schema.
        #[arg(long, default_value = "schema.json")]
        output: PathBuf,

        /// Base URL of the schema service.
        #[arg(long, default_value = DEFAULT_SCHEMA_URL, env = "MAMMOTH_SCHEMA_URL")]
        schema_url: String,
    },

    /// Generate Kotlin code from a downloaded or cached schema.
    Generate {
        /// Project id.
        #[arg(long, default_value = "whitelabel")]
        project: String,

        /// Schema version; empty selects the latest published revision.
        #[arg(long, default_value = "")]
        schema_version: String,

        /// Read the schema from a local file instead of the schema service.
        #[arg(long)]
        schema_file: Option<PathBuf>,

        /// Output directory for the generated file.
        #[arg(long, default_value = ".")]
        output_path: PathBuf,

        /// Generated file name.
        #[arg(long, default_value = "AnalyticsEvents.kt")]
        output_filename: String,

        /// Kotlin package of the generated file.
        #[arg(long, default_value = "com.trafi.analytics")]
        package: String,

        /// Name of the generated enclosing object.
        #[arg(long, default_value = "AnalyticsEvent")]
        object_name: String,

        /// Omit the schema-version constant and metadata map entries.
        #[arg(long)]
        no_schema_metadata: bool,

        /// Base URL of the schema service.
        #[cfg(feature = "download")]
        #[arg(long, default_value = DEFAULT_SCHEMA_URL, env = "MAMMOTH_SCHEMA_URL")]
        schema_url: String,

        /// Suppress non-error output.
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");

        // Print cause chain.
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }

        #[cfg(feature = "download")]
        if matches!(e, Error::Connect(_)) {
            eprintln!("Please make sure you are connected to the VPN");
        }

        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        #[cfg(feature = "download")]
        Commands::DownloadSchema {
            project,
            schema_version,
            output,
            schema_url,
        } => {
            let rt = tokio::runtime::Runtime::new()
                .map_err(|e| Error::Download(format!("starting runtime: {e}")))?;
            rt.block_on(mammoth_event_gen::fetch::download_schema(
                &project,
                &schema_version,
                &schema_url,
                &output,
            ))?;
        }

        Commands::Generate {
            project,
            schema_version,
            schema_file,
            output_path,
            output_filename,
            package,
            object_name,
            no_schema_metadata,
            #[cfg(feature = "download")]
            schema_url,
            quiet,
        } => {
            let schema = match &schema_file {
                Some(path) => {
                    if !quiet {
                        eprintln!("Loading schema from {}", path.display());
                    }
                    schema::load_schema(path)?
                }
                #[cfg(feature = "download")]
                None => {
                    let rt = tokio::runtime::Runtime::new()
                        .map_err(|e| Error::Download(format!("starting runtime: {e}")))?;
                    rt.block_on(mammoth_event_gen::fetch::fetch_schema(
                        &project,
                        &schema_version,
                        &schema_url,
                    ))?
                }
                #[cfg(not(feature = "download"))]
                None => {
                    let _ = (&project, &schema_version);
                    eprintln!(
                        "error: built without the 'download' feature; pass --schema-file instead"
                    );
                    process::exit(2);
                }
            };

            if !quiet {
                eprintln!(
                    "Loaded {} schema v{}: {} events, {} types",
                    schema.project_id,
                    schema.version_number,
                    schema.events.len(),
                    schema.types.len()
                );
            }

            let config = GenConfig {
                package_name: package,
                object_name,
                include_schema_metadata: !no_schema_metadata,
            };

            // Generation fully completes in memory before any write, so a
            // failing schema never leaves a partial output file behind.
            let code = codegen::generate(&schema, &config)?;

            let file = output_path.join(&output_filename);
            if !quiet {
                eprintln!("Writing generated code to {}", file.display());
            }
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            std::fs::write(&file, &code).map_err(|e| Error::Write {
                path: file.clone(),
                source: e,
            })?;

            if !quiet {
                eprintln!("Success");
            }
        }
    }

    Ok(())
}
