//! nextkit CLI entrypoint
//! Parses command-line arguments and dispatches to the core scaffolder.

mod editor;
mod prompt;

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use clap::{Parser, ValueEnum};
use nextkit_core::{
    find_workspace_root, CommandOutcome, ComponentOptions, Config, FileStore, LocalFileStore,
    MemoryFileStore, MethodKind, PageOptions, RouteOptions, ScaffoldTemplates, Scaffolder,
};
use tracing_subscriber::EnvFilter;

use crate::prompt::TerminalPrompter;

#[derive(Parser)]
#[command(name = "nextkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Workspace root (defaults to the nearest directory with a package.json)
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,
    /// Config file (defaults to nextkit.yaml or nextkit.toml in the workspace)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print the files that would be written without touching the disk
    #[arg(long, global = true)]
    dry_run: bool,
    /// Open the main generated file in your editor
    #[arg(long, global = true)]
    open: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Scaffold a React component folder
    Component {
        /// Directory to create the component in
        dir: Option<PathBuf>,
        /// Component name, e.g. "user card"
        #[arg(long)]
        name: Option<String>,
        /// Overwrite an existing index file
        #[arg(long)]
        force: bool,
    },
    /// Scaffold an App Router page with metadata
    Page {
        /// Directory to create the page folder in
        dir: Option<PathBuf>,
        /// Page name, e.g. "blog post"
        #[arg(long)]
        name: Option<String>,
        /// Metadata title
        #[arg(long)]
        title: Option<String>,
        /// Metadata description
        #[arg(long)]
        description: Option<String>,
        /// Overwrite an existing page file
        #[arg(long)]
        force: bool,
    },
    /// Add HTTP method handlers to an API route
    Route {
        /// Route directory (or its methods/ folder)
        dir: Option<PathBuf>,
        /// Route name; recovered from existing files when omitted
        #[arg(long)]
        name: Option<String>,
        /// Methods to create, e.g. GET,POST
        #[arg(long, value_delimiter = ',')]
        methods: Option<Vec<MethodKind>>,
    },
    /// Write a default config file into the workspace root
    InitConfig {
        #[arg(long, value_enum, default_value_t = ConfigFormat::Yaml)]
        format: ConfigFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn file_name(self) -> &'static str {
        match self {
            Self::Yaml => "nextkit.yaml",
            Self::Toml => "nextkit.toml",
        }
    }
}

/// Scaffold command arguments once the target directory is split off
enum Request {
    Component {
        name: Option<String>,
        force: bool,
    },
    Page {
        name: Option<String>,
        title: Option<String>,
        description: Option<String>,
        force: bool,
    },
    Route {
        name: Option<String>,
        methods: Option<Vec<MethodKind>>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    let (target, request) = match cli.command {
        Commands::InitConfig { format } => {
            let root = cli.workspace.as_deref().map_or_else(|| cwd.clone(), |d| cwd.join(d));
            return init_config(&root, format, cli.dry_run).await;
        }
        Commands::Component { dir, name, force } => (dir, Request::Component { name, force }),
        Commands::Page {
            dir,
            name,
            title,
            description,
            force,
        } => (
            dir,
            Request::Page {
                name,
                title,
                description,
                force,
            },
        ),
        Commands::Route { dir, name, methods } => (dir, Request::Route { name, methods }),
    };
    let target = target.map_or_else(|| cwd.clone(), |d| cwd.join(d));
    let workspace_root = match &cli.workspace {
        Some(dir) => cwd.join(dir),
        None => find_workspace_root(&target).unwrap_or_else(|| cwd.clone()),
    };
    tracing::debug!("Workspace root: {}", workspace_root.display());

    let mut config = Config::discover(&workspace_root, cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    config.open_in_editor |= cli.open;
    if let Request::Component { force: true, .. } | Request::Page { force: true, .. } = request {
        config.overwrite = true;
    }
    let templates =
        ScaffoldTemplates::with_overrides(config.templates_path(&workspace_root).as_deref())
            .context("Failed to load templates")?;

    let local = LocalFileStore;
    let memory = MemoryFileStore::over_disk();
    let store: &dyn FileStore = if cli.dry_run { &memory } else { &local };
    let scaffolder = Scaffolder::new(store, templates, config.clone(), &workspace_root);

    let mut prompter = TerminalPrompter;
    let outcome = match request {
        Request::Component { name, .. } => {
            scaffolder
                .new_component(&mut prompter, ComponentOptions { target, name })
                .await?
        }
        Request::Page {
            name,
            title,
            description,
            ..
        } => {
            scaffolder
                .new_page(
                    &mut prompter,
                    PageOptions {
                        target,
                        name,
                        title,
                        description,
                    },
                )
                .await?
        }
        Request::Route { name, methods } => {
            scaffolder
                .new_route(
                    &mut prompter,
                    RouteOptions {
                        target,
                        name,
                        methods,
                    },
                )
                .await?
        }
    };

    report(outcome, &config, cli.dry_run.then_some(&memory));
    Ok(())
}

/// Print what happened; open the primary file when asked to
fn report(outcome: CommandOutcome, config: &Config, dry_run: Option<&MemoryFileStore>) {
    match outcome {
        CommandOutcome::Created { primary, written } => {
            if let Some(memory) = dry_run {
                for (path, content) in memory.files() {
                    println!("Would write {} ({} bytes)", path.display(), content.len());
                }
                return;
            }
            for path in &written {
                println!("Created {}", path.display());
            }
            if config.open_in_editor {
                match editor::editor_command(config.editor.as_deref()) {
                    Some(editor) => {
                        editor::open_in_editor(&editor, &primary);
                    }
                    None => tracing::warn!("No editor configured; set VISUAL or EDITOR"),
                }
            }
        }
        CommandOutcome::NothingToDo(reason) => println!("{}", reason),
        CommandOutcome::Cancelled => tracing::debug!("Cancelled"),
    }
}

/// Write a default config file into the workspace root
async fn init_config(workspace_root: &Path, format: ConfigFormat, dry_run: bool) -> anyhow::Result<()> {
    let path = workspace_root.join(format.file_name());
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        anyhow::bail!("{} already exists", path.display());
    }
    if dry_run {
        println!("Would write {}", path.display());
        return Ok(());
    }
    Config::default()
        .save(&path)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
