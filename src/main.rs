use clap::error::ErrorKind;
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use transitive_deps::adapters::outbound::console::StderrProgressReporter;
use transitive_deps::adapters::outbound::filesystem::FileSystemReader;
use transitive_deps::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use transitive_deps::application::read_models::DependencyReportBuilder;
use transitive_deps::application::use_cases::AnalyzeDependenciesUseCase;
use transitive_deps::cli::Args;
use transitive_deps::config::{self, ConfigFile};
use transitive_deps::shared::error::{DepsError, ExitCode};
use transitive_deps::shared::Result;

const LOG_ENV_VAR: &str = "TRANSITIVE_DEPS_LOG";

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            // clap routes help to stdout and errors to stderr
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<()> {
    let project_path = args.project_path();
    let quiet = args.quiet;
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let mut settings = args.merge(config.as_ref())?;
    settings.color =
        settings.color && settings.output.is_none() && std::io::stdout().is_terminal();
    tracing::debug!(?settings, "effective settings");

    // Create adapters (Dependency Injection)
    let assets_reader = FileSystemReader::new();
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = AnalyzeDependenciesUseCase::new(assets_reader, progress_reporter);

    let response = use_case.execute(settings.to_request())?;

    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let report = DependencyReportBuilder::build(&response.projects, response.include_chains);
    let formatter = FormatterFactory::create(settings.format, settings.color);
    let formatted_output = formatter.format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads `--config`, or the config file next to the analysed path.
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let dir = if project_path.is_file() {
        project_path.parent().unwrap_or(Path::new("."))
    } else {
        project_path
    };
    let config = config::discover_config(dir)?;
    if config.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            dir.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DepsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Path does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| DepsError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(DepsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    // Security check: Canonicalize path to prevent path traversal
    let canonical_path = path
        .canonicalize()
        .map_err(|e| DepsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() && !canonical_path.is_file() {
        return Err(DepsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory or regular file".to_string(),
        }
        .into());
    }

    Ok(())
}
