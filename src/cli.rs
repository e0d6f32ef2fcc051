use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::application::dto::{AnalysisRequest, OutputFormat};
use crate::config::ConfigFile;
use crate::shared::Result;

/// Classify .NET project dependencies as direct or transitive
#[derive(Parser, Debug)]
#[command(name = "transitive-deps")]
#[command(version)]
#[command(
    about = "Classify .NET project dependencies as direct or transitive and show where each transitive dependency comes from",
    long_about = None
)]
pub struct Args {
    /// Project directory, project file, solution tree or project.assets.json
    /// (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output format: tree or json [default: tree]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report direct dependencies as well as transitive ones
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Only report packages whose id matches this regular expression
    /// (case-insensitive)
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<String>,

    /// Show provenance chains under each transitive dependency
    #[arg(long)]
    pub chains: bool,

    /// Disable colored tree output
    #[arg(long)]
    pub no_color: bool,

    /// Config file (defaults to transitive-deps.config.yml in the analysed directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output; warnings and errors are still printed
    #[arg(short, long)]
    pub quiet: bool,
}

/// Effective options after merging the config file under the CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub filter: Option<String>,
    pub collate_all: bool,
    pub include_chains: bool,
    pub color: bool,
}

impl Args {
    /// Project path, defaulting to the current directory.
    pub fn project_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Merges `config` under the command-line flags
    ///
    /// Flags given on the command line always win. Boolean flags can only
    /// switch a setting on, so a config value of `true` cannot be turned
    /// off from the command line except `color` via `--no-color`.
    pub fn merge(&self, config: Option<&ConfigFile>) -> Result<Settings> {
        let config_format = match config {
            Some(config) => config.output_format()?,
            None => None,
        };
        let from_config = |pick: fn(&ConfigFile) -> Option<bool>| config.and_then(pick);

        Ok(Settings {
            path: self.project_path(),
            format: self.format.or(config_format).unwrap_or_default(),
            output: self.output.clone(),
            filter: self
                .filter
                .clone()
                .or_else(|| config.and_then(|c| c.filter.clone())),
            collate_all: self.all || from_config(|c| c.all).unwrap_or(false),
            include_chains: self.chains || from_config(|c| c.chains).unwrap_or(false),
            color: !self.no_color && from_config(|c| c.color).unwrap_or(true),
        })
    }
}

impl Settings {
    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest::new(self.path.clone())
            .with_filter(self.filter.clone())
            .with_collate_all(self.collate_all)
            .with_chains(self.include_chains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("transitive-deps").chain(args.iter().copied()))
            .unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&[]).merge(None).unwrap();
        assert_eq!(
            settings,
            Settings {
                path: PathBuf::from("."),
                format: OutputFormat::Tree,
                output: None,
                filter: None,
                collate_all: false,
                include_chains: false,
                color: true,
            }
        );
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&[
            "-p", "src/App", "-f", "json", "-o", "deps.json", "-a", "--filter", "^System",
            "--chains", "--no-color", "-c", "custom.yml", "-vv", "-q",
        ]);

        assert_eq!(args.path, Some(PathBuf::from("src/App")));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.output, Some(PathBuf::from("deps.json")));
        assert!(args.all);
        assert_eq!(args.filter.as_deref(), Some("^System"));
        assert!(args.chains);
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.verbose, 2);
        assert!(args.quiet);
    }

    #[test]
    fn test_invalid_format_rejected_by_parser() {
        let result =
            Args::try_parse_from(["transitive-deps", "--format", "markdown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config = config("format: json\nfilter: Serilog\nall: true\nchains: true\ncolor: false\n");
        let settings = parse(&[]).merge(Some(&config)).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.filter.as_deref(), Some("Serilog"));
        assert!(settings.collate_all);
        assert!(settings.include_chains);
        assert!(!settings.color);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = config("format: json\nfilter: Serilog\n");
        let settings = parse(&["-f", "tree", "--filter", "^Azure", "--no-color"])
            .merge(Some(&config))
            .unwrap();

        assert_eq!(settings.format, OutputFormat::Tree);
        assert_eq!(settings.filter.as_deref(), Some("^Azure"));
        assert!(!settings.color);
    }

    #[test]
    fn test_invalid_config_format_is_error() {
        let config = config("format: xml\n");
        let err = parse(&[]).merge(Some(&config)).unwrap_err().to_string();
        assert!(err.contains("Invalid format: xml"));
    }

    #[test]
    fn test_to_request() {
        let settings = parse(&["-p", "App", "-a", "--chains", "--filter", "Json"])
            .merge(None)
            .unwrap();
        let request = settings.to_request();

        assert_eq!(request.path, PathBuf::from("App"));
        assert_eq!(request.filter.as_deref(), Some("Json"));
        assert!(request.collate_all);
        assert!(request.include_chains);
    }
}
