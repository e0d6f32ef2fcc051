//! transitive-deps - dependency classification for restored .NET projects
//!
//! Reads the `obj/project.assets.json` written by `dotnet restore`, works out
//! which packages each target framework references directly and which only
//! arrive transitively, and records the parents each transitive package came
//! in through. Follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_classification`): catalog, records,
//!   containers and the pure walk/classify/filter services
//! - **Application Layer** (`application`): the use case, DTOs, read models
//!   and factories
//! - **Ports** (`ports`): interfaces the application core depends on
//! - **Adapters** (`adapters`): filesystem, console and formatter
//!   implementations of the ports
//! - **Shared** (`shared`): error types, the `Result` alias and security checks
//!
//! # Example
//!
//! ```no_run
//! use transitive_deps::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case =
//!     AnalyzeDependenciesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = AnalysisRequest::new(PathBuf::from("src/App")).with_collate_all(true);
//! let response = use_case.execute(request)?;
//!
//! let report = DependencyReportBuilder::build(&response.projects, response.include_chains);
//! println!("{}", TreeFormatter::new(false).format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_classification;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, AnalysisSummary, OutputFormat,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{DependencyReport, DependencyReportBuilder};
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::dependency_classification::domain::{
        CatalogEntry, Container, Dependency, DependencyRef, Framework, FrameworkId,
        LibraryCatalog, PackageName, PackageVersion, Project, Projects, Via,
    };
    pub use crate::dependency_classification::services::{
        DependencyFilter, ProvenanceWalker, TransitiveClassifier,
    };
    pub use crate::ports::outbound::{
        AssetsReader, FrameworkAssets, OutputPresenter, ProgressReporter, ProjectAssets,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
