pub mod catalog;
pub mod children;
pub mod dependency;
pub mod dependency_records;
pub mod framework;
pub mod framework_id;
pub mod identifier;
pub mod package;
pub mod project;
pub mod projects;

pub use catalog::{CatalogEntry, Frontier, LibraryCatalog};
pub use children::{Children, Container};
pub use dependency::{Dependency, DependencyRef, Via};
pub use dependency_records::DependencyRecords;
pub use framework::Framework;
pub use framework_id::FrameworkId;
pub use identifier::{NodeOrdering, OrderingError};
pub use package::{PackageName, PackageVersion, UNRESOLVED_VERSION};
pub use project::Project;
pub use projects::Projects;
