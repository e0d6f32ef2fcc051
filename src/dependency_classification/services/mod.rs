mod dependency_filter;
mod provenance_walker;
mod transitive_classifier;

pub use dependency_filter::DependencyFilter;
pub use provenance_walker::ProvenanceWalker;
pub use transitive_classifier::TransitiveClassifier;
