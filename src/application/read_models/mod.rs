//! Read models for CQRS-lite pattern
//!
//! View-optimized, serializable snapshots of the classified projects.
//! Formatters only ever see these.

mod report_read_model;
mod report_read_model_builder;

pub use report_read_model::{
    DependencyReport, DependencyView, FrameworkView, ProjectView, ReportMetadataView,
    ReportSummaryView, ViaView,
};
pub use report_read_model_builder::{DependencyReportBuilder, MAX_CHAINS_PER_DEPENDENCY};
