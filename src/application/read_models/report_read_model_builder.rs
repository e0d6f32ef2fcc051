//! Builder for constructing DependencyReport from the classified projects

use super::report_read_model::{
    DependencyReport, DependencyView, FrameworkView, ProjectView, ReportMetadataView,
    ReportSummaryView, ViaView,
};
use crate::dependency_classification::domain::{
    Container, Dependency, DependencyRef, Framework, Project, Projects, Via,
};
use chrono::{DateTime, SecondsFormat, Utc};
use std::rc::Rc;

/// Upper bound on provenance chains listed for one dependency
pub const MAX_CHAINS_PER_DEPENDENCY: usize = 32;

/// Tool name recorded in report metadata
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version recorded in report metadata
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing DependencyReport from domain objects
///
/// Reads every level through `sorted_children()`, so the report is ordered
/// the same way regardless of discovery order.
pub struct DependencyReportBuilder;

impl DependencyReportBuilder {
    /// Builds the report, stamping it with the current time
    ///
    /// # Arguments
    /// * `projects` - Classified projects
    /// * `include_chains` - Whether to compute provenance chains for
    ///   transitive dependencies
    pub fn build(projects: &Projects, include_chains: bool) -> DependencyReport {
        Self::build_at(projects, include_chains, Utc::now())
    }

    /// Builds the report with an explicit generation time.
    pub fn build_at(
        projects: &Projects,
        include_chains: bool,
        generated_at: DateTime<Utc>,
    ) -> DependencyReport {
        let projects: Vec<ProjectView> = projects
            .sorted_children()
            .iter()
            .map(|project| Self::build_project(project, include_chains))
            .collect();

        DependencyReport {
            metadata: ReportMetadataView {
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
                timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
            summary: Self::summarize(&projects),
            projects,
        }
    }

    fn build_project(project: &Project, include_chains: bool) -> ProjectView {
        ProjectView {
            name: project.name().to_string(),
            frameworks: project
                .sorted_children()
                .iter()
                .map(|framework| Self::build_framework(framework, include_chains))
                .collect(),
        }
    }

    fn build_framework(framework: &Framework, include_chains: bool) -> FrameworkView {
        FrameworkView {
            name: framework.id().name().to_string(),
            version: framework.id().version().to_string(),
            display: framework.id().to_string(),
            dependencies: framework
                .sorted_children()
                .iter()
                .map(|dependency| Self::build_dependency(dependency, include_chains))
                .collect(),
        }
    }

    fn build_dependency(dependency: &DependencyRef, include_chains: bool) -> DependencyView {
        let chains = if include_chains && dependency.is_transitive() {
            provenance_chains(dependency, MAX_CHAINS_PER_DEPENDENCY)
        } else {
            Vec::new()
        };

        DependencyView {
            identifier: dependency.identifier().to_string(),
            version: dependency.version().to_string(),
            transitive: dependency.is_transitive(),
            via: dependency.via().iter().map(via_view).collect(),
            chains,
        }
    }

    fn summarize(projects: &[ProjectView]) -> ReportSummaryView {
        let mut summary = ReportSummaryView {
            projects: projects.len(),
            ..ReportSummaryView::default()
        };
        for framework in projects.iter().flat_map(|p| &p.frameworks) {
            summary.frameworks += 1;
            summary.dependencies += framework.dependencies.len();
            summary.transitive += framework
                .dependencies
                .iter()
                .filter(|d| d.transitive)
                .count();
        }
        summary
    }
}

fn via_view(via: &Via) -> ViaView {
    ViaView {
        identifier: via.identifier().to_string(),
        version: via.version().to_string(),
    }
}

/// One level of the upward chain search.
struct Frame {
    parents: Vec<Via>,
    next: usize,
    extended: bool,
}

impl Frame {
    fn new(dependency: &Dependency) -> Self {
        Self {
            parents: dependency.via(),
            next: 0,
            extended: false,
        }
    }
}

/// Lists provenance chains ending at `dependency`, outermost ancestor first
///
/// Follows via references upward depth-first. A chain ends at an ancestor
/// that is not transitive, has no parents, or whose parents are all already
/// on the current path. At most `limit` chains are returned.
pub(crate) fn provenance_chains(dependency: &DependencyRef, limit: usize) -> Vec<Vec<String>> {
    let mut chains = Vec::new();
    let mut path: Vec<DependencyRef> = vec![Rc::clone(dependency)];
    let mut stack = vec![Frame::new(dependency)];

    while chains.len() < limit {
        let Some(frame) = stack.last_mut() else {
            break;
        };

        if frame.next >= frame.parents.len() {
            if !frame.extended && path.len() > 1 {
                chains.push(render_chain(&path));
            }
            stack.pop();
            path.pop();
            continue;
        }

        let via = &frame.parents[frame.next];
        frame.next += 1;
        let Some(parent) = via.record() else {
            continue;
        };
        if path.iter().any(|on_path| Rc::ptr_eq(on_path, &parent)) {
            continue;
        }
        frame.extended = true;

        let is_origin = !parent.is_transitive() || !parent.has_via();
        path.push(parent);
        if is_origin {
            chains.push(render_chain(&path));
            path.pop();
        } else if let Some(top) = path.last() {
            stack.push(Frame::new(top));
        }
    }

    chains
}

fn render_chain(path: &[DependencyRef]) -> Vec<String> {
    path.iter().rev().map(|record| record.to_string()).collect()
}
