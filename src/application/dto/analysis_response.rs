use crate::dependency_classification::domain::Projects;

/// Counts gathered while analysing.
///
/// Direct and transitive counts cover every classified dependency,
/// whatever the filter kept; `reported_dependencies` is what was emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    /// Assets files read
    pub projects_scanned: usize,
    /// Target frameworks classified
    pub frameworks_analyzed: usize,
    /// Classified dependencies on the direct frontier
    pub direct_dependencies: usize,
    /// Classified dependencies reached only through other libraries
    pub transitive_dependencies: usize,
    /// Dependencies left after filtering
    pub reported_dependencies: usize,
}

impl AnalysisSummary {
    pub fn classified_dependencies(&self) -> usize {
        self.direct_dependencies + self.transitive_dependencies
    }
}

/// AnalysisResponse - Output of the dependency analysis use case
///
/// `projects` only holds projects that have at least one reported
/// dependency.
#[derive(Debug)]
pub struct AnalysisResponse {
    pub projects: Projects,
    pub summary: AnalysisSummary,
    pub include_chains: bool,
}

impl AnalysisResponse {
    pub fn new(projects: Projects, summary: AnalysisSummary, include_chains: bool) -> Self {
        Self {
            projects,
            summary,
            include_chains,
        }
    }
}
