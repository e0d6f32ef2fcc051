use std::path::PathBuf;

/// AnalysisRequest - Input of the dependency analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Project directory, project file, solution tree or assets file
    pub path: PathBuf,
    /// Regular expression selecting package ids to report
    pub filter: Option<String>,
    /// Report direct dependencies as well as transitive ones
    pub collate_all: bool,
    /// Compute provenance chains for transitive dependencies
    pub include_chains: bool,
}

impl AnalysisRequest {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            filter: None,
            collate_all: false,
            include_chains: false,
        }
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_collate_all(mut self, collate_all: bool) -> Self {
        self.collate_all = collate_all;
        self
    }

    pub fn with_chains(mut self, include_chains: bool) -> Self {
        self.include_chains = include_chains;
        self
    }
}
