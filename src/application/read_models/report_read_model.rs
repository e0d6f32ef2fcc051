//! Dependency report read model
//!
//! Plain data mirroring Projects → Project → Framework → Dependency in
//! sorted order. Serialized as-is by the JSON formatter.

use serde::Serialize;

/// Root of the read model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    pub metadata: ReportMetadataView,
    pub summary: ReportSummaryView,
    pub projects: Vec<ProjectView>,
}

/// When and by what the report was generated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Counts over the reported dependencies only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryView {
    pub projects: usize,
    pub frameworks: usize,
    pub dependencies: usize,
    pub transitive: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub name: String,
    pub frameworks: Vec<FrameworkView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkView {
    /// Framework identifier, e.g. `.NETCoreApp`
    pub name: String,
    /// Framework version without the `v` prefix; empty for short monikers
    pub version: String,
    /// Original framework string, e.g. `.NETCoreApp,Version=v3.1`
    pub display: String,
    pub dependencies: Vec<DependencyView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyView {
    pub identifier: String,
    pub version: String,
    pub transitive: bool,
    /// Libraries that directly require this one, sorted
    pub via: Vec<ViaView>,
    /// Provenance chains from a direct reference down to this dependency.
    /// Each chain lists `Name Version` entries, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chains: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViaView {
    pub identifier: String,
    pub version: String,
}

impl std::fmt::Display for ViaView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.identifier, self.version)
    }
}
