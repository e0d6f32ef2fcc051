use super::*;
use crate::dependency_classification::domain::{
    CatalogEntry, DependencyRef, FrameworkId, LibraryCatalog,
};
use std::cell::RefCell;
use std::path::Path;

// Mock implementations for testing
struct MockAssetsReader {
    projects: Vec<(PathBuf, ProjectAssets)>,
}

impl MockAssetsReader {
    fn new(projects: Vec<ProjectAssets>) -> Self {
        Self {
            projects: projects
                .into_iter()
                .map(|p| {
                    let path = format!("/repo/{}/obj/project.assets.json", p.project_name);
                    (PathBuf::from(path), p)
                })
                .collect(),
        }
    }
}

impl AssetsReader for MockAssetsReader {
    fn discover_assets_files(&self, _root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.projects.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read_project_assets(&self, path: &Path) -> Result<ProjectAssets> {
        self.projects
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, assets)| assets.clone())
            .ok_or_else(|| anyhow::anyhow!("no assets at {}", path.display()))
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn framework(id: &str, libraries: &[(&str, &[&str])], direct: &[&str]) -> FrameworkAssets {
    let catalog: LibraryCatalog = libraries
        .iter()
        .map(|(name, deps)| {
            CatalogEntry::parse(name, "1.0.0", deps.iter().map(|d| d.to_string()).collect())
                .unwrap()
        })
        .collect();
    FrameworkAssets::new(
        FrameworkId::parse(id),
        catalog,
        direct.iter().map(|d| d.to_string()).collect(),
    )
}

fn run(projects: Vec<ProjectAssets>, request: AnalysisRequest) -> Result<AnalysisResponse> {
    let reporter = MockProgressReporter::default();
    let use_case = AnalyzeDependenciesUseCase::new(MockAssetsReader::new(projects), &reporter);
    use_case.execute(request)
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new(PathBuf::from("/repo"))
}

fn names(deps: &[DependencyRef]) -> Vec<String> {
    deps.iter().map(|d| d.identifier().to_string()).collect()
}

fn chain_project() -> ProjectAssets {
    ProjectAssets::new(
        "App",
        vec![framework(
            ".NETCoreApp,Version=v3.1",
            &[("A", &["B"]), ("B", &["C"]), ("C", &[])],
            &["A"],
        )],
    )
}

#[test]
fn test_execute_reports_transitive_only_by_default() {
    let response = run(vec![chain_project()], request()).unwrap();

    let projects = response.projects.sorted_children();
    assert_eq!(projects.len(), 1);
    let frameworks = projects[0].sorted_children();
    let deps = frameworks[0].sorted_children();
    assert_eq!(names(&deps), vec!["B", "C"]);
    assert!(deps.iter().all(|d| d.is_transitive()));

    assert_eq!(
        response.summary,
        AnalysisSummary {
            projects_scanned: 1,
            frameworks_analyzed: 1,
            direct_dependencies: 1,
            transitive_dependencies: 2,
            reported_dependencies: 2,
        }
    );
}

#[test]
fn test_execute_collate_all_includes_direct() {
    let response = run(vec![chain_project()], request().with_collate_all(true)).unwrap();

    let projects = response.projects.sorted_children();
    let frameworks = projects[0].sorted_children();
    let deps = frameworks[0].sorted_children();
    assert_eq!(names(&deps), vec!["A", "B", "C"]);
    assert!(!deps[0].is_transitive());
    assert_eq!(response.summary.direct_dependencies, 1);
    assert_eq!(response.summary.reported_dependencies, 3);
}

#[test]
fn test_execute_filter_pattern() {
    let response = run(
        vec![chain_project()],
        request().with_collate_all(true).with_filter(Some("^c$".to_string())),
    )
    .unwrap();

    let projects = response.projects.sorted_children();
    let frameworks = projects[0].sorted_children();
    assert_eq!(names(&frameworks[0].sorted_children()), vec!["C"]);
}

#[test]
fn test_execute_summary_counts_classification_before_filtering() {
    let response = run(
        vec![chain_project()],
        request().with_filter(Some("^c$".to_string())),
    )
    .unwrap();

    assert_eq!(
        response.summary,
        AnalysisSummary {
            projects_scanned: 1,
            frameworks_analyzed: 1,
            direct_dependencies: 1,
            transitive_dependencies: 2,
            reported_dependencies: 1,
        }
    );
}

#[test]
fn test_execute_classification_is_per_framework() {
    let project = ProjectAssets::new(
        "Lib",
        vec![
            framework("net8.0", &[("Json", &[]), ("Http", &["Json"])], &["Http", "Json"]),
            framework("netstandard2.0", &[("Json", &[]), ("Http", &["Json"])], &["Http"]),
        ],
    );
    let response = run(vec![project], request().with_collate_all(true)).unwrap();

    let projects = response.projects.sorted_children();
    let frameworks = projects[0].sorted_children();
    assert_eq!(frameworks.len(), 2);

    let json_in = |index: usize| {
        let deps = frameworks[index].sorted_children();
        let json = deps.iter().find(|d| d.identifier().as_str() == "Json").unwrap();
        json.is_transitive()
    };
    assert!(!json_in(0));
    assert!(json_in(1));
}

#[test]
fn test_execute_skips_unresolved_direct_references() {
    let project = ProjectAssets::new(
        "Lib",
        vec![framework(
            ".NETStandard,Version=v2.0",
            &[("Serilog", &[])],
            &["NETStandard.Library", "Serilog"],
        )],
    );
    let response = run(vec![project], request().with_collate_all(true)).unwrap();

    let projects = response.projects.sorted_children();
    let frameworks = projects[0].sorted_children();
    assert_eq!(names(&frameworks[0].sorted_children()), vec!["Serilog"]);
}

#[test]
fn test_execute_drops_projects_without_reported_dependencies() {
    let empty = ProjectAssets::new(
        "Tool",
        vec![framework("net8.0", &[("A", &[])], &["A"])],
    );
    let response = run(vec![empty, chain_project()], request()).unwrap();

    let projects = response.projects.sorted_children();
    let names: Vec<&str> = projects.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["App"]);
    assert_eq!(response.summary.projects_scanned, 2);
    assert_eq!(response.summary.frameworks_analyzed, 2);
}

#[test]
fn test_execute_projects_are_sorted() {
    let web = ProjectAssets::new("Web", chain_project().frameworks);
    let api = ProjectAssets::new("api", chain_project().frameworks);
    let response = run(vec![web, api], request()).unwrap();

    let projects = response.projects.sorted_children();
    let names: Vec<&str> = projects.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["api", "Web"]);
}

#[test]
fn test_execute_passes_include_chains() {
    let response = run(vec![chain_project()], request().with_chains(true)).unwrap();
    assert!(response.include_chains);
}

#[test]
fn test_execute_no_assets_files() {
    let err = run(vec![], request()).unwrap_err().to_string();
    assert!(err.contains("project.assets.json not found"));
    assert!(err.contains("dotnet restore"));
}

#[test]
fn test_execute_invalid_filter_fails_before_discovery() {
    let reporter = MockProgressReporter::default();
    let use_case = AnalyzeDependenciesUseCase::new(MockAssetsReader::new(vec![]), &reporter);

    let err = use_case
        .execute(request().with_filter(Some("(".to_string())))
        .unwrap_err()
        .to_string();
    assert!(err.contains("Invalid filter pattern"));
    assert!(reporter.messages.borrow().is_empty());
}

#[test]
fn test_execute_warns_about_unmatched_filter() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockAssetsReader::new(vec![chain_project()]), &reporter);

    let response = use_case
        .execute(request().with_filter(Some("^Azure".to_string())))
        .unwrap();

    assert!(!response.projects.has_children());
    let errors = reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'^Azure' did not match any dependencies"));
}

#[test]
fn test_execute_filter_hitting_only_direct_does_not_warn() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockAssetsReader::new(vec![chain_project()]), &reporter);

    let response = use_case
        .execute(request().with_filter(Some("^a$".to_string())))
        .unwrap();

    assert!(!response.projects.has_children());
    assert!(reporter.errors.borrow().is_empty());
}

#[test]
fn test_execute_reports_progress_messages() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockAssetsReader::new(vec![chain_project()]), &reporter);
    use_case.execute(request()).unwrap();

    let messages = reporter.messages.borrow();
    assert!(messages[0].contains("Looking for restore output in: /repo"));
    assert!(messages[1].contains("Found 1 restored project(s)"));
    assert!(messages
        .last()
        .unwrap()
        .contains("1 framework(s) in 1 project(s): 1 direct, 2 transitive, 2 reported"));
}
