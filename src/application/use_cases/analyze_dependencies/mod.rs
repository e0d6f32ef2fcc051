use crate::application::dto::{AnalysisRequest, AnalysisResponse, AnalysisSummary};
use crate::dependency_classification::domain::{Container, Framework, Frontier, Project, Projects};
use crate::dependency_classification::services::{
    DependencyFilter, ProvenanceWalker, TransitiveClassifier,
};
use crate::ports::outbound::{AssetsReader, FrameworkAssets, ProgressReporter, ProjectAssets};
use crate::shared::error::DepsError;
use crate::shared::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// AnalyzeDependenciesUseCase - Core use case for dependency classification
///
/// For every restored project found under the request path, and every
/// target framework of that project, resolves the direct references,
/// walks provenance over the resolved libraries, classifies them and
/// assembles the filtered result into the output model.
///
/// # Type Parameters
/// * `AR` - AssetsReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<AR, PR> {
    assets_reader: AR,
    progress_reporter: PR,
}

impl<AR, PR> AnalyzeDependenciesUseCase<AR, PR>
where
    AR: AssetsReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(assets_reader: AR, progress_reporter: PR) -> Self {
        Self {
            assets_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Returns an error if:
    /// - The filter pattern is invalid
    /// - No assets file can be found under the request path
    /// - An assets file cannot be read or parsed
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Validate the filter before touching the file system
        let filter = DependencyFilter::new(request.filter.as_deref(), request.collate_all)?;

        // Step 2: Locate restore output
        let assets_files = self.discover_assets_files(&request)?;

        // Step 3: Classify every project
        let total = assets_files.len();
        let mut projects = Projects::new(total);
        let mut summary = AnalysisSummary::default();

        for (index, path) in assets_files.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(&path.display().to_string()));

            let assets = self.assets_reader.read_project_assets(path)?;
            let project = Self::analyze_project(assets, &filter, &mut summary);
            summary.projects_scanned += 1;

            if !projects.add(project) {
                debug!(path = %path.display(), "project has nothing to report");
            }
        }
        self.progress_reporter.report_progress(total, total, None);

        // Step 4: Report outcome
        if let Some(pattern) = filter.unmatched_pattern() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter pattern '{}' did not match any dependencies.",
                pattern
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Analyzed {} framework(s) in {} project(s): {} direct, {} transitive, {} reported",
            summary.frameworks_analyzed,
            summary.projects_scanned,
            summary.direct_dependencies,
            summary.transitive_dependencies,
            summary.reported_dependencies
        ));

        Ok(AnalysisResponse::new(
            projects,
            summary,
            request.include_chains,
        ))
    }

    /// Finds the assets files to analyse, failing when there are none
    fn discover_assets_files(&self, request: &AnalysisRequest) -> Result<Vec<PathBuf>> {
        self.progress_reporter.report(&format!(
            "🔍 Looking for restore output in: {}",
            request.path.display()
        ));

        let assets_files = self.assets_reader.discover_assets_files(&request.path)?;
        if assets_files.is_empty() {
            return Err(DepsError::AssetsFileNotFound {
                path: request.path.clone(),
                suggestion: "No obj/project.assets.json was found under this path.\n   \
                     Run `dotnet restore` first, or point --path at a restored project."
                    .to_string(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "📖 Found {} restored project(s)",
            assets_files.len()
        ));
        Ok(assets_files)
    }

    /// Classifies every framework of one project
    fn analyze_project(
        assets: ProjectAssets,
        filter: &DependencyFilter,
        summary: &mut AnalysisSummary,
    ) -> Project {
        info!(
            project = %assets.project_name,
            frameworks = assets.frameworks.len(),
            "analyzing project"
        );

        let mut project = Project::new(assets.project_name, assets.frameworks.len());
        for framework_assets in assets.frameworks {
            let framework = Self::analyze_framework(framework_assets, filter, summary);
            summary.frameworks_analyzed += 1;
            project.add(framework);
        }
        project
    }

    /// Runs walk, classification and filtering for one framework
    ///
    /// Each call owns its records, so the same library can be direct in
    /// one framework and transitive in another.
    fn analyze_framework(
        assets: FrameworkAssets,
        filter: &DependencyFilter,
        summary: &mut AnalysisSummary,
    ) -> Framework {
        let (frontier, unresolved) = Frontier::resolve(&assets.direct_references, &assets.catalog);
        for reference in &unresolved {
            debug!(
                framework = %assets.id,
                reference = %reference,
                "direct reference has no resolved library, skipping"
            );
        }

        let records = ProvenanceWalker::walk(&assets.catalog);
        let classified = TransitiveClassifier::classify(&records, &assets.catalog, &frontier);
        for dependency in &classified {
            if frontier.contains(dependency.identifier()) {
                summary.direct_dependencies += 1;
            } else if dependency.is_transitive() {
                summary.transitive_dependencies += 1;
            }
        }

        let reported = filter.apply(classified);
        summary.reported_dependencies += reported.len();

        let mut framework = Framework::new(assets.id, reported.len());
        for dependency in reported {
            framework.add(dependency);
        }
        framework.retain_records(records);
        framework
    }
}

#[cfg(test)]
mod tests;
