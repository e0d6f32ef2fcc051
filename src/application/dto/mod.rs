/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod output_format;

pub use analysis_request::AnalysisRequest;
pub use analysis_response::{AnalysisResponse, AnalysisSummary};
pub use output_format::OutputFormat;
