use crate::application::read_models::{DependencyReport, DependencyView, FrameworkView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

const INDENT: &str = "  ";

const EMPTY_REPORT: &str = "No dependencies to report.";

/// TreeFormatter adapter rendering the report as an indented console tree
///
/// ```text
/// App
///   .NETCoreApp,Version=v3.1
///     Serilog.Sinks.Console 4.0.1
///     Serilog 2.10.0 (transitive) via Serilog.Sinks.Console
/// ```
///
/// Transitive dependencies are highlighted when color is enabled.
pub struct TreeFormatter {
    color: bool,
}

impl TreeFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_framework(&self, out: &mut String, framework: &FrameworkView) -> std::fmt::Result {
        writeln!(
            out,
            "{}{}",
            INDENT,
            self.paint(&framework.display, Style::new().cyan())
        )?;
        for dependency in &framework.dependencies {
            self.write_dependency(out, dependency)?;
        }
        Ok(())
    }

    fn write_dependency(&self, out: &mut String, dependency: &DependencyView) -> std::fmt::Result {
        let label = format!("{} {}", dependency.identifier, dependency.version);
        let prefix = INDENT.repeat(2);

        if !dependency.transitive {
            return writeln!(out, "{}{}", prefix, label);
        }

        let via = dependency
            .via
            .iter()
            .map(|parent| parent.identifier.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "{}{} {} {}",
            prefix,
            self.paint(&label, Style::new().yellow().bold()),
            self.paint("(transitive)", Style::new().yellow()),
            self.paint(&format!("via {}", via), Style::new().dimmed())
        )?;

        for chain in &dependency.chains {
            writeln!(
                out,
                "{}{}↳ {}",
                prefix,
                INDENT,
                self.paint(&chain.join(" → "), Style::new().dimmed())
            )?;
        }
        Ok(())
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for TreeFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        if report.projects.is_empty() {
            return Ok(format!("{}\n", EMPTY_REPORT));
        }

        let mut out = String::new();
        for project in &report.projects {
            writeln!(out, "{}", self.paint(&project.name, Style::new().bold()))?;
            for framework in &project.frameworks {
                self.write_framework(&mut out, framework)?;
            }
        }

        let summary = &report.summary;
        writeln!(
            out,
            "\n{} project(s), {} framework(s), {} dependencies ({} transitive)",
            summary.projects, summary.frameworks, summary.dependencies, summary.transitive
        )?;
        Ok(out)
    }
}
