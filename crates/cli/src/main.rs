use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use swasthya_core::{
    config::reports_url_from_env_value, load_once, render, CoreConfig, DisplayTimestamp,
    DisplayZone, FileReportSource, HttpReportSource, PageShell, RenderFormat, ReportSource,
    Severity, ViewState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swasthya")]
#[command(about = "SwasthyaSetu health reports CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch reports from the configured endpoint and print them
    Reports {
        /// Print a full HTML page instead of text
        #[arg(long)]
        html: bool,
        /// Override SWASTHYA_REPORTS_URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Render a saved reports JSON file
    RenderFile {
        /// Path to a JSON file holding one report or a list of reports
        path: PathBuf,
        /// Print a full HTML page instead of text
        #[arg(long)]
        html: bool,
    },
    /// Show the category and badge style for a severity value
    Classify {
        /// Raw severity, e.g. "Severe"
        severity: String,
    },
    /// Format a timestamp the way report cards show it
    FormatDate {
        /// Raw timestamp, e.g. "2024-01-02T10:00:00Z"
        value: String,
    },
    /// Print the configured reports endpoint
    Endpoint,
}

fn format_for(html: bool) -> RenderFormat {
    if html {
        RenderFormat::Html
    } else {
        RenderFormat::Text
    }
}

/// Mount one view over `source` and render its settled state.
///
/// Returns the output and whether the view ended in the error state.
async fn render_source<S>(source: S, zone: DisplayZone, format: RenderFormat) -> (String, bool)
where
    S: ReportSource + 'static,
{
    let state = load_once(Arc::new(source), zone).await;
    let body = render::render(&state, zone, format);
    let output = match format {
        RenderFormat::Html => PageShell::default().wrap(&body),
        RenderFormat::Text => body,
    };
    (output, matches!(state, ViewState::Error(_)))
}

fn classify_line(raw: &str) -> String {
    let severity = Severity::classify(raw);
    format!(
        "{} {} ({})",
        Severity::badge_label(raw),
        severity,
        severity.style_class()
    )
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("swasthya_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Reports { html, url }) => {
            let mut cfg = CoreConfig::from_env()?;
            if let Some(url) = url {
                cfg = cfg.with_reports_url(reports_url_from_env_value(Some(url))?)?;
            }
            let source = HttpReportSource::from_config(&cfg)?;
            let (output, failed) =
                render_source(source, cfg.display_zone(), format_for(html)).await;
            println!("{output}");
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::RenderFile { path, html }) => {
            let cfg = CoreConfig::from_env()?;
            let source = FileReportSource::new(path);
            let (output, failed) =
                render_source(source, cfg.display_zone(), format_for(html)).await;
            println!("{output}");
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Classify { severity }) => {
            println!("{}", classify_line(&severity));
        }
        Some(Commands::FormatDate { value }) => {
            let cfg = CoreConfig::from_env()?;
            println!("{}", DisplayTimestamp::format(&value, cfg.display_zone()));
        }
        Some(Commands::Endpoint) => {
            let cfg = CoreConfig::from_env()?;
            println!("{}", cfg.reports_url());
        }
        None => {
            println!("Use --help for usage");
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_reports_flags() {
        let cli = Cli::try_parse_from(["swasthya", "reports", "--html", "--url", "http://x/y"])
            .expect("parse");
        match cli.command {
            Some(Commands::Reports { html, url }) => {
                assert!(html);
                assert_eq!(url.as_deref(), Some("http://x/y"));
            }
            _ => panic!("expected reports command"),
        }
    }

    #[test]
    fn classify_line_shows_label_and_style() {
        assert_eq!(
            classify_line("Severe"),
            "SEVERE severe (bg-red-100 text-red-800)"
        );
        assert_eq!(
            classify_line("critical"),
            "CRITICAL unknown (bg-gray-100 text-gray-800)"
        );
    }

    #[tokio::test]
    async fn renders_file_as_text() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"{{"village": "Rampur", "householdId": "H1", "patientCount": 0,
                "onsetDate": "2024-01-01", "severity": "mild",
                "reportDate": "2024-01-02T10:00:00Z"}}"#
        )
        .expect("write");

        let source = FileReportSource::new(file.path());
        let (output, failed) = render_source(source, DisplayZone::Utc, RenderFormat::Text).await;

        assert!(!failed);
        assert!(output.contains("Rampur"));
        assert!(output.contains("MILD"));
        assert!(output.contains("Jan 2, 2024, 10:00 AM"));
    }

    #[tokio::test]
    async fn renders_file_as_html_page() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "[]").expect("write");

        let source = FileReportSource::new(file.path());
        let (output, failed) = render_source(source, DisplayZone::Utc, RenderFormat::Html).await;

        assert!(!failed);
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("No reports available at the moment."));
    }

    #[tokio::test]
    async fn missing_file_is_an_error_view() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = FileReportSource::new(dir.path().join("missing.json"));
        let (output, failed) = render_source(source, DisplayZone::Utc, RenderFormat::Text).await;

        assert!(failed);
        assert!(output.contains("Error loading reports"));
    }
}
