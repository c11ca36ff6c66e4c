use clap::{ArgEnum, Parser, Subcommand};
use std::path::PathBuf;

/// Render job records as dashboard rows
#[derive(Debug, Parser)]
#[clap(name = "jobview")]
pub struct ArgParser {
    /// Log filter, e.g. `debug` or `jobview=trace`
    #[clap(long = "log", env = "JOBVIEW_LOG", default_value = "info")]
    pub log: String,
    /// The sub-command to use
    #[clap(subcommand)]
    pub sub_command: SubCommand,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Subcommand)]
pub enum SubCommand {
    /// render one row per job record
    Render {
        /// how to print each row
        #[clap(long, arg_enum, default_value = "html")]
        format: OutputFormat,

        /// JSON file holding a job object or an array of them, stdin when omitted or `-`
        input: Option<PathBuf>,
    },
    /// print the display class for a job status
    Classify {
        /// status token, e.g. `running`
        status: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub enum OutputFormat {
    /// painted html markup
    Html,
    /// the render tree as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults_to_html_on_stdin() {
        let args = ArgParser::try_parse_from(["jobview", "render"]).expect("parse failed");
        assert_eq!(
            args.sub_command,
            SubCommand::Render {
                format: OutputFormat::Html,
                input: None,
            }
        );
    }

    #[test]
    fn render_with_format_and_file() {
        let args = ArgParser::try_parse_from([
            "jobview",
            "--log",
            "debug",
            "render",
            "--format",
            "json",
            "jobs.json",
        ])
        .expect("parse failed");
        assert_eq!(args.log, "debug");
        assert_eq!(
            args.sub_command,
            SubCommand::Render {
                format: OutputFormat::Json,
                input: Some(PathBuf::from("jobs.json")),
            }
        );
    }

    #[test]
    fn classify_requires_status() {
        assert!(ArgParser::try_parse_from(["jobview", "classify"]).is_err());
        let args =
            ArgParser::try_parse_from(["jobview", "classify", "failed"]).expect("parse failed");
        assert_eq!(
            args.sub_command,
            SubCommand::Classify {
                status: "failed".into()
            }
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(ArgParser::try_parse_from(["jobview", "render", "--format", "pdf"]).is_err());
    }
}
