use crate::arg_parser::OutputFormat;
use jobview::{decode_jobs, markup, JobRowProps, JobRowView, OnDelete};
use std::{error, path::Path};
use tokio::io::AsyncReadExt;
use tracing::{debug, error, info};

type Result<T> = std::result::Result<T, Box<dyn error::Error>>;

#[derive(Default)]
pub struct DashboardCli {
    view: JobRowView,
}

impl DashboardCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read job records from `input`, or stdin when there is none.
    pub async fn read_input(&self, input: Option<&Path>) -> Result<String> {
        match input {
            Some(path) if path != Path::new("-") => {
                debug!(path = %path.display(), "reading job records");
                let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
                    error!(path = %path.display(), error = %err, "failed to read job records");
                    format!("failed to read {}: {}", path.display(), err)
                })?;
                Ok(raw)
            }
            _ => {
                debug!("reading job records from stdin");
                let mut raw = String::new();
                tokio::io::stdin().read_to_string(&mut raw).await?;
                Ok(raw)
            }
        }
    }

    /// Render every job in `raw`, one painted row per entry.
    pub fn render_jobs(&self, raw: &str, format: OutputFormat) -> Result<Vec<String>> {
        let jobs = decode_jobs(raw)?;
        // nothing in this surface deletes jobs
        let on_delete = OnDelete::default();
        let mut rows = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let row = self.view.render(&JobRowProps::new(job, on_delete.clone()));
            let painted = match format {
                OutputFormat::Html => markup::to_html(&row),
                OutputFormat::Json => serde_json::to_string(&row)?,
            };
            rows.push(painted);
        }
        info!(count = rows.len(), "rendered job rows");
        Ok(rows)
    }

    pub fn classify(&self, status: &str) -> String {
        self.view.status_class(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JOBS: &str = r#"[
        {"id": 1, "unique_name": "a.b.jobs.1", "role": "master", "last_status": "succeeded",
         "resources": {"cpu": {"requests": "1", "limits": "2"}, "memory": null}},
        {"id": 2, "unique_name": "a.b.jobs.2", "role": "worker", "last_status": "running"}
    ]"#;

    #[tokio::test]
    async fn renders_file_as_html() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(JOBS.as_bytes()).expect("write jobs");

        let cli = DashboardCli::new();
        let raw = cli.read_input(Some(file.path())).await.expect("read failed");
        let rows = cli.render_jobs(&raw, OutputFormat::Html).expect("render failed");

        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("alert-success"));
        assert!(rows[0].contains(r#"<span class="title">cpu:</span>1 - 2</span>"#));
        assert!(!rows[0].contains("memory"));
        assert!(rows[1].contains("alert-info"));
        assert!(!rows[1].contains("meta-resources"));
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let cli = DashboardCli::new();
        let err = cli
            .read_input(Some(Path::new("/nonexistent/jobs.json")))
            .await
            .expect_err("read should fail");
        assert!(err.to_string().contains("/nonexistent/jobs.json"));
    }

    #[test]
    fn renders_json_tree() {
        let cli = DashboardCli::new();
        let rows = cli.render_jobs(JOBS, OutputFormat::Json).expect("render failed");
        let tree: serde_json::Value = serde_json::from_str(&rows[1]).expect("not json");
        assert_eq!(tree["kind"], "element");
        assert_eq!(tree["tag"], "div");
        assert_eq!(tree["attrs"][0][1], "row");
    }

    #[test]
    fn malformed_input_is_an_error() {
        let cli = DashboardCli::new();
        assert!(cli.render_jobs("{\"id\": 1}", OutputFormat::Html).is_err());
        assert!(cli.render_jobs("", OutputFormat::Html).is_err());
    }

    #[test]
    fn classify_uses_default_classifier() {
        let cli = DashboardCli::new();
        assert_eq!(cli.classify("failed"), "danger");
        assert_eq!(cli.classify("whatever"), "info");
        assert_eq!(DashboardCli::default().classify("done"), "success");
    }
}
