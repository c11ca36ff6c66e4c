use crate::view::{meta_info, Element, Node};
use chrono::{DateTime, Utc};

/// Renders the start/finish timing of a job run.
pub trait TimingPanel {
    fn render(&self, started_at: Option<&str>, finished_at: Option<&str>) -> Node;
}

impl<F> TimingPanel for F
where
    F: Fn(Option<&str>, Option<&str>) -> Node,
{
    fn render(&self, started_at: Option<&str>, finished_at: Option<&str>) -> Node {
        self(started_at, finished_at)
    }
}

/// Default timing panel: start, finish and elapsed time.
///
/// Never reads the clock, so the same timestamps always render the same way.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunTimingPanel;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl TimingPanel for RunTimingPanel {
    fn render(&self, started_at: Option<&str>, finished_at: Option<&str>) -> Node {
        let mut meta = Element::new("div").class("meta");
        if let Some(started_at) = started_at {
            meta = meta.child(meta_info("clock-o", "Started:", display_timestamp(started_at)));
        }
        if let Some(finished_at) = finished_at {
            meta = meta.child(meta_info(
                "flag-checkered",
                "Finished:",
                display_timestamp(finished_at),
            ));
        }
        if let (Some(started_at), Some(finished_at)) = (started_at, finished_at) {
            if let Some(took) = elapsed(started_at, finished_at) {
                meta = meta.child(meta_info("hourglass", "Took:", took));
            }
        }
        meta.into()
    }
}

fn parse(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// RFC 3339 timestamps are shown in UTC, anything else verbatim.
pub fn display_timestamp(timestamp: &str) -> String {
    match parse(timestamp) {
        Some(t) => t.format(TIMESTAMP_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

/// `None` unless both parse and the run did not end before it started.
pub fn elapsed(started_at: &str, finished_at: &str) -> Option<String> {
    let seconds = (parse(finished_at)? - parse(started_at)?).num_seconds();
    if seconds < 0 {
        return None;
    }
    let (hours, minutes, seconds) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    let took = if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    };
    Some(took)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::to_html;

    #[test]
    fn full_run() {
        let node = RunTimingPanel.render(
            Some("2018-03-01T10:00:00+01:00"),
            Some("2018-03-01T10:02:05+01:00"),
        );
        assert_eq!(
            node.text_content(),
            "Started:2018-03-01 09:00:00Finished:2018-03-01 09:02:05Took:2m 5s"
        );
    }

    #[test]
    fn running_job_has_no_finish() {
        let node = RunTimingPanel.render(Some("2018-03-01T10:00:00Z"), None);
        assert_eq!(
            to_html(&node),
            concat!(
                r#"<div class="meta"><span class="meta-info">"#,
                r#"<i class="fa fa-clock-o icon" aria-hidden="true"></i>"#,
                r#"<span class="title">Started:</span>2018-03-01 10:00:00</span></div>"#
            )
        );
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(
            to_html(&RunTimingPanel.render(None, None)),
            r#"<div class="meta"></div>"#
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        let node = RunTimingPanel.render(Some("yesterday"), Some("today"));
        assert_eq!(node.text_content(), "Started:yesterdayFinished:today");
    }

    #[test]
    fn elapsed_formats() {
        assert_eq!(
            elapsed("2018-03-01T10:00:00Z", "2018-03-01T10:00:45Z").as_deref(),
            Some("45s")
        );
        assert_eq!(
            elapsed("2018-03-01T10:00:00Z", "2018-03-01T10:02:00Z").as_deref(),
            Some("2m 0s")
        );
        assert_eq!(
            elapsed("2018-03-01T10:00:00Z", "2018-03-01T11:02:03Z").as_deref(),
            Some("1h 2m 3s")
        );
        assert_eq!(elapsed("2018-03-01T10:00:00Z", "2018-03-01T09:00:00Z"), None);
        assert_eq!(elapsed("nope", "2018-03-01T09:00:00Z"), None);
    }
}
