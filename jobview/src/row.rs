//! The dashboard row for a single job.
//!
//! A row is a pure function of its props: the status class and the resource lines are
//! derived again on every render and nothing is cached between renders.

use crate::status::{SeverityClassifier, StatusClassifier};
use crate::timing::{RunTimingPanel, TimingPanel};
use crate::types::{JobRecord, Resources};
use crate::view::{icon, meta_info, Element, Node};
use std::{fmt, sync::Arc};

/// Caller-owned request to delete the job a row shows.
///
/// The row accepts it but never calls it; the surrounding view decides what triggers a
/// deletion. Two handles are equal only if they wrap the same callback.
#[derive(Clone)]
pub struct OnDelete(Arc<dyn Fn() + Send + Sync>);

impl OnDelete {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl Default for OnDelete {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for OnDelete {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OnDelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnDelete")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JobRowProps<'a> {
    pub job: &'a JobRecord,
    pub on_delete: OnDelete,
}

impl<'a> JobRowProps<'a> {
    pub fn new(job: &'a JobRecord, on_delete: OnDelete) -> Self {
        Self { job, on_delete }
    }
}

/// One `name: requests - limits` entry of the resource strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceLine {
    pub name: String,
    /// `"<requests> - <limits>"`, a missing side is left empty
    pub value: String,
}

impl fmt::Display for ResourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceStrip {
    /// the job reported no resources at all, nothing is rendered
    Absent,
    /// non-null entries in insertion order; may be empty
    Present(Vec<ResourceLine>),
}

impl ResourceStrip {
    pub fn from_resources(resources: Option<&Resources>) -> Self {
        match resources {
            None => ResourceStrip::Absent,
            Some(resources) => ResourceStrip::Present(
                resources
                    .iter()
                    .filter_map(|(name, spec)| {
                        spec.map(|spec| ResourceLine {
                            name: name.to_string(),
                            value: format!(
                                "{} - {}",
                                spec.requests.as_deref().unwrap_or(""),
                                spec.limits.as_deref().unwrap_or("")
                            ),
                        })
                    })
                    .collect(),
            ),
        }
    }
}

/// Renders [`JobRowProps`] into a two-column row: job details on the left, timing on the
/// right.
#[derive(Clone, Debug, Default)]
pub struct JobRowView<C = SeverityClassifier, T = RunTimingPanel> {
    classifier: C,
    timing: T,
}

impl<C: StatusClassifier, T: TimingPanel> JobRowView<C, T> {
    pub fn new(classifier: C, timing: T) -> Self {
        Self { classifier, timing }
    }

    pub fn status_class(&self, status: &str) -> String {
        self.classifier.classify(status)
    }

    pub fn render(&self, props: &JobRowProps<'_>) -> Node {
        let job = props.job;

        let title = Element::new("span")
            .class("title")
            .child(icon("tasks"))
            .text(job.unique_name.as_str())
            .child(
                Element::new("span")
                    .class(format!(
                        "status alert alert-{}",
                        self.status_class(&job.last_status)
                    ))
                    .text(job.last_status.as_str()),
            );

        let meta = Element::new("div")
            .class("meta")
            .child(meta_info("certificate", "Role:", job.role.as_str()))
            .child(meta_info("circle", "id:", job.id.to_string()));

        let mut details = Element::new("div")
            .class("col-md-10 block")
            .child(title)
            .child(meta);

        match ResourceStrip::from_resources(job.resources.as_ref()) {
            ResourceStrip::Absent => {}
            ResourceStrip::Present(lines) => {
                details = details.child(
                    Element::new("div").class("meta meta-resources").children(
                        lines.into_iter().map(|line| {
                            Node::from(meta_info(
                                "microchip",
                                &format!("{}:", line.name),
                                line.value,
                            ))
                        }),
                    ),
                );
            }
        }

        let timing = Element::new("div").class("col-md-2 block").child(
            self.timing
                .render(job.started_at.as_deref(), job.finished_at.as_deref()),
        );

        Element::new("div")
            .class("row")
            .child(details)
            .child(timing)
            .into()
    }
}
