use crate::error::{Error, Result};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use std::fmt;
use tracing::debug;

/// Opaque job identifier. The job API hands out integers, other sources use strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(i64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{}", n),
            JobId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for JobId {
    fn from(n: i64) -> Self {
        JobId::Number(n)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        JobId::Text(s.to_string())
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        JobId::Text(s)
    }
}

/// Requested and limited amounts of a single compute resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceSpec {
    #[serde(default, deserialize_with = "quantity")]
    pub requests: Option<String>,
    #[serde(default, deserialize_with = "quantity")]
    pub limits: Option<String>,
}

impl ResourceSpec {
    pub fn new(requests: Option<&str>, limits: Option<&str>) -> Self {
        Self {
            requests: requests.map(str::to_string),
            limits: limits.map(str::to_string),
        }
    }
}

/// accepts `"500m"` as well as `0.5`; numbers are shown the way the dashboard shows them
fn quantity<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<Quantity>::deserialize(deserializer)?.and_then(|quantity| match quantity {
            Quantity::Text(text) => Some(text),
            Quantity::Number(number) => number_text(&number),
        }),
    )
}

/// Zero counts as unset, whole numbers drop their fraction (`1.0` -> `1`, `1e3` -> `1000`).
fn number_text(number: &serde_json::Number) -> Option<String> {
    if let Some(n) = number.as_i64() {
        return (n != 0).then(|| n.to_string());
    }
    if let Some(n) = number.as_u64() {
        return Some(n.to_string());
    }
    // f64's Display already omits a zero fraction
    let n = number.as_f64()?;
    (n != 0.0).then(|| n.to_string())
}

/// Resource name -> optional spec, kept in insertion order.
///
/// A `None` entry is a resource the job API reported as `null`. Inserting a name that is
/// already present replaces its spec but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resources {
    entries: Vec<(String, Option<ResourceSpec>)>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: Option<ResourceSpec>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = spec,
            None => self.entries.push((name, spec)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Option<ResourceSpec>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, spec)| spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ResourceSpec>)> {
        self.entries
            .iter()
            .map(|(name, spec)| (name.as_str(), spec.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Option<ResourceSpec>)> for Resources {
    fn from_iter<I: IntoIterator<Item = (N, Option<ResourceSpec>)>>(iter: I) -> Self {
        let mut resources = Resources::new();
        for (name, spec) in iter {
            resources.insert(name, spec);
        }
        resources
    }
}

impl<'de> Deserialize<'de> for Resources {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ResourcesVisitor;

        impl<'de> Visitor<'de> for ResourcesVisitor {
            type Value = Resources;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of resource names to requests/limits")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Resources, A::Error> {
                let mut resources = Resources::new();
                while let Some((name, spec)) = map.next_entry::<String, Option<ResourceSpec>>()? {
                    resources.insert(name, spec);
                }
                Ok(resources)
            }
        }

        deserializer.deserialize_map(ResourcesVisitor)
    }
}

/// One job as reported by the job API. Read-only as far as the views are concerned.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    #[serde(alias = "uniqueName")]
    pub unique_name: String,
    pub role: String,
    #[serde(alias = "lastStatus")]
    pub last_status: String,
    #[serde(default)]
    pub resources: Option<Resources>,
    #[serde(default, alias = "startedAt")]
    pub started_at: Option<String>,
    #[serde(default, alias = "finishedAt")]
    pub finished_at: Option<String>,
}

impl JobRecord {
    pub fn new(
        id: impl Into<JobId>,
        unique_name: impl Into<String>,
        role: impl Into<String>,
        last_status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            unique_name: unique_name.into(),
            role: role.into(),
            last_status: last_status.into(),
            resources: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_timing(mut self, started_at: Option<&str>, finished_at: Option<&str>) -> Self {
        self.started_at = started_at.map(str::to_string);
        self.finished_at = finished_at.map(str::to_string);
        self
    }

    /// Decode a single job object.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Decode either one job object or an array of them.
pub fn decode_jobs(input: &str) -> Result<Vec<JobRecord>> {
    let input = input.trim_start();
    let jobs = match input.chars().next() {
        None => return Err(Error::Empty),
        Some('[') => serde_json::from_str(input)?,
        Some(_) => vec![JobRecord::from_json(input)?],
    };
    debug!(count = jobs.len(), "decoded job records");
    Ok(jobs)
}
