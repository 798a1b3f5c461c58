// SPDX-License-Identifier: MPL-2.0
//! Job listings and career resources shown on the board.
//!
//! The catalog is embedded at build time from `assets/catalog/jobs.toml`.
//! There is no remote data source.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const CATALOG_FILE: &str = "jobs.toml";

/// Category a job is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Internship,
    FullTime,
    PartTime,
    Remote,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Internship,
        Category::FullTime,
        Category::PartTime,
        Category::Remote,
    ];

    /// Stable identifier, as written in the catalog file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Internship => "internship",
            Category::FullTime => "full-time",
            Category::PartTime => "part-time",
            Category::Remote => "remote",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Internship => "filter-internship",
            Category::FullTime => "filter-full-time",
            Category::PartTime => "filter-part-time",
            Category::Remote => "filter-remote",
        }
    }
}

/// Filter applied to the job list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobFilter {
    #[default]
    All,
    Category(Category),
}

impl JobFilter {
    /// All filters in display order.
    #[must_use]
    pub fn all() -> Vec<JobFilter> {
        std::iter::once(JobFilter::All)
            .chain(Category::ALL.into_iter().map(JobFilter::Category))
            .collect()
    }

    /// Returns true if `job` is shown under this filter.
    #[must_use]
    pub fn matches(self, job: &Job) -> bool {
        match self {
            JobFilter::All => true,
            JobFilter::Category(category) => job.category == category,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JobFilter::All => "all",
            JobFilter::Category(category) => category.as_str(),
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            JobFilter::All => "filter-all",
            JobFilter::Category(category) => category.i18n_key(),
        }
    }
}

impl fmt::Display for JobFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: Category,
    #[serde(default)]
    pub salary: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A career resource link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    jobs: Vec<Job>,
    #[serde(default)]
    resources: Vec<Resource>,
}

impl Catalog {
    /// Parses a catalog from TOML, rejecting duplicate or empty IDs.
    pub fn parse(source: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(source).map_err(|err| Error::Catalog(err.to_string()))?;

        let mut seen = HashSet::new();
        for id in catalog
            .jobs
            .iter()
            .map(|job| job.id.as_str())
            .chain(catalog.resources.iter().map(|res| res.id.as_str()))
        {
            if id.trim().is_empty() {
                return Err(Error::Catalog("entry with empty id".to_string()));
            }
            if !seen.insert(id) {
                return Err(Error::Catalog(format!("duplicate id: {id}")));
            }
        }

        Ok(catalog)
    }

    /// Loads the catalog embedded in the binary.
    pub fn load_embedded() -> Result<Self> {
        let file = Asset::get(CATALOG_FILE)
            .ok_or_else(|| Error::Catalog(format!("{CATALOG_FILE} is not embedded")))?;
        let source = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| Error::Catalog(err.to_string()))?;
        Self::parse(source)
    }

    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    #[must_use]
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|res| res.id == id)
    }

    /// Jobs shown under `filter`, in catalog order.
    pub fn filtered(&self, filter: JobFilter) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(move |job| filter.matches(job))
    }
}
