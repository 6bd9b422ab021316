//! A single `<url>` entry and its optional metadata.

use super::ChangeFrequency;
use chrono::NaiveDate;
use url::Url;

/// Optional per-page metadata.
///
/// Every field is independently optional, so a missing priority is never
/// confused with a priority of `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metadata {
    last_modification: Option<NaiveDate>,
    change_frequency: Option<ChangeFrequency>,
    priority: Option<f32>,
}

impl Metadata {
    /// Metadata with every field absent.
    pub const EMPTY: Self = Self {
        last_modification: None,
        change_frequency: None,
        priority: None,
    };

    pub const fn new(
        last_modification: Option<NaiveDate>,
        change_frequency: Option<ChangeFrequency>,
        priority: Option<f32>,
    ) -> Self {
        Self {
            last_modification,
            change_frequency,
            priority,
        }
    }

    pub const fn with_last_modification(mut self, date: NaiveDate) -> Self {
        self.last_modification = Some(date);
        self
    }

    pub const fn with_change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.change_frequency = Some(frequency);
        self
    }

    /// Set the priority. The value is kept as-is, even outside `[0.0, 1.0]`.
    pub const fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub const fn last_modification(&self) -> Option<NaiveDate> {
        self.last_modification
    }

    pub const fn change_frequency(&self) -> Option<ChangeFrequency> {
        self.change_frequency
    }

    pub const fn priority(&self) -> Option<f32> {
        self.priority
    }

    pub const fn is_empty(&self) -> bool {
        self.last_modification.is_none()
            && self.change_frequency.is_none()
            && self.priority.is_none()
    }
}

/// One page in a sitemap.
///
/// The location is an absolute [`Url`]; it is rendered exactly as the `Url`
/// serializes and is not re-validated.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    location: Url,
    metadata: Metadata,
}

impl UrlEntry {
    /// Entry with no metadata; only `<loc>` is rendered.
    pub fn new(location: Url) -> Self {
        Self {
            location,
            metadata: Metadata::EMPTY,
        }
    }

    pub fn with_metadata(location: Url, metadata: Metadata) -> Self {
        Self { location, metadata }
    }

    pub fn with_last_modification(mut self, date: NaiveDate) -> Self {
        self.metadata = self.metadata.with_last_modification(date);
        self
    }

    pub fn with_change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.metadata = self.metadata.with_change_frequency(frequency);
        self
    }

    pub fn with_priority(mut self, priority: f32) -> Self {
        self.metadata = self.metadata.with_priority(priority);
        self
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
