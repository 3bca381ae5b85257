use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Sentinel accepted by facet filters to mean "no constraint".
pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Text,
    Image,
    Video,
    Code,
    Audio,
    Productivity,
    #[serde(rename = "3D")]
    ThreeD,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Text,
        Category::Image,
        Category::Video,
        Category::Code,
        Category::Audio,
        Category::Productivity,
        Category::ThreeD,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Image => "Image",
            Category::Video => "Video",
            Category::Code => "Code",
            Category::Audio => "Audio",
            Category::Productivity => "Productivity",
            Category::ThreeD => "3D",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownLabel {
                kind: "category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pricing {
    Free,
    Freemium,
    Paid,
    Enterprise,
}

impl Pricing {
    pub const ALL: [Pricing; 4] = [
        Pricing::Free,
        Pricing::Freemium,
        Pricing::Paid,
        Pricing::Enterprise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Pricing::Free => "Free",
            Pricing::Freemium => "Freemium",
            Pricing::Paid => "Paid",
            Pricing::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pricing {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pricing::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| UnknownLabel {
                kind: "pricing",
                value: s.to_string(),
            })
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub category: Category,
    pub pricing: Pricing,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    pub website_url: Url,
    pub image_url: Url,
    #[serde(default)]
    pub tags: Vec<String>,
    pub launch_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Tool {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Host part of the website, for compact display.
    pub fn website_host(&self) -> &str {
        self.website_url.host_str().unwrap_or(self.website_url.as_str())
    }
}

/// An equality filter over a closed enumeration, with an "All" sentinel.
///
/// Strings outside the enumeration are kept as `Unrecognized` and admit
/// nothing, so parsing a facet never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
            Facet::Unrecognized(_) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T: FromStr> FromStr for Facet<T> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            return Ok(Facet::All);
        }
        Ok(match T::from_str(s) {
            Ok(value) => Facet::Only(value),
            Err(_) => Facet::Unrecognized(s.to_string()),
        })
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(ALL_LABEL),
            Facet::Only(value) => value.fmt(f),
            Facet::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Popular,
    Newest,
    Name,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Popular, SortBy::Newest, SortBy::Name];

    pub fn key(&self) -> &'static str {
        match self {
            SortBy::Popular => "popular",
            SortBy::Newest => "newest",
            SortBy::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Popular => "Most Popular",
            SortBy::Newest => "Newest",
            SortBy::Name => "Name (A-Z)",
        }
    }

    /// The next ordering in display order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            SortBy::Popular => SortBy::Newest,
            SortBy::Newest => SortBy::Name,
            SortBy::Name => SortBy::Popular,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortBy {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.key() == s)
            .ok_or_else(|| UnknownLabel {
                kind: "sort order",
                value: s.to_string(),
            })
    }
}

/// What the directory view is currently asking for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Facet<Category>,
    pub pricing: Facet<Pricing>,
    pub sort_by: SortBy,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Facet<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_pricing(mut self, pricing: Facet<Pricing>) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// True when anything narrows the result set. Sorting does not count.
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty() || !self.category.is_all() || !self.pricing.is_all()
    }
}
