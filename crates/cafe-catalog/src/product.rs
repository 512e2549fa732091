//! Product records
//!
//! Products are defined once, validated by [`crate::Catalog::new`], and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique product identifier (positive integer)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Create product ID from raw value
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for ProductId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Roast category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoastLevel {
    /// 淺焙
    Light,
    /// 中焙
    Medium,
    /// 中深焙
    MediumDark,
    /// 深焙
    Dark,
}

impl RoastLevel {
    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RoastLevel::Light => "淺焙",
            RoastLevel::Medium => "中焙",
            RoastLevel::MediumDark => "中深焙",
            RoastLevel::Dark => "深焙",
        }
    }

    /// Fill of the roast intensity bar, in percent
    ///
    /// Medium-dark shares the full bar with dark.
    #[must_use]
    pub fn intensity_percent(self) -> u8 {
        match self {
            RoastLevel::Light => 33,
            RoastLevel::Medium => 66,
            RoastLevel::MediumDark | RoastLevel::Dark => 100,
        }
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A coffee-bean product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique ID
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Series the product belongs to
    pub series: String,
    /// Flavor notes
    pub flavor: String,
    /// Roast category
    pub roast: RoastLevel,
    /// Origin (country and region)
    pub origin: String,
    /// Price in NT$
    pub price: u32,
    /// Image URL
    pub image: String,
    /// Long description
    pub description: String,
}

impl Product {
    /// Create product with the required identity fields; the rest start empty
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            series: String::new(),
            flavor: String::new(),
            roast: RoastLevel::Medium,
            origin: String::new(),
            price,
            image: String::new(),
            description: String::new(),
        }
    }

    /// With series
    #[inline]
    #[must_use]
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }

    /// With flavor notes
    #[inline]
    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    /// With roast level
    #[inline]
    #[must_use]
    pub fn with_roast(mut self, roast: RoastLevel) -> Self {
        self.roast = roast;
        self
    }

    /// With origin
    #[inline]
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// With image URL
    #[inline]
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
