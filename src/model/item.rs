// File: src/model/item.rs
use crate::color_utils::Color;
use crate::scheme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Accessory,
    /// Anything else the tagging pipeline produced. Matching is case-sensitive,
    /// so "top" lands here rather than in `Top`.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Shoes => "Shoes",
            Category::Accessory => "Accessory",
            Category::Other(s) => s,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Top" => Category::Top,
            "Bottom" => Category::Bottom,
            "Shoes" => Category::Shoes,
            "Accessory" => Category::Accessory,
            _ => Category::Other(s),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// Meteorological season for a 1-based month.
    pub fn for_month(month: u32, hemisphere: Hemisphere) -> Season {
        let north = match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        };
        match hemisphere {
            Hemisphere::North => north,
            Hemisphere::South => match north {
                Season::Spring => Season::Fall,
                Season::Summer => Season::Winter,
                Season::Fall => Season::Spring,
                Season::Winter => Season::Summer,
            },
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            other => Err(format!("Unknown season: {}", other)),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single owned clothing item, as delivered by the closet store.
///
/// Every descriptive field is optional: placeholders that were never fully
/// tagged or uploaded still show up in a snapshot and are filtered out by
/// [`crate::store::is_eligible`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetItem {
    pub id: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ClosetItem {
    pub fn new(
        category: impl Into<Category>,
        subcategory: &str,
        color: Color,
        season: &str,
        occasion: &str,
        image_url: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: Some(category.into()),
            subcategory: Some(subcategory.to_string()),
            color: Some(color),
            season: Some(season.to_string()),
            occasion: Some(occasion.to_string()),
            image_url: Some(image_url.to_string()),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn is_category(&self, category: &Category) -> bool {
        self.category.as_ref() == Some(category)
    }
}

/// A generated outfit. Either all three slots are filled or none are.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Outfit {
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<ClosetItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bottom: Option<ClosetItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shoes: Option<ClosetItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<ColorScheme>,
}

impl Outfit {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn complete(
        top: ClosetItem,
        bottom: ClosetItem,
        shoes: ClosetItem,
        scheme: ColorScheme,
    ) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
            shoes: Some(shoes),
            scheme: Some(scheme),
        }
    }

    pub fn top(&self) -> Option<&ClosetItem> {
        self.top.as_ref()
    }

    pub fn bottom(&self) -> Option<&ClosetItem> {
        self.bottom.as_ref()
    }

    pub fn shoes(&self) -> Option<&ClosetItem> {
        self.shoes.as_ref()
    }

    /// The color scheme used to match bottom and shoes to the top.
    pub fn scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    pub fn is_complete(&self) -> bool {
        self.top.is_some() && self.bottom.is_some() && self.shoes.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.shoes.is_none()
    }
}
