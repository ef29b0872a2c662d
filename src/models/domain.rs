use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity tag satisfied by the photography and culture interests
pub const SIGHTSEEING: &str = "sightseeing";

/// Activity tag satisfied by the bird watching interest
pub const WILDLIFE: &str = "wildlife";

/// Physical difficulty of a destination or trek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Easy,
    #[default]
    #[serde(alias = "moderate")]
    Moderate,
    #[serde(alias = "challenging")]
    Challenging,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Challenging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// Entry of a destination's best-months set
///
/// Serialized either as a month name or as the literal `"All year round"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BestMonth {
    #[serde(rename = "All year round")]
    AllYearRound,
    #[serde(untagged)]
    Month(Month),
}

impl From<Month> for BestMonth {
    fn from(month: Month) -> Self {
        BestMonth::Month(month)
    }
}

/// Inclusive range of whole days a destination supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

impl DurationRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, days: u32) -> bool {
        self.min <= days && days <= self.max
    }
}

/// Static destination record used by the recommendation matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub image: String,
    pub difficulty: Difficulty,
    pub duration: DurationRange,
    pub activities: Vec<String>,
    pub nature_preferences: Vec<String>,
    pub best_months: Vec<BestMonth>,
    pub group_friendly: bool,
    pub children_friendly: bool,
    pub eco_score: u8,
    pub rating: f64,
}

impl Destination {
    pub fn has_activity(&self, tag: &str) -> bool {
        self.activities.iter().any(|a| a == tag)
    }

    pub fn is_all_year(&self) -> bool {
        self.best_months.contains(&BestMonth::AllYearRound)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Solo,
    Couple,
    Family,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    EcoFriendly,
    Budget,
    Luxury,
}

/// Criteria submitted from the preference wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub activities: Vec<String>,
    pub nature_preferences: Vec<String>,
    pub duration: u32,
    pub group_type: GroupType,
    pub preferred_months: Vec<Month>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub travel_style: TravelStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

/// Trek card shown in the discovery section and used by the route comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trek {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub image: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub altitude: String,
    pub crowd_level: CrowdLevel,
    #[serde(default)]
    pub is_hidden_gem: bool,
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// kg CO2 per person
    pub carbon_score: u32,
    /// USD per person
    pub cost: u32,
    pub rating: f64,
}
