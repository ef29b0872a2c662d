use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use crate::models::domain::{BestMonth, CrowdLevel, Destination, Difficulty, DurationRange, Month, Trek};

/// Errors that can occur when loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate destination name: {0}")]
    DuplicateDestination(String),

    #[error("Duplicate trek id: {0}")]
    DuplicateTrek(String),

    #[error("Invalid duration range for destination: {0}")]
    InvalidDuration(String),

    #[error("Eco score outside 0-100 for destination: {0}")]
    InvalidEcoScore(String),

    #[error("Rating outside 0.0-5.0 for: {0}")]
    InvalidRating(String),
}

/// Ratings must lie in 0.0..=5.0; NaN is rejected too
fn valid_rating(rating: f64) -> bool {
    (0.0..=5.0).contains(&rating)
}

/// On-disk catalog layout; missing sections fall back to the built-in data
#[derive(Debug, Deserialize)]
struct CatalogFile {
    destinations: Option<Vec<Destination>>,
    treks: Option<Vec<Trek>>,
}

/// Immutable destination and trek datasets
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    destinations: Vec<Destination>,
    treks: Vec<Trek>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate keys and out-of-range values
    pub fn new(destinations: Vec<Destination>, treks: Vec<Trek>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for destination in &destinations {
            if !names.insert(destination.name.as_str()) {
                return Err(CatalogError::DuplicateDestination(destination.name.clone()));
            }
            if destination.duration.min > destination.duration.max {
                return Err(CatalogError::InvalidDuration(destination.name.clone()));
            }
            if destination.eco_score > 100 {
                return Err(CatalogError::InvalidEcoScore(destination.name.clone()));
            }
            if !valid_rating(destination.rating) {
                return Err(CatalogError::InvalidRating(destination.name.clone()));
            }
        }

        let mut ids = HashSet::new();
        for trek in &treks {
            if !ids.insert(trek.id.as_str()) {
                return Err(CatalogError::DuplicateTrek(trek.id.clone()));
            }
            if !valid_rating(trek.rating) {
                return Err(CatalogError::InvalidRating(trek.id.clone()));
            }
        }

        Ok(Self { destinations, treks })
    }

    /// The built-in dataset shipped with the service
    pub fn builtin() -> Self {
        Self {
            destinations: builtin_destinations(),
            treks: builtin_treks(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(
            file.destinations.unwrap_or_else(builtin_destinations),
            file.treks.unwrap_or_else(builtin_treks),
        )
    }

    /// Load a catalog from a TOML file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let source = tokio::fs::read_to_string(path.as_ref()).await?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::info!(
            "Loaded catalog from {} ({} destinations, {} treks)",
            path.as_ref().display(),
            catalog.destinations.len(),
            catalog.treks.len()
        );
        Ok(catalog)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn treks(&self) -> &[Trek] {
        &self.treks
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn months(list: &[Month]) -> Vec<BestMonth> {
    list.iter().copied().map(BestMonth::Month).collect()
}

fn builtin_destinations() -> Vec<Destination> {
    use Month::*;

    vec![
        Destination {
            name: "Annapurna Base Camp".to_string(),
            location: "Kaski, Gandaki".to_string(),
            image: "/images/annapurna-base-camp.jpg".to_string(),
            difficulty: Difficulty::Moderate,
            duration: DurationRange::new(7, 12),
            activities: tags(&["trekking", "sightseeing"]),
            nature_preferences: tags(&["mountains", "forests"]),
            best_months: months(&[March, April, May, October, November]),
            group_friendly: true,
            children_friendly: false,
            eco_score: 78,
            rating: 4.9,
        },
        Destination {
            name: "Mardi Himal".to_string(),
            location: "Kaski, Gandaki".to_string(),
            image: "/images/mardi-himal.jpg".to_string(),
            difficulty: Difficulty::Moderate,
            duration: DurationRange::new(5, 7),
            activities: tags(&["trekking", "camping"]),
            nature_preferences: tags(&["mountains"]),
            best_months: months(&[March, April, October, November, December]),
            group_friendly: true,
            children_friendly: false,
            eco_score: 88,
            rating: 4.7,
        },
        Destination {
            name: "Phewa Lake".to_string(),
            location: "Pokhara, Gandaki".to_string(),
            image: "/images/phewa-lake.jpg".to_string(),
            difficulty: Difficulty::Easy,
            duration: DurationRange::new(2, 5),
            activities: tags(&["sightseeing", "boating"]),
            nature_preferences: tags(&["lakes", "mountains"]),
            best_months: vec![BestMonth::AllYearRound],
            group_friendly: true,
            children_friendly: true,
            eco_score: 72,
            rating: 4.6,
        },
        Destination {
            name: "Chitwan National Park".to_string(),
            location: "Chitwan, Bagmati".to_string(),
            image: "/images/chitwan.jpg".to_string(),
            difficulty: Difficulty::Easy,
            duration: DurationRange::new(2, 4),
            activities: tags(&["wildlife", "sightseeing"]),
            nature_preferences: tags(&["forests", "rivers"]),
            best_months: months(&[October, November, December, January, February, March]),
            group_friendly: true,
            children_friendly: true,
            eco_score: 80,
            rating: 4.5,
        },
        Destination {
            name: "Rara Lake".to_string(),
            location: "Mugu, Karnali".to_string(),
            image: "/images/rara-lake.jpg".to_string(),
            difficulty: Difficulty::Moderate,
            duration: DurationRange::new(6, 10),
            activities: tags(&["trekking", "camping"]),
            nature_preferences: tags(&["lakes", "forests", "mountains"]),
            best_months: months(&[April, May, June, September, October, November]),
            group_friendly: true,
            children_friendly: false,
            eco_score: 95,
            rating: 4.8,
        },
        Destination {
            name: "Bardia National Park".to_string(),
            location: "Bardiya, Lumbini".to_string(),
            image: "/images/bardia.jpg".to_string(),
            difficulty: Difficulty::Easy,
            duration: DurationRange::new(3, 6),
            activities: tags(&["wildlife"]),
            nature_preferences: tags(&["forests", "rivers"]),
            best_months: months(&[October, November, December, January, February, March, April]),
            group_friendly: true,
            children_friendly: true,
            eco_score: 92,
            rating: 4.4,
        },
        Destination {
            name: "Upper Mustang".to_string(),
            location: "Mustang, Gandaki".to_string(),
            image: "/images/upper-mustang.jpg".to_string(),
            difficulty: Difficulty::Challenging,
            duration: DurationRange::new(10, 14),
            activities: tags(&["trekking", "sightseeing"]),
            nature_preferences: tags(&["mountains", "desert"]),
            best_months: months(&[May, June, July, August, September, October]),
            group_friendly: true,
            children_friendly: false,
            eco_score: 85,
            rating: 4.8,
        },
        Destination {
            name: "Kathmandu Valley Heritage Walk".to_string(),
            location: "Kathmandu, Bagmati".to_string(),
            image: "/images/kathmandu-heritage.jpg".to_string(),
            difficulty: Difficulty::Easy,
            duration: DurationRange::new(1, 4),
            activities: tags(&["sightseeing"]),
            nature_preferences: tags(&["hills"]),
            best_months: vec![BestMonth::AllYearRound],
            group_friendly: true,
            children_friendly: true,
            eco_score: 65,
            rating: 4.3,
        },
        Destination {
            name: "Ghorepani Poon Hill".to_string(),
            location: "Myagdi, Gandaki".to_string(),
            image: "/images/poon-hill.jpg".to_string(),
            difficulty: Difficulty::Easy,
            duration: DurationRange::new(4, 6),
            activities: tags(&["trekking", "sightseeing"]),
            nature_preferences: tags(&["mountains", "forests"]),
            best_months: months(&[March, April, October, November, December]),
            group_friendly: true,
            children_friendly: true,
            eco_score: 75,
            rating: 4.6,
        },
        Destination {
            name: "Tsum Valley".to_string(),
            location: "Gorkha, Gandaki".to_string(),
            image: "/images/tsum-valley.jpg".to_string(),
            difficulty: Difficulty::Challenging,
            duration: DurationRange::new(12, 18),
            activities: tags(&["trekking", "sightseeing"]),
            nature_preferences: tags(&["mountains"]),
            best_months: months(&[March, April, May, September, October, November]),
            group_friendly: false,
            children_friendly: false,
            eco_score: 90,
            rating: 4.7,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn trek(
    id: &str,
    name: &str,
    location: &str,
    difficulty: Difficulty,
    duration: &str,
    altitude: &str,
    crowd_level: CrowdLevel,
    is_hidden_gem: bool,
    vibes: &[&str],
    highlights: &[&str],
    carbon_score: u32,
    cost: u32,
    rating: f64,
) -> Trek {
    Trek {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        image: format!("/images/treks/{}.jpg", id),
        difficulty,
        duration: duration.to_string(),
        altitude: altitude.to_string(),
        crowd_level,
        is_hidden_gem,
        vibes: tags(vibes),
        highlights: tags(highlights),
        carbon_score,
        cost,
        rating,
    }
}

fn builtin_treks() -> Vec<Trek> {
    use CrowdLevel::*;
    use Difficulty::*;

    vec![
        trek(
            "everest-base-camp", "Everest Base Camp", "Solukhumbu", Challenging,
            "12-14 days", "5,364m", High, false,
            &["Iconic", "High Altitude"],
            &["Kala Patthar sunrise", "Namche Bazaar", "Tengboche Monastery"],
            185, 1800, 4.9,
        ),
        trek(
            "annapurna-circuit", "Annapurna Circuit", "Manang & Mustang", Challenging,
            "14-18 days", "5,416m", High, false,
            &["Classic", "Diverse Landscapes"],
            &["Thorong La Pass", "Muktinath Temple", "Manang village"],
            160, 1500, 4.8,
        ),
        trek(
            "poon-hill", "Ghorepani Poon Hill", "Myagdi", Easy,
            "4-5 days", "3,210m", High, false,
            &["Family Friendly", "Sunrise Views"],
            &["Poon Hill sunrise", "Rhododendron forests", "Gurung villages"],
            70, 500, 4.6,
        ),
        trek(
            "langtang-valley", "Langtang Valley", "Rasuwa", Moderate,
            "7-9 days", "4,984m", Medium, false,
            &["Cultural", "Glaciers"],
            &["Kyanjin Gompa", "Tamang heritage", "Yak cheese factory"],
            95, 900, 4.7,
        ),
        trek(
            "mardi-himal", "Mardi Himal", "Kaski", Moderate,
            "5-7 days", "4,500m", Low, true,
            &["Off the Beaten Path", "Ridge Walk"],
            &["Machhapuchhre views", "High Camp sunrise", "Cloud forests"],
            60, 650, 4.7,
        ),
        trek(
            "tsum-valley", "Tsum Valley", "Gorkha", Challenging,
            "12-15 days", "3,700m", Low, true,
            &["Sacred Valley", "Remote"],
            &["Mu Gompa", "Milarepa's cave", "Ancient Buddhist culture"],
            80, 1300, 4.8,
        ),
        trek(
            "rara-lake", "Rara Lake", "Mugu", Moderate,
            "8-10 days", "3,060m", Low, true,
            &["Pristine", "Lakeside"],
            &["Nepal's largest lake", "Rara National Park", "Murma Top"],
            55, 1000, 4.8,
        ),
        trek(
            "khopra-ridge", "Khopra Ridge", "Myagdi", Moderate,
            "6-8 days", "3,660m", Low, true,
            &["Community Lodges", "Panoramic"],
            &["Khayar Lake", "Dhaulagiri views", "Community-run lodges"],
            50, 700, 4.6,
        ),
    ]
}
