use serde::{Deserialize, Serialize};
use crate::models::domain::{CrowdLevel, Difficulty, Month, Trek};

/// Per-person cost breakdown in USD, excluding flights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub permits: u32,
    pub guide: u32,
    pub food: u32,
    pub equipment: u32,
    pub total: u32,
}

pub fn budget_estimate(difficulty: Difficulty) -> BudgetEstimate {
    match difficulty {
        Difficulty::Easy => BudgetEstimate { permits: 50, guide: 200, food: 150, equipment: 100, total: 500 },
        Difficulty::Moderate => BudgetEstimate { permits: 100, guide: 400, food: 300, equipment: 250, total: 1050 },
        Difficulty::Challenging => BudgetEstimate { permits: 200, guide: 800, food: 500, equipment: 500, total: 2000 },
    }
}

const EASY_PACKING: &[&str] = &[
    "Comfortable walking shoes",
    "Light rain jacket",
    "Daypack (20-30L)",
    "Reusable water bottle",
    "Sunscreen and sunglasses",
    "Basic first aid kit",
    "Warm fleece layer",
    "Water purification tablets",
];

const MODERATE_PACKING: &[&str] = &[
    "Broken-in trekking boots",
    "Waterproof shell jacket",
    "Down jacket",
    "Backpack (40-50L)",
    "Sleeping bag (-10°C)",
    "Trekking poles",
    "Headlamp with spare batteries",
    "Water purification tablets",
    "First aid kit with altitude medication",
    "Thermal base layers",
];

const CHALLENGING_PACKING: &[&str] = &[
    "Insulated mountaineering boots",
    "Gore-Tex shell jacket and pants",
    "Expedition down jacket",
    "Backpack (50-65L)",
    "Sleeping bag (-20°C)",
    "Trekking poles",
    "Microspikes or crampons",
    "Headlamp with spare batteries",
    "Glacier glasses",
    "Comprehensive first aid kit",
    "Satellite messenger",
    "Thermal base layers",
];

/// Recommended gear for treks of the given difficulty
pub fn packing_list(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => EASY_PACKING,
        Difficulty::Moderate => MODERATE_PACKING,
        Difficulty::Challenging => CHALLENGING_PACKING,
    }
}

/// Trekking conditions for one season
#[derive(Debug, Clone, Serialize)]
pub struct SeasonGuide {
    pub name: &'static str,
    pub months: &'static [Month],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

const SEASONS: &[SeasonGuide] = &[
    SeasonGuide {
        name: "Spring (March - May)",
        months: &[Month::March, Month::April, Month::May],
        pros: &["Rhododendron forests in bloom", "Mild temperatures", "Good visibility in the mornings"],
        cons: &["Afternoon haze", "Busy on popular routes"],
    },
    SeasonGuide {
        name: "Autumn (September - November)",
        months: &[Month::September, Month::October, Month::November],
        pros: &["Clearest mountain views", "Stable weather", "Dashain and Tihar festivals"],
        cons: &["Peak season crowds", "Teahouses book out early"],
    },
    SeasonGuide {
        name: "Monsoon (June - August)",
        months: &[Month::June, Month::July, Month::August],
        pros: &["Lush green valleys", "Very few trekkers", "Rain-shadow regions stay dry"],
        cons: &["Leeches and slippery trails", "Landslides and flight delays", "Clouded views"],
    },
    SeasonGuide {
        name: "Winter (December - February)",
        months: &[Month::December, Month::January, Month::February],
        pros: &["Crisp clear skies", "Quiet trails", "Lower teahouse prices"],
        cons: &["Freezing nights at altitude", "High passes may close"],
    },
];

pub fn season_guides() -> &'static [SeasonGuide] {
    SEASONS
}

/// Averages for one category of treks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// kg CO2, rounded to the nearest integer
    pub avg_carbon: u32,
    /// USD, rounded to the nearest integer
    pub avg_cost: u32,
    pub crowds: CrowdLevel,
    /// Rounded to one decimal place
    pub avg_rating: f64,
    pub count: usize,
}

/// Popular routes against hidden gems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub popular: Option<CategorySummary>,
    pub hidden: Option<CategorySummary>,
}

/// Compare popular treks with hidden gems
///
/// A category with no treks is reported as `None`.
pub fn compare_routes(treks: &[Trek]) -> RouteComparison {
    RouteComparison {
        popular: summarize(treks.iter().filter(|t| !t.is_hidden_gem), CrowdLevel::High),
        hidden: summarize(treks.iter().filter(|t| t.is_hidden_gem), CrowdLevel::Low),
    }
}

fn summarize<'a>(treks: impl Iterator<Item = &'a Trek>, crowds: CrowdLevel) -> Option<CategorySummary> {
    let (carbon, cost, rating, count) = treks.fold((0u64, 0u64, 0.0f64, 0usize), |acc, trek| {
        (
            acc.0 + u64::from(trek.carbon_score),
            acc.1 + u64::from(trek.cost),
            acc.2 + trek.rating,
            acc.3 + 1,
        )
    });

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(CategorySummary {
        avg_carbon: (carbon as f64 / n).round() as u32,
        avg_cost: (cost as f64 / n).round() as u32,
        crowds,
        avg_rating: (rating / n * 10.0).round() / 10.0,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_trek(id: &str, hidden: bool, carbon: u32, cost: u32, rating: f64) -> Trek {
        Trek {
            id: id.to_string(),
            name: format!("Trek {}", id),
            location: "Nepal".to_string(),
            image: String::new(),
            difficulty: Difficulty::Moderate,
            duration: "7-9 days".to_string(),
            altitude: "4,000m".to_string(),
            crowd_level: if hidden { CrowdLevel::Low } else { CrowdLevel::High },
            is_hidden_gem: hidden,
            vibes: vec![],
            highlights: vec![],
            carbon_score: carbon,
            cost,
            rating,
        }
    }

    #[test]
    fn test_budget_totals() {
        for difficulty in Difficulty::ALL {
            let b = budget_estimate(difficulty);
            assert_eq!(b.permits + b.guide + b.food + b.equipment, b.total);
        }
        assert_eq!(budget_estimate(Difficulty::Moderate).total, 1050);
    }

    #[test]
    fn test_packing_lists_grow_with_difficulty() {
        assert!(packing_list(Difficulty::Easy).len() < packing_list(Difficulty::Challenging).len());
    }

    #[test]
    fn test_seasons_cover_every_month_once() {
        let mut months: Vec<Month> = season_guides().iter().flat_map(|s| s.months.iter().copied()).collect();
        months.sort();
        months.dedup();
        assert_eq!(months.len(), 12);
        assert_eq!(season_guides().len(), 4);
    }

    #[test]
    fn test_compare_routes_averages() {
        let treks = vec![
            create_trek("1", false, 120, 1400, 4.8),
            create_trek("2", false, 101, 1201, 4.6),
            create_trek("3", true, 40, 600, 4.6),
        ];

        let comparison = compare_routes(&treks);

        let popular = comparison.popular.unwrap();
        assert_eq!(popular.avg_carbon, 111);   // 110.5 rounds up
        assert_eq!(popular.avg_cost, 1301);    // 1300.5 rounds up
        assert_eq!(popular.avg_rating, 4.7);
        assert_eq!(popular.crowds, CrowdLevel::High);
        assert_eq!(popular.count, 2);

        let hidden = comparison.hidden.unwrap();
        assert_eq!(hidden.avg_carbon, 40);
        assert_eq!(hidden.crowds, CrowdLevel::Low);
    }

    #[test]
    fn test_compare_routes_empty_category() {
        let treks = vec![create_trek("1", true, 40, 600, 4.6)];
        let comparison = compare_routes(&treks);
        assert!(comparison.popular.is_none());
        assert!(comparison.hidden.is_some());
    }
}
