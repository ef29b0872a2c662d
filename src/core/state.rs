//! Planner UI state as explicit, immutable transitions.
//!
//! The presentation layer owns a [`PlannerState`] value and replaces it with
//! the result of [`PlannerState::apply`] on every user action.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::core::matcher::match_destinations;
use crate::models::domain::{Destination, Difficulty, Preferences};

/// Page section targeted by the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    Discover,
    Carbon,
    Planner,
    Community,
}

/// Step of the preference wizard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    Selecting,
    Results {
        preferences: Preferences,
        /// Destination names in ranked order
        recommendations: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerState {
    pub active_section: Section,
    pub mobile_menu_open: bool,
    /// Favorited trek ids
    pub favorites: BTreeSet<String>,
    pub selected_difficulty: Difficulty,
    pub wizard: WizardStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    Navigate(Section),
    ToggleMobileMenu,
    ToggleFavorite(String),
    SelectDifficulty(Difficulty),
    SubmitPreferences(Preferences),
    Restart,
}

impl PlannerState {
    pub fn is_favorite(&self, trek_id: &str) -> bool {
        self.favorites.contains(trek_id)
    }

    /// Produce the state that follows `action`; `self` is left untouched
    pub fn apply(&self, action: Action, destinations: &[Destination]) -> PlannerState {
        let mut next = self.clone();

        match action {
            Action::Navigate(section) => {
                next.active_section = section;
                next.mobile_menu_open = false;
            }
            Action::ToggleMobileMenu => {
                next.mobile_menu_open = !self.mobile_menu_open;
            }
            Action::ToggleFavorite(trek_id) => {
                if !next.favorites.remove(&trek_id) {
                    next.favorites.insert(trek_id);
                }
            }
            Action::SelectDifficulty(difficulty) => {
                next.selected_difficulty = difficulty;
            }
            Action::SubmitPreferences(preferences) => {
                let recommendations = match_destinations(destinations, &preferences)
                    .into_iter()
                    .map(|d| d.name.clone())
                    .collect();
                next.wizard = WizardStep::Results { preferences, recommendations };
            }
            Action::Restart => {
                next.wizard = WizardStep::Selecting;
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{BestMonth, DurationRange, GroupType, Month, TravelStyle};

    fn create_destinations() -> Vec<Destination> {
        vec![Destination {
            name: "Ridge".to_string(),
            location: "Nepal".to_string(),
            image: String::new(),
            difficulty: Difficulty::Moderate,
            duration: DurationRange::new(5, 10),
            activities: vec!["trekking".to_string()],
            nature_preferences: vec!["mountains".to_string()],
            best_months: vec![BestMonth::AllYearRound],
            group_friendly: true,
            children_friendly: false,
            eco_score: 82,
            rating: 4.8,
        }]
    }

    fn create_preferences() -> Preferences {
        Preferences {
            activities: vec!["trekking".to_string()],
            nature_preferences: vec!["mountains".to_string()],
            duration: 7,
            group_type: GroupType::Solo,
            preferred_months: vec![Month::June],
            interests: vec![],
            travel_style: TravelStyle::EcoFriendly,
        }
    }

    #[test]
    fn test_defaults() {
        let state = PlannerState::default();
        assert_eq!(state.active_section, Section::Hero);
        assert_eq!(state.selected_difficulty, Difficulty::Moderate);
        assert_eq!(state.wizard, WizardStep::Selecting);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_navigate_closes_mobile_menu() {
        let opened = PlannerState::default().apply(Action::ToggleMobileMenu, &[]);
        assert!(opened.mobile_menu_open);

        let next = opened.apply(Action::Navigate(Section::Planner), &[]);
        assert_eq!(next.active_section, Section::Planner);
        assert!(!next.mobile_menu_open);
        // Prior value is untouched
        assert!(opened.mobile_menu_open);
        assert_eq!(opened.active_section, Section::Hero);
    }

    #[test]
    fn test_toggle_favorite_twice_restores() {
        let state = PlannerState::default();
        let once = state.apply(Action::ToggleFavorite("mardi".to_string()), &[]);
        assert!(once.is_favorite("mardi"));

        let twice = once.apply(Action::ToggleFavorite("mardi".to_string()), &[]);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_submit_then_restart() {
        let destinations = create_destinations();
        let state = PlannerState::default();

        let results = state.apply(Action::SubmitPreferences(create_preferences()), &destinations);
        match &results.wizard {
            WizardStep::Results { recommendations, .. } => {
                assert_eq!(recommendations, &vec!["Ridge".to_string()]);
            }
            WizardStep::Selecting => panic!("expected results step"),
        }

        let restarted = results.apply(Action::Restart, &destinations);
        assert_eq!(restarted.wizard, WizardStep::Selecting);
    }

    #[test]
    fn test_action_wire_format() {
        let action: Action =
            serde_json::from_str(r#"{"type":"navigate","payload":"discover"}"#).unwrap();
        assert_eq!(action, Action::Navigate(Section::Discover));

        let action: Action = serde_json::from_str(r#"{"type":"restart"}"#).unwrap();
        assert_eq!(action, Action::Restart);
    }
}
