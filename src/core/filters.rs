use crate::models::domain::{BestMonth, Destination, Difficulty, GroupType, Preferences, SIGHTSEEING, WILDLIFE};

/// Outcome of every inclusion predicate for one destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub activities: bool,
    pub nature: bool,
    pub duration: bool,
    pub group: bool,
    pub months: bool,
    pub interests: bool,
}

impl FilterReport {
    pub fn passes(&self) -> bool {
        self.activities && self.nature && self.duration && self.group && self.months && self.interests
    }

    /// Name of the first predicate that excluded the destination
    pub fn first_failure(&self) -> Option<&'static str> {
        [
            (self.activities, "activities"),
            (self.nature, "nature"),
            (self.duration, "duration"),
            (self.group, "group"),
            (self.months, "months"),
            (self.interests, "interests"),
        ]
        .into_iter()
        .find(|(ok, _)| !ok)
        .map(|(_, name)| name)
    }
}

/// Evaluate all six predicates without short-circuiting
pub fn evaluate(destination: &Destination, preferences: &Preferences) -> FilterReport {
    FilterReport {
        activities: matches_activities(destination, preferences),
        nature: matches_nature(destination, preferences),
        duration: matches_duration(destination, preferences),
        group: matches_group(destination, preferences),
        months: matches_months(destination, preferences),
        interests: matches_interests(destination, preferences),
    }
}

/// Check if a destination satisfies every inclusion predicate
#[inline]
pub fn matches_preferences(destination: &Destination, preferences: &Preferences) -> bool {
    matches_activities(destination, preferences)
        && matches_nature(destination, preferences)
        && matches_duration(destination, preferences)
        && matches_group(destination, preferences)
        && matches_months(destination, preferences)
        && matches_interests(destination, preferences)
}

/// At least one selected activity is offered. An empty selection never matches.
#[inline]
pub fn matches_activities(destination: &Destination, preferences: &Preferences) -> bool {
    preferences
        .activities
        .iter()
        .any(|tag| destination.activities.contains(tag))
}

/// At least one selected nature tag is present. An empty selection never matches.
#[inline]
pub fn matches_nature(destination: &Destination, preferences: &Preferences) -> bool {
    preferences
        .nature_preferences
        .iter()
        .any(|tag| destination.nature_preferences.contains(tag))
}

#[inline]
pub fn matches_duration(destination: &Destination, preferences: &Preferences) -> bool {
    destination.duration.contains(preferences.duration)
}

/// Families need destinations that are both children and group friendly
#[inline]
pub fn matches_group(destination: &Destination, preferences: &Preferences) -> bool {
    preferences.group_type != GroupType::Family
        || (destination.children_friendly && destination.group_friendly)
}

/// A shared month, or a destination open all year round
#[inline]
pub fn matches_months(destination: &Destination, preferences: &Preferences) -> bool {
    destination.is_all_year()
        || preferences
            .preferred_months
            .iter()
            .any(|month| destination.best_months.contains(&BestMonth::Month(*month)))
}

#[inline]
pub fn matches_interests(destination: &Destination, preferences: &Preferences) -> bool {
    preferences.interests.is_empty()
        || preferences
            .interests
            .iter()
            .any(|interest| interest_satisfied(interest, destination))
}

/// Map an interest label onto the destination property it requires
///
/// Labels outside the table are always satisfied.
pub fn interest_satisfied(interest: &str, destination: &Destination) -> bool {
    match interest {
        "Photography" | "Culture & Festivals" => destination.has_activity(SIGHTSEEING),
        "Bird Watching" => destination.has_activity(WILDLIFE),
        "Relaxation" => destination.difficulty == Difficulty::Easy,
        _ => true,
    }
}
