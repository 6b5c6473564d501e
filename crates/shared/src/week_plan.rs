use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Days of the week, in plan iteration order (Monday first).
///
/// Serialized by name, so a stored plan looks like
/// `{"Monday": [{"id": "52772"}], ...}`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Minimal reference to a recipe, sufficient to fetch full detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRef {
    pub id: String,
}

impl MealRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A user's assignment of recipes to days.
///
/// Read-only input for shopping-list aggregation; the web layer owns
/// the single persisted JSON entry it is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: BTreeMap<Weekday, Vec<MealRef>>,
}

impl WeekPlan {
    /// True when no day holds any meal.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(|meals| meals.is_empty())
    }

    pub fn meals_for(&self, day: Weekday) -> &[MealRef] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// All planned meals as one ordered sequence: days in `Weekday`
    /// order, meals in within-day order. Repeated ids are kept.
    pub fn flatten(&self) -> Vec<MealRef> {
        self.days.values().flatten().cloned().collect()
    }

    pub fn add(&mut self, day: Weekday, meal: MealRef) {
        self.days.entry(day).or_default().push(meal);
    }

    /// Remove the meal at `index` within `day`. Out-of-range indexes
    /// are ignored.
    pub fn remove(&mut self, day: Weekday, index: usize) {
        if let Some(meals) = self.days.get_mut(&day) {
            if index < meals.len() {
                meals.remove(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn flatten_orders_days_monday_first() {
        let mut plan = WeekPlan::default();
        plan.add(Weekday::Friday, MealRef::new("3"));
        plan.add(Weekday::Monday, MealRef::new("1"));
        plan.add(Weekday::Monday, MealRef::new("2"));

        let ids: Vec<_> = plan.flatten().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn flatten_keeps_repeated_ids() {
        let mut plan = WeekPlan::default();
        plan.add(Weekday::Monday, MealRef::new("52772"));
        plan.add(Weekday::Thursday, MealRef::new("52772"));

        assert_eq!(plan.flatten().len(), 2);
    }

    #[test]
    fn empty_days_count_as_empty_plan() {
        let mut plan = WeekPlan::default();
        plan.add(Weekday::Tuesday, MealRef::new("1"));
        plan.remove(Weekday::Tuesday, 0);

        assert!(plan.is_empty());
    }

    #[test]
    fn remove_ignores_out_of_range_index() {
        let mut plan = WeekPlan::default();
        plan.add(Weekday::Sunday, MealRef::new("9"));
        plan.remove(Weekday::Sunday, 4);
        plan.remove(Weekday::Monday, 0);

        assert_eq!(plan.meals_for(Weekday::Sunday).len(), 1);
    }

    #[test]
    fn round_trips_through_day_keyed_json() {
        let json = r#"{"Monday":[{"id":"52772"}],"Wednesday":[{"id":"52804"},{"id":"52772"}]}"#;
        let plan: WeekPlan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.meals_for(Weekday::Monday), [MealRef::new("52772")]);
        assert_eq!(plan.meals_for(Weekday::Wednesday).len(), 2);

        let back = serde_json::to_string(&plan).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn weekday_iteration_covers_the_whole_week() {
        assert_eq!(Weekday::iter().count(), 7);
        assert_eq!(Weekday::iter().next(), Some(Weekday::Monday));
    }
}
