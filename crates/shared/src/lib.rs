mod week_plan;

pub use week_plan::{MealRef, WeekPlan, Weekday};
