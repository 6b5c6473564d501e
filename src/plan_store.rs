use axum_extra::extract::cookie::{Cookie, CookieJar};
use mealprep_shared::WeekPlan;

/// Single persisted entry holding the whole plan as URL-encoded JSON.
pub const WEEK_PLAN_COOKIE: &str = "week_plan";

/// Load the plan from the cookie jar. A missing or unreadable cookie
/// is an empty plan, never an error.
pub fn load(jar: &CookieJar) -> WeekPlan {
    let Some(cookie) = jar.get(WEEK_PLAN_COOKIE) else {
        return WeekPlan::default();
    };

    let decoded = match urlencoding::decode(cookie.value()) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(error = %err, "week plan cookie is not valid urlencoding, resetting");
            return WeekPlan::default();
        }
    };

    match serde_json::from_str(&decoded) {
        Ok(plan) => plan,
        Err(err) => {
            tracing::warn!(error = %err, "week plan cookie holds invalid json, resetting");
            WeekPlan::default()
        }
    }
}

pub fn store(jar: CookieJar, plan: &WeekPlan) -> CookieJar {
    let json = serde_json::to_string(plan).unwrap_or_else(|_| "{}".to_string());
    let cookie = Cookie::build((WEEK_PLAN_COOKIE, urlencoding::encode(&json).into_owned()))
        .path("/")
        .http_only(true)
        .build();
    jar.add(cookie)
}

pub fn clear(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(WEEK_PLAN_COOKIE).path("/").build())
}
