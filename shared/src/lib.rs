use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod quiz;

/// Authenticated identity, narrowed at the auth boundary.
///
/// The auth collaborator hands back a loosely-typed user object; the client
/// keeps only these three fields and nothing else leaks past the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl UserProfile {
    /// Name shown in greetings, with the original app's fallback.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Athlete")
    }
}

/// Meal slot for a calorie entry. Serialized lowercase to match the
/// remote store's enum column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Wire value, also used as the `<select>` option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Parse a `<select>` option value back into a meal type.
    pub fn parse(value: &str) -> Option<MealType> {
        match value {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

impl Default for MealType {
    fn default() -> Self {
        MealType::Breakfast
    }
}

/// A logged meal, mirroring a `calorie_entries` row. The store owns the
/// lifecycle; the client only holds transient copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieEntry {
    pub id: String,
    pub user_id: String,
    pub food_name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub meal_type: MealType,
    pub photo_url: Option<String>,
    /// RFC 3339 timestamp assigned by the store.
    pub created_at: String,
}

/// Insert payload for `calorie_entries`. Id and timestamp are assigned
/// remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCalorieEntry {
    pub user_id: String,
    pub food_name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub meal_type: MealType,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    pub muscle_group: String,
    pub illustration_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub created_at: String,
}

/// One meal slot inside a nutrition plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: String,
    pub foods: Vec<String>,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub meals: Vec<Meal>,
    pub shopping_list: Vec<String>,
    pub created_at: String,
}

/// Calendar day an entry was recorded on, in the timezone offset embedded
/// in its `created_at`. `None` for malformed timestamps.
pub fn entry_day(created_at: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(created_at)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Sum of calories over entries recorded on `day`.
///
/// The filter is calendar-date equality, not a rolling 24h window: an entry
/// from yesterday 23:59 is excluded at 00:01 today even though it is less
/// than 24 hours old. Entries with unparseable timestamps never count.
pub fn calories_on_day(entries: &[CalorieEntry], day: NaiveDate) -> u32 {
    entries
        .iter()
        .filter(|entry| entry_day(&entry.created_at) == Some(day))
        .map(|entry| entry.calories)
        .sum()
}

/// Percentage for a progress bar, clamped to 0..=100 so overshooting a goal
/// never overflows the bar.
pub fn progress_percent(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (value / goal * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, calories: u32, created_at: &str) -> CalorieEntry {
        CalorieEntry {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            food_name: "Test food".to_string(),
            calories,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            meal_type: MealType::Lunch,
            photo_url: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_todays_total_calendar_day_boundary() {
        // Yesterday 23:59 and today 00:01 are both within 24h of "now",
        // but only the second one is today's.
        let entries = vec![
            entry("1", 500, "2024-01-01T23:59:00Z"),
            entry("2", 300, "2024-01-02T00:01:00Z"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert_eq!(calories_on_day(&entries, today), 300);
    }

    #[test]
    fn test_todays_total_sums_multiple_entries() {
        let entries = vec![
            entry("1", 350, "2024-01-02T08:00:00Z"),
            entry("2", 450, "2024-01-02T12:30:00Z"),
            entry("3", 400, "2024-01-02T19:00:00Z"),
            entry("4", 200, "2024-01-01T19:00:00Z"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert_eq!(calories_on_day(&entries, today), 1200);
    }

    #[test]
    fn test_todays_total_uses_recorded_offset() {
        // 2024-01-02T01:00+02:00 is still Jan 1 in UTC, but the entry was
        // recorded on Jan 2 local time and counts toward Jan 2.
        let entries = vec![entry("1", 100, "2024-01-02T01:00:00+02:00")];
        let jan_2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert_eq!(calories_on_day(&entries, jan_2), 100);
        assert_eq!(calories_on_day(&entries, jan_1), 0);
    }

    #[test]
    fn test_todays_total_skips_malformed_timestamps() {
        let entries = vec![
            entry("1", 100, "not a timestamp"),
            entry("2", 250, "2024-01-02T10:00:00Z"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert_eq!(calories_on_day(&entries, today), 250);
    }

    #[test]
    fn test_meal_type_wire_format() {
        let json = serde_json::to_string(&MealType::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");

        let parsed: MealType = serde_json::from_str("\"snack\"").unwrap();
        assert_eq!(parsed, MealType::Snack);
    }

    #[test]
    fn test_meal_type_parse_round_trips_select_values() {
        for meal_type in MealType::ALL {
            assert_eq!(MealType::parse(meal_type.as_str()), Some(meal_type));
        }
        assert_eq!(MealType::parse("brunch"), None);
    }

    #[test]
    fn test_calorie_entry_deserializes_from_store_row() {
        let row = r#"{
            "id": "e1",
            "user_id": "u1",
            "food_name": "Grilled chicken",
            "calories": 450,
            "protein": 42.5,
            "carbs": 10.0,
            "fats": 12.0,
            "meal_type": "lunch",
            "photo_url": null,
            "created_at": "2024-01-02T12:30:00Z"
        }"#;

        let parsed: CalorieEntry = serde_json::from_str(row).unwrap();
        assert_eq!(parsed.meal_type, MealType::Lunch);
        assert_eq!(parsed.calories, 450);
        assert_eq!(parsed.photo_url, None);
    }

    #[test]
    fn test_difficulty_wire_format() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        assert_eq!(Difficulty::Advanced.label(), "Advanced");
    }

    #[test]
    fn test_progress_percent_clamps() {
        assert_eq!(progress_percent(1450.0, 2000.0), 72.5);
        assert_eq!(progress_percent(2500.0, 2000.0), 100.0);
        assert_eq!(progress_percent(0.0, 2000.0), 0.0);
        // A zero goal renders an empty bar rather than dividing by zero.
        assert_eq!(progress_percent(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_greeting_name_fallback() {
        let named = UserProfile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            display_name: Some("Maria".to_string()),
        };
        let anonymous = UserProfile {
            id: "u2".to_string(),
            email: "c@d.com".to_string(),
            display_name: None,
        };

        assert_eq!(named.greeting_name(), "Maria");
        assert_eq!(anonymous.greeting_name(), "Athlete");
    }
}
