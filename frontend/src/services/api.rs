use gloo::net::http::{Request, RequestBuilder};
use shared::{catalog, CalorieEntry, NewCalorieEntry, NutritionPlan, WorkoutPlan};

use super::auth::stored_access_token;
use super::{DEFAULT_SUPABASE_ANON_KEY, DEFAULT_SUPABASE_URL};

/// Client for the remote storage collaborator: a generic query surface over
/// named record collections (PostgREST-shaped).
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_SUPABASE_URL.to_string(),
            api_key: DEFAULT_SUPABASE_ANON_KEY.to_string(),
        }
    }

    pub fn with_config(base_url: String, api_key: String) -> Self {
        Self { base_url, api_key }
    }

    /// Insert one calorie entry and return the stored row.
    pub async fn insert_calorie_entry(
        &self,
        entry: &NewCalorieEntry,
    ) -> Result<CalorieEntry, String> {
        let url = format!("{}/rest/v1/calorie_entries", self.base_url);

        let response = self
            .authorize(Request::post(&url))
            .header("Prefer", "return=representation")
            .json(entry)
            .map_err(|e| format!("Failed to serialize entry: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            // The store answers inserts with a one-row array.
            let rows: Vec<CalorieEntry> = response
                .json()
                .await
                .map_err(|e| format!("Failed to parse inserted entry: {}", e))?;
            rows.into_iter()
                .next()
                .ok_or_else(|| "Insert returned no row".to_string())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(error_text)
        }
    }

    /// The caller's most recent entries, newest first, capped at `limit`.
    pub async fn list_calorie_entries(&self, limit: u32) -> Result<Vec<CalorieEntry>, String> {
        let url = format!(
            "{}/rest/v1/calorie_entries?select=*&order=created_at.desc&limit={}",
            self.base_url, limit
        );

        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json()
                .await
                .map_err(|e| format!("Failed to parse entries: {}", e))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(error_text)
        }
    }

    /// Workout plan catalog. Currently backed by the seed fixture; the
    /// surface matches the persisted collections so real persistence can be
    /// swapped in without touching the views.
    pub async fn list_workout_plans(&self) -> Result<Vec<WorkoutPlan>, String> {
        Ok(catalog::workout_plans())
    }

    /// Nutrition plan catalog, same seed-fixture arrangement as
    /// [`list_workout_plans`](Self::list_workout_plans).
    pub async fn list_nutrition_plans(&self) -> Result<Vec<NutritionPlan>, String> {
        Ok(catalog::nutrition_plans())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("apikey", &self.api_key);
        match stored_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
