use shared::{CalorieEntry, MealType, NewCalorieEntry};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Listing slice size for the calories view.
const LISTING_LIMIT: u32 = 10;

#[derive(Clone, PartialEq)]
pub struct CalorieEntriesState {
    pub entries: Vec<CalorieEntry>,
    pub loading: bool,

    // Entry form state
    pub show_form: bool,
    pub food_name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub meal_type: MealType,
    pub photo_url: String,
    pub saving: bool,
    pub form_error: Option<String>,
    pub form_success: bool,
}

pub struct UseCalorieEntriesResult {
    pub state: CalorieEntriesState,
    pub actions: UseCalorieEntriesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalorieEntriesActions {
    pub refresh: Callback<()>,
    pub toggle_form: Callback<()>,
    pub submit: Callback<()>,
    pub on_food_name_change: Callback<Event>,
    pub on_calories_change: Callback<Event>,
    pub on_protein_change: Callback<Event>,
    pub on_carbs_change: Callback<Event>,
    pub on_fats_change: Callback<Event>,
    pub on_meal_type_change: Callback<Event>,
    pub on_photo_url_change: Callback<Event>,
}

#[hook]
pub fn use_calorie_entries(api_client: &ApiClient, user_id: &str) -> UseCalorieEntriesResult {
    let entries = use_state(Vec::<CalorieEntry>::new);
    let loading = use_state(|| true);

    let show_form = use_state(|| false);
    let food_name = use_state(String::new);
    let calories = use_state(String::new);
    let protein = use_state(String::new);
    let carbs = use_state(String::new);
    let fats = use_state(String::new);
    let meal_type = use_state(MealType::default);
    let photo_url = use_state(String::new);
    let saving = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let form_success = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let entries = entries.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let entries = entries.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_calorie_entries(LISTING_LIMIT).await {
                    Ok(fetched) => entries.set(fetched),
                    Err(e) => {
                        Logger::error_with_component(
                            "calories",
                            &format!("Failed to load entries: {}", e),
                        );
                    }
                }

                loading.set(false);
            });
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let user_id = user_id.to_string();
        let show_form = show_form.clone();
        let food_name = food_name.clone();
        let calories = calories.clone();
        let protein = protein.clone();
        let carbs = carbs.clone();
        let fats = fats.clone();
        let meal_type = meal_type.clone();
        let photo_url = photo_url.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let refresh = refresh.clone();

        // Recreated every render: it reads the form fields, and a memoized
        // closure would capture first-render snapshots of them.
        Callback::from(move |_| {
            let api_client = api_client.clone();
            let user_id = user_id.clone();
            let show_form = show_form.clone();
            let food_name = food_name.clone();
            let calories = calories.clone();
            let protein = protein.clone();
            let carbs = carbs.clone();
            let fats = fats.clone();
            let meal_type = meal_type.clone();
            let photo_url = photo_url.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                form_error.set(None);
                form_success.set(false);
                saving.set(true);

                // Required/number constraints live on the form inputs; the
                // store validates the rest.
                let entry = NewCalorieEntry {
                    user_id,
                    food_name: (*food_name).clone(),
                    calories: (*calories).trim().parse().unwrap_or(0),
                    protein: (*protein).trim().parse().unwrap_or(0.0),
                    carbs: (*carbs).trim().parse().unwrap_or(0.0),
                    fats: (*fats).trim().parse().unwrap_or(0.0),
                    meal_type: *meal_type,
                    photo_url: match photo_url.trim() {
                        "" => None,
                        url => Some(url.to_string()),
                    },
                };

                match api_client.insert_calorie_entry(&entry).await {
                    Ok(_) => {
                        food_name.set(String::new());
                        calories.set(String::new());
                        protein.set(String::new());
                        carbs.set(String::new());
                        fats.set(String::new());
                        meal_type.set(MealType::default());
                        photo_url.set(String::new());
                        show_form.set(false);
                        form_success.set(true);
                        refresh.emit(());

                        // Clear the success message after 3 seconds.
                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            form_success_clear.set(false);
                        });
                    }
                    Err(e) => {
                        form_error.set(Some(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let toggle_form = {
        let show_form = show_form.clone();
        let form_error = form_error.clone();

        Callback::from(move |_| {
            form_error.set(None);
            show_form.set(!*show_form);
        })
    };

    let on_food_name_change = {
        let food_name = food_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            food_name.set(input.value());
        })
    };

    let on_calories_change = {
        let calories = calories.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            calories.set(input.value());
        })
    };

    let on_protein_change = {
        let protein = protein.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            protein.set(input.value());
        })
    };

    let on_carbs_change = {
        let carbs = carbs.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            carbs.set(input.value());
        })
    };

    let on_fats_change = {
        let fats = fats.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fats.set(input.value());
        })
    };

    let on_meal_type_change = {
        let meal_type = meal_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(parsed) = MealType::parse(&select.value()) {
                meal_type.set(parsed);
            }
        })
    };

    let on_photo_url_change = {
        let photo_url = photo_url.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            photo_url.set(input.value());
        })
    };

    // Load the initial listing.
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = CalorieEntriesState {
        entries: (*entries).clone(),
        loading: *loading,
        show_form: *show_form,
        food_name: (*food_name).clone(),
        calories: (*calories).clone(),
        protein: (*protein).clone(),
        carbs: (*carbs).clone(),
        fats: (*fats).clone(),
        meal_type: *meal_type,
        photo_url: (*photo_url).clone(),
        saving: *saving,
        form_error: (*form_error).clone(),
        form_success: *form_success,
    };

    let actions = UseCalorieEntriesActions {
        refresh,
        toggle_form,
        submit,
        on_food_name_change,
        on_calories_change,
        on_protein_change,
        on_carbs_change,
        on_fats_change,
        on_meal_type_change,
        on_photo_url_change,
    };

    UseCalorieEntriesResult { state, actions }
}
