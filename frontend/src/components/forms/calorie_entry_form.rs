use shared::MealType;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalorieEntryFormProps {
    // Form state
    pub food_name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub meal_type: MealType,
    pub photo_url: String,
    pub saving: bool,
    pub form_error: Option<String>,

    // Event handlers
    pub on_food_name_change: Callback<Event>,
    pub on_calories_change: Callback<Event>,
    pub on_protein_change: Callback<Event>,
    pub on_carbs_change: Callback<Event>,
    pub on_fats_change: Callback<Event>,
    pub on_meal_type_change: Callback<Event>,
    pub on_photo_url_change: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(CalorieEntryForm)]
pub fn calorie_entry_form(props: &CalorieEntryFormProps) -> Html {
    html! {
        <section class="card entry-form-card">
            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="calorie-entry-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-row">
                    <div class="form-group">
                        <label for="food_name">{"Food name"}</label>
                        <input
                            type="text"
                            id="food_name"
                            value={props.food_name.clone()}
                            onchange={props.on_food_name_change.clone()}
                            disabled={props.saving}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="meal_type">{"Meal"}</label>
                        <select
                            id="meal_type"
                            onchange={props.on_meal_type_change.clone()}
                            disabled={props.saving}
                        >
                            {for MealType::ALL.iter().map(|meal_type| {
                                html! {
                                    <option
                                        value={meal_type.as_str()}
                                        selected={*meal_type == props.meal_type}
                                    >
                                        {meal_type.label()}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                </div>

                <div class="form-row macros">
                    <div class="form-group">
                        <label for="calories">{"Calories"}</label>
                        <input
                            type="number"
                            id="calories"
                            min="0"
                            value={props.calories.clone()}
                            onchange={props.on_calories_change.clone()}
                            disabled={props.saving}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="protein">{"Protein (g)"}</label>
                        <input
                            type="number"
                            id="protein"
                            step="0.1"
                            value={props.protein.clone()}
                            onchange={props.on_protein_change.clone()}
                            disabled={props.saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="carbs">{"Carbs (g)"}</label>
                        <input
                            type="number"
                            id="carbs"
                            step="0.1"
                            value={props.carbs.clone()}
                            onchange={props.on_carbs_change.clone()}
                            disabled={props.saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="fats">{"Fats (g)"}</label>
                        <input
                            type="number"
                            id="fats"
                            step="0.1"
                            value={props.fats.clone()}
                            onchange={props.on_fats_change.clone()}
                            disabled={props.saving}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="photo_url">{"Photo URL (optional)"}</label>
                    <input
                        type="text"
                        id="photo_url"
                        placeholder="Paste a photo URL of the dish"
                        value={props.photo_url.clone()}
                        onchange={props.on_photo_url_change.clone()}
                        disabled={props.saving}
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={props.saving}>
                        {if props.saving { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline"
                        onclick={
                            let on_cancel = props.on_cancel.clone();
                            Callback::from(move |_| on_cancel.emit(()))
                        }
                        disabled={props.saving}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </section>
    }
}
