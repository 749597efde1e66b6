use shared::{calories_on_day, UserProfile};
use yew::prelude::*;

use crate::components::forms::calorie_entry_form::CalorieEntryForm;
use crate::components::header::PageHeader;
use crate::hooks::use_calorie_entries;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::View;

const DAILY_GOAL_KCAL: u32 = 2000;

#[derive(Properties, PartialEq)]
pub struct CaloriesPageProps {
    pub user: UserProfile,
    pub on_navigate: Callback<View>,
}

#[function_component(CaloriesPage)]
pub fn calories_page(props: &CaloriesPageProps) -> Html {
    let api_client = ApiClient::new();
    let calorie_entries = use_calorie_entries(&api_client, &props.user.id);
    let state = &calorie_entries.state;
    let actions = &calorie_entries.actions;

    let today_total = calories_on_day(&state.entries, date_utils::today());

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(View::Dashboard))
    };

    html! {
        <div class="page calories-page">
            <PageHeader title="Calorie Log" on_back={Some(on_back)} />

            <main class="container">
                <section class="card summary-card">
                    <h3>{"Calories Today"}</h3>
                    <p class="summary-total">{format!("{} kcal", today_total)}</p>
                    <p class="summary-goal">{format!("Goal: {} kcal", DAILY_GOAL_KCAL)}</p>
                </section>

                {if state.form_success {
                    html! {
                        <div class="form-message success">
                            {"Meal logged!"}
                        </div>
                    }
                } else { html! {} }}

                {if state.show_form {
                    html! {
                        <CalorieEntryForm
                            food_name={state.food_name.clone()}
                            calories={state.calories.clone()}
                            protein={state.protein.clone()}
                            carbs={state.carbs.clone()}
                            fats={state.fats.clone()}
                            meal_type={state.meal_type}
                            photo_url={state.photo_url.clone()}
                            saving={state.saving}
                            form_error={state.form_error.clone()}
                            on_food_name_change={actions.on_food_name_change.clone()}
                            on_calories_change={actions.on_calories_change.clone()}
                            on_protein_change={actions.on_protein_change.clone()}
                            on_carbs_change={actions.on_carbs_change.clone()}
                            on_fats_change={actions.on_fats_change.clone()}
                            on_meal_type_change={actions.on_meal_type_change.clone()}
                            on_photo_url_change={actions.on_photo_url_change.clone()}
                            on_submit={actions.submit.clone()}
                            on_cancel={actions.toggle_form.clone()}
                        />
                    }
                } else {
                    html! {
                        <button
                            class="btn btn-primary log-meal-button"
                            onclick={
                                let toggle_form = actions.toggle_form.clone();
                                Callback::from(move |_| toggle_form.emit(()))
                            }
                        >
                            {"Log a Meal"}
                        </button>
                    }
                }}

                <section class="entries-list">
                    <h3>{"Recent Meals"}</h3>
                    {if state.loading {
                        html! { <p class="loading">{"Loading entries..."}</p> }
                    } else if state.entries.is_empty() {
                        html! {
                            <p class="empty-state">
                                {"Nothing logged yet. Your meals will show up here."}
                            </p>
                        }
                    } else {
                        html! {
                            <ul class="entry-cards">
                                {for state.entries.iter().map(|entry| {
                                    html! {
                                        <li class="card entry-card" key={entry.id.clone()}>
                                            {if let Some(url) = entry.photo_url.as_ref() {
                                                html! {
                                                    <img
                                                        class="entry-photo"
                                                        src={url.clone()}
                                                        alt={entry.food_name.clone()}
                                                    />
                                                }
                                            } else { html! {} }}
                                            <div class="entry-body">
                                                <h4>{&entry.food_name}</h4>
                                                <p class="entry-macros">
                                                    {format!(
                                                        "{} kcal • P: {}g • C: {}g • F: {}g",
                                                        entry.calories,
                                                        entry.protein,
                                                        entry.carbs,
                                                        entry.fats,
                                                    )}
                                                </p>
                                            </div>
                                            <span class="badge meal-badge">
                                                {entry.meal_type.label()}
                                            </span>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
