use shared::NutritionPlan;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::header::PageHeader;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::View;

#[derive(Properties, PartialEq)]
pub struct NutritionPageProps {
    pub on_navigate: Callback<View>,
}

#[function_component(NutritionPage)]
pub fn nutrition_page(props: &NutritionPageProps) -> Html {
    let plans = use_state(Vec::<NutritionPlan>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| Option::<NutritionPlan>::None);
    let show_form = use_state(|| false);

    let new_name = use_state(String::new);
    let new_goal = use_state(|| "weight_loss".to_string());
    let new_description = use_state(String::new);

    use_effect_with((), {
        let plans = plans.clone();
        let loading = loading.clone();
        move |_| {
            spawn_local(async move {
                match ApiClient::new().list_nutrition_plans().await {
                    Ok(fetched) => plans.set(fetched),
                    Err(e) => {
                        Logger::error_with_component(
                            "nutrition",
                            &format!("Failed to load plans: {}", e),
                        );
                    }
                }
                loading.set(false);
            });
            || ()
        }
    });

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(View::Dashboard))
    };

    let close_detail = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let toggle_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(!*show_form))
    };

    // Plan authoring is not wired to a store yet; submitting just closes
    // the form.
    let on_create = {
        let show_form = show_form.clone();
        let new_name = new_name.clone();
        let new_goal = new_goal.clone();
        let new_description = new_description.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            Logger::info_with_component(
                "nutrition",
                &format!("Plan drafted locally: {} ({})", *new_name, *new_goal),
            );
            new_name.set(String::new());
            new_goal.set("weight_loss".to_string());
            new_description.set(String::new());
            show_form.set(false);
        })
    };

    let on_name_change = {
        let new_name = new_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };
    let on_goal_change = {
        let new_goal = new_goal.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            new_goal.set(select.value());
        })
    };
    let on_description_change = {
        let new_description = new_description.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            new_description.set(area.value());
        })
    };

    html! {
        <div class="page nutrition-page">
            <PageHeader title="Nutrition Plans" on_back={Some(on_back)} />

            <main class="container">
                {if let Some(plan) = (*selected).clone() {
                    html! {
                        <section class="card plan-detail">
                            <div class="plan-detail-header">
                                <h2>{&plan.name}</h2>
                                <button class="btn btn-ghost" onclick={close_detail.clone()}>
                                    {"Close"}
                                </button>
                            </div>
                            <p class="plan-description">{&plan.description}</p>
                            <p class="plan-calories">
                                {format!(
                                    "{} kcal per day",
                                    plan.meals.iter().map(|m| m.calories).sum::<u32>(),
                                )}
                            </p>

                            <h3>{"Meals"}</h3>
                            <ul class="meal-list">
                                {for plan.meals.iter().map(|meal| {
                                    html! {
                                        <li class="meal-item">
                                            <div class="meal-item-header">
                                                <strong>{&meal.meal_type}</strong>
                                                <span>{format!("{} kcal", meal.calories)}</span>
                                            </div>
                                            <p>{meal.foods.join(", ")}</p>
                                        </li>
                                    }
                                })}
                            </ul>

                            <h3>{"Shopping List"}</h3>
                            <ul class="shopping-list">
                                {for plan.shopping_list.iter().map(|item| {
                                    html! { <li>{item}</li> }
                                })}
                            </ul>

                            <button class="btn btn-primary">{"Activate This Plan"}</button>
                        </section>
                    }
                } else {
                    html! {
                        <>
                            <div class="page-actions">
                                <button class="btn btn-outline" onclick={toggle_form.clone()}>
                                    {if *show_form { "Cancel" } else { "Create Your Own Plan" }}
                                </button>
                            </div>

                            {if *show_form {
                                html! {
                                    <section class="card plan-form-card">
                                        <form onsubmit={on_create}>
                                            <div class="form-group">
                                                <label for="plan_name">{"Plan name"}</label>
                                                <input
                                                    type="text"
                                                    id="plan_name"
                                                    value={(*new_name).clone()}
                                                    onchange={on_name_change}
                                                    required=true
                                                />
                                            </div>
                                            <div class="form-group">
                                                <label for="plan_goal">{"Goal"}</label>
                                                <select id="plan_goal" onchange={on_goal_change}>
                                                    <option value="weight_loss" selected={*new_goal == "weight_loss"}>
                                                        {"Weight loss"}
                                                    </option>
                                                    <option value="muscle_gain" selected={*new_goal == "muscle_gain"}>
                                                        {"Muscle gain"}
                                                    </option>
                                                    <option value="maintenance" selected={*new_goal == "maintenance"}>
                                                        {"Maintenance"}
                                                    </option>
                                                    <option value="health" selected={*new_goal == "health"}>
                                                        {"General health"}
                                                    </option>
                                                </select>
                                            </div>
                                            <div class="form-group">
                                                <label for="plan_description">{"Description"}</label>
                                                <textarea
                                                    id="plan_description"
                                                    value={(*new_description).clone()}
                                                    onchange={on_description_change}
                                                />
                                            </div>
                                            <button type="submit" class="btn btn-primary">
                                                {"Save Plan"}
                                            </button>
                                        </form>
                                    </section>
                                }
                            } else { html! {} }}

                            {if *loading {
                                html! { <p class="loading">{"Loading plans..."}</p> }
                            } else {
                                html! {
                                    <div class="plan-grid">
                                        {for (*plans).iter().map(|plan| {
                                            let selected = selected.clone();
                                            let this_plan = plan.clone();
                                            html! {
                                                <div
                                                    class="card plan-card"
                                                    key={plan.id.clone()}
                                                    onclick={Callback::from(move |_| {
                                                        selected.set(Some(this_plan.clone()))
                                                    })}
                                                >
                                                    <h3>{&plan.name}</h3>
                                                    <p>{&plan.description}</p>
                                                    <span class="plan-calories">
                                                        {format!(
                                                            "{} kcal/day",
                                                            plan.meals.iter().map(|m| m.calories).sum::<u32>(),
                                                        )}
                                                    </span>
                                                </div>
                                            }
                                        })}
                                    </div>
                                }
                            }}
                        </>
                    }
                }}
            </main>
        </div>
    }
}
