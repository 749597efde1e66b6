use shared::{Exercise, WorkoutPlan};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::header::PageHeader;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::View;

#[derive(Properties, PartialEq)]
pub struct WorkoutPageProps {
    pub on_navigate: Callback<View>,
}

#[function_component(WorkoutPage)]
pub fn workout_page(props: &WorkoutPageProps) -> Html {
    let plans = use_state(Vec::<WorkoutPlan>::new);
    let loading = use_state(|| true);
    let selected_plan = use_state(|| Option::<WorkoutPlan>::None);
    let current_exercise = use_state(|| Option::<Exercise>::None);

    use_effect_with((), {
        let plans = plans.clone();
        let loading = loading.clone();
        move |_| {
            spawn_local(async move {
                match ApiClient::new().list_workout_plans().await {
                    Ok(fetched) => plans.set(fetched),
                    Err(e) => {
                        Logger::error_with_component(
                            "workout",
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
        let selected_plan = selected_plan.clone();
        Callback::from(move |_| {
            if selected_plan.is_some() {
                selected_plan.set(None);
            } else {
                on_navigate.emit(View::Dashboard);
            }
        })
    };

    let close_exercise = {
        let current_exercise = current_exercise.clone();
        Callback::from(move |_: MouseEvent| current_exercise.set(None))
    };

    html! {
        <div class="page workout-page">
            <PageHeader title="Workout Plans" on_back={Some(on_back)} />

            <main class="container">
                {if let Some(exercise) = (*current_exercise).clone() {
                    html! {
                        <div class="modal-overlay" onclick={close_exercise.clone()}>
                            <div class="card exercise-modal">
                                <h3>{&exercise.name}</h3>
                                {if let Some(url) = exercise.illustration_url.as_ref() {
                                    html! {
                                        <img
                                            class="exercise-illustration"
                                            src={url.clone()}
                                            alt={exercise.name.clone()}
                                        />
                                    }
                                } else {
                                    html! {
                                        <p class="empty-state">
                                            {"No demonstration available for this exercise."}
                                        </p>
                                    }
                                }}
                                <p>
                                    {format!(
                                        "{} sets of {} reps, {}s rest",
                                        exercise.sets, exercise.reps, exercise.rest_seconds,
                                    )}
                                </p>
                                <button class="btn btn-outline" onclick={close_exercise}>
                                    {"Close"}
                                </button>
                            </div>
                        </div>
                    }
                } else { html! {} }}

                {if let Some(plan) = (*selected_plan).clone() {
                    html! {
                        <section class="plan-detail">
                            <div class="plan-detail-header">
                                <h2>{&plan.name}</h2>
                                <span class="badge difficulty-badge">
                                    {plan.difficulty.label()}
                                </span>
                            </div>
                            <p class="plan-description">{&plan.description}</p>
                            <p class="plan-duration">
                                {format!("About {} minutes", plan.duration_minutes)}
                            </p>

                            <ul class="exercise-cards">
                                {for plan.exercises.iter().map(|exercise| {
                                    let current_exercise = current_exercise.clone();
                                    let this_exercise = exercise.clone();
                                    html! {
                                        <li class="card exercise-card" key={exercise.id.clone()}>
                                            <div class="exercise-body">
                                                <h4>{&exercise.name}</h4>
                                                <p class="exercise-detail">
                                                    {format!(
                                                        "{} x {} • {}s rest • {}",
                                                        exercise.sets,
                                                        exercise.reps,
                                                        exercise.rest_seconds,
                                                        exercise.muscle_group,
                                                    )}
                                                </p>
                                            </div>
                                            <button
                                                class="btn btn-ghost"
                                                onclick={Callback::from(move |_| {
                                                    current_exercise.set(Some(this_exercise.clone()))
                                                })}
                                            >
                                                {"View Demonstration"}
                                            </button>
                                        </li>
                                    }
                                })}
                            </ul>
                        </section>
                    }
                } else {
                    html! {
                        <>
                            <section class="card hero-card">
                                <h2>{"Today's Workout"}</h2>
                                <p>{"Pick a plan below to get started."}</p>
                            </section>

                            {if *loading {
                                html! { <p class="loading">{"Loading plans..."}</p> }
                            } else {
                                html! {
                                    <div class="plan-grid">
                                        {for (*plans).iter().map(|plan| {
                                            let selected_plan = selected_plan.clone();
                                            let this_plan = plan.clone();
                                            html! {
                                                <div
                                                    class="card plan-card"
                                                    key={plan.id.clone()}
                                                    onclick={Callback::from(move |_| {
                                                        selected_plan.set(Some(this_plan.clone()))
                                                    })}
                                                >
                                                    <div class="plan-card-header">
                                                        <h3>{&plan.name}</h3>
                                                        <span class="badge difficulty-badge">
                                                            {plan.difficulty.label()}
                                                        </span>
                                                    </div>
                                                    <p>{&plan.description}</p>
                                                    <span class="plan-duration">
                                                        {format!(
                                                            "{} exercises • {} min",
                                                            plan.exercises.len(),
                                                            plan.duration_minutes,
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
