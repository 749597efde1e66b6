use shared::{progress_percent, UserProfile};
use yew::prelude::*;

use crate::components::header::PageHeader;
use crate::View;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub user: UserProfile,
    pub on_navigate: Callback<View>,
    pub on_sign_out: Callback<()>,
}

/// Daily summary shown on the landing view. Values are demo figures until
/// a stats endpoint exists.
#[derive(Clone, PartialEq)]
struct DailyStats {
    calories_consumed: u32,
    calories_goal: u32,
    calories_burned: u32,
    workouts_completed: u32,
    workouts_goal: u32,
    streak_days: u32,
}

impl Default for DailyStats {
    fn default() -> Self {
        Self {
            calories_consumed: 1450,
            calories_goal: 2000,
            calories_burned: 320,
            workouts_completed: 1,
            workouts_goal: 1,
            streak_days: 7,
        }
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let stats = DailyStats::default();

    let calorie_pct = progress_percent(
        stats.calories_consumed as f64,
        stats.calories_goal as f64,
    );
    let workout_pct = progress_percent(
        stats.workouts_completed as f64,
        stats.workouts_goal as f64,
    );

    let nav_button = |label: &str, icon: &str, target: View| {
        let on_navigate = props.on_navigate.clone();
        html! {
            <button
                class="btn quick-action"
                onclick={Callback::from(move |_| on_navigate.emit(target))}
            >
                <span class="quick-action-icon">{icon}</span>
                <span>{label}</span>
            </button>
        }
    };

    html! {
        <div class="page dashboard-page">
            <PageHeader
                title="GTFit"
                on_sign_out={Some(props.on_sign_out.clone())}
            />

            <main class="container">
                <section class="greeting">
                    <h2>{format!("Hello, {}!", props.user.greeting_name())}</h2>
                    <p>{"Here is your day at a glance."}</p>
                </section>

                <section class="stats-grid">
                    <div class="card stat-card">
                        <h3>{"Calories"}</h3>
                        <p class="stat-value">
                            {format!("{} / {} kcal", stats.calories_consumed, stats.calories_goal)}
                        </p>
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style={format!("width: {:.0}%", calorie_pct)}
                            />
                        </div>
                        <p class="stat-detail">
                            {format!("{} kcal burned", stats.calories_burned)}
                        </p>
                    </div>

                    <div class="card stat-card">
                        <h3>{"Workouts"}</h3>
                        <p class="stat-value">
                            {format!("{} / {}", stats.workouts_completed, stats.workouts_goal)}
                        </p>
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style={format!("width: {:.0}%", workout_pct)}
                            />
                        </div>
                        <p class="stat-detail">
                            {format!("{} day streak", stats.streak_days)}
                        </p>
                    </div>
                </section>

                <section class="quick-actions">
                    {nav_button("Log Calories", "🍎", View::Calories)}
                    {nav_button("Nutrition Plans", "🥗", View::Nutrition)}
                    {nav_button("Fitness Quiz", "🧠", View::Quiz)}
                    {nav_button("Workout Plans", "💪", View::Workout)}
                </section>

                <section class="card recent-activity">
                    <h3>{"Recent Activity"}</h3>
                    <ul>
                        <li>{"Completed Push Day workout"}</li>
                        <li>{"Logged breakfast: oatmeal with berries"}</li>
                        <li>{"Scored 4/5 on the fitness quiz"}</li>
                    </ul>
                </section>
            </main>
        </div>
    }
}
