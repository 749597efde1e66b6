mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::pages::{
    CaloriesPage, DashboardPage, LoginPage, NutritionPage, QuizPage, WorkoutPage,
};
use hooks::use_session;
use services::auth::AuthClient;

/// The views the app can show. Navigation is plain state, no URL routing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Login,
    Dashboard,
    Calories,
    Nutrition,
    Quiz,
    Workout,
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| View::Login);
    let auth_client = AuthClient::new();
    let session = use_session(&auth_client);

    // Every protected view falls back to the login screen the moment the
    // session is known to be absent.
    {
        let view_handle = view.clone();
        use_effect_with(
            (session.state.loading, session.state.user.is_some(), *view),
            move |(loading, authenticated, current)| {
                if !loading && !authenticated && *current != View::Login {
                    view_handle.set(View::Login);
                }
                || ()
            },
        );
    }

    let navigate = {
        let view = view.clone();
        Callback::from(move |target: View| view.set(target))
    };

    let on_authenticated = {
        let view = view.clone();
        let refresh = session.actions.refresh.clone();
        Callback::from(move |_user| {
            refresh.emit(());
            view.set(View::Dashboard);
        })
    };

    if *view == View::Login {
        return html! { <LoginPage on_authenticated={on_authenticated} /> };
    }

    if session.state.loading {
        return html! {
            <div class="loading-screen">{"Loading GTFit..."}</div>
        };
    }

    let Some(user) = session.state.user.clone() else {
        // The guard effect above is about to redirect to the login view.
        return html! {};
    };

    match *view {
        View::Login => html! {},
        View::Dashboard => html! {
            <DashboardPage
                user={user}
                on_navigate={navigate}
                on_sign_out={session.actions.sign_out.clone()}
            />
        },
        View::Calories => html! {
            <CaloriesPage user={user} on_navigate={navigate} />
        },
        View::Nutrition => html! {
            <NutritionPage on_navigate={navigate} />
        },
        View::Quiz => html! {
            <QuizPage on_navigate={navigate} />
        },
        View::Workout => html! {
            <WorkoutPage on_navigate={navigate} />
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
