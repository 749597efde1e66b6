use shared::quiz::{fitness_questions, QuizPhase, QuizSession};
use yew::prelude::*;

use crate::components::header::PageHeader;
use crate::services::logging::Logger;
use crate::View;

#[derive(Properties, PartialEq)]
pub struct QuizPageProps {
    pub on_navigate: Callback<View>,
}

#[function_component(QuizPage)]
pub fn quiz_page(props: &QuizPageProps) -> Html {
    let session = use_state(|| QuizSession::new(fitness_questions()));

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(View::Dashboard))
    };

    let on_select = {
        let session = session.clone();
        Callback::from(move |option_index: usize| {
            let mut next = (*session).clone();
            match next.select_option(option_index) {
                Ok(()) => session.set(next),
                Err(e) => {
                    Logger::warn_with_component(
                        "quiz",
                        &format!("Selection rejected: {}", e),
                    );
                }
            }
        })
    };

    let on_advance = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            match next.advance() {
                Ok(_) => session.set(next),
                Err(e) => {
                    Logger::warn_with_component(
                        "quiz",
                        &format!("Advance rejected: {}", e),
                    );
                }
            }
        })
    };

    let on_retreat = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            match next.retreat() {
                Ok(()) => session.set(next),
                Err(e) => {
                    Logger::warn_with_component(
                        "quiz",
                        &format!("Retreat rejected: {}", e),
                    );
                }
            }
        })
    };

    let on_reset = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.reset();
            session.set(next);
        })
    };

    let body = match session.phase() {
        QuizPhase::Answering => render_question(&session, &on_select, &on_retreat, &on_advance),
        QuizPhase::Finished => render_results(&session, &on_reset, &props.on_navigate),
    };

    html! {
        <div class="page quiz-page">
            <PageHeader title="Fitness Quiz" on_back={Some(on_back)} />
            <main class="container">
                {body}
            </main>
        </div>
    }
}

fn render_question(
    session: &QuizSession,
    on_select: &Callback<usize>,
    on_retreat: &Callback<MouseEvent>,
    on_advance: &Callback<MouseEvent>,
) -> Html {
    let Some(question) = session.current_question() else {
        return html! { <p class="empty-state">{"No questions available."}</p> };
    };

    let index = session.current_index();
    let total = session.len();
    let percent = session.progress_percent();

    html! {
        <section class="card quiz-card">
            <div class="quiz-progress">
                <span>{format!("Question {} of {}", index + 1, total)}</span>
                <span>{format!("{:.0}%", percent)}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {:.0}%", percent)} />
            </div>

            <h2 class="quiz-prompt">{&question.prompt}</h2>

            <div class="quiz-options">
                {for question.options.iter().enumerate().map(|(i, option)| {
                    let on_select = on_select.clone();
                    let checked = session.pending_selection() == Some(i);
                    html! {
                        <label
                            class={if checked { "quiz-option selected" } else { "quiz-option" }}
                        >
                            <input
                                type="radio"
                                name="quiz-option"
                                checked={checked}
                                onclick={Callback::from(move |_| on_select.emit(i))}
                            />
                            {option}
                        </label>
                    }
                })}
            </div>

            <div class="quiz-actions">
                <button
                    class="btn btn-outline"
                    disabled={index == 0}
                    onclick={on_retreat.clone()}
                >
                    {"Previous"}
                </button>
                <button
                    class="btn btn-primary"
                    disabled={session.pending_selection().is_none()}
                    onclick={on_advance.clone()}
                >
                    {if session.is_last_question() { "Finish" } else { "Next" }}
                </button>
            </div>
        </section>
    }
}

fn render_results(
    session: &QuizSession,
    on_reset: &Callback<MouseEvent>,
    on_navigate: &Callback<View>,
) -> Html {
    let score = session.score();
    let total = session.len();

    let go_dashboard = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Dashboard))
    };

    html! {
        <section class="quiz-results">
            <div class="card score-card">
                <h2>{"Quiz Complete!"}</h2>
                <p class="score-value">{format!("{}/{}", score, total)}</p>
                <p class="score-message">{score_message(score, total)}</p>
            </div>

            <ul class="review-list">
                {for session.questions().iter().zip(session.answers()).map(|(question, answer)| {
                    let correct = *answer == Some(question.correct_option);
                    html! {
                        <li
                            class={if correct { "card review-item correct" } else { "card review-item wrong" }}
                            key={question.id.clone()}
                        >
                            <h4>{&question.prompt}</h4>
                            <p class="review-answer">
                                {"Your answer: "}
                                {match answer {
                                    Some(i) => question.options[*i].clone(),
                                    None => "No answer".to_string(),
                                }}
                            </p>
                            {if !correct {
                                html! {
                                    <p class="review-correct">
                                        {"Correct answer: "}
                                        {&question.options[question.correct_option]}
                                    </p>
                                }
                            } else { html! {} }}
                            <p class="review-explanation">{&question.explanation}</p>
                        </li>
                    }
                })}
            </ul>

            <div class="quiz-actions">
                <button class="btn btn-primary" onclick={on_reset.clone()}>
                    {"Retake Quiz"}
                </button>
                <button class="btn btn-outline" onclick={go_dashboard}>
                    {"Back to Dashboard"}
                </button>
            </div>
        </section>
    }
}

fn score_message(score: usize, total: usize) -> &'static str {
    if total == 0 {
        return "No questions answered.";
    }
    let percent = score * 100 / total;
    if percent >= 80 {
        "Excellent! You're a fitness expert!"
    } else if percent >= 60 {
        "Good job! Keep learning!"
    } else {
        "Keep studying. Everyone starts somewhere!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_message_thresholds() {
        assert_eq!(score_message(5, 5), "Excellent! You're a fitness expert!");
        assert_eq!(score_message(4, 5), "Excellent! You're a fitness expert!");
        assert_eq!(score_message(3, 5), "Good job! Keep learning!");
        assert_eq!(score_message(2, 5), "Keep studying. Everyone starts somewhere!");
        assert_eq!(score_message(0, 5), "Keep studying. Everyone starts somewhere!");
    }

    #[test]
    fn test_score_message_empty_quiz() {
        assert_eq!(score_message(0, 0), "No questions answered.");
    }
}
