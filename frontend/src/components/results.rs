use super::super::Model;
use workflow::{ResultCard, ResultView};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    match model.workflow.result_view() {
        ResultView::Detected(card) => render_result_card(&card),
        ResultView::Failed(message) => html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ message }</p>
            </div>
        },
        view => html! {
            <div class="no-results-message">
                { view.placeholder().unwrap_or_default() }
            </div>
        },
    }
}

fn render_result_card(card: &ResultCard) -> Html {
    html! {
        <div class={classes!("results-container", if card.detected { "detected" } else { "not-detected" })}>
            <div class="result-header">
                <h2>
                    {
                        if card.detected {
                            html! { <><i class="fa-solid fa-seedling"></i>{ format!(" {}", card.headline) }</> }
                        } else {
                            html! { <><i class="fa-solid fa-circle-xmark"></i>{ format!(" {}", card.headline) }</> }
                        }
                    }
                </h2>
                <span class="confidence-badge">{ card.confidence.clone() }</span>
            </div>
            <div class="result-metrics">
                { render_metric("Red ratio", &card.red_ratio) }
                { render_metric("Saturation", &card.saturation) }
                { render_metric("Image size", &card.dimensions) }
                { render_metric("Label", &card.label) }
            </div>
        </div>
    }
}

fn render_metric(name: &str, value: &str) -> Html {
    html! {
        <div class="result-item">
            <p class="result-label">{ name.to_string() }</p>
            <p class="result-value">{ value.to_string() }</p>
        </div>
    }
}
