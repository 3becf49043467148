use super::utils::{debounce, open_file_picker};
use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <span class="badge">{"Floture Detector"}</span>
            <h1>{"Detect the red \u{201c}floture\u{201d} flower"}</h1>
            <p class="subtitle">
                {"Upload an image and our vision model will estimate whether a floture is present, with a confidence score."}
            </p>
            <button
                id="upload-button"
                class="analyze-btn"
                onclick={debounce(300, open_file_picker)}
            >
                <i class="fa-solid fa-upload"></i>{" Upload an image"}
            </button>
        </header>
    }
}
