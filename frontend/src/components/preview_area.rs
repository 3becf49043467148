use super::super::{Model, Msg};
use super::utils::debounce;
use workflow::presenter::detect_button_label;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let status = model.workflow.status();

    html! {
        <div id="preview-container">
            { render_selected_image_preview(model) }
            <div class="button-container">
                <button
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Detect)
                    })}
                    disabled={!model.workflow.can_detect()}
                >
                    {
                        if status.is_pending() {
                            html! { <i class="fa-solid fa-spinner fa-spin"></i> }
                        } else {
                            html! { <i class="fa-solid fa-magnifying-glass"></i> }
                        }
                    }
                    { format!(" {}", detect_button_label(status)) }
                </button>
                {
                    if model.workflow.can_clear() {
                        html! {
                            <button
                                id="clear-btn"
                                class="clear-btn"
                                onclick={link.callback(|_| Msg::ClearFile)}
                            >
                                {"Clear"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn render_selected_image_preview(model: &Model) -> Html {
    match model.workflow.preview() {
        Some(url) => html! {
            <div class="preview-frame">
                <img id="actual-image-preview" src={url.to_string()} alt="preview" />
            </div>
        },
        None => html! {},
    }
}
