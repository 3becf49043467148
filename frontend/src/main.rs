mod api;
mod components;

use api::GlooDetectionClient;
use components::handlers;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::render_upload_section;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::DetectionResult;
use web_sys::{AbortController, DragEvent};
use workflow::{DetectError, DetectorConfig, RequestTicket, Workflow};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // File operations
    FileChosen(Option<GlooFile>),
    HandleDrop(DragEvent),
    ClearFile,

    // Detection
    Detect,
    DetectionFinished(RequestTicket, Result<DetectionResult, DetectError>),

    // UI states
    SetDragging(bool),
}

// Main component
struct Model {
    workflow: Workflow<GlooFile, ObjectUrl>,
    client: GlooDetectionClient,
    abort: Option<AbortController>,
    is_dragging: bool,
}

fn load_config() -> DetectorConfig {
    match DetectorConfig::from_value(option_env!("BACKEND_URL")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using the default backend", e);
            DetectorConfig::default()
        }
    }
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = load_config();
        log::info!("Detection endpoint: {}", config.detect_endpoint());

        Self {
            workflow: Workflow::new(|file: &GlooFile| ObjectUrl::from(file.clone())),
            client: GlooDetectionClient::new(&config),
            abort: None,
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
            Msg::ClearFile => handlers::handle_clear(self),

            // Detection
            Msg::Detect => handlers::handle_detect(self, ctx),
            Msg::DetectionFinished(ticket, outcome) => {
                handlers::handle_detection_finished(self, ticket, outcome)
            }

            // UI states
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        handlers::abort_in_flight(self);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content detector-panel">
                    <section class="upload-column">
                        <h2>{"Upload"}</h2>
                        { render_upload_section(self, ctx) }
                        { render_preview_area(self, ctx) }
                    </section>
                    <section class="result-column">
                        <h2>{"Result"}</h2>
                        { render_results(self) }
                    </section>
                </main>

                <footer class="app-footer">
                    <p>{"This demo uses a color-based heuristic inspired by red spider lily imagery."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
