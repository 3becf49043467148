use super::super::Model;
use super::super::Msg;
use super::utils::first_file;
use crate::api::GlooDetectionClient;
use gloo_file::File as GlooFile;
use shared::DetectionResult;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, DragEvent};
use workflow::{DetectError, DetectionClient, RequestTicket};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, file: Option<GlooFile>) -> bool {
    let Some(file) = file else {
        return false;
    };
    log::info!(
        "Selected {} ({} bytes, {})",
        file.name(),
        file.size(),
        file.raw_mime_type()
    );
    // The old request resolves as aborted and its outcome is discarded.
    abort_in_flight(model);
    model.workflow.select(Some(file))
}

pub fn abort_in_flight(model: &mut Model) {
    if let Some(abort) = model.abort.take() {
        if let Some(ticket) = model.workflow.request_in_flight() {
            log::info!("Aborting detection {}", ticket);
            abort.abort();
        }
    }
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    handle_file_chosen(model, file);
    true
}

pub fn handle_clear(model: &mut Model) -> bool {
    model.workflow.clear()
}

pub fn handle_detect(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.workflow.begin_detection() {
        Ok((ticket, file)) => {
            let file = file.clone();
            let client = match AbortController::new() {
                Ok(abort) => {
                    let client = model.client.with_abort_signal(abort.signal());
                    model.abort = Some(abort);
                    client
                }
                Err(e) => {
                    log::warn!("Detection {} cannot be aborted: {:?}", ticket, e);
                    model.client.clone()
                }
            };
            send_detection_request(ctx, client, ticket, file);
            true
        }
        Err(rejected) => {
            log::debug!("Ignoring detect request: {}", rejected);
            false
        }
    }
}

pub fn handle_detection_finished(
    model: &mut Model,
    ticket: RequestTicket,
    outcome: Result<DetectionResult, DetectError>,
) -> bool {
    if !model.workflow.finish_detection(ticket, outcome) {
        log::debug!("Detection {} resolved after being superseded", ticket);
    }
    if model.workflow.request_in_flight().is_none() {
        model.abort = None;
    }
    // Even a discarded completion re-enables the detect button.
    true
}

pub fn send_detection_request(
    ctx: &Context<Model>,
    client: GlooDetectionClient,
    ticket: RequestTicket,
    file: GlooFile,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = client.detect(&file).await;
            link.send_message(Msg::DetectionFinished(ticket, outcome));
        }
    });
}
