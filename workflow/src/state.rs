use shared::DetectionResult;

use crate::client::DetectionClient;
use crate::detection::{DetectionController, DetectionStatus, RequestTicket};
use crate::error::{DetectError, DetectRejected};
use crate::presenter::ResultView;
use crate::preview::PreviewLifecycle;

/// Owns the selected file, its preview and the detection status.
///
/// Every mutation goes through this type so that a result can never outlive
/// the file it was computed for.
pub struct Workflow<F, P> {
    file: Option<F>,
    preview: PreviewLifecycle<F, P>,
    detection: DetectionController,
}

impl<F, P> Workflow<F, P> {
    /// `derive_preview` turns a selected file into its preview resource.
    pub fn new(derive_preview: impl Fn(&F) -> P + 'static) -> Self {
        Self {
            file: None,
            preview: PreviewLifecycle::new(derive_preview),
            detection: DetectionController::new(),
        }
    }

    /// Picker and drop events without a file are ignored. Returns whether
    /// anything changed. A request in flight for the previous file is
    /// superseded: its outcome is discarded when it arrives.
    pub fn select(&mut self, file: Option<F>) -> bool {
        let Some(file) = file else {
            return false;
        };
        self.preview.regenerate(&file);
        self.file = Some(file);
        self.detection.reset();
        true
    }

    /// Drops the file and its preview. Refused while a request is in flight.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        self.file = None;
        self.preview.release();
        self.detection.reset();
        true
    }

    /// Enters `Pending` and returns the ticket and the file to send.
    pub fn begin_detection(&mut self) -> Result<(RequestTicket, &F), DetectRejected> {
        let Some(file) = self.file.as_ref() else {
            return Err(DetectRejected::NoSelection);
        };
        let ticket = self.detection.begin()?;
        Ok((ticket, file))
    }

    pub fn finish_detection(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<DetectionResult, DetectError>,
    ) -> bool {
        self.detection.finish(ticket, outcome)
    }

    /// Runs one detection round trip to completion.
    pub async fn detect<C>(&mut self, client: &C) -> Result<(), DetectRejected>
    where
        C: DetectionClient<F>,
    {
        let (ticket, file) = self.begin_detection()?;
        let outcome = client.detect(file).await;
        self.finish_detection(ticket, outcome);
        Ok(())
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.current()
    }

    pub fn status(&self) -> &DetectionStatus {
        self.detection.status()
    }

    pub fn result_view(&self) -> ResultView {
        ResultView::from_status(self.status())
    }

    /// The request still on the wire, including one superseded by a new
    /// selection.
    pub fn request_in_flight(&self) -> Option<RequestTicket> {
        self.detection.in_flight()
    }

    pub fn can_detect(&self) -> bool {
        self.file.is_some() && self.request_in_flight().is_none()
    }

    pub fn can_clear(&self) -> bool {
        self.file.is_some() && self.request_in_flight().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SelectedFile;
    use crate::detection::tests::sample_result;
    use crate::presenter::{NO_RESULT_TEXT, ResultCard};
    use crate::preview::tests::{Ledger, TrackedPreview};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Replays canned outcomes and records which files were sent.
    #[derive(Default)]
    struct ScriptedClient {
        outcomes: RefCell<Vec<Result<DetectionResult, DetectError>>>,
        calls: Cell<usize>,
        sent: RefCell<Vec<String>>,
    }

    impl ScriptedClient {
        fn answering(outcome: Result<DetectionResult, DetectError>) -> Self {
            let client = Self::default();
            client.outcomes.borrow_mut().push(outcome);
            client
        }
    }

    impl DetectionClient<SelectedFile> for ScriptedClient {
        async fn detect(&self, file: &SelectedFile) -> Result<DetectionResult, DetectError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(file.name().to_string());
            self.outcomes
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(DetectError::Transport(String::new())))
        }
    }

    fn image(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
    }

    fn workflow(ledger: &Ledger) -> Workflow<SelectedFile, TrackedPreview> {
        let ledger = ledger.clone();
        Workflow::new(move |file: &SelectedFile| ledger.preview(file.name()))
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn select_and_clear_always_leave_idle() {
        init_logger();
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        let client = ScriptedClient::answering(Ok(sample_result()));

        assert!(flow.select(Some(image("a.png"))));
        block_on(flow.detect(&client)).unwrap();
        assert!(flow.status().result().is_some());

        assert!(flow.select(Some(image("b.png"))));
        assert_eq!(flow.status(), &DetectionStatus::Idle);
        assert_eq!(flow.status().result(), None);

        let client = ScriptedClient::answering(Err(DetectError::service(500, "model unavailable")));
        block_on(flow.detect(&client)).unwrap();
        assert!(flow.clear());
        assert_eq!(flow.status(), &DetectionStatus::Idle);
        assert_eq!(flow.result_view().placeholder(), Some(NO_RESULT_TEXT));
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        assert!(!flow.select(None));
        assert!(flow.file().is_none());
        assert!(flow.preview().is_none());
        assert_eq!(ledger.live.get(), 0);
    }

    #[test]
    fn detect_without_file_changes_nothing() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        let client = ScriptedClient::default();

        assert_eq!(block_on(flow.detect(&client)), Err(DetectRejected::NoSelection));
        assert_eq!(flow.status(), &DetectionStatus::Idle);
        assert_eq!(client.calls.get(), 0);
        assert!(!flow.can_detect());
    }

    #[test]
    fn only_one_request_in_flight() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        let client = ScriptedClient::answering(Ok(sample_result()));
        flow.select(Some(image("lily.png")));

        let (ticket, file) = flow.begin_detection().unwrap();
        let outcome = block_on(client.detect(file));
        assert!(!flow.can_detect());
        assert!(!flow.can_clear());
        assert_eq!(
            block_on(flow.detect(&client)),
            Err(DetectRejected::AlreadyPending)
        );
        assert_eq!(client.calls.get(), 1);

        assert!(flow.finish_detection(ticket, outcome));
        assert!(flow.can_detect());
    }

    #[test]
    fn successful_detection_is_presented() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        let client = ScriptedClient::answering(Ok(sample_result()));
        flow.select(Some(image("garden.jpg")));

        block_on(flow.detect(&client)).unwrap();

        assert!(matches!(flow.status(), DetectionStatus::Success(_)));
        let ResultView::Detected(ResultCard { confidence, label, .. }) = flow.result_view() else {
            panic!("expected a result card");
        };
        assert_eq!(confidence, "87%");
        assert_eq!(label, "floture");
        assert_eq!(client.sent.borrow().as_slice(), ["garden.jpg"]);
    }

    #[test]
    fn service_error_is_presented_verbatim() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        let client = ScriptedClient::answering(Err(DetectError::service(500, "model unavailable")));
        flow.select(Some(image("garden.jpg")));

        block_on(flow.detect(&client)).unwrap();

        assert!(matches!(flow.status(), DetectionStatus::Failure(_)));
        assert_eq!(flow.result_view(), ResultView::Failed("model unavailable".into()));
    }

    #[test]
    fn transport_failure_without_message_still_explains() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        let client = ScriptedClient::answering(Err(DetectError::Transport(String::new())));
        flow.select(Some(image("garden.jpg")));

        block_on(flow.detect(&client)).unwrap();

        let message = flow.status().error().unwrap();
        assert!(!message.is_empty());
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        flow.select(Some(image("garden.jpg")));

        let failing = ScriptedClient::answering(Err(DetectError::Transport("reset".into())));
        block_on(flow.detect(&failing)).unwrap();
        assert!(flow.can_detect());

        let working = ScriptedClient::answering(Ok(sample_result()));
        block_on(flow.detect(&working)).unwrap();
        assert_eq!(flow.status().result(), Some(&sample_result()));
    }

    #[test]
    fn second_selection_keeps_one_live_preview() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);

        flow.select(Some(image("first.png")));
        flow.select(Some(image("second.png")));

        assert_eq!(ledger.live.get(), 1);
        assert_eq!(ledger.released.get(), 1);
        assert_eq!(flow.preview().map(|p| p.source.as_str()), Some("second.png"));
    }

    #[test]
    fn clear_twice_matches_clear_once() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        flow.select(Some(image("first.png")));

        assert!(flow.clear());
        assert!(!flow.clear());

        assert!(flow.file().is_none());
        assert!(flow.preview().is_none());
        assert_eq!(flow.status(), &DetectionStatus::Idle);
        assert_eq!(ledger.live.get(), 0);
        assert_eq!(ledger.released.get(), 1);
    }

    #[test]
    fn clear_is_refused_while_pending() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        flow.select(Some(image("first.png")));
        let (ticket, _) = flow.begin_detection().unwrap();

        assert!(!flow.clear());
        assert!(flow.file().is_some());
        assert_eq!(ledger.live.get(), 1);

        assert!(flow.finish_detection(ticket, Err(DetectError::Transport("timeout".into()))));
        assert!(flow.clear());
    }

    #[test]
    fn reselecting_while_pending_discards_late_result() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        flow.select(Some(image("old.png")));
        let (stale, _) = flow.begin_detection().unwrap();

        flow.select(Some(image("new.png")));
        assert_eq!(flow.status(), &DetectionStatus::Idle);
        assert!(!flow.can_detect());

        assert!(!flow.finish_detection(stale, Ok(sample_result())));
        assert_eq!(flow.status(), &DetectionStatus::Idle);
        assert!(flow.can_detect());
    }

    #[test]
    fn reselecting_while_pending_never_allows_a_second_request() {
        let ledger = Ledger::default();
        let mut flow = workflow(&ledger);
        let client = ScriptedClient::answering(Ok(sample_result()));

        flow.select(Some(image("a.png")));
        let (first, _) = flow.begin_detection().unwrap();
        flow.select(Some(image("b.png")));

        assert_eq!(
            flow.begin_detection().map(|(ticket, _)| ticket),
            Err(DetectRejected::AlreadyPending)
        );
        assert_eq!(
            block_on(flow.detect(&client)),
            Err(DetectRejected::AlreadyPending)
        );
        assert_eq!(client.calls.get(), 0);
        assert!(!flow.can_clear());
        assert_eq!(flow.request_in_flight(), Some(first));

        assert!(!flow.finish_detection(first, Err(DetectError::Transport("aborted".into()))));
        assert_eq!(flow.request_in_flight(), None);
        assert_eq!(flow.status(), &DetectionStatus::Idle);

        block_on(flow.detect(&client)).unwrap();
        assert_eq!(client.sent.borrow().as_slice(), ["b.png"]);
        assert!(flow.status().result().is_some());
    }

    #[test]
    fn teardown_releases_preview() {
        let ledger = Ledger::default();
        {
            let mut flow = workflow(&ledger);
            flow.select(Some(image("first.png")));
        }
        assert_eq!(ledger.live.get(), 0);
    }
}
