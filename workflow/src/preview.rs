/// Holds at most one preview derived from the selected file.
///
/// A preview is released by dropping it. `ObjectUrl` revokes its blob URL on
/// drop, so replacing, releasing or dropping the lifecycle frees the browser
/// memory behind the previous preview.
pub struct PreviewLifecycle<F, P> {
    derive: Box<dyn Fn(&F) -> P>,
    current: Option<P>,
}

impl<F, P> PreviewLifecycle<F, P> {
    pub fn new(derive: impl Fn(&F) -> P + 'static) -> Self {
        Self {
            derive: Box::new(derive),
            current: None,
        }
    }

    pub fn regenerate(&mut self, file: &F) {
        // Release before deriving so two previews never coexist.
        self.release();
        self.current = Some((self.derive)(file));
    }

    pub fn release(&mut self) {
        if let Some(preview) = self.current.take() {
            drop(preview);
            log::debug!("Released preview resource");
        }
    }

    pub fn current(&self) -> Option<&P> {
        self.current.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }
}
