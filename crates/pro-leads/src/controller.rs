//! Submission controller.
//!
//! Drives a [`FormModel`] through `Idle → Submitting → Success | Error`,
//! performs the single insert, and owns the cancellable auto-reset timer.
//! The presentation sends messages (`edit`, `submit`, `share`) and observes
//! [`FormView`] snapshots through the observer callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;
use futures::future::{self, AbortHandle, Abortable, Either};
use pro_core::{LeadsConfig, SessionId, DEFAULT_RESET_DELAY_MS, DEFAULT_WRITE_TIMEOUT_MS};
use tracing::{debug, error, info, warn};

use crate::error::{ShareError, StoreError, SubmitError};
use crate::form::{FieldEdit, FormModel, FormView, ResetToken};
use crate::platform::{LeadStore, Platform};
use crate::record::LeadRecord;
use crate::schema::LeadCandidate;
use crate::state::SubmissionState;

/// Timing and correlation settings for one controller.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Upper bound for the insert call.
    pub write_timeout: Duration,
    /// Delay before a successful form resets to `Idle`.
    pub reset_delay: Duration,
    /// Session attached to every log event.
    pub session: SessionId,
}

impl ControllerSettings {
    pub fn from_config(config: &LeadsConfig, session: SessionId) -> Self {
        Self {
            write_timeout: config.write_timeout(),
            reset_delay: config.reset_delay(),
            session,
        }
    }

    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            write_timeout: Duration::from_millis(DEFAULT_WRITE_TIMEOUT_MS),
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
            session: SessionId::generate(),
        }
    }
}

type Observer = Rc<dyn Fn(&FormView)>;

struct Shared {
    model: RefCell<FormModel>,
    observer: RefCell<Option<Observer>>,
    reset: RefCell<Option<AbortHandle>>,
    disposed: Cell<bool>,
}

impl Shared {
    fn notify(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            let view = self.model.borrow().snapshot();
            observer(&view);
        }
    }
}

/// Owns one registration form's state machine.
///
/// Cloning yields another handle to the same form.
pub struct SubmissionController<S, P> {
    shared: Rc<Shared>,
    store: Rc<S>,
    platform: Rc<P>,
    settings: Rc<ControllerSettings>,
}

impl<S, P> Clone for SubmissionController<S, P> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            store: Rc::clone(&self.store),
            platform: Rc::clone(&self.platform),
            settings: Rc::clone(&self.settings),
        }
    }
}

impl<S, P> SubmissionController<S, P>
where
    S: LeadStore + 'static,
    P: Platform + 'static,
{
    pub fn new(store: S, platform: P, settings: ControllerSettings) -> Self {
        Self {
            shared: Rc::new(Shared {
                model: RefCell::new(FormModel::new()),
                observer: RefCell::new(None),
                reset: RefCell::new(None),
                disposed: Cell::new(false),
            }),
            store: Rc::new(store),
            platform: Rc::new(platform),
            settings: Rc::new(settings),
        }
    }

    /// Register the callback that receives every new snapshot.
    pub fn with_observer(self, observer: impl Fn(&FormView) + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&self, observer: impl Fn(&FormView) + 'static) {
        *self.shared.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn view(&self) -> FormView {
        self.shared.model.borrow().snapshot()
    }

    pub fn state(&self) -> SubmissionState {
        self.shared.model.borrow().state().clone()
    }

    /// Consume the one-shot celebration flag.
    pub fn take_celebration(&self) -> bool {
        let taken = self.shared.model.borrow_mut().take_celebration();
        if taken {
            self.shared.notify();
        }
        taken
    }

    /// Apply a field edit coming from the presentation.
    pub fn edit(&self, edit: FieldEdit) -> bool {
        let applied = self.shared.model.borrow_mut().edit(edit);
        if applied {
            self.shared.notify();
        }
        applied
    }

    /// Replace the form values with `candidate` and submit them.
    pub async fn submit(&self, candidate: LeadCandidate) -> Result<(), SubmitError> {
        self.run_submit(Some(candidate)).await
    }

    /// Submit the values accumulated through [`edit`](Self::edit).
    pub async fn submit_form(&self) -> Result<(), SubmitError> {
        self.run_submit(None).await
    }

    async fn run_submit(&self, candidate: Option<LeadCandidate>) -> Result<(), SubmitError> {
        let session = &self.settings.session;
        let begun = self.shared.model.borrow_mut().begin_submit(candidate);

        let record = match begun {
            Ok(record) => record,
            Err(SubmitError::Invalid(errors)) => {
                debug!(session = %session, errors = %errors, "Lead failed validation");
                self.shared.notify();
                return Err(SubmitError::Invalid(errors));
            }
            Err(err) => {
                debug!(session = %session, reason = %err, "Submit ignored");
                return Err(err);
            }
        };
        self.shared.notify();

        info!(session = %session, store = self.store.name(), "Submitting lead");
        let started = Utc::now();
        let outcome = self.write(&record).await;
        let elapsed_ms = (Utc::now() - started).num_milliseconds();

        if self.shared.disposed.get() {
            debug!(session = %session, elapsed_ms, "Write finished after dispose, outcome dropped");
            return outcome.map_err(SubmitError::from);
        }

        let token = self.shared.model.borrow_mut().finish_submit(&outcome);
        match &outcome {
            Ok(()) => info!(session = %session, elapsed_ms, "Lead registered"),
            Err(err) => error!(
                session = %session,
                elapsed_ms,
                error = %err,
                "Lead registration failed"
            ),
        }

        if let Some(token) = token {
            self.schedule_reset(token);
        }
        self.shared.notify();

        outcome.map_err(SubmitError::from)
    }

    async fn write(&self, record: &LeadRecord) -> Result<(), StoreError> {
        let insert = self.store.insert(record);
        let deadline = self.platform.sleep(self.settings.write_timeout);

        match future::select(insert, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                Err(StoreError::Timeout(millis(self.settings.write_timeout)))
            }
        }
    }

    /// Copy the page URL and re-arm the auto-reset.
    ///
    /// Only valid in `Success`. A clipboard failure is logged and returned,
    /// but the reset is re-armed either way.
    pub async fn share(&self) -> Result<(), ShareError> {
        self.shared.model.borrow().can_share()?;

        let url = self.platform.page_url();
        let copied = self.platform.write_clipboard(&url).await;

        let token = {
            let mut model = self.shared.model.borrow_mut();
            if self.shared.disposed.get() {
                None
            } else if model.state().is_success() {
                if copied.is_ok() {
                    model.mark_copied();
                }
                Some(model.arm_reset())
            } else {
                None
            }
        };

        match &copied {
            Ok(()) => info!(session = %self.settings.session, url = %url, "Page URL copied"),
            Err(err) => warn!(
                session = %self.settings.session,
                error = %err,
                "Could not copy page URL"
            ),
        }

        if let Some(token) = token {
            self.schedule_reset(token);
        }
        self.shared.notify();

        copied.map_err(ShareError::from)
    }

    fn schedule_reset(&self, token: ResetToken) {
        if self.shared.disposed.get() {
            return;
        }

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.shared.reset.borrow_mut().replace(handle) {
            previous.abort();
        }

        let shared = Rc::clone(&self.shared);
        let platform = Rc::clone(&self.platform);
        let delay = self.settings.reset_delay;
        let session = self.settings.session.clone();
        let timer = Abortable::new(async move { platform.sleep(delay).await }, registration);

        self.platform.spawn_local(Box::pin(async move {
            if timer.await.is_err() || shared.disposed.get() {
                debug!(session = %session, "Reset timer cancelled");
                return;
            }
            let applied = shared.model.borrow_mut().apply_reset(token);
            if applied {
                info!(session = %session, "Form reset");
                shared.notify();
            } else {
                debug!(session = %session, "Stale reset ignored");
            }
        }));
    }

    /// Tear down: cancel the pending reset and drop the observer.
    ///
    /// A write still in flight completes, but its outcome is no longer
    /// applied and no new reset is armed.
    pub fn dispose(&self) {
        self.shared.disposed.set(true);
        if let Some(handle) = self.shared.reset.borrow_mut().take() {
            handle.abort();
        }
        self.shared.model.borrow_mut().cancel_reset();
        self.shared.observer.borrow_mut().take();
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
