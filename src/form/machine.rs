use std::time::Duration;

use super::{FormErrors, FormSchema};

/// How long the success state is shown before the form returns to idle.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Token for a scheduled `Success -> Idle` transition. Only the ticket issued
/// by the most recent submission is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Values, errors and submission status for one form instance.
#[derive(Debug, Clone)]
pub struct FormMachine<S: FormSchema> {
    values: S,
    errors: FormErrors<S::Field>,
    status: SubmissionStatus,
    generation: u64,
}

impl<S: FormSchema> Default for FormMachine<S> {
    fn default() -> Self {
        Self {
            values: S::default(),
            errors: FormErrors::new(),
            status: SubmissionStatus::Idle,
            generation: 0,
        }
    }
}

impl<S: FormSchema> FormMachine<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &S {
        &self.values
    }

    pub fn value(&self, field: S::Field) -> &str {
        self.values.value(field)
    }

    pub fn errors(&self) -> &FormErrors<S::Field> {
        &self.errors
    }

    pub fn error(&self, field: S::Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Store a new field value. Any error shown for the field is dropped
    /// right away rather than on the next validation pass.
    pub fn update(&mut self, field: S::Field, value: String) {
        self.values.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and, if the values are clean, enter `Submitting`.
    ///
    /// Returns the snapshot to dispatch, or `None` when the submission is
    /// rejected: either another one is still in flight or validation failed
    /// (the fresh errors are published and the form settles in `Idle`).
    pub fn begin_submit(&mut self) -> Option<S> {
        if self.is_submitting() {
            log::debug!("{:?} form: ignoring submit while in flight", S::KIND);
            return None;
        }
        self.errors = self.values.validate();
        if !self.errors.is_empty() {
            self.settle_idle();
            return None;
        }
        self.generation += 1;
        self.status = SubmissionStatus::Submitting;
        Some(self.values.clone())
    }

    /// Record the dispatch outcome of the in-flight submission.
    ///
    /// On success the values are cleared and a ticket for the delayed return
    /// to `Idle` is handed back. On failure the values are kept so the user
    /// can retry.
    pub fn finish<E>(&mut self, outcome: Result<(), E>) -> Option<ResetTicket> {
        if !self.is_submitting() {
            log::warn!("{:?} form: dispatch outcome with nothing in flight", S::KIND);
            return None;
        }
        match outcome {
            Ok(()) => {
                self.values = S::default();
                self.errors = FormErrors::new();
                self.status = SubmissionStatus::Success;
                Some(ResetTicket(self.generation))
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
                None
            }
        }
    }

    /// Delayed `Success -> Idle`. Stale tickets are ignored.
    pub fn expire(&mut self, ticket: ResetTicket) {
        if ticket.0 == self.generation && self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// User-initiated return to `Idle` from `Success` or `Error`.
    pub fn dismiss(&mut self) {
        if !self.is_submitting() {
            self.settle_idle();
        }
    }

    fn settle_idle(&mut self) {
        if self.status != SubmissionStatus::Idle {
            // invalidates any pending reset
            self.generation += 1;
        }
        self.status = SubmissionStatus::Idle;
    }
}

/// How a form reports terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Banner above a form that stays on screen.
    Inline,
    /// The form is swapped for a full confirmation panel.
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

/// What the view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Form { busy: bool, notice: Option<Notice> },
    SuccessPanel,
    ErrorPanel,
}

pub fn surface(status: SubmissionStatus, presentation: Presentation) -> Surface {
    use SubmissionStatus::*;
    match (status, presentation) {
        (Idle, _) => Surface::Form {
            busy: false,
            notice: None,
        },
        (Submitting, _) => Surface::Form {
            busy: true,
            notice: None,
        },
        (Success, Presentation::Inline) => Surface::Form {
            busy: false,
            notice: Some(Notice::Sent),
        },
        (Error, Presentation::Inline) => Surface::Form {
            busy: false,
            notice: Some(Notice::Failed),
        },
        (Success, Presentation::Panel) => Surface::SuccessPanel,
        (Error, Presentation::Panel) => Surface::ErrorPanel,
    }
}
