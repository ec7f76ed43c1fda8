use std::future::Future;

use leptos::{prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::form::{FormMachine, FormSchema, ResetTicket, SUCCESS_RESET_DELAY};

/// Reactive handles for one mounted form.
pub struct Submission<S: FormSchema> {
    pub machine: RwSignal<FormMachine<S>>,
    pub submit: Callback<()>,
    pub dismiss: Callback<()>,
}

/// Wire a form machine to a dispatch call.
///
/// `submit` validates synchronously and, if clean, runs `send` with a
/// snapshot of the values. The success reset timer is stopped on `dismiss`
/// and when the owning component is torn down.
pub fn use_submission<S, F, Fut>(send: F) -> Submission<S>
where
    S: FormSchema,
    F: Fn(S) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ServerFnError>> + 'static,
{
    let machine = RwSignal::new(FormMachine::<S>::new());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: ResetTicket| machine.update(|m| m.expire(ticket)),
        SUCCESS_RESET_DELAY.as_millis() as f64,
    );

    let submit = Callback::new(move |()| {
        let Some(values) = machine.try_update(|m| m.begin_submit()).flatten() else {
            return;
        };
        let start = start.clone();
        spawn_local(async move {
            let outcome = send(values).await;
            if let Err(e) = &outcome {
                log::warn!("{:?} submission failed: {e}", S::KIND);
            }
            if let Some(ticket) = machine.try_update(|m| m.finish(outcome)).flatten() {
                start(ticket);
            }
        });
    });

    let dismiss = Callback::new(move |()| {
        stop();
        machine.update(|m| m.dismiss());
    });

    Submission {
        machine,
        submit,
        dismiss,
    }
}

/// Server side of both forms: deliver through the mailer in context.
///
/// Failure detail is logged here and never sent to the browser.
#[cfg(feature = "ssr")]
pub async fn deliver_from_context<S: FormSchema>(values: S) -> Result<(), ServerFnError> {
    use std::sync::Arc;

    use crate::email::{deliver, DispatchError, EmailJsClient};

    let outcome = match use_context::<Arc<EmailJsClient>>() {
        Some(mailer) => deliver(&values, mailer.as_ref()).await,
        None => Err(DispatchError::NotConfigured),
    };
    outcome.map_err(|e| {
        tracing::error!(kind = ?S::KIND, "email dispatch failed: {e}");
        ServerFnError::new("Unable to deliver your message")
    })
}
