use leptos::{either::EitherOf3, prelude::*};

use super::controller::{use_submission, Submission};
use super::fields::{bind, SelectField, SubmitButton, TextAreaField, TextField};
use crate::form::{
    surface, Presentation, RequestField, Surface, WebsiteRequest, BUDGET_RANGES, WEBSITE_TYPES,
};

#[server]
pub async fn submit_website_request(values: WebsiteRequest) -> Result<(), ServerFnError> {
    super::controller::deliver_from_context(values).await
}

#[component]
pub fn WebsiteRequestSection() -> impl IntoView {
    let Submission {
        machine,
        submit,
        dismiss,
    } = use_submission(submit_website_request);
    let shown = Memo::new(move |_| surface(machine.with(|m| m.status()), Presentation::Panel));
    let busy = Signal::derive(move || matches!(shown.get(), Surface::Form { busy: true, .. }));
    let field = move |f: RequestField| bind(machine, f);

    view! {
        <section id="request" class="section-padding">
            <div class="container-custom">
                {move || match shown.get() {
                    Surface::SuccessPanel => {
                        EitherOf3::A(
                            view! {
                                <ResultPanel
                                    icon="✅"
                                    tone="bg-green-500/10 text-green-500"
                                    title="Request Submitted!"
                                    text="Thank you for your interest! I'll review your project details and get back to you within 24-48 hours."
                                    action="Submit Another Request"
                                    on_action=dismiss
                                />
                            },
                        )
                    }
                    Surface::ErrorPanel => {
                        EitherOf3::B(
                            view! {
                                <ResultPanel
                                    icon="⚠"
                                    tone="bg-red-500/10 text-red-500"
                                    title="Something Went Wrong"
                                    text="We couldn't submit your request. Your details are still filled in, so you can try again."
                                    action="Try Again"
                                    on_action=dismiss
                                />
                            },
                        )
                    }
                    Surface::Form { .. } => {
                        EitherOf3::C(
                            view! {
                                <div class="max-w-3xl mx-auto text-center mb-12">
                                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                                        "Get Your Website"
                                    </h2>
                                    <p class="text-muted-foreground text-lg">
                                        "Ready to bring your vision to life? Fill out the form below and let's discuss your project."
                                    </p>
                                </div>
                                <form
                                    class="max-w-2xl mx-auto glass-card rounded-2xl p-8 md:p-10"
                                    novalidate=true
                                    on:submit=move |ev| {
                                        ev.prevent_default();
                                        submit.run(());
                                    }
                                >
                                    <div class="grid md:grid-cols-2 gap-6">
                                        <TextField
                                            id="fullName"
                                            name=RequestField::FullName.as_str()
                                            label="Full Name"
                                            placeholder="John Doe"
                                            binding=field(RequestField::FullName)
                                        />
                                        <TextField
                                            id="email"
                                            name=RequestField::Email.as_str()
                                            label="Email Address"
                                            placeholder="john@example.com"
                                            input_type="email"
                                            binding=field(RequestField::Email)
                                        />
                                        <TextField
                                            id="phone"
                                            name=RequestField::Phone.as_str()
                                            label="Phone Number"
                                            placeholder="+1 (555) 123-4567"
                                            input_type="tel"
                                            binding=field(RequestField::Phone)
                                        />
                                        <SelectField
                                            id="websiteType"
                                            name=RequestField::WebsiteType.as_str()
                                            label="Type of Website"
                                            options=WEBSITE_TYPES
                                            binding=field(RequestField::WebsiteType)
                                        />
                                        <SelectField
                                            id="budget"
                                            name=RequestField::Budget.as_str()
                                            label="Budget Range"
                                            options=BUDGET_RANGES
                                            binding=field(RequestField::Budget)
                                            wide=true
                                        />
                                        <TextAreaField
                                            id="description"
                                            name=RequestField::Description.as_str()
                                            label="Project Description"
                                            placeholder="Tell me about your project, goals, features you'd like, timeline, etc..."
                                            binding=field(RequestField::Description)
                                            wide=true
                                        />
                                    </div>
                                    <SubmitButton
                                        busy
                                        label="Submit Request"
                                        busy_label="Submitting..."
                                        extra_class="mt-8"
                                    />
                                </form>
                            },
                        )
                    }
                }}
            </div>
        </section>
    }
}

/// Full-width confirmation shown in place of the form.
#[component]
fn ResultPanel(
    icon: &'static str,
    tone: &'static str,
    title: &'static str,
    text: &'static str,
    action: &'static str,
    on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto glass-card rounded-2xl p-8 md:p-12 text-center">
            <div class=format!(
                "w-20 h-20 mx-auto mb-6 rounded-full flex items-center justify-center text-4xl {tone}",
            )>{icon}</div>
            <h3 class="text-2xl font-bold mb-4">{title}</h3>
            <p class="text-muted-foreground mb-6">{text}</p>
            <button class="btn-hero" on:click=move |_| on_action.run(())>
                {action}
            </button>
        </div>
    }
}
