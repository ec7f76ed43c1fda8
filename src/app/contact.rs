use leptos::{either::Either, prelude::*};

use super::controller::{use_submission, Submission};
use super::fields::{bind, SubmitButton, TextAreaField, TextField};
use crate::content::{CONTACT_EMAIL, SOCIAL_LINKS};
use crate::form::{surface, ContactField, ContactForm, Notice, Presentation, Surface};

#[server]
pub async fn submit_contact(values: ContactForm) -> Result<(), ServerFnError> {
    super::controller::deliver_from_context(values).await
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section-padding bg-secondary/30">
            <div class="container-custom">
                <div class="max-w-3xl mx-auto text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get In Touch"</h2>
                    <p class="text-muted-foreground text-lg">
                        "Have a question or want to work together? Drop me a message!"
                    </p>
                </div>
                <div class="grid lg:grid-cols-5 gap-8 max-w-5xl mx-auto">
                    <div class="lg:col-span-2 space-y-6">
                        <InfoCard icon="✉️" title="Email">
                            <a
                                href=format!("mailto:{CONTACT_EMAIL}")
                                class="text-muted-foreground hover:text-primary transition-colors"
                            >
                                {CONTACT_EMAIL}
                            </a>
                        </InfoCard>
                        <InfoCard icon="💬" title="Let's Chat">
                            <p class="text-muted-foreground">"Response within 24 hours"</p>
                        </InfoCard>
                        <div class="glass-card rounded-2xl p-6">
                            <h3 class="font-semibold mb-4">"Follow Me"</h3>
                            <div class="flex gap-3">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="w-12 h-12 rounded-xl bg-secondary flex items-center justify-center hover:bg-primary/10 hover:text-primary transition-colors"
                                                aria-label=link.label
                                            >
                                                {link.icon}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="lg:col-span-3">
                        <MessageForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="glass-card rounded-2xl p-6">
            <div class="flex items-center gap-4">
                <div class="w-12 h-12 rounded-xl bg-primary/10 flex items-center justify-center text-2xl">
                    {icon}
                </div>
                <div>
                    <h3 class="font-semibold">{title}</h3>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Inline variant: the form never leaves the page, outcomes show as a banner.
#[component]
fn MessageForm() -> impl IntoView {
    let Submission { machine, submit, .. } = use_submission(submit_contact);
    let shown = Memo::new(move |_| surface(machine.with(|m| m.status()), Presentation::Inline));
    let busy = Signal::derive(move || matches!(shown.get(), Surface::Form { busy: true, .. }));
    let notice = Memo::new(move |_| match shown.get() {
        Surface::Form { notice, .. } => notice,
        _ => None,
    });

    view! {
        <form
            class="glass-card rounded-2xl p-6 md:p-8"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }
        >
            {move || {
                notice
                    .get()
                    .map(|n| match n {
                        Notice::Sent => {
                            Either::Left(
                                view! {
                                    <div class="mb-6 p-4 rounded-lg bg-green-500/10 border border-green-500/20 flex items-center gap-3">
                                        <span aria-hidden="true">"✅"</span>
                                        <p class="text-sm text-green-600 dark:text-green-400">
                                            "Message sent successfully! I'll get back to you soon."
                                        </p>
                                    </div>
                                },
                            )
                        }
                        Notice::Failed => {
                            Either::Right(
                                view! {
                                    <div
                                        role="alert"
                                        class="mb-6 p-4 rounded-lg bg-red-500/10 border border-red-500/20 flex items-center gap-3"
                                    >
                                        <span aria-hidden="true">"⚠"</span>
                                        <p class="text-sm text-red-600 dark:text-red-400">
                                            "Your message couldn't be sent. Please try again."
                                        </p>
                                    </div>
                                },
                            )
                        }
                    })
            }}
            <div class="space-y-6">
                <TextField
                    id="contact-name"
                    name=ContactField::Name.as_str()
                    label="Name"
                    placeholder="Your name"
                    binding=bind(machine, ContactField::Name)
                />
                <TextField
                    id="contact-email"
                    name=ContactField::Email.as_str()
                    label="Email"
                    placeholder="your@email.com"
                    input_type="email"
                    binding=bind(machine, ContactField::Email)
                />
                <TextAreaField
                    id="contact-message"
                    name=ContactField::Message.as_str()
                    label="Message"
                    placeholder="Your message..."
                    binding=bind(machine, ContactField::Message)
                />
                <SubmitButton busy label="Send Message" busy_label="Sending..." />
            </div>
        </form>
    }
}
