mod about;
mod contact;
mod controller;
mod fields;
mod footer;
mod hero;
mod navbar;
mod projects;
mod request;
mod services;

pub use contact::submit_contact;
pub use request::submit_website_request;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::ContactSection;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use request::WebsiteRequestSection;
use services::Services;

use crate::content::SITE_NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Full-stack developer building modern, scalable web applications."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/devfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | {SITE_NAME}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section on one page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Web Developer" />
        <div class="min-h-screen bg-background">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Projects />
                <Services />
                <WebsiteRequestSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
