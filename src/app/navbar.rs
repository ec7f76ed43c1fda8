use leptos::prelude::*;

use crate::content::{NAV_LINKS, SITE_NAME};

#[component]
pub fn Navbar() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-50 border-b border-border/50 bg-background/80 backdrop-blur-md">
            <nav class="container-custom flex items-center justify-between h-16">
                <a href="#" class="font-bold text-xl">
                    {SITE_NAME}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-sm text-muted-foreground hover:text-foreground transition-colors"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a href="#request" class="hidden md:inline-flex btn-hero text-sm py-2">
                    "Get Website"
                </a>
                <button
                    class="md:hidden p-2 rounded-lg hover:bg-secondary"
                    aria-label="Toggle menu"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || open.get()>
                <div class="md:hidden border-t border-border/50 bg-background">
                    <div class="container-custom flex flex-col py-4 gap-4">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="text-muted-foreground hover:text-foreground transition-colors"
                                        on:click=move |_| set_open.set(false)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}
