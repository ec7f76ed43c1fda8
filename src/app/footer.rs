use leptos::prelude::*;

use crate::content::{copyright_year, NAV_LINKS, SITE_NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border/50 bg-card/50">
            <div class="container-custom py-12">
                <div class="grid md:grid-cols-3 gap-8 items-center">
                    <div class="text-center md:text-left">
                        <a href="#" class="inline-flex items-center gap-2 mb-4">
                            <span class="font-bold text-xl">{SITE_NAME}</span>
                        </a>
                        <p class="text-sm text-muted-foreground">
                            {format!("© {} All rights reserved.", copyright_year())}
                        </p>
                    </div>
                    <nav class="flex flex-wrap justify-center gap-x-6 gap-y-2">
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
                    </nav>
                    <div class="flex justify-center md:justify-end gap-3">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="w-10 h-10 rounded-xl bg-secondary flex items-center justify-center hover:bg-primary/10 hover:text-primary transition-colors"
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
        </footer>
    }
}
