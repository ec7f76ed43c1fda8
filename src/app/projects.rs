use leptos::prelude::*;

use crate::content::{Project, PROJECTS, PROJECTS_PER_PAGE};
use crate::pagination::Pager;

const PAGE_BUTTON: &str = "w-10 h-10 rounded-lg border border-border text-sm font-medium transition-colors";

#[component]
pub fn Projects() -> impl IntoView {
    let pager = RwSignal::new(Pager::new(PROJECTS.len(), PROJECTS_PER_PAGE));
    let page_count = pager.with_untracked(|p| p.page_count());

    view! {
        <section id="projects" class="section-padding">
            <div class="container-custom">
                <div class="max-w-3xl mx-auto text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Featured Projects"</h2>
                    <p class="text-muted-foreground text-lg">
                        "A selection of projects I've worked on. Each one presented unique challenges and opportunities to create something meaningful."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        pager
                            .with(|p| p.slice(PROJECTS))
                            .iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
                <nav
                    class="flex items-center justify-center gap-2 mt-12"
                    aria-label="Project pages"
                >
                    <button
                        class=format!("{PAGE_BUTTON} disabled:opacity-40")
                        aria-label="Previous page"
                        disabled=move || !pager.with(|p| p.has_prev())
                        on:click=move |_| pager.update(|p| p.prev())
                    >
                        "‹"
                    </button>
                    {(1..=page_count)
                        .map(|n| {
                            view! {
                                <button
                                    class=move || {
                                        if pager.with(|p| p.page()) == n {
                                            format!("{PAGE_BUTTON} bg-primary text-primary-foreground")
                                        } else {
                                            format!("{PAGE_BUTTON} hover:bg-primary/10")
                                        }
                                    }
                                    aria-current=move || {
                                        (pager.with(|p| p.page()) == n).then_some("page")
                                    }
                                    on:click=move |_| pager.update(|p| p.go_to(n))
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class=format!("{PAGE_BUTTON} disabled:opacity-40")
                        aria-label="Next page"
                        disabled=move || !pager.with(|p| p.has_next())
                        on:click=move |_| pager.update(|p| p.next())
                    >
                        "›"
                    </button>
                </nav>
                <p class="text-center text-sm text-muted-foreground mt-4">
                    {move || pager.with(|p| format!("Page {} of {}", p.page(), p.page_count()))}
                </p>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="group glass-card rounded-2xl overflow-hidden hover:scale-[1.02] transition-all duration-300">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-card/80 to-transparent"></div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2 group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-sm text-muted-foreground mb-4 line-clamp-2">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 text-xs font-medium rounded-md bg-primary/10 text-primary">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-2">
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-hero flex-1 text-sm py-2"
                    >
                        "↗ Live Demo"
                    </a>
                    <a
                        href=project.source_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-lg border border-border text-sm hover:bg-secondary transition-colors"
                        aria-label="Source code"
                    >
                        "</>"
                    </a>
                </div>
            </div>
        </article>
    }
}
