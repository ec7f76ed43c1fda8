use leptos::prelude::*;

use crate::content::{HIGHLIGHTS, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section-padding bg-secondary/30">
            <div class="container-custom">
                <div class="max-w-3xl mx-auto text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"About Me"</h2>
                    <p class="text-muted-foreground text-lg">
                        "I'm a passionate full-stack developer with over 5 years of experience building modern web applications. I love turning complex problems into simple, beautiful, and intuitive solutions."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <div
                                    class="glass-card rounded-2xl p-6 text-center group hover:scale-[1.02] transition-transform duration-300"
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    <div class="w-14 h-14 mx-auto mb-4 rounded-xl bg-primary/10 flex items-center justify-center text-3xl group-hover:bg-primary/20 transition-colors">
                                        {item.icon}
                                    </div>
                                    <h3 class="font-semibold text-lg mb-2">{item.title}</h3>
                                    <p class="text-sm text-muted-foreground">{item.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="max-w-4xl mx-auto">
                    <h3 class="text-xl font-semibold text-center mb-8">"Technologies I Work With"</h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span
                                        class="px-4 py-2 rounded-full bg-card border border-border text-sm font-medium hover:border-primary/50 hover:bg-primary/5 transition-colors cursor-default"
                                        title=skill.category
                                    >
                                        {skill.name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
