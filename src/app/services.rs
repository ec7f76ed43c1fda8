use leptos::prelude::*;

use crate::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section-padding bg-secondary/30">
            <div class="container-custom">
                <div class="max-w-3xl mx-auto text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Services"</h2>
                    <p class="text-muted-foreground text-lg">
                        "Comprehensive web development services tailored to your needs. From concept to deployment and beyond."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-6 max-w-5xl mx-auto">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="glass-card rounded-2xl p-8 group hover:scale-[1.02] transition-all duration-300">
                                    <div class="w-14 h-14 rounded-xl bg-primary/10 flex items-center justify-center mb-6 text-3xl group-hover:bg-primary/20 transition-colors">
                                        {service.icon}
                                    </div>
                                    <h3 class="text-xl font-semibold mb-3">{service.title}</h3>
                                    <p class="text-muted-foreground mb-6">{service.description}</p>
                                    <ul class="space-y-2 mb-6">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="flex items-center gap-2 text-sm">
                                                        <div class="w-1.5 h-1.5 rounded-full bg-primary"></div>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <a href="#request" class="font-semibold text-primary group/btn">
                                        "Get Started "
                                        <span class="inline-block transition-transform group-hover/btn:translate-x-1">
                                            "→"
                                        </span>
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
