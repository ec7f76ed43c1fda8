use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 -z-10">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary/20 rounded-full blur-3xl animate-float"></div>
                <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-primary/10 rounded-full blur-3xl animate-float [animation-delay:300ms]"></div>
                <div class="absolute inset-0 hero-grid"></div>
            </div>
            <div class="container-custom pt-20">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-primary/10 text-primary text-sm font-medium mb-8 animate-fade-up">
                        <span>"Available for new projects"</span>
                    </div>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-tight mb-6 animate-fade-up [animation-delay:100ms]">
                        "I Build " <span class="gradient-text">"Modern & Scalable"</span> <br />
                        "Web Applications"
                    </h1>
                    <p class="text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto mb-10 animate-fade-up [animation-delay:200ms]">
                        "Full-stack developer specializing in React, TypeScript, and modern web technologies. I create performant, accessible, and beautiful digital experiences."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 animate-fade-up [animation-delay:300ms]">
                        <a href="#projects" class="btn-hero text-lg px-8 py-4">
                            "View Projects →"
                        </a>
                        <a href="#request" class="btn-hero-outline text-lg px-8 py-4">
                            "Get Your Website"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
