use leptos::{either::Either, prelude::*};

use crate::content::Theme;
use crate::scroll::Section;

#[component]
pub fn NavBar(
    monogram: String,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] active: Signal<Section>,
    #[prop(into)] menu_open: Signal<bool>,
    #[prop(into)] scrolled: Signal<bool>,
    on_navigate: Callback<Section>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let bar_class = move || {
        let base = "fixed top-0 w-full z-50 transition-all duration-300";
        match (theme.get(), scrolled.get()) {
            (Theme::Aurora, _) => {
                format!("{base} bg-slate-950/30 backdrop-blur-xl border-b border-white/10")
            }
            (Theme::Minimal, false) => format!("{base} bg-transparent"),
            (Theme::Minimal, true) => {
                format!("{base} bg-slate-950/95 shadow-lg border-b border-white/10")
            }
        }
    };

    view! {
        <nav class=bar_class>
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <button
                    class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent"
                    on:click=move |_| on_navigate.run(Section::Home)
                >
                    {monogram}
                </button>
                <div class="hidden md:flex gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! { <NavLink section active on_navigate underline=true /> }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden p-2 rounded-lg text-gray-300 hover:text-white hover:bg-white/10 transition-colors"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| on_toggle_menu.run(())
                >
                    {move || {
                        if menu_open.get() {
                            Either::Left(view! { <span class="text-2xl">"✕"</span> })
                        } else {
                            Either::Right(view! { <span class="text-2xl">"☰"</span> })
                        }
                    }}
                </button>
            </div>
            <div class="md:hidden border-t border-white/10 bg-slate-950/95" class:hidden=move || !menu_open.get()>
                <div class="flex flex-col px-6 py-4 gap-4">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! { <NavLink section active on_navigate underline=false /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    section: Section,
    active: Signal<Section>,
    on_navigate: Callback<Section>,
    underline: bool,
) -> impl IntoView {
    let is_active = move || active.get() == section;
    view! {
        <button
            class=move || {
                if is_active() {
                    "relative text-left text-blue-400 transition-colors group"
                } else {
                    "relative text-left text-gray-300 hover:text-blue-400 transition-colors group"
                }
            }
            aria-current=move || is_active().then_some("true")
            on:click=move |_| on_navigate.run(section)
        >
            {section.label()}
            {underline
                .then(|| {
                    view! {
                        <span class=move || {
                            if is_active() {
                                "absolute -bottom-1 left-0 h-0.5 w-full bg-gradient-to-r from-blue-400 to-purple-500 transition-all duration-300"
                            } else {
                                "absolute -bottom-1 left-0 h-0.5 w-0 group-hover:w-full bg-gradient-to-r from-blue-400 to-purple-500 transition-all duration-300"
                            }
                        }></span>
                    }
                })}
        </button>
    }
}
