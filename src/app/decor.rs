use leptos::prelude::*;

use crate::scroll::GlowOffsets;

/// Two blurred orbs that drift with the pointer from opposite corners.
#[component]
pub fn PointerGlows(#[prop(into)] glows: Signal<GlowOffsets>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div
                class="absolute w-96 h-96 bg-blue-500/30 rounded-full blur-3xl"
                style:transition="all 0.3s ease-out"
                style:left=move || format!("{:.2}px", glows.get().primary.0)
                style:top=move || format!("{:.2}px", glows.get().primary.1)
            ></div>
            <div
                class="absolute w-96 h-96 bg-purple-500/20 rounded-full blur-3xl"
                style:transition="all 0.5s ease-out"
                style:right=move || format!("{:.2}px", glows.get().secondary.0)
                style:bottom=move || format!("{:.2}px", glows.get().secondary.1)
            ></div>
        </div>
    }
}

/// Hero background grid, translated at a fraction of the scroll speed.
#[component]
pub fn ParallaxGrid(#[prop(into)] offset: Signal<f64>) -> impl IntoView {
    view! {
        <div class="absolute inset-0 opacity-10" aria-hidden="true">
            <div
                class="absolute inset-0"
                style:background-image="linear-gradient(rgba(59, 130, 246, 0.5) 1px, transparent 1px), linear-gradient(90deg, rgba(59, 130, 246, 0.5) 1px, transparent 1px)"
                style:background-size="60px 60px"
                style:transform=move || format!("translateY({}px)", offset.get())
            ></div>
        </div>
    }
}
