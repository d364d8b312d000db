mod decor;
mod nav;
mod sections;
mod viewport;

use leptos::{either::Either, ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_query_map, path};
use leptos_use::{use_event_listener, use_window};

use crate::content::{build_year, site_content, ContentError, SiteContent, Theme};
use crate::scroll::{FrameGate, Pointer, Section, UiState};

use decor::{ParallaxGrid, PointerGlows};
use nav::NavBar;
use sections::{AboutSection, ContactSection, Footer, HeroSection, ProjectsSection, SkillsSection};
use viewport::BrowserViewport;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="scroll-smooth">
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
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match site_content() {
        Ok(site) => Either::Left(view! { <Portfolio site /> }),
        Err(err) => {
            log::error!("{err}");
            Either::Right(view! { <ContentErrorPanel err /> })
        }
    }
}

#[component]
fn ContentErrorPanel(err: ContentError) -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::INTERNAL_SERVER_ERROR);
    }
    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex items-center justify-center bg-slate-950 text-gray-300 px-6">
            <pre class="whitespace-pre-wrap p-4 rounded-md border border-red-500/40">
                {err.to_string()}
            </pre>
        </div>
    }
}

/// Owns the page's UI state. Every mutation goes through the handlers below.
#[component]
fn Portfolio(site: &'static SiteContent) -> impl IntoView {
    let config = &site.scroll;
    let query = use_query_map();
    let theme = Memo::new(move |_| {
        query
            .get()
            .get("theme")
            .and_then(|t| t.parse::<Theme>().ok())
            .unwrap_or(site.theme)
    });

    let state = RwSignal::new(UiState::default());
    let scroll_gate = StoredValue::new(FrameGate::default());
    let pointer_gate = StoredValue::new(FrameGate::default());
    let latest_pointer = StoredValue::new(Pointer::default());

    let sync_scroll = move || state.update(|s| s.on_scroll(&BrowserViewport, config));
    let sync_pointer = move || {
        let Pointer { x, y } = latest_pointer.get_value();
        state.update(|s| s.on_pointer_move(x, y));
    };

    // Pick up the restored scroll position after a reload.
    Effect::new(move |_| sync_scroll());

    // Listeners are removed with the component's owner.
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if !config.throttle {
            sync_scroll();
        } else if scroll_gate.try_update_value(FrameGate::try_schedule).unwrap_or(false) {
            request_animation_frame(move || {
                scroll_gate.update_value(FrameGate::release);
                sync_scroll();
            });
        }
    });
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        latest_pointer.set_value(Pointer {
            x: ev.client_x(),
            y: ev.client_y(),
        });
        if theme.get_untracked() != Theme::Aurora {
            return;
        }
        if !config.throttle {
            sync_pointer();
        } else if pointer_gate.try_update_value(FrameGate::try_schedule).unwrap_or(false) {
            request_animation_frame(move || {
                pointer_gate.update_value(FrameGate::release);
                sync_pointer();
            });
        }
    });

    let on_navigate = Callback::new(move |section: Section| {
        state.update(|s| match s.scroll_to_section(section.id(), &BrowserViewport, config) {
            Some(target) => log::debug!("scrolling to #{section} at {target}px"),
            None => log::warn!("section #{section} is not mounted"),
        });
    });
    let on_toggle_menu = Callback::new(move |_: ()| state.update(UiState::toggle_menu));

    let active = Memo::new(move |_| state.with(|s| s.active));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open));
    let scrolled = Memo::new(move |_| state.with(|s| s.is_scrolled(config)));
    let parallax = Memo::new(move |_| state.with(|s| s.parallax_offset(config)));
    let glows = Memo::new(move |_| state.with(|s| s.glow_offsets(config)));

    let profile = &site.profile;
    view! {
        <Title text=format!("{} - {}", profile.name, profile.role) />
        <Meta name="description" content=profile.tagline.clone() />
        <div class=move || match theme.get() {
            Theme::Aurora => {
                "min-h-screen text-white relative overflow-hidden bg-gradient-to-br from-slate-950 via-blue-950 to-slate-900"
            }
            Theme::Minimal => "min-h-screen text-gray-100 relative overflow-hidden bg-slate-950",
        }>
            <Show when=move || theme.get() == Theme::Aurora>
                <PointerGlows glows />
            </Show>
            <NavBar
                monogram=profile.monogram.clone()
                theme
                active
                menu_open
                scrolled
                on_navigate
                on_toggle_menu
            />
            <HeroSection profile=profile.clone() links=site.links.clone()>
                <ParallaxGrid offset=parallax />
            </HeroSection>
            <AboutSection about=site.about.clone() />
            <ProjectsSection projects=site.projects.clone() />
            <SkillsSection skills=site.skills.clone() theme />
            <ContactSection contact=site.contact.clone() email=profile.email.clone() />
            <Footer
                name=profile.name.clone()
                role=profile.role.clone()
                location=profile.location.clone()
                year=build_year()
            />
        </div>
    }
}
