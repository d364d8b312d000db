use leptos::prelude::*;

use crate::content::{About, Contact, Profile, Project, Skill, SocialLink, Theme};
use crate::scroll::Section;

const HEADING_CLASS: &str = "text-5xl md:text-6xl font-black mb-4 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent";
const PRIMARY_BUTTON_CLASS: &str = "inline-block px-10 py-5 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-500 hover:to-purple-500 rounded-2xl font-bold text-lg transition-all hover:scale-105 shadow-2xl hover:shadow-blue-500/50";

#[component]
pub fn HeroSection(
    profile: Profile,
    links: Vec<SocialLink>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center px-6 pt-20 relative"
        >
            {children()}
            <div class="text-center max-w-5xl relative z-10">
                <div class="mb-12">
                    <div class="mb-6 text-blue-400 text-7xl font-mono">">_"</div>
                    <h1 class="text-6xl md:text-8xl font-black mb-6 bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-transparent">
                        {profile.name}
                    </h1>
                    <div class="text-3xl md:text-4xl mb-6 font-bold bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent">
                        {profile.role}
                    </div>
                    <p class="text-xl text-gray-300 mb-3 font-light">{profile.tagline}</p>
                    <p class="text-lg text-gray-400 mb-4">"🚀 " {profile.learning}</p>
                    <p class="text-lg text-gray-500 mb-10">"🎓 " {profile.education}</p>
                </div>
                <div class="flex gap-4 justify-center mb-12">
                    {links.into_iter().map(|link| view! { <SocialButton link /> }).collect_view()}
                </div>
                <a
                    href=profile.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class=PRIMARY_BUTTON_CLASS
                >
                    "View My Work"
                </a>
            </div>
        </section>
    }
}

#[component]
fn SocialButton(link: SocialLink) -> impl IntoView {
    let external = !link.is_mail();
    let label = link.label.clone();
    view! {
        <a
            href=link.url
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class=format!(
                "px-5 py-4 bg-gradient-to-br {} rounded-2xl hover:scale-110 transition-all shadow-lg hover:shadow-2xl font-semibold",
                link.gradient,
            )
            aria-label=label
        >
            {link.label}
        </a>
    }
}

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="min-h-screen py-32 px-6 relative flex items-center">
            <div class="max-w-6xl mx-auto w-full">
                <h2 class=format!("{HEADING_CLASS} text-center mb-16")>"About Me"</h2>
                <div class="bg-white/5 backdrop-blur-xl rounded-3xl p-10 border border-white/10 shadow-2xl">
                    <p class="text-2xl text-gray-200 mb-10 leading-relaxed font-light">
                        {about.summary}
                    </p>
                    <div class="grid md:grid-cols-2 gap-8">
                        {about
                            .highlights
                            .into_iter()
                            .map(|h| {
                                view! {
                                    <div class="flex items-start gap-4 group">
                                        <div class=format!(
                                            "p-3 bg-gradient-to-br {} rounded-2xl group-hover:scale-110 transition-transform shadow-lg flex-shrink-0 text-2xl",
                                            h.color,
                                        )>{h.icon}</div>
                                        <div>
                                            <h3 class="text-2xl font-bold text-white mb-2">{h.title}</h3>
                                            <p class="text-gray-300 leading-relaxed">{h.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="min-h-screen py-32 px-6 relative">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class=HEADING_CLASS>"Backend Projects"</h2>
                    <p class="text-gray-300 text-xl">"Real-time applications & distributed systems"</p>
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    {projects.into_iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let tint = project.gradient.unwrap_or_else(|| "from-slate-800/40 to-slate-900/40".to_string());
    view! {
        <article
            data-card="project"
            class=format!(
                "bg-gradient-to-br {tint} backdrop-blur-xl rounded-3xl p-8 border border-white/10 hover:border-white/30 transition-all hover:scale-105 shadow-2xl",
            )
        >
            <div class="flex justify-between items-start mb-6">
                <span class="text-4xl" aria-hidden="true">"🗄"</span>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="p-3 bg-white/10 rounded-xl hover:bg-white/20 transition-colors"
                    aria-label="Open repository"
                >
                    "↗"
                </a>
            </div>
            <h3 class="text-3xl font-bold mb-3 text-white">{project.title}</h3>
            <p class="text-gray-200 mb-6 text-lg">{project.description}</p>
            <ul class="flex flex-wrap gap-2">
                {project
                    .technologies
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <li class="px-4 py-2 bg-white/10 border border-white/20 rounded-xl text-sm font-semibold">
                                {tech}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}

#[component]
pub fn SkillsSection(skills: Vec<Skill>, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="min-h-screen py-32 px-6 relative">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class=HEADING_CLASS>"Tech Stack"</h2>
                    <p class="text-gray-300 text-xl">"Backend frameworks, languages & tools"</p>
                </div>
                <div class="flex flex-wrap gap-4 justify-center">
                    {skills
                        .into_iter()
                        .map(|skill| {
                            let color = skill.color.unwrap_or_else(|| "from-blue-400 to-purple-500".to_string());
                            let label_class = move || match theme.get() {
                                Theme::Aurora => format!(
                                    "text-lg font-bold bg-gradient-to-r {color} bg-clip-text text-transparent",
                                ),
                                Theme::Minimal => "text-lg font-semibold text-gray-100".to_string(),
                            };
                            view! {
                                <div class="px-6 py-4 bg-slate-900/90 border border-white/10 rounded-2xl hover:border-white/30 transition-all hover:scale-110">
                                    <span class=label_class>{skill.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection(contact: Contact, email: String) -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class="min-h-screen flex items-center justify-center px-6 relative"
        >
            <div class="text-center max-w-3xl">
                <h2 class=format!("{HEADING_CLASS} mb-8")>{contact.heading}</h2>
                <p class="text-2xl text-gray-200 mb-12 leading-relaxed font-light">{contact.pitch}</p>
                <div class="flex gap-6 justify-center flex-wrap">
                    <a href=format!("mailto:{email}") class=PRIMARY_BUTTON_CLASS>
                        {contact.email_label}
                    </a>
                    <a
                        href=contact.linkedin_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-10 py-5 bg-white/5 border border-white/20 hover:bg-white/10 hover:border-white/40 rounded-2xl font-bold text-lg transition-all hover:scale-105"
                    >
                        {contact.linkedin_label}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(name: String, role: String, location: String, year: i32) -> impl IntoView {
    view! {
        <footer class="py-10 text-center border-t border-white/10 bg-slate-950/50 relative">
            <p class="text-gray-400 font-light">
                {format!("© {year} {name} • {role} • {location}")}
            </p>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn project(title: &str, description: &str, technologies: &[&str]) -> Project {
        Project {
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            link: format!("https://example.com/{title}"),
            gradient: None,
        }
    }

    fn render_projects(projects: Vec<Project>) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <ProjectsSection projects /> }.to_html())
    }

    #[test]
    fn test_one_card_per_project() {
        let html = render_projects(vec![
            project("Alpha", "first thing", &["TagOne"]),
            project("Beta", "second thing", &[]),
            project("Gamma", "third thing", &["TagTwo", "TagThree"]),
        ]);
        assert_eq!(html.matches("data-card=\"project\"").count(), 3);
        for text in ["Alpha", "Beta", "Gamma", "first thing", "second thing", "third thing"] {
            assert!(html.contains(text), "missing {text}");
        }
        let alpha = html.find("Alpha").unwrap();
        let beta = html.find("Beta").unwrap();
        let gamma = html.find("Gamma").unwrap();
        assert!(alpha < beta && beta < gamma);
    }

    #[test]
    fn test_technology_tags_keep_order() {
        let html = render_projects(vec![project(
            "Ordered",
            "tags in order",
            &["TechZulu", "TechAlpha", "TechMike"],
        )]);
        let positions: Vec<_> = ["TechZulu", "TechAlpha", "TechMike"]
            .iter()
            .map(|t| html.find(t).expect("tag rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<li").count(), 3);
    }

    #[test]
    fn test_empty_project_list() {
        let html = render_projects(Vec::new());
        assert_eq!(html.matches("data-card=\"project\"").count(), 0);
        assert!(html.contains("id=\"projects\""));
    }

    fn link(label: &str, url: &str) -> SocialLink {
        SocialLink {
            label: label.to_string(),
            url: url.to_string(),
            gradient: "from-gray-600 to-slate-700".to_string(),
        }
    }

    fn render_hero(links: Vec<SocialLink>) -> String {
        let profile = Profile {
            name: "Test Person".to_string(),
            monogram: "<T />".to_string(),
            role: "Engineer".to_string(),
            tagline: "tagline".to_string(),
            learning: "learning".to_string(),
            education: "education".to_string(),
            location: "Somewhere".to_string(),
            email: "t@example.com".to_string(),
            github: "https://github.com/test".to_string(),
        };
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <HeroSection profile links>
                    <div class="grid-marker"></div>
                </HeroSection>
            }
            .to_html()
        })
    }

    #[test]
    fn test_social_links_carry_label_and_target() {
        let html = render_hero(vec![
            link("GitHub", "https://github.com/test"),
            link("Email", "mailto:t@example.com"),
        ]);
        assert!(html.contains("aria-label=\"GitHub\""));
        assert!(html.contains("aria-label=\"Email\""));
        assert!(html.contains(">GitHub<"));
        assert!(html.contains("grid-marker"));

        let mail = html.find("href=\"mailto:t@example.com\"").expect("mail link rendered");
        let mail_tag = &html[mail..mail + html[mail..].find('>').unwrap()];
        assert!(!mail_tag.contains("target="));
        // one for the GitHub button, one for "View My Work"
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }
}
