//! The five page sections. Their ids are what the scroll spy and the
//! navigator look up, so they must stay in step with `spy::SECTION_IDS`.

use dioxus::prelude::*;

use crate::app::use_site;

#[component]
pub fn Sections() -> Element {
    let content = use_site().content;

    rsx! {
        div { class: "sections",
            section { id: "home", class: "section",
                div { class: "section__body",
                    div { class: "badge", span { "{content.badge}" } }
                    h2 { class: "hero__title", "{content.headline}" }
                    p { class: "hero__tagline", "{content.tagline}" }
                    div { class: "hero__hint",
                        div { class: "chip", "Scroll Down ↓" }
                    }
                }
            }

            section { id: "about", class: "section section--alt",
                div { class: "section__body",
                    SectionIcon { tone: "cyan", icon: "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z" }
                    h2 { class: "section__title", "About" }
                    p { class: "section__text", "{content.about}" }
                }
            }

            section { id: "skills", class: "section",
                div { class: "section__body",
                    SectionIcon { tone: "purple", icon: "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z" }
                    h2 { class: "section__title", "Skills" }
                    p { class: "section__text", "{content.skills_intro}" }
                    div { class: "skills",
                        for skill in content.skills.iter() {
                            div { key: "{skill}", class: "chip chip--skill", "{skill}" }
                        }
                    }
                }
            }

            section { id: "projects", class: "section section--alt",
                div { class: "section__body",
                    SectionIcon { tone: "blue", icon: "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10" }
                    h2 { class: "section__title", "Projects" }
                    p { class: "section__text", "{content.projects_intro}" }
                    div { class: "projects",
                        for project in content.projects.iter() {
                            div { key: "{project.title}", class: "project-card",
                                h3 { class: "project-card__title", "{project.title}" }
                                p { class: "project-card__summary", "{project.summary}" }
                            }
                        }
                    }
                }
            }

            section { id: "contact", class: "section",
                div { class: "section__body",
                    SectionIcon { tone: "pink", icon: "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z" }
                    h2 { class: "section__title", "Contact" }
                    p { class: "section__text", "{content.contact_intro}" }
                    a { class: "email", href: "mailto:{content.email}", "{content.email}" }
                }
            }
        }
    }
}

#[component]
fn SectionIcon(tone: &'static str, icon: &'static str) -> Element {
    rsx! {
        div { class: "section__icon section__icon--{tone}",
            svg { fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: icon,
                }
            }
        }
    }
}
