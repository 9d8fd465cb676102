use crate::carousel;
use crate::chart;
use crate::content;
use crate::disclosure::DisclosureMap;
use crate::particles;
use crate::theme::{self, LocalStorageStore, Theme};
use crate::vendor;
use crate::visibility::{use_in_view, InViewOptions};
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

/// Visible fraction of a section that arms its entrance animation.
const SECTION_REVEAL_FRACTION: f64 = 0.1;

/// Theme value and toggle action, provided to the tree instead of ambient
/// module state.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or_default]
    class: Classes,
    children: Children,
}

/// Section wrapper that fades its content in the first time roughly a tenth
/// of it scrolls into the viewport, and never re-triggers.
#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), InViewOptions::latched(SECTION_REVEAL_FRACTION));

    html! {
        <section
            ref={node}
            class={classes!("reveal", visible.then_some("is-visible"), props.class.clone())}
        >
            { props.children.clone() }
        </section>
    }
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let Some(context) = use_context::<ThemeContext>() else {
        return Html::default();
    };

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={context.theme.toggle_label()}
            aria-pressed={context.theme.pressed().to_string()}
            onclick={context.toggle.clone()}
        >
            <span aria-hidden="true">{context.theme.icon()}</span>
        </button>
    }
}

#[function_component(ParticlesLayer)]
fn particles_layer() -> Html {
    use_effect_with((), |_| {
        vendor::start_particles(&particles::ambient_particles());
        || ()
    });

    html! {
        <div
            id={particles::PARTICLES_CONTAINER_ID}
            class="particles-layer"
            aria-hidden="true"
        ></div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let on_resume = Callback::from(|_: MouseEvent| {
        if let Some(win) = window() {
            let _ = win.open_with_url_and_target(content::RESUME_PATH, "_blank");
        }
    });

    html! {
        <Reveal class="hero">
            <h1 class="hero-name">{content::NAME}</h1>
            <p class="hero-tagline">{content::TAGLINE}</p>
            <div class="hero-links">
                <a class="social-link" href={content::EMAIL_URL}>{"Email"}</a>
                <a
                    class="social-link"
                    href={content::GITHUB_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"GitHub"}
                </a>
                <a
                    class="social-link"
                    href={content::LINKEDIN_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"LinkedIn"}
                </a>
            </div>
            <button class="resume-button" type="button" onclick={on_resume}>
                {"Download Resume"}
            </button>
        </Reveal>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <Reveal class="section">
            <h2 class="section-title accent-blue">{"Experience"}</h2>
            <div class="card-stack">
                { for content::EXPERIENCES.iter().map(|experience| html! {
                    <article class="card" key={experience.company}>
                        <h3 class="card-title">{experience.role}</h3>
                        <p class="card-meta">
                            {format!(
                                "{} | {} | {}",
                                experience.company, experience.period, experience.location
                            )}
                        </p>
                        <p class="card-body">{experience.description}</p>
                    </article>
                }) }
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static content::Project,
    expanded: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };

    let body = if props.expanded {
        project.details
    } else {
        project.overview
    };
    let action = if props.expanded {
        "Less Info"
    } else {
        "More Info"
    };

    html! {
        <article class="card project-card">
            <div>
                <h3 class="card-title">{project.title}</h3>
                <p class="card-meta">{project.stack}</p>
                <p class="card-body">{body}</p>
            </div>
            <button class="card-action" type="button" onclick={onclick}>{action}</button>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsSectionProps {
    disclosure: DisclosureMap,
    on_toggle: Callback<&'static str>,
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ProjectsSectionProps) -> Html {
    use_effect_with((), |_| {
        vendor::mount_carousel(&carousel::project_carousel());
        || ()
    });

    html! {
        <Reveal class="section">
            <h2 class="section-title accent-blue">{"Projects"}</h2>
            <div id="projects-track" class="projects-track">
                { for content::PROJECTS.iter().map(|project| {
                    html! {
                        <div class="slide" key={project.id}>
                            <ProjectCard
                                project={project}
                                expanded={props.disclosure.is_expanded(project.id)}
                                on_toggle={props.on_toggle.clone()}
                            />
                        </div>
                    }
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(EducationSection)]
fn education_section() -> Html {
    html! {
        <Reveal class="section">
            <h2 class="section-title accent-green">{"Education"}</h2>
            <div class="card-stack">
                { for content::EDUCATION.iter().map(|education| html! {
                    <article class="card" key={education.degree}>
                        <h3 class="card-title">{education.degree}</h3>
                        <p class="card-meta">
                            {format!("{} | {}", education.institution, education.period)}
                        </p>
                        <p class="card-body">{education.details}</p>
                    </article>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(CertificationsSection)]
fn certifications_section() -> Html {
    html! {
        <Reveal class="section">
            <h2 class="section-title accent-yellow">{"Certifications"}</h2>
            <div class="card-grid">
                { for content::CERTIFICATIONS.iter().map(|certification| html! {
                    <article class="card" key={certification.title}>
                        <h3 class="card-title">{certification.title}</h3>
                        <p class="card-meta">
                            {format!("{} | {}", certification.issuer, certification.period)}
                        </p>
                        <p class="card-body">{certification.details}</p>
                    </article>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(SkillsSection)]
fn skills_section() -> Html {
    let theme = use_context::<ThemeContext>()
        .map(|context| context.theme)
        .unwrap_or(Theme::Dark);
    let canvas = use_node_ref();
    let chart_handle = use_mut_ref(|| Option::<vendor::RadarChart>::None);

    {
        let canvas = canvas.clone();
        let chart_handle = chart_handle.clone();
        use_effect_with(theme, move |theme| {
            if let Some(target) = canvas.cast::<Element>() {
                let config = chart::radar_config(content::SKILL_PROFICIENCY, *theme);
                *chart_handle.borrow_mut() = vendor::mount_radar_chart(&target, &config);
            }

            move || {
                if let Some(previous) = chart_handle.borrow_mut().take() {
                    previous.destroy();
                }
            }
        });
    }

    html! {
        <Reveal class="section">
            <h2 class="section-title accent-green">{"Skills"}</h2>
            <div class="skill-panel">
                <h3 class="panel-title">{"Skill Proficiency Radar"}</h3>
                <div class="chart-container">
                    <canvas ref={canvas}></canvas>
                </div>
                <div class="skill-grid">
                    { for content::SKILL_PROFICIENCY.iter().map(|(skill, _)| html! {
                        <span class="skill-item" key={*skill}>{*skill}</span>
                    }) }
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    html! {
        <Reveal class="site-footer">
            {content::FOOTER_TEXT}
        </Reveal>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(|| theme::load_theme(&LocalStorageStore));
    let disclosure = use_state(DisclosureMap::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            theme::apply_theme(current);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            theme::persist_theme(&LocalStorageStore, next);
            theme::apply_theme(next);
            theme.set(next);
        })
    };

    let on_project_toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*disclosure).clone();
            next.toggle(id);
            disclosure.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <ParticlesLayer />
            <div class="page-shell">
                <ThemeToggle />
                <main id="content">
                    <Hero />
                    <ExperienceSection />
                    <ProjectsSection
                        disclosure={(*disclosure).clone()}
                        on_toggle={on_project_toggle}
                    />
                    <EducationSection />
                    <CertificationsSection />
                    <SkillsSection />
                </main>
                <SiteFooter />
            </div>
        </ContextProvider<ThemeContext>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
