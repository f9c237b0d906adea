use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::{submit_with, ContactField, ContactForm, FormStatus};
use crate::content::{
    Experience, Project, CONTACT_FALLBACK_URL, CURRENT_EMPLOYER, DESIGN_CREDIT_URL,
    EXPERIENCES, HOBBY, OWNER_NAME, PAST_EMPLOYERS, PROJECTS, RESUMES, SOCIAL_LINKS, TAGLINE,
    TYPEWRITER_PHRASES, WRITING_TOPICS,
};
use crate::delivery::{DeliveryConfig, EmailJsMailer};
use crate::frontend::{use_theme, use_theme_toggle, Route, Spotlight};
use crate::scroll_spy::{Extent, ScrollSpy, Section};
use crate::widgets::{ExternalLink, HoverText, ResumeLink, TechTags, TypeWriter};

fn section_extent(section: Section) -> Option<Extent> {
    let element = window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;

    Some(Extent {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

fn scroll_to_section(section: Section) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[hook]
fn use_scroll_spy() -> Section {
    let active = use_state_eq(Section::default);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let spy = Rc::new(Cell::new(ScrollSpy::default()));
            let observe = move || {
                let Some(scroll_y) = window().and_then(|w| w.scroll_y().ok()) else {
                    return;
                };
                let mut next = spy.get();
                next.observe(scroll_y, section_extent);
                spy.set(next);
                active.set(next.active());
            };

            observe();
            let listener =
                window().map(|win| EventListener::new(&win, "scroll", move |_| observe()));
            move || drop(listener)
        });
    }

    *active
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let theme = use_theme();
    let on_toggle = use_theme_toggle();

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={theme.toggle_label()}
            aria-pressed={theme.is_dark().to_string()}
            onclick={on_toggle}
        >
            <span aria-hidden="true">{theme.icon()}</span>
        </button>
    }
}

#[function_component(SectionNav)]
fn section_nav() -> Html {
    let active = use_scroll_spy();

    html! {
        <nav class="section-nav" aria-label="In-page jump links">
            <ul>
                { for Section::ALL.into_iter().map(|section| {
                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section));
                    html! {
                        <li>
                            <button
                                type="button"
                                class={classes!("nav-entry", (section == active).then_some("is-active"))}
                                aria-current={(section == active).then_some("true")}
                                {onclick}
                            >
                                <span class="nav-indicator" aria-hidden="true"></span>
                                <span class="nav-text">{section.id()}</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[function_component(SiteHeader)]
fn site_header() -> Html {
    html! {
        <header class="site-header">
            <div>
                <div class="identity-row">
                    <h1 id="identity-heading">{OWNER_NAME}</h1>
                    <ThemeToggle />
                </div>
                <h2 class="role"><TypeWriter phrases={TYPEWRITER_PHRASES} /></h2>
                <p class="tagline">{TAGLINE}</p>
                <SectionNav />
            </div>
            <ul class="social-list" aria-label="Social media">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <li>
                        <a href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                            <span aria-hidden="true">{link.icon}</span>
                        </a>
                    </li>
                }) }
            </ul>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SectionBlockProps {
    section: Section,
    children: Html,
}

#[function_component(SectionBlock)]
fn section_block(props: &SectionBlockProps) -> Html {
    let heading_id = format!("{}-heading", props.section.id());

    html! {
        <section id={props.section.id()} class="section-block" aria-labelledby={heading_id.clone()}>
            <div class="section-heading">
                <h2 id={heading_id}>{props.section.heading()}</h2>
            </div>
            {props.children.clone()}
        </section>
    }
}

fn about() -> Html {
    let [telecom, analytics, consulting] = &PAST_EMPLOYERS;

    html! {
        <SectionBlock section={Section::About}>
            <p>
                {"I'm a developer passionate about building robust, data-driven solutions that transform complex information into actionable insights. My favorite work lies at the intersection of quality engineering and data science."}
            </p>
            <p>
                {"Currently, I'm a Senior Automation Engineer at "}
                <ExternalLink href={CURRENT_EMPLOYER.href} label={CURRENT_EMPLOYER.label} />
                {", specializing in data integrity and system validation. I contribute to ensuring bulletproof data pipelines and automated testing frameworks while actively building my expertise in machine learning."}
            </p>
            <p>
                {"In the past, I've had the opportunity to work across diverse industries, from "}
                <ExternalLink href={telecom.href} label={telecom.label} />
                {" to "}
                <ExternalLink href={analytics.href} label={analytics.label} />
                {", and "}
                <ExternalLink href={consulting.href} label={consulting.label} />
                {". I've also developed multiple machine learning projects, including recommendation systems, classification models, and interactive web applications."}
            </p>
            <p>
                {"In my spare time, I'm usually gaming, binge-watching treasure hunt series, or "}
                <HoverText primary={HOBBY.primary} alternate={HOBBY.alternate} />
                {", because apparently I enjoy deciphering complex patterns whether they're in code or ancient scripts."}
            </p>
        </SectionBlock>
    }
}

fn experience_item(experience: &Experience) -> Html {
    html! {
        <li class="entry">
            <p class="entry-period">{experience.period}</p>
            <div class="entry-body">
                <h3>
                    <ExternalLink
                        href={experience.link}
                        label={format!("{} · {}", experience.title, experience.company)}
                    />
                </h3>
                <p class="entry-description">{experience.description}</p>
                <TechTags items={experience.technologies} />
            </div>
        </li>
    }
}

fn experience() -> Html {
    html! {
        <SectionBlock section={Section::Experience}>
            <ol class="entry-list">
                { for EXPERIENCES.iter().map(experience_item) }
            </ol>
            <div class="resume-links">
                { for RESUMES.iter().map(|resume| html! {
                    <ResumeLink
                        href={resume.href}
                        label={resume.label.primary}
                        alternate={resume.label.alternate}
                    />
                }) }
            </div>
        </SectionBlock>
    }
}

fn project_item(project: &Project) -> Html {
    html! {
        <li class="entry">
            <img
                class="entry-thumbnail"
                src={project.image}
                alt={project.title}
                loading="lazy"
                width="200"
                height="48"
                decoding="async"
            />
            <div class="entry-body">
                <h3><ExternalLink href={project.external} label={project.title} /></h3>
                <p class="entry-description">{project.description}</p>
                <TechTags items={project.technologies} />
            </div>
        </li>
    }
}

fn work() -> Html {
    html! {
        <SectionBlock section={Section::Work}>
            <ul class="entry-list">
                { for PROJECTS.iter().map(project_item) }
            </ul>
            <Link<Route> to={Route::Archive} classes="archive-link">
                {"View Full Project Archive"}
                <span class="external-mark" aria-hidden="true">{"↗"}</span>
            </Link<Route>>
        </SectionBlock>
    }
}

fn writing() -> Html {
    html! {
        <SectionBlock section={Section::Writing}>
            <div class="writing-card">
                <h3>{"Blog Posts Coming Soon"}</h3>
                <p>
                    {"I'm currently working on some exciting articles about machine learning, data science, and test automation. Stay tuned for in-depth technical tutorials, project analyses, and industry insights."}
                </p>
                <TechTags items={WRITING_TOPICS} />
            </div>
        </SectionBlock>
    }
}

fn field_value(event: &InputEvent) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let redraw = use_force_update();
    let mounted = use_mut_ref(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            move || *mounted.borrow_mut() = false
        });
    }

    let on_input = |field: ContactField| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = field_value(&event) {
                form.borrow_mut().edit(field, value);
                redraw.force_update();
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let mounted = mounted.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let form: Rc<RefCell<ContactForm>> = form.clone();
            let redraw = redraw.clone();
            let mounted = mounted.clone();
            spawn_local(async move {
                let config = DeliveryConfig::from_build_env();
                let mailer = EmailJsMailer::new(&config.endpoint);
                let notify = move || {
                    if *mounted.borrow() {
                        redraw.force_update();
                    }
                };
                submit_with(&form, &mailer, &config, &notify).await;
            });
        })
    };

    let on_clear = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().clear();
            redraw.force_update();
        })
    };

    let snapshot = form.borrow().clone();
    let submitting = snapshot.is_submitting();
    let nothing_to_clear =
        snapshot.status() == FormStatus::Idle && snapshot.fields().is_empty();

    let banner = snapshot.banner().map(|text| {
        let class = match snapshot.status() {
            FormStatus::Success => "banner banner-success",
            _ => "banner banner-error",
        };
        html! { <div class={class} role="status">{text}</div> }
    });

    html! {
        <SectionBlock section={Section::Contact}>
            <form class="contact-form" onsubmit={on_submit}>
                { for ContactField::ALL.into_iter().map(|field| {
                    let value = snapshot.value(field).to_string();
                    let control = match field {
                        ContactField::Message => html! {
                            <textarea
                                id={field.name()}
                                name={field.name()}
                                rows="5"
                                autocomplete="off"
                                required={true}
                                placeholder={field.placeholder()}
                                {value}
                                oninput={on_input(field)}
                            />
                        },
                        _ => html! {
                            <input
                                id={field.name()}
                                name={field.name()}
                                type={if field == ContactField::Email { "email" } else { "text" }}
                                autocomplete="off"
                                required={true}
                                placeholder={field.placeholder()}
                                {value}
                                oninput={on_input(field)}
                            />
                        },
                    };
                    html! {
                        <div class="form-field">
                            <label for={field.name()}>{field.label()}</label>
                            {control}
                        </div>
                    }
                }) }
                {banner}
                <div class="form-actions">
                    <button
                        type="submit"
                        class={classes!("button", "button-primary", submitting.then_some("is-busy"))}
                        disabled={submitting}
                        aria-busy={submitting.to_string()}
                    >
                        <span class="button-label">{"Send Message"}</span>
                        if submitting {
                            <span class="spinner" aria-hidden="true"></span>
                        }
                    </button>
                    <button
                        type="button"
                        class="button button-secondary"
                        disabled={nothing_to_clear}
                        onclick={on_clear}
                    >
                        {"Clear Form"}
                    </button>
                    <ExternalLink href={CONTACT_FALLBACK_URL} label="Say Hello" class="say-hello" />
                </div>
            </form>
        </SectionBlock>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Spotlight />
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <SiteHeader />
                <main id="content">
                    {about()}
                    {experience()}
                    {work()}
                    {writing()}
                    <ContactSection />
                    <footer class="site-footer">
                        <p>
                            {"Design inspired by "}
                            <ExternalLink href={DESIGN_CREDIT_URL} label="Brittany Chiang" />
                            {", brilliant & elegant."}
                        </p>
                    </footer>
                </main>
            </div>
        </>
    }
}
