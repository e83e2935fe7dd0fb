use chrono::{Datelike, Local};
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::header::SiteHeader;
use crate::components::toast::{ToastAction, ToastStack, Toaster};
use crate::content;
use crate::sections::{scroll_to_section, Section};
use crate::state::contact_form::{ContactFormDraft, FormField};
use crate::state::theme::ThemePreference;

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: var(--page-bg);
        color: var(--text);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        transition: background 0.3s ease, color 0.3s ease;
    }
    .container {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: var(--header-bg);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        transition: box-shadow 0.3s ease;
    }
    .site-header.scrolled {
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
    }
    .header-content {
        max-width: 1280px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .brand-monogram {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        background: linear-gradient(135deg, #0d9488, #155e75);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-weight: bold;
        font-size: 1.25rem;
    }
    .brand-name {
        font-size: 1.25rem;
        font-weight: bold;
    }
    .site-nav {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        background: none;
        border: none;
        font-size: 1rem;
        color: var(--muted-text);
        cursor: pointer;
        transition: color 0.2s ease;
    }
    .nav-link:hover {
        color: var(--accent);
    }
    .theme-toggle {
        border: 1px solid var(--border);
        background: var(--muted-surface-bg);
        color: var(--text);
        border-radius: 999px;
        padding: 0.4rem 0.9rem;
        cursor: pointer;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: var(--text);
    }
    .hero {
        padding: 6rem 0 4rem;
        background: linear-gradient(135deg, var(--muted-surface-bg), var(--page-bg));
        text-align: center;
    }
    .hero h1 {
        font-size: 3.5rem;
        line-height: 1.2;
        margin: 5rem 0 1.5rem;
    }
    .hero p {
        font-size: 1.25rem;
        color: var(--muted-text);
        max-width: 42rem;
        margin: 0 auto 2rem;
    }
    .cta-button, .submit-button {
        background: var(--accent);
        color: #fff;
        border: none;
        border-radius: 8px;
        cursor: pointer;
        transition: background 0.2s ease, transform 0.2s ease;
    }
    .cta-button {
        padding: 1.25rem 2rem;
        font-size: 1.125rem;
        margin-bottom: 5rem;
    }
    .cta-button:hover {
        background: var(--accent-hover);
        transform: scale(1.05);
    }
    .intro, .services {
        padding: 4rem 0;
        text-align: center;
    }
    .intro p {
        font-size: 1.125rem;
        color: var(--muted-text);
        max-width: 48rem;
        margin: 0 auto 2rem;
    }
    .social-links {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
        font-size: 1.75rem;
    }
    .social-links a {
        text-decoration: none;
    }
    .banner {
        padding: 3rem 0;
        background: var(--accent);
        color: #fff;
        text-align: center;
    }
    .about, .contact {
        padding: 5rem 0;
        background: var(--muted-surface-bg);
    }
    .section-title {
        font-size: 2.25rem;
        text-align: center;
        margin-bottom: 3rem;
    }
    .two-columns {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .about img {
        width: 100%;
        border-radius: 10px;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
        object-fit: cover;
    }
    .about p, .contact p {
        color: var(--muted-text);
        line-height: 1.7;
    }
    .service-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        margin-top: 3rem;
        text-align: left;
    }
    .service-card {
        background: var(--surface-bg);
        border: 1px solid var(--border);
        border-radius: 10px;
        padding: 1.5rem;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .service-card:hover {
        transform: translateY(-8px);
        box-shadow: 0 20px 30px rgba(0, 0, 0, 0.12);
    }
    .service-card img {
        width: 100%;
        height: 12rem;
        object-fit: cover;
        border-radius: 8px;
        margin-bottom: 1rem;
    }
    .service-card p {
        color: var(--muted-text);
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .contact-form input, .contact-form textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.6rem 0.75rem;
        border-radius: 6px;
        border: 1px solid var(--border);
        background: var(--surface-bg);
        color: var(--text);
        font: inherit;
    }
    .submit-button {
        padding: 1.25rem;
        font-size: 1rem;
    }
    .submit-button:hover {
        background: var(--accent-hover);
    }
    .contact-channels {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .contact-channels a {
        color: var(--accent);
        text-decoration: none;
    }
    .contact-channels a:hover {
        color: var(--accent-hover);
    }
    .hours {
        background: var(--surface-bg);
        padding: 1.5rem;
        border-radius: 10px;
        border: 1px solid var(--border);
    }
    .hours-row {
        display: flex;
        justify-content: space-between;
        color: var(--muted-text);
    }
    .contact .social-links {
        justify-content: flex-start;
        margin-top: 1.5rem;
    }
    .site-footer {
        background: var(--footer-bg);
        padding: 2rem 0;
        text-align: center;
        color: #9ca3af;
    }
    @media (max-width: 1024px) {
        .service-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .site-nav {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            padding: 1rem;
            gap: 1rem;
            background: var(--header-bg);
        }
        .site-nav.mobile-menu-open {
            display: flex;
        }
        .hero h1 {
            font-size: 2.5rem;
        }
        .two-columns, .service-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

/// Draft after one keystroke in `field`.
fn edit_draft(draft: &ContactFormDraft, field: FormField, value: String) -> ContactFormDraft {
    let mut next = draft.clone();
    next.update_field(field, value);
    next
}

/// Cleared draft plus the toast to show for it.
fn submit_draft(draft: &ContactFormDraft) -> (ContactFormDraft, ToastAction) {
    let mut next = draft.clone();
    let ack = next.submit();
    (next, ToastAction::Push(ack))
}

fn switch_theme(theme: ThemePreference) -> ThemePreference {
    let next = theme.toggled();
    info!("Switching to {} palette", next.palette().name);
    next
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub theme_toggle: bool,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let theme = use_state(ThemePreference::default);
    let draft = use_state(ContactFormDraft::default);
    let toasts = use_reducer(ToastStack::default);
    let year = use_state(|| Local::now().year());

    // Without the toggle the light palette is the only one.
    let active_theme = if props.theme_toggle {
        *theme
    } else {
        ThemePreference::default()
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            theme.set(switch_theme(*theme));
        })
    };

    let on_field_input = |field: FormField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                FormField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            draft.set(edit_draft(&draft, field, value));
        })
    };

    // Only reached once the browser's required/email checks pass.
    let onsubmit = {
        let draft = draft.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (next, toast) = submit_draft(&draft);
            draft.set(next);
            info!("Contact form submitted, showing acknowledgment");
            toasts.dispatch(toast);
        })
    };

    let on_dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let learn_more = Callback::from(|_: MouseEvent| {
        scroll_to_section(Section::About);
    });

    let social_links = content::SOCIAL_LINKS
        .iter()
        .map(|link| {
            html! {
                <a href={link.url} target="_blank" rel="noopener noreferrer" aria-label={link.label} title={link.label}>
                    {link.icon}
                </a>
            }
        })
        .collect::<Html>();

    let form_input = |field: FormField| match field.input_type() {
        Some(input_type) => html! {
            <input
                type={input_type}
                name={field.name()}
                placeholder={field.placeholder()}
                value={draft.field(field).to_string()}
                oninput={on_field_input(field)}
                required={field.required()}
            />
        },
        None => html! {
            <textarea
                name={field.name()}
                placeholder={field.placeholder()}
                value={draft.field(field).to_string()}
                oninput={on_field_input(field)}
                rows="4"
                required={field.required()}
            />
        },
    };

    html! {
        <div class={classes!("landing-page", active_theme.class_name())} style={active_theme.palette().css_variables()}>
            <style>{LANDING_CSS}</style>
            <SiteHeader
                theme={active_theme}
                show_theme_toggle={props.theme_toggle}
                on_toggle_theme={on_toggle_theme}
            />

            <section id={Section::Home.id()} class="hero">
                <div class="container">
                    <h1>
                        {content::HERO_TITLE_LINES[0]}<br />{content::HERO_TITLE_LINES[1]}
                    </h1>
                    <p>{content::HERO_SUBTITLE}</p>
                    <button class="cta-button" onclick={learn_more}>{"Learn More"}</button>
                </div>
            </section>

            <section class="intro">
                <div class="container">
                    <h2 class="section-title">{content::INTRO_TITLE}</h2>
                    <p>{content::INTRO_TEXT}</p>
                    <div class="social-links">{social_links.clone()}</div>
                </div>
            </section>

            <section class="banner">
                <div class="container">
                    <h2>{content::BANNER_TEXT}</h2>
                </div>
            </section>

            <section id={Section::About.id()} class="about">
                <div class="container">
                    <h2 class="section-title">{"About Us"}</h2>
                    <div class="two-columns">
                        <div>
                            <img src={content::ABOUT_IMAGE} alt="Professional Team" loading="lazy" />
                        </div>
                        <div>
                            <h3>{"Our Mission"}</h3>
                            { for content::MISSION_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Services.id()} class="services">
                <div class="container">
                    <h2 class="section-title">{content::SERVICES_TITLE}</h2>
                    <div class="service-grid">
                        { for content::SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <img src={service.image} alt={service.title} loading="lazy" />
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Contact.id()} class="contact">
                <div class="container">
                    <h2 class="section-title">{"Contact Us"}</h2>
                    <div class="two-columns">
                        <div>
                            <h3>{"Drop us a line!"}</h3>
                            <form class="contact-form" onsubmit={onsubmit}>
                                { for FormField::ALL.into_iter().map(form_input) }
                                <button type="submit" class="submit-button">{"Send"}</button>
                            </form>
                        </div>
                        <div>
                            <h3>{content::CONTACT_TITLE}</h3>
                            <p>{content::CONTACT_TEXT}</p>
                            <div class="contact-channels">
                                <a href={content::WHATSAPP_URL} target="_blank" rel="noopener noreferrer">
                                    {"💬 Message us on WhatsApp"}
                                </a>
                                <a href={content::mailto_link()}>
                                    {format!("✉️ {}", content::EMAIL_ADDRESS)}
                                </a>
                                <a href={content::tel_link()}>
                                    {format!("📞 {}", content::PHONE_DISPLAY)}
                                </a>
                            </div>
                            <div class="hours">
                                <h4>{"Hours"}</h4>
                                { for content::OPENING_HOURS.iter().map(|(days, time)| html! {
                                    <div class="hours-row">
                                        <span>{*days}</span>
                                        <span>{*time}</span>
                                    </div>
                                }) }
                            </div>
                            <div class="social-links">{social_links}</div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="container">
                    <p>{content::copyright_line(*year)}</p>
                </div>
            </footer>

            <Toaster toasts={toasts.toasts.clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::contact_form::Acknowledgment;
    use crate::state::theme::Palette;

    /// The opening tag of the form control with the given `name` attribute.
    fn control_tag<'a>(html: &'a str, name: &str) -> &'a str {
        let at = html
            .find(&format!("name=\"{}\"", name))
            .unwrap_or_else(|| panic!("no control named {}", name));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    async fn render(theme_toggle: bool) -> String {
        yew::ServerRenderer::<Landing>::with_props(move || LandingProps { theme_toggle })
            .render()
            .await
    }

    #[tokio::test]
    async fn renders_every_anchored_section() {
        let html = render(false).await;
        for section in Section::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", section.id())),
                "missing #{}",
                section.id()
            );
            assert!(html.contains(section.label()));
        }
    }

    #[tokio::test]
    async fn renders_contact_form_with_native_validation() {
        let html = render(false).await;
        for (name, kind) in [("name", "text"), ("email", "email"), ("phone", "tel")] {
            let tag = control_tag(&html, name);
            assert!(tag.starts_with("<input"), "{}", tag);
            assert!(tag.contains(&format!("type=\"{}\"", kind)), "{}", tag);
            assert!(tag.contains("required"), "{} must be required: {}", name, tag);
        }
        let message = control_tag(&html, "message");
        assert!(message.starts_with("<textarea"), "{}", message);
        assert!(!message.contains("required"), "{}", message);
        assert!(html.contains("Send"));
    }

    #[test]
    fn submit_pushes_one_toast_and_clears_draft() {
        let mut draft = ContactFormDraft::default();
        for (field, value) in [
            (FormField::Name, "Jane"),
            (FormField::Email, "jane@x.com"),
            (FormField::Phone, "07000000000"),
        ] {
            draft = edit_draft(&draft, field, value.to_string());
        }
        assert_eq!(draft.field(FormField::Email), "jane@x.com");

        let (next, toast) = submit_draft(&draft);
        assert_eq!(next, ContactFormDraft::default());
        assert_eq!(toast, ToastAction::Push(Acknowledgment::message_sent()));

        let stack = std::rc::Rc::new(ToastStack::default()).reduce(toast);
        assert_eq!(stack.toasts.len(), 1);
    }

    #[test]
    fn edit_leaves_other_fields_alone() {
        let draft = edit_draft(&ContactFormDraft::default(), FormField::Phone, "0700".to_string());
        let draft = edit_draft(&draft, FormField::Message, "hi".to_string());
        assert_eq!(draft.field(FormField::Phone), "0700");
        assert_eq!(draft.field(FormField::Message), "hi");
        assert_eq!(draft.field(FormField::Name), "");
    }

    #[test]
    fn switch_theme_swaps_palette() {
        let dark = switch_theme(ThemePreference::default());
        assert_eq!(dark.palette(), &Palette::DARK);
        assert_eq!(switch_theme(dark).palette(), &Palette::LIGHT);
    }

    #[tokio::test]
    async fn renders_outbound_links_and_footer() {
        let html = render(false).await;
        assert!(html.contains("href=\"mailto:ukworkconnect@gmail.com\""));
        assert!(html.contains("href=\"tel:+447407832548\""));
        assert!(html.contains("href=\"https://wa.me/447407832548\""));
        assert!(html.contains(&content::copyright_line(Local::now().year())));
        for service in &content::SERVICES {
            assert!(html.contains(service.title));
        }
    }

    #[tokio::test]
    async fn theme_toggle_only_when_enabled() {
        let without = render(false).await;
        assert!(!without.contains("class=\"theme-toggle\""));
        assert!(without.contains("theme-light"));

        let with = render(true).await;
        assert!(with.contains("class=\"theme-toggle\""));
        assert!(with.contains("theme-light"));
        assert!(with.contains(&Palette::LIGHT.css_variables()));
    }
}
