use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content;
use crate::sections::{scroll_to_section, Section};
use crate::state::theme::ThemePreference;

const SCROLLED_THRESHOLD: f64 = 24.0;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub theme: ThemePreference,
    pub show_theme_toggle: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                            is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Failed to attach header scroll listener: {:?}", e);
                    }
                    Box::new(move || {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Failed to detach header scroll listener: {:?}", e);
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(section);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Theme toggle clicked");
            on_toggle_theme.emit(());
        })
    };

    let menu_class = if *menu_open {
        "site-nav mobile-menu-open"
    } else {
        "site-nav"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <div class="brand">
                    <div class="brand-monogram">
                        <span>{content::BRAND_MONOGRAM}</span>
                    </div>
                    <span class="brand-name">{content::BRAND_SHORT}</span>
                </div>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { for Section::ALL.iter().map(|section| html! {
                        <button class="nav-link" onclick={nav_to(*section)}>
                            {section.label()}
                        </button>
                    }) }
                    if props.show_theme_toggle {
                        <button
                            class="theme-toggle"
                            aria-pressed={props.theme.is_dark.to_string()}
                            onclick={toggle_theme}
                        >
                            {props.theme.toggle_label()}
                        </button>
                    }
                </nav>
            </div>
        </header>
    }
}
