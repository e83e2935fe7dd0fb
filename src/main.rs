use yew::prelude::*;
use log::info;

mod config;
mod content;
mod sections;
mod state {
    pub mod contact_form;
    pub mod theme;
}
mod components {
    pub mod header;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let theme_toggle = config::theme_toggle_enabled();
    info!("Rendering landing page (theme toggle: {})", theme_toggle);

    html! {
        <Landing theme_toggle={theme_toggle} />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
