use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use stylist::yew::Global;

pub mod config;

pub mod components {
    pub mod email_signup;
    pub mod hero;
    pub mod services;
    pub mod value_proposition;
}

pub mod pages {
    pub mod home;
}

pub mod signup {
    pub mod delivery;
    pub mod state;
    pub mod validate;
}

use pages::home::Home;

const GLOBAL_STYLES: &str = r#"
    *, *::before, *::after {
        box-sizing: border-box;
    }
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #111827;
        background: #ffffff;
        -webkit-font-smoothing: antialiased;
    }
    .text-gradient {
        background: linear-gradient(90deg, #2563eb 0%, #7c3aed 100%);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        color: transparent;
    }
"#;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Global css={GLOBAL_STYLES} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn run() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
