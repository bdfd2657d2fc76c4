use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod scroll;
mod state;
mod structured_data;
mod components {
    pub mod icons;
    pub mod nav;
}
mod sections {
    pub mod hero;
    pub mod services;
    pub mod about;
    pub mod locations;
    pub mod cta;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod legal;
}

use components::nav::Nav;
use pages::{
    landing::Landing,
    legal::{Impressum, NotFound, PrivacyPolicy, TermsAndConditions},
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/impressum")]
    Impressum,
    #[at("/datenschutz")]
    Privacy,
    #[at("/agb")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Impressum => {
            info!("Rendering Impressum page");
            html! { <Impressum /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="page">
                <Nav />
                <Switch<Route> render={switch} />
            </div>
            <style>
                {r#"
                :root {
                    --brand-blue: #003b7a;
                    --brand-yellow: #ffcc00;
                    --slate-50: #f8fafc;
                    --slate-100: #f1f5f9;
                    --slate-200: #e2e8f0;
                    --slate-300: #cbd5e1;
                    --slate-400: #94a3b8;
                    --slate-500: #64748b;
                    --slate-600: #475569;
                    --slate-800: #1e293b;
                    --slate-900: #0f172a;
                    --font-display: "Outfit", "Inter", system-ui, sans-serif;
                }

                *, *::before, *::after {
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: "Inter", system-ui, sans-serif;
                    color: var(--slate-900);
                    background: #fff;
                    -webkit-font-smoothing: antialiased;
                }

                h1, h2, h3, h4 {
                    font-family: var(--font-display);
                    margin: 0;
                }

                h2 {
                    font-size: 2.25rem;
                    color: var(--slate-900);
                }

                p {
                    margin: 0;
                }

                .page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .glass {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .btn-emergency {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1.25rem;
                    border-radius: 0.75rem;
                    background: #dc2626;
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 10px 15px -3px rgba(220, 38, 38, 0.3);
                    transition: all 0.2s ease;
                }

                .btn-emergency:hover {
                    background: #b91c1c;
                    transform: translateY(-1px);
                }

                .btn-primary {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: var(--brand-blue);
                    color: #fff;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .btn-primary:hover {
                    background: #002a57;
                }

                @keyframes fadeUp {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                @media (min-width: 768px) {
                    h2 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
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
