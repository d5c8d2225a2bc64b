use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::hero::Hero;
use crate::components::services::{Services, SERVICES};
use crate::components::value_proposition::ValueProposition;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    use_title(config::PAGE_TITLE.to_string());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="home">
            <style>
                {r#"
                    .home {
                        min-height: 100vh;
                    }
                    .home .site-footer {
                        background: #111827;
                        color: #ffffff;
                        padding: 3rem 0;
                    }
                    .home .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .home .footer-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .home .footer-columns h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin: 0 0 1rem 0;
                    }
                    .home .footer-columns h4 {
                        font-weight: 600;
                        margin: 0 0 1rem 0;
                    }
                    .home .footer-columns p,
                    .home .footer-columns li {
                        color: #9ca3af;
                    }
                    .home .footer-columns ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .home .footer-columns li {
                        margin-bottom: 0.5rem;
                    }
                    .home .footer-contact-link {
                        color: #60a5fa;
                        text-decoration: none;
                    }
                    .home .footer-contact-link:hover {
                        color: #93c5fd;
                    }
                    .home .footer-bottom {
                        border-top: 1px solid #1f2937;
                        margin-top: 2rem;
                        padding-top: 2rem;
                        text-align: center;
                        color: #9ca3af;
                    }
                    @media (min-width: 768px) {
                        .home .footer-columns {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <Hero />
            <ValueProposition />
            <Services />

            <footer class="site-footer">
                <div class="footer-content">
                    <div class="footer-columns">
                        <div>
                            <h3>{config::SITE_NAME}</h3>
                            <p>
                                {"Expert AI solutions with years of proven experience in \
                                  building production applications."}
                            </p>
                        </div>

                        <div>
                            <h4>{"Services"}</h4>
                            <ul>
                                { SERVICES.iter().map(|&(title, _, _)| {
                                    html! { <li>{title}</li> }
                                }).collect::<Html>() }
                            </ul>
                        </div>

                        <div>
                            <h4>{"Contact"}</h4>
                            <p>
                                {"Ready to start your AI project?"}
                                <br />
                                <a href="#" class="footer-contact-link">
                                    {"Get in touch for a consultation"}
                                </a>
                            </p>
                        </div>
                    </div>

                    <div class="footer-bottom">
                        <p>{format!("© 2024 {}. All rights reserved.", config::SITE_NAME)}</p>
                    </div>
                </div>
            </footer>
        </main>
    }
}
