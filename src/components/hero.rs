use yew::prelude::*;

use crate::components::email_signup::EmailSignup;

#[function_component(Hero)]
pub fn hero() -> Html {
    let show_signup = use_state(|| false);

    let open_signup = {
        let show_signup = show_signup.clone();
        Callback::from(move |_: MouseEvent| {
            show_signup.set(true);
        })
    };

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        background: linear-gradient(135deg, #f9fafb 0%, #ffffff 100%);
                        padding: 5rem 0;
                    }
                    .hero .hero-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 1.5rem 0;
                        line-height: 1.1;
                    }
                    .hero .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto 2rem auto;
                    }
                    .hero .hero-actions {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                        margin-bottom: 3rem;
                    }
                    .hero .hero-cta {
                        background: #2563eb;
                        color: #ffffff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: background-color 0.2s;
                    }
                    .hero .hero-cta:hover {
                        background: #1d4ed8;
                    }
                    .hero .hero-secondary {
                        display: inline-block;
                        background: #ffffff;
                        color: #2563eb;
                        font-size: 1.125rem;
                        font-weight: 600;
                        padding: 1rem 2rem;
                        border: 1px solid #2563eb;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        transition: background-color 0.2s;
                    }
                    .hero .hero-secondary:hover {
                        background: #eff6ff;
                    }
                    .hero .hero-prompt {
                        max-width: 28rem;
                        margin: 0 auto;
                    }
                    .hero .hero-prompt p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin: 0 0 0.75rem 0;
                    }
                    .hero .hero-prompt-link {
                        background: none;
                        border: none;
                        color: #2563eb;
                        font-weight: 500;
                        font-size: 1rem;
                        text-decoration: underline;
                        cursor: pointer;
                    }
                    .hero .hero-prompt-link:hover {
                        color: #1d4ed8;
                    }
                    .hero .hero-signup {
                        max-width: 28rem;
                        margin: 2rem auto 0 auto;
                        text-align: left;
                    }
                    .hero .hero-trust {
                        margin-top: 4rem;
                        padding-top: 2rem;
                        border-top: 1px solid #e5e7eb;
                    }
                    .hero .hero-trust p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin: 0 0 1rem 0;
                    }
                    .hero .hero-trust-row {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 2rem;
                        opacity: 0.6;
                    }
                    .hero .hero-trust-row div {
                        color: #9ca3af;
                        font-weight: 600;
                    }
                    @media (min-width: 640px) {
                        .hero {
                            padding: 8rem 0;
                        }
                        .hero h1 {
                            font-size: 3.75rem;
                        }
                        .hero .hero-actions {
                            flex-direction: row;
                        }
                    }
                "#}
            </style>
            <div class="hero-content">
                <h1>
                    {"Expert "}
                    <span class="text-gradient">{"AI Engineering"}</span>
                    {" Consulting"}
                </h1>

                <p class="hero-subtitle">
                    {"Transform your business with cutting-edge AI solutions. Our team brings "}
                    <strong>{"years of proven expertise"}</strong>
                    {" in building production-ready AI applications that deliver real business value."}
                </p>

                <div class="hero-actions">
                    <button class="hero-cta" onclick={open_signup.clone()}>
                        {"Get Started Today"}
                    </button>
                    <a href="#services" class="hero-secondary">
                        {"Learn More"}
                    </a>
                </div>

                {
                    if !*show_signup {
                        html! {
                            <div class="hero-prompt">
                                <p>{"Ready to discuss your AI project?"}</p>
                                <button class="hero-prompt-link" onclick={open_signup}>
                                    {"Enter your email for a free consultation"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="hero-signup">
                                <EmailSignup />
                            </div>
                        }
                    }
                }

                <div class="hero-trust">
                    <p>{"Trusted by innovative companies"}</p>
                    <div class="hero-trust-row">
                        <div>{"Startups"}</div>
                        <div>{"Enterprise"}</div>
                        <div>{"Scale-ups"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
