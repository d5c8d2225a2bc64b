use yew::prelude::*;

use crate::components::email_signup::EmailSignup;

/// Title, blurb, features. Also the source for the footer's services column.
pub const SERVICES: &[(&str, &str, &[&str])] = &[
    (
        "AI Strategy & Consulting",
        "Define your AI roadmap with expert guidance on technology selection, implementation strategy, and ROI optimization.",
        &[
            "AI readiness assessment",
            "Technology roadmapping",
            "Business case development",
            "Risk assessment & mitigation",
        ],
    ),
    (
        "Custom AI Development",
        "Build production-ready AI applications tailored to your specific business needs and requirements.",
        &[
            "Machine learning models",
            "Natural language processing",
            "Computer vision solutions",
            "Recommendation systems",
        ],
    ),
    (
        "AI Integration & Deployment",
        "Seamlessly integrate AI capabilities into your existing systems with robust, scalable architecture.",
        &[
            "API development & integration",
            "Cloud deployment & scaling",
            "Performance optimization",
            "Security & compliance",
        ],
    ),
    (
        "MLOps & Maintenance",
        "Ensure your AI systems perform reliably with comprehensive monitoring, updates, and optimization.",
        &[
            "Model monitoring & retraining",
            "Performance analytics",
            "Automated testing & validation",
            "24/7 support & maintenance",
        ],
    ),
];

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    ("1", "Discovery", "Understand your business needs and AI opportunities"),
    ("2", "Design", "Architect the optimal AI solution for your requirements"),
    ("3", "Develop", "Build and train AI models using best practices"),
    ("4", "Deploy", "Launch and monitor your AI solution in production"),
];

#[function_component(Services)]
pub fn services() -> Html {
    let show_contact_form = use_state(|| false);

    let open_contact_form = {
        let show_contact_form = show_contact_form.clone();
        Callback::from(move |_: MouseEvent| {
            show_contact_form.set(true);
        })
    };

    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services {
                        padding: 5rem 0;
                        background: #f9fafb;
                    }
                    .services .services-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .services .services-intro {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .services .services-intro h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 1rem 0;
                    }
                    .services .services-intro p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .services .service-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .services .service-card {
                        background: #ffffff;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.1);
                        transition: box-shadow 0.3s;
                    }
                    .services .service-card:hover {
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.15);
                    }
                    .services .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 1rem 0;
                    }
                    .services .service-card > p {
                        color: #4b5563;
                        margin: 0 0 1.5rem 0;
                    }
                    .services .service-card ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .services .service-card li {
                        display: flex;
                        align-items: center;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .services .service-check {
                        color: #3b82f6;
                        margin-right: 0.5rem;
                    }
                    .services .process-panel {
                        background: #ffffff;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.1);
                        margin-bottom: 4rem;
                    }
                    .services .process-panel h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        text-align: center;
                        margin: 0 0 2rem 0;
                    }
                    .services .process-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .services .process-step {
                        text-align: center;
                    }
                    .services .process-number {
                        width: 3rem;
                        height: 3rem;
                        background: #dbeafe;
                        color: #2563eb;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        font-size: 1.125rem;
                        margin: 0 auto 1rem auto;
                    }
                    .services .process-step h4 {
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 0.5rem 0;
                    }
                    .services .process-step p {
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin: 0;
                    }
                    .services .services-cta {
                        text-align: center;
                    }
                    .services .services-cta h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 1rem 0;
                    }
                    .services .services-cta > p {
                        color: #4b5563;
                        margin: 0 0 2rem 0;
                    }
                    .services .services-cta-button {
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
                    .services .services-cta-button:hover {
                        background: #1d4ed8;
                    }
                    .services .services-cta-form {
                        max-width: 28rem;
                        margin: 0 auto;
                        text-align: left;
                    }
                    @media (min-width: 768px) {
                        .services .process-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                        .services .process-panel {
                            padding: 3rem;
                        }
                    }
                    @media (min-width: 1024px) {
                        .services .service-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="services-content">
                <div class="services-intro">
                    <h2>{"Comprehensive AI Engineering Services"}</h2>
                    <p>
                        {"From initial strategy to ongoing maintenance, we provide end-to-end \
                          AI solutions that drive measurable business results."}
                    </p>
                </div>

                <div class="service-grid">
                    { SERVICES.iter().map(|&(title, description, features)| {
                        html! {
                            <div class="service-card">
                                <h3>{title}</h3>
                                <p>{description}</p>
                                <ul>
                                    { features.iter().map(|&feature| {
                                        html! {
                                            <li>
                                                <span class="service-check">{"✓"}</span>
                                                {feature}
                                            </li>
                                        }
                                    }).collect::<Html>() }
                                </ul>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>

                <div class="process-panel">
                    <h3>{"Our Proven AI Development Process"}</h3>
                    <div class="process-grid">
                        { PROCESS_STEPS.iter().map(|&(step, title, description)| {
                            html! {
                                <div class="process-step">
                                    <div class="process-number">{step}</div>
                                    <h4>{title}</h4>
                                    <p>{description}</p>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>

                <div class="services-cta">
                    <h3>{"Ready to Transform Your Business with AI?"}</h3>
                    <p>{"Let's discuss how our AI expertise can solve your specific challenges."}</p>
                    {
                        if !*show_contact_form {
                            html! {
                                <button class="services-cta-button" onclick={open_contact_form}>
                                    {"Start Your AI Project"}
                                </button>
                            }
                        } else {
                            html! {
                                <div class="services-cta-form">
                                    <EmailSignup />
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        </section>
    }
}
