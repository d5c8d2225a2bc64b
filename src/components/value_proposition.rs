use yew::prelude::*;

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Years of Expertise",
        "Deep experience building production AI applications across industries, from startups to enterprise.",
    ),
    (
        "🎯",
        "Proven Results",
        "Track record of delivering AI solutions that drive real business outcomes and ROI.",
    ),
    (
        "🔧",
        "End-to-End Solutions",
        "From strategy to deployment - we handle the complete AI development lifecycle.",
    ),
    (
        "⚡",
        "Fast Time-to-Market",
        "Accelerate your AI initiatives with our battle-tested frameworks and methodologies.",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("5+", "Years Building AI"),
    ("100+", "AI Projects Delivered"),
    ("24/7", "Support & Monitoring"),
];

const TECHNOLOGIES: &[&str] = &[
    "TensorFlow",
    "PyTorch",
    "OpenAI API",
    "Hugging Face",
    "LangChain",
    "Vector Databases",
    "MLOps",
    "Cloud AI Services",
];

#[function_component(ValueProposition)]
pub fn value_proposition() -> Html {
    html! {
        <section class="value-proposition">
            <style>
                {r#"
                    .value-proposition {
                        padding: 5rem 0;
                        background: #ffffff;
                    }
                    .value-proposition .value-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .value-proposition .value-intro {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .value-proposition .value-intro h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 1rem 0;
                    }
                    .value-proposition .value-intro p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .value-proposition .benefit-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .value-proposition .benefit {
                        text-align: center;
                    }
                    .value-proposition .benefit-icon {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                        transition: transform 0.2s;
                    }
                    .value-proposition .benefit:hover .benefit-icon {
                        transform: scale(1.1);
                    }
                    .value-proposition .benefit h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 0.5rem 0;
                    }
                    .value-proposition .benefit p {
                        color: #4b5563;
                        margin: 0;
                    }
                    .value-proposition .experience-panel {
                        background: linear-gradient(90deg, #eff6ff 0%, #dbeafe 100%);
                        border-radius: 1rem;
                        padding: 2rem;
                        text-align: center;
                    }
                    .value-proposition .experience-panel h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 1.5rem 0;
                    }
                    .value-proposition .stat-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .value-proposition .stat-figure {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #2563eb;
                        margin-bottom: 0.5rem;
                    }
                    .value-proposition .stat-label {
                        color: #374151;
                    }
                    .value-proposition .tech-section {
                        margin-top: 4rem;
                        text-align: center;
                    }
                    .value-proposition .tech-section h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 1.5rem 0;
                    }
                    .value-proposition .tech-tags {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .value-proposition .tech-tag {
                        padding: 0.5rem 1rem;
                        background: #f3f4f6;
                        color: #374151;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        transition: background-color 0.2s, color 0.2s;
                    }
                    .value-proposition .tech-tag:hover {
                        background: #dbeafe;
                        color: #1d4ed8;
                    }
                    @media (min-width: 768px) {
                        .value-proposition .benefit-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .value-proposition .stat-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .value-proposition .experience-panel {
                            padding: 3rem;
                        }
                    }
                    @media (min-width: 1024px) {
                        .value-proposition .benefit-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="value-content">
                <div class="value-intro">
                    <h2>{"Why Choose Our AI Engineering Expertise?"}</h2>
                    <p>
                        {"We don't just build AI applications - we craft intelligent solutions \
                          that transform your business operations and unlock new opportunities."}
                    </p>
                </div>

                <div class="benefit-grid">
                    { BENEFITS.iter().map(|&(icon, title, description)| {
                        html! {
                            <div class="benefit">
                                <div class="benefit-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>

                <div class="experience-panel">
                    <h3>{"Battle-Tested AI Experience"}</h3>
                    <div class="stat-grid">
                        { STATS.iter().map(|&(figure, label)| {
                            html! {
                                <div>
                                    <div class="stat-figure">{figure}</div>
                                    <div class="stat-label">{label}</div>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>

                <div class="tech-section">
                    <h3>{"Technologies We Master"}</h3>
                    <div class="tech-tags">
                        { TECHNOLOGIES.iter().map(|&tech| {
                            html! {
                                <span class="tech-tag">{tech}</span>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>
        </section>
    }
}
