//! Browser tests for the one-page layout: section order, headline, the two
//! places the signup form can be revealed, and the footer.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, InputEvent, InputEventInit};

use consulting_site::config;
use consulting_site::pages::home::Home;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_home() -> Element {
    let host = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&host).unwrap();
    yew::Renderer::<Home>::with_root(host.clone()).render();
    host
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn query(host: &Element, selector: &str) -> Element {
    host.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

fn click(element: &Element) {
    element.unchecked_ref::<HtmlElement>().click();
}

fn text(host: &Element) -> String {
    host.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
async fn home_renders_the_sections_in_order() {
    let host = mount_home();
    settle().await;

    let markup = host.inner_html();
    let hero = markup.find("hero-content").unwrap();
    let value = markup.find("value-proposition").unwrap();
    let services = markup.find("services-content").unwrap();
    let footer = markup.find("site-footer").unwrap();
    assert!(hero < value);
    assert!(value < services);
    assert!(services < footer);
}

#[wasm_bindgen_test]
async fn one_h1_and_no_skipped_heading_levels() {
    let host = mount_home();
    settle().await;

    assert_eq!(host.query_selector_all("h1").unwrap().length(), 1);

    let headings = host.query_selector_all("h1, h2, h3, h4, h5, h6").unwrap();
    let mut previous = 0;
    for index in 0..headings.length() {
        let heading: Element = headings.get(index).unwrap().unchecked_into();
        let level: u32 = heading.tag_name()[1..].parse().unwrap();
        if previous != 0 {
            assert!(
                level <= previous + 1,
                "heading h{level} follows h{previous}"
            );
        }
        previous = level;
    }
}

#[wasm_bindgen_test]
async fn home_sets_the_document_title() {
    let _host = mount_home();
    settle().await;

    assert_eq!(document().title(), config::PAGE_TITLE);
}

#[wasm_bindgen_test]
async fn hero_headline_highlights_ai_engineering() {
    let host = mount_home();
    settle().await;

    let headline = query(&host, ".hero h1");
    let headline_text = headline.text_content().unwrap_or_default();
    assert!(headline_text.contains("Expert"));
    assert!(headline_text.contains("Consulting"));
    assert_eq!(
        query(&host, ".hero h1 .text-gradient")
            .text_content()
            .unwrap_or_default(),
        "AI Engineering"
    );
}

#[wasm_bindgen_test]
async fn hero_cta_reveals_the_signup_form() {
    let host = mount_home();
    settle().await;

    assert!(host.query_selector(".hero .email-signup").unwrap().is_none());
    assert!(host.query_selector(".hero-prompt").unwrap().is_some());

    click(&query(&host, ".hero-cta"));
    settle().await;

    assert!(host
        .query_selector(".hero-signup .email-signup")
        .unwrap()
        .is_some());
    assert!(host.query_selector(".hero-prompt").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn learn_more_points_at_the_services_section() {
    let host = mount_home();
    settle().await;

    assert_eq!(
        query(&host, ".hero-secondary").get_attribute("href"),
        Some("#services".to_string())
    );
    assert!(host.query_selector("section#services").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn value_proposition_shows_stats_and_technologies() {
    let host = mount_home();
    settle().await;

    let body = text(&query(&host, ".value-proposition"));
    assert!(body.contains("Why Choose Our AI Engineering Expertise?"));
    assert!(body.contains("5+"));
    assert!(body.contains("100+"));
    assert!(body.contains("24/7"));
    assert_eq!(host.query_selector_all(".tech-tag").unwrap().length(), 8);
    assert_eq!(host.query_selector_all(".benefit").unwrap().length(), 4);
}

#[wasm_bindgen_test]
async fn services_lists_four_offerings_with_features() {
    let host = mount_home();
    settle().await;

    assert_eq!(host.query_selector_all(".service-card").unwrap().length(), 4);
    let body = text(&query(&host, "#services"));
    assert!(body.contains("AI Strategy & Consulting"));
    assert!(body.contains("Custom AI Development"));
    assert!(body.contains("AI Integration & Deployment"));
    assert!(body.contains("MLOps & Maintenance"));
    assert!(body.contains("AI readiness assessment"));
    assert!(body.contains("Our Proven AI Development Process"));
    assert_eq!(host.query_selector_all(".process-step").unwrap().length(), 4);
}

#[wasm_bindgen_test]
async fn services_cta_swaps_the_button_for_the_signup_form() {
    let host = mount_home();
    settle().await;

    assert!(host
        .query_selector(".services-cta .email-signup")
        .unwrap()
        .is_none());

    click(&query(&host, ".services-cta-button"));
    settle().await;

    assert!(host
        .query_selector(".services-cta-form .email-signup")
        .unwrap()
        .is_some());
    assert!(host
        .query_selector(".services-cta-button")
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
async fn footer_repeats_the_service_catalog() {
    let host = mount_home();
    settle().await;

    let footer = text(&query(&host, ".site-footer"));
    assert!(footer.contains(config::SITE_NAME));
    assert!(footer.contains("AI Strategy & Consulting"));
    assert!(footer.contains("Custom AI Development"));
    assert!(footer.contains("AI Integration & Deployment"));
    assert!(footer.contains("MLOps & Maintenance"));
    assert!(footer.contains("© 2024"));
    assert!(footer.contains("Get in touch for a consultation"));
}

// Drives the real page end to end, simulated backend delay included.
#[wasm_bindgen_test]
async fn the_shipped_form_submits_through_the_simulated_backend() {
    let host = mount_home();
    settle().await;

    click(&query(&host, ".hero-cta"));
    settle().await;

    let email: HtmlInputElement = query(&host, "#signup-email").unchecked_into();
    email.set_value("user@example.com");
    let init = InputEventInit::new();
    init.set_bubbles(true);
    let event = InputEvent::new_with_event_init_dict("input", &init).unwrap();
    email.dispatch_event(&event).unwrap();

    click(&query(&host, "button[type=submit]"));
    settle().await;
    assert!(text(&host).contains("Submitting..."));

    TimeoutFuture::new(config::SIMULATED_DELIVERY_MS + 200).await;
    assert!(text(&host).contains("Thank you!"));
}
