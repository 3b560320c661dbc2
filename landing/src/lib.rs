// DNAVault Landing Page (Leptos 0.8)
// Developed by the DNAVault Team (c)2025

mod logging;
pub mod sections;
pub mod viewport;

use std::sync::Arc;

use dnavault_core::StepRegistry;
use leptos::prelude::*;
use sections::*;

pub use logging::init_logging;

/// Install panic/log hooks and mount the page into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    init_logging();
    tracing::info!("Mounting {} landing page", PROJECT_NAME);
    leptos::mount::mount_to_body(App);
}

/// The whole page: hero, the three content sections and the footer.
#[component]
pub fn App() -> impl IntoView {
    let registry = match StepRegistry::builtin() {
        Ok(registry) => Some(Arc::new(registry)),
        Err(e) => {
            tracing::error!("Failed to load explainer steps: {}", e);
            None
        }
    };

    view! {
        <Hero />
        <main>
            <AboutUs />
            <Objectives />
            <HowWeDidIt registry=registry />
        </main>
        <Footer />
    }
}
