use super::{PROJECT_NAME, REPO_URL};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <span class="footer-title">{PROJECT_NAME}</span>
                <div class="footer-links">
                    <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="footer-link">
                        "Check out the code"
                    </a>
                </div>
                <p class="footer-copyright">
                    "Quantum-resistant DNA sequence encryption with AES-128 and Kyber"
                </p>
            </div>
        </footer>
    }
}
