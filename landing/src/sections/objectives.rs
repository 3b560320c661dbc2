use dnavault_core::Section;
use leptos::prelude::*;

#[component]
pub fn Objectives() -> impl IntoView {
    view! {
        <section class="objectives" id=Section::Objectives.anchor()>
            <h2 class="reveal">"Objective"</h2>
            <div class="objective-content">
                <p class="reveal">
                    "In October 2023, over " <strong>"7 million"</strong> " user profiles from "
                    <strong>"23andMe"</strong>
                    " were exposed in a massive data breach (The Guardian). Less than two years later, the company filed for "
                    <strong>"bankruptcy in March 2025"</strong> " (Reuters)."
                </p>
                <p class="reveal">
                    "As cyberattacks grow more advanced and " <strong>"quantum computing"</strong>
                    " threatens traditional encryption methods, our project responds with a future-ready solution: "
                    "a hybrid cryptographic system that merges the speed of "
                    <strong>"AES (Advanced Encryption Standard)"</strong> " with the resilience of "
                    <strong>"Kyber"</strong> ", a post-quantum encryption scheme."
                </p>
                <p class="reveal">
                    "This platform demonstrates secure, end-to-end DNA sequence encryption "
                    "using quantum-resistant cryptography. Specifically:"
                </p>
                <ul class="reveal">
                    <li>
                        <strong>"AES-128"</strong>
                        " for fast, symmetric encryption of DNA data blocks."
                    </li>
                    <li>
                        <strong>"Kyber"</strong>
                        " for secure post-quantum key exchange."
                    </li>
                </ul>
                <p class="reveal">
                    "Designed for use in " <strong>"bioinformatics"</strong> ", "
                    <strong>"healthcare"</strong> ", and " <strong>"genetic research"</strong>
                    ", where data confidentiality is absolutely critical."
                </p>
            </div>
        </section>
    }
}
