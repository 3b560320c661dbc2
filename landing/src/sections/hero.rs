use super::{HERO_POSTER, HERO_VIDEO, Nav};
use crate::viewport::scroll_to;
use dnavault_core::Section;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="video-container" id=Section::Home.anchor()>
            <video
                src=HERO_VIDEO
                poster=HERO_POSTER
                loop=true
                autoplay=true
                muted=true
                prop:muted=true
                playsinline=true
            ></video>
            <div class="content-overlay">
                <Nav />
                <div class="home-title">
                    "DNA"
                    <br />
                    "ENCRYPTION"
                </div>
                <button
                    class="scroll-btn"
                    on:click=move |_| {
                        scroll_to(Section::AboutUs);
                    }
                >
                    "Learn More ↓"
                </button>
            </div>
        </div>
    }
}
