use super::{MENU_ICON, REPO_URL};
use crate::viewport::scroll_to;
use dnavault_core::Section;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let section_links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to(section);
                        set_menu_open.set(false);
                    }
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar-left">
                <div class=move || if menu_open.get() { "menu-container open" } else { "menu-container" }>
                    <button
                        class="menu-toggle"
                        aria-label="Menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        <img src=MENU_ICON alt="Menu" class="menu-icon-img" />
                    </button>
                    <div class="dropdown-menu">
                        {section_links}
                        <a href=REPO_URL target="_blank" rel="noopener noreferrer">
                            "GitHub Repo"
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
