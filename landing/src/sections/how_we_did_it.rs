//! "How We Did It" explainer: a clickable stepper bar plus the selected step's content.

use std::sync::Arc;

use dnavault_core::{ContentItem, Section, Step, StepId, StepRegistry, Stepper};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

#[component]
pub fn HowWeDidIt(registry: Option<Arc<StepRegistry>>) -> impl IntoView {
    view! {
        <section class="how-we-did-it" id=Section::HowWeDidIt.anchor()>
            <h2 class="reveal">"How We Did It"</h2>
            {registry.map(|registry| view! { <StepperView registry=registry /> })}
        </section>
    }
}

#[component]
fn StepperView(registry: Arc<StepRegistry>) -> impl IntoView {
    let stepper = RwSignal::new(Stepper::new(&registry));

    let indicators = registry
        .ids()
        .map(|id| view! { <StepIndicator id=id stepper=stepper /> })
        .collect_view();

    // Arrow keys move the selection, and focus follows it
    let on_keydown = move |ev: KeyboardEvent| {
        let handled = match ev.key().as_str() {
            "ArrowRight" => {
                stepper.maybe_update(|s| s.select_next());
                true
            }
            "ArrowLeft" => {
                stepper.maybe_update(|s| s.select_previous());
                true
            }
            _ => false,
        };
        if handled {
            ev.prevent_default();
            focus_indicator(&ev, stepper.with_untracked(|s| s.current()));
        }
    };

    let panel = move || {
        stepper
            .get()
            .current_step(&registry)
            .cloned()
            .map(|step| view! { <StepPanel step=step /> })
    };

    view! {
        <div class="stepper-bar" on:keydown=on_keydown>
            {indicators}
        </div>
        {panel}
    }
}

/// Focus the indicator for `id` inside the bar that received `ev`.
fn focus_indicator(ev: &KeyboardEvent, id: StepId) {
    let Some(bar) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let selector = format!("[data-step=\"{}\"]", id);
    if let Ok(Some(indicator)) = bar.query_selector(&selector) {
        if let Ok(indicator) = indicator.dyn_into::<HtmlElement>() {
            let _ = indicator.focus();
        }
    }
}

fn select_step(stepper: RwSignal<Stepper>, id: StepId) {
    stepper.maybe_update(|s| match s.select(id) {
        Ok(changed) => changed,
        Err(e) => {
            tracing::warn!("Ignoring step selection: {}", e);
            false
        }
    });
}

#[component]
fn StepIndicator(id: StepId, stepper: RwSignal<Stepper>) -> impl IntoView {
    let has_connector = stepper.with_untracked(|s| s.has_connector(id));

    view! {
        <div class="step-wrapper">
            <div
                class=move || indicator_class(stepper.get().is_reached(id))
                role="button"
                data-step=id.get().to_string()
                tabindex=move || indicator_tabindex(stepper.get().current() == id)
                aria-label=format!("Step {}", id)
                aria-current=move || (stepper.get().current() == id).then_some("step")
                on:click=move |_| select_step(stepper, id)
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        select_step(stepper, id);
                    }
                }
            >
                {id.get()}
            </div>
            {has_connector
                .then(|| {
                    view! {
                        <div class=move || connector_class(stepper.get().connector_active(id))></div>
                    }
                })}
        </div>
    }
}

/// Content of one step. Steps without a title render no heading at all.
#[component]
fn StepPanel(step: Step) -> impl IntoView {
    let items = step
        .content
        .into_iter()
        .map(|item| view! { <div>{content_item(item)}</div> })
        .collect_view();

    view! {
        <div class="step-content">
            {step.title.map(|title| view! { <h3>{title}</h3> })}
            {items}
        </div>
    }
}

fn content_item(item: ContentItem) -> AnyView {
    match item {
        ContentItem::Text { text } => text.into_any(),
        ContentItem::Link { label, href } => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="github-button">
                {label}
            </a>
        }
        .into_any(),
    }
}

fn indicator_class(reached: bool) -> &'static str {
    if reached { "step-icon active" } else { "step-icon" }
}

/// Roving tabindex: only the selected indicator is in the tab order.
fn indicator_tabindex(selected: bool) -> &'static str {
    if selected { "0" } else { "-1" }
}

fn connector_class(active: bool) -> &'static str {
    if active { "step-line active" } else { "step-line" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indicator_class_marks_reached_steps() {
        assert_eq!(indicator_class(true), "step-icon active");
        assert_eq!(indicator_class(false), "step-icon");
    }

    #[test]
    fn connector_class_marks_passed_steps() {
        assert_eq!(connector_class(true), "step-line active");
        assert_eq!(connector_class(false), "step-line");
    }

    #[test]
    fn only_selected_indicator_is_tabbable() {
        let registry = StepRegistry::builtin().unwrap();
        let mut stepper = Stepper::new(&registry);
        stepper.select_next();

        let tabindexes: Vec<&str> = registry
            .ids()
            .map(|id| indicator_tabindex(stepper.current() == id))
            .collect();
        assert_eq!(tabindexes, vec!["-1", "0", "-1", "-1"]);
    }

    #[test]
    fn classes_follow_stepper_state() {
        let registry = StepRegistry::builtin().unwrap();
        let mut stepper = Stepper::new(&registry);
        stepper.select(StepId::new(3).unwrap()).unwrap();

        let classes: Vec<&str> = registry
            .ids()
            .map(|id| indicator_class(stepper.is_reached(id)))
            .collect();
        assert_eq!(
            classes,
            vec!["step-icon active", "step-icon active", "step-icon active", "step-icon"]
        );
    }
}
