//! End-to-end behaviour of the explainer stepper and page navigation.

use std::cell::{Cell, RefCell};

use dnavault_core::{
    ContentItem, Navigation, ScrollHost, Section, StepId, StepRegistry, Stepper, navigate,
};
use pretty_assertions::assert_eq;

fn id(n: u32) -> StepId {
    StepId::new(n).unwrap()
}

fn active_flags(stepper: &Stepper) -> Vec<bool> {
    stepper.indicators().iter().map(|i| i.active).collect()
}

fn connector_flags(stepper: &Stepper) -> Vec<bool> {
    stepper
        .indicators()
        .iter()
        .filter_map(|i| i.connector)
        .collect()
}

#[test]
fn selecting_step_three_end_to_end() {
    let registry = StepRegistry::builtin().unwrap();
    let mut stepper = Stepper::new(&registry);

    stepper.select(id(3)).unwrap();

    let step = stepper.current_step(&registry).unwrap();
    assert_eq!(step.title.as_deref(), Some("Decryption & Verification"));
    assert_eq!(
        step.content,
        vec![
            ContentItem::text(
                "Kyber is used to recover the AES key. The encrypted blocks are decrypted."
            ),
            ContentItem::text(
                "The original DNA sequence is reconstructed, ensuring data integrity and privacy."
            ),
        ]
    );
    assert_eq!(active_flags(&stepper), vec![true, true, true, false]);
    assert_eq!(connector_flags(&stepper), vec![true, true, false]);
}

#[test]
fn panel_always_matches_selection() {
    let registry = StepRegistry::builtin().unwrap();
    let mut stepper = Stepper::new(&registry);

    for step in &registry {
        stepper.select(step.id).unwrap();
        assert_eq!(stepper.current_step(&registry), Some(step));
    }
}

#[test]
fn indicator_rules_hold_after_any_selection_order() {
    let registry = StepRegistry::builtin().unwrap();
    let mut stepper = Stepper::new(&registry);
    let order = [4, 1, 3, 3, 2, 4, 1];

    for n in order {
        stepper.select(id(n)).unwrap();
        let current = stepper.current();
        for indicator in stepper.indicators() {
            assert_eq!(indicator.active, current >= indicator.id);
            if let Some(connector) = indicator.connector {
                assert_eq!(connector, current > indicator.id);
            }
        }
    }
}

#[test]
fn initial_state_before_interaction() {
    let registry = StepRegistry::builtin().unwrap();
    let stepper = Stepper::new(&registry);

    assert_eq!(stepper.current(), id(1));
    assert_eq!(active_flags(&stepper), vec![true, false, false, false]);
    assert_eq!(connector_flags(&stepper), vec![false, false, false]);
}

#[test]
fn repeated_selection_is_idempotent() {
    let registry = StepRegistry::builtin().unwrap();
    let mut stepper = Stepper::new(&registry);

    stepper.select(id(2)).unwrap();
    let before = stepper;
    assert_eq!(stepper.select(id(2)), Ok(false));
    assert_eq!(stepper, before);
}

struct RecordingPage {
    present: Vec<&'static str>,
    scrolls: Cell<usize>,
    last: RefCell<Option<String>>,
}

impl ScrollHost for RecordingPage {
    type Target = &'static str;

    fn find(&self, anchor: &str) -> Option<&'static str> {
        self.present.iter().copied().find(|id| *id == anchor)
    }

    fn smooth_scroll(&self, target: &&'static str) {
        self.scrolls.set(self.scrolls.get() + 1);
        *self.last.borrow_mut() = Some(target.to_string());
    }
}

#[test]
fn navigation_to_missing_anchor_leaves_stepper_alone() {
    let registry = StepRegistry::builtin().unwrap();
    let mut stepper = Stepper::new(&registry);
    stepper.select(id(2)).unwrap();

    let page = RecordingPage {
        present: vec!["home", "about-us"],
        scrolls: Cell::new(0),
        last: RefCell::new(None),
    };

    assert_eq!(navigate(&page, "how-we-did-it"), Navigation::MissingTarget);
    assert_eq!(page.scrolls.get(), 0);
    assert_eq!(stepper.current(), id(2));

    assert_eq!(
        navigate(&page, Section::AboutUs.anchor()),
        Navigation::Scrolled
    );
    assert_eq!(page.scrolls.get(), 1);
    assert_eq!(page.last.borrow().as_deref(), Some("about-us"));
}
