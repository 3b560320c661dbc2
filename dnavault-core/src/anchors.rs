//! Page sections and same-page smooth-scroll navigation.
//!
//! Every section of the landing page carries a stable anchor id. External
//! links and the nav menu reference these ids, so they must not change.
//! Navigation goes through a [`ScrollHost`] so the lookup-then-scroll logic
//! can be exercised without a browser.

/// A named region of the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero banner at the top of the page
    Home,
    /// Team cards
    AboutUs,
    /// Project motivation
    Objectives,
    /// Step-by-step explainer
    HowWeDidIt,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::AboutUs,
        Section::Objectives,
        Section::HowWeDidIt,
    ];

    /// Element id used as the scroll target
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::AboutUs => "about-us",
            Section::Objectives => "objectives",
            Section::HowWeDidIt => "how-we-did-it",
        }
    }

    /// Fragment link, e.g. `#about-us`
    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::AboutUs => "#about-us",
            Section::Objectives => "#objectives",
            Section::HowWeDidIt => "#how-we-did-it",
        }
    }

    /// Nav menu label
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::AboutUs => "About Us",
            Section::Objectives => "Objectives",
            Section::HowWeDidIt => "How We Did It",
        }
    }

    /// Parse an anchor id. A leading `#` is accepted.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Something that can locate anchored elements and scroll them into view.
pub trait ScrollHost {
    /// Handle to a located element
    type Target;

    /// Find the element carrying `anchor` as its id
    fn find(&self, anchor: &str) -> Option<Self::Target>;

    /// Bring `target` into view with an animated scroll. Fire-and-forget.
    fn smooth_scroll(&self, target: &Self::Target);
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The target was found and a smooth scroll was requested
    Scrolled,
    /// No element carries the requested id; nothing happened
    MissingTarget,
}

/// Smooth-scroll to the element with id `anchor`.
///
/// A missing target is not an error: the call does nothing and reports
/// [`Navigation::MissingTarget`].
pub fn navigate<H: ScrollHost>(host: &H, anchor: &str) -> Navigation {
    let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
    match host.find(anchor) {
        Some(target) => {
            host.smooth_scroll(&target);
            tracing::debug!("Scrolling to #{}", anchor);
            Navigation::Scrolled
        }
        None => {
            tracing::debug!("No element with id #{}, ignoring navigation", anchor);
            Navigation::MissingTarget
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollHost for FakePage {
        type Target = String;

        fn find(&self, anchor: &str) -> Option<String> {
            self.ids.iter().find(|id| **id == anchor).map(|id| id.to_string())
        }

        fn smooth_scroll(&self, target: &String) {
            self.scrolled.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn anchors_are_stable() {
        let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["home", "about-us", "objectives", "how-we-did-it"]);
    }

    #[test]
    fn href_is_fragment_of_anchor() {
        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.anchor()));
        }
    }

    #[test]
    fn from_anchor_accepts_hash() {
        assert_eq!(Section::from_anchor("#objectives"), Some(Section::Objectives));
        assert_eq!(Section::from_anchor("about-us"), Some(Section::AboutUs));
        assert_eq!(Section::from_anchor("contact"), None);
    }

    #[test]
    fn navigate_scrolls_existing_target() {
        let page = FakePage {
            ids: vec!["about-us"],
            scrolled: RefCell::new(Vec::new()),
        };
        assert_eq!(navigate(&page, "#about-us"), Navigation::Scrolled);
        assert_eq!(*page.scrolled.borrow(), vec!["about-us".to_string()]);
    }

    #[test]
    fn navigate_missing_target_is_noop() {
        let page = FakePage {
            ids: vec![],
            scrolled: RefCell::new(Vec::new()),
        };
        assert_eq!(navigate(&page, "objectives"), Navigation::MissingTarget);
        assert!(page.scrolled.borrow().is_empty());
    }
}
