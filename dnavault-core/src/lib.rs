//! # dnavault-core
//!
//! DOM-free building blocks for the DNAVault landing page.
//!
//! The landing page is a single scrolling document. Its only runtime state is
//! the "How We Did It" stepper; everything else is static markup. This crate
//! keeps that state and the data it walks over independent of any renderer, so
//! the Leptos app in `landing/` (or a TUI, or a static prerender) can drive the
//! same logic.
//!
//! ## Quick Start
//!
//! ```rust
//! use dnavault_core::{StepId, StepRegistry, Stepper};
//!
//! let registry = StepRegistry::builtin().expect("embedded steps are valid");
//! let mut stepper = Stepper::new(&registry);
//!
//! let third = StepId::new(3).unwrap();
//! assert_eq!(stepper.select(third), Ok(true));
//!
//! let step = stepper.current_step(&registry).unwrap();
//! assert_eq!(step.title.as_deref(), Some("Decryption & Verification"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Step records and their content items
//! - [`registry`] - The immutable, validated list of steps
//! - [`stepper`] - Current-step state machine and indicator rules
//! - [`anchors`] - Page sections and smooth-scroll navigation
//! - [`error`] - Error types
//!
//! ---
//!
//! Developed by the DNAVault Team (c)2025

#![warn(missing_docs)]

pub mod anchors;
pub mod content;
pub mod error;
pub mod registry;
pub mod stepper;

pub use anchors::{Navigation, ScrollHost, Section, navigate};
pub use content::{ContentItem, Step, StepId};
pub use error::{RegistryError, StepperError};
pub use registry::StepRegistry;
pub use stepper::{Indicator, Stepper};
