//! navstack core
//!
//! A single-active-stack navigation controller. Destinations are compared by
//! kind only, so a product detail screen for item 1 and one for item 2 are the
//! same screen as far as the stack is concerned.
//!
//! ```rust,ignore
//! use navstack_core::{NavController, NavOptions, Screen, ScreenKind};
//!
//! let mut nav = NavController::<Screen>::new();
//! nav.navigate_to(Screen::Home);
//! nav.navigate_to(Screen::ProductList);
//! nav.navigate_to(Screen::product(42));
//! nav.navigate_with(Screen::Settings { section: None },
//!     NavOptions::new().pop_up_to(ScreenKind::Home));
//! assert_eq!(nav.describe(), "1:Home > 2:Settings");
//! ```
//!
//! # Modules
//!
//! - [`identity`]: `Destination` / `DestinationKind` traits and the kind equivalence
//! - [`controller`]: `NavController`, the stack and its operations
//! - [`reactive`]: observable cell views read the stack from
//! - [`observer`]: synchronous change callbacks
//! - [`screens`]: the showcase destination set
//! - [`config`], [`errors`]: ambient configuration and error types

#![forbid(unsafe_code)]

pub mod change;
pub mod config;
pub mod controller;
pub mod errors;
pub mod identity;
pub mod observer;
pub mod options;
pub mod reactive;
pub mod screens;

pub use change::{NavOperation, StackChange};
pub use config::NavConfig;
pub use controller::{NavAction, NavController};
pub use errors::{ErrorCategory, NavError, Result};
pub use identity::{kind_of, same_kind, Destination, DestinationKind};
pub use observer::{ObserverId, ObserverRegistry, StackObserver};
pub use options::{NavOptions, PopUpTo};
pub use reactive::{Observable, Subscription};
pub use screens::{Screen, ScreenKind};
