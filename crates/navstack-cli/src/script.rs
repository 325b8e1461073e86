//! Navigation scripts
//!
//! A script is a list of steps, each naming one controller operation. Scripts
//! are read from TOML (`[[steps]]` tables) or JSON (`{"steps": [...]}`).
//!
//! ```toml
//! [[steps]]
//! action = "push_all"
//! screens = ["Home", "ProductList", { screen = "ProductDetail", id = 42 }]
//!
//! [[steps]]
//! action = "push"
//! screen = "Settings"
//! pop_up_to = "Home"
//! ```

use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use navstack_core::{NavAction, NavError, NavOptions, PopUpTo, Screen, ScreenKind};

/// A screen reference: either a bare kind name or a table with payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenRef {
    /// Kind name only, default payload
    Name(String),
    /// Kind name with payload
    Detailed {
        /// Kind name
        screen: String,
        /// Product id for `ProductDetail`
        #[serde(default)]
        id: Option<u64>,
        /// Section for `Settings`
        #[serde(default)]
        section: Option<String>,
    },
}

impl ScreenRef {
    /// Build the destination this reference names.
    pub fn to_screen(&self) -> Result<Screen, NavError> {
        match self {
            ScreenRef::Name(name) => Ok(Screen::from_kind(name.parse()?)),
            ScreenRef::Detailed {
                screen,
                id,
                section,
            } => build_screen(screen, *id, section.clone()),
        }
    }
}

fn build_screen(
    name: &str,
    id: Option<u64>,
    section: Option<String>,
) -> Result<Screen, NavError> {
    let kind: ScreenKind = name.parse()?;
    match (kind, id, section) {
        (ScreenKind::ProductDetail, Some(product_id), None) => {
            Ok(Screen::ProductDetail { product_id })
        }
        (ScreenKind::Settings, None, section @ Some(_)) => Ok(Screen::Settings { section }),
        (kind, None, None) => Ok(Screen::from_kind(kind)),
        (kind, _, _) => Err(NavError::invalid(format!(
            "{kind} does not take the given payload"
        ))),
    }
}

/// One script step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Navigate to a single screen
    Push {
        /// Kind name
        screen: String,
        /// Product id for `ProductDetail`
        #[serde(default)]
        id: Option<u64>,
        /// Section for `Settings`
        #[serde(default)]
        section: Option<String>,
        /// Skip if the top has the same kind
        #[serde(default)]
        single_top: bool,
        /// Pop up to this kind first
        #[serde(default)]
        pop_up_to: Option<String>,
        /// Also pop the matched entry
        #[serde(default)]
        inclusive: bool,
    },
    /// Append several screens
    PushAll {
        /// Screens in push order
        screens: Vec<ScreenRef>,
        /// Pop up to this kind first
        #[serde(default)]
        pop_up_to: Option<String>,
        /// Also pop the matched entry
        #[serde(default)]
        inclusive: bool,
    },
    /// Remove the top entry
    Pop,
    /// Pop back to the topmost entry of a kind
    PopUpTo {
        /// Kind name
        screen: String,
        /// Also pop the matched entry
        #[serde(default)]
        inclusive: bool,
    },
    /// Clear the stack
    Root,
}

fn pop_target(
    kind: Option<&str>,
    inclusive: bool,
) -> Result<Option<PopUpTo<ScreenKind>>, NavError> {
    let Some(name) = kind else {
        return Ok(None);
    };
    Ok(Some(PopUpTo {
        kind: name.parse()?,
        inclusive,
    }))
}

impl Step {
    /// Convert into a controller action.
    pub fn to_action(&self) -> Result<NavAction<Screen>, NavError> {
        let action = match self {
            Step::Push {
                screen,
                id,
                section,
                single_top,
                pop_up_to,
                inclusive,
            } => NavAction::Navigate {
                destination: build_screen(screen, *id, section.clone())?,
                options: NavOptions {
                    launch_single_top: *single_top,
                    pop_up_to: pop_target(pop_up_to.as_deref(), *inclusive)?,
                },
            },
            Step::PushAll {
                screens,
                pop_up_to,
                inclusive,
            } => NavAction::NavigateAll {
                destinations: screens
                    .iter()
                    .map(ScreenRef::to_screen)
                    .collect::<Result<_, _>>()?,
                pop_up_to: pop_target(pop_up_to.as_deref(), *inclusive)?,
            },
            Step::Pop => NavAction::PopBack,
            Step::PopUpTo { screen, inclusive } => NavAction::PopUpTo(PopUpTo {
                kind: screen.parse()?,
                inclusive: *inclusive,
            }),
            Step::Root => NavAction::PopToRoot,
        };
        Ok(action)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Push {
                screen,
                single_top,
                pop_up_to,
                inclusive,
                ..
            } => {
                write!(f, "push {screen}")?;
                if *single_top {
                    f.write_str(" single-top")?;
                }
                if let Some(target) = pop_up_to {
                    write!(f, " pop-up-to {target}")?;
                    if *inclusive {
                        f.write_str(" inclusive")?;
                    }
                }
                Ok(())
            }
            Step::PushAll { screens, .. } => write!(f, "push-all ({})", screens.len()),
            Step::Pop => f.write_str("pop"),
            Step::PopUpTo { screen, inclusive } => {
                write!(f, "pop-up-to {screen}")?;
                if *inclusive {
                    f.write_str(" inclusive")?;
                }
                Ok(())
            }
            Step::Root => f.write_str("root"),
        }
    }
}

/// A parsed script
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Steps in execution order
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid TOML script")
    }

    /// Parse a script from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid JSON script")
    }

    /// Load a `.toml` or `.json` script from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&text),
            Some("json") => Self::from_json(&text),
            _ => bail!("Unsupported script format: {}", path.display()),
        }
    }

    /// Convert every step up front, so a bad step fails before any runs.
    pub fn actions(&self) -> Result<Vec<NavAction<Screen>>> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                step.to_action()
                    .with_context(|| format!("Step {} ({step})", index + 1))
            })
            .collect()
    }
}
