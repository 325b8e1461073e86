//! Replays a script against a fresh controller, printing a trace line per step.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tracing::info;

use navstack_core::{NavConfig, NavController, NavOperation, Screen, ScreenKind, StackChange};

use crate::script::Script;

/// Shown in place of an empty `describe()`
const EMPTY_STACK: &str = "(root)";

/// Run every step of `script` and write the trace to `out`.
///
/// All steps are converted before the first one runs. Returns the controller
/// in its final state.
pub fn replay<W: Write>(
    script: &Script,
    config: NavConfig,
    out: &mut W,
) -> Result<NavController<Screen>> {
    let actions = script.actions()?;
    let mut nav = NavController::with_config(config);

    let last_change: Arc<Mutex<Option<NavOperation<ScreenKind>>>> = Arc::new(Mutex::new(None));
    let sink = last_change.clone();
    nav.add_observer(Arc::new(move |change: &StackChange<Screen>| {
        *sink.lock() = Some(change.operation);
    }));

    for (index, (step, action)) in script.steps.iter().zip(actions).enumerate() {
        nav.apply(action);

        let operation = last_change
            .lock()
            .take()
            .unwrap_or(NavOperation::Unchanged);
        writeln!(
            out,
            "{}: {step} [{operation}] => {}",
            index + 1,
            display_stack(&nav)
        )?;
    }

    writeln!(out, "current: {}", nav.current_kind())?;
    info!(
        steps = script.steps.len(),
        depth = nav.len(),
        "replay finished"
    );
    Ok(nav)
}

fn display_stack(nav: &NavController<Screen>) -> String {
    if nav.is_empty() {
        EMPTY_STACK.to_string()
    } else {
        nav.describe()
    }
}

/// Write the showcase kinds, one per line.
pub fn list_kinds<W: Write>(out: &mut W) -> Result<()> {
    for kind in ScreenKind::ALL {
        let note = if kind == ScreenKind::Root {
            " (reserved)"
        } else {
            ""
        };
        writeln!(out, "{kind}{note}")?;
    }
    Ok(())
}
