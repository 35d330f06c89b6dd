// src/form/hooks.rs
// Notifications to the embedding screen. A hook that errors or panics is logged
// and the session carries on.

use color_eyre::Result;
use std::cell::Cell;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::log_error;
use super::FieldValue;

pub trait FormHooks {
    fn field_changed(&mut self, _name: &str, _value: &FieldValue) -> Result<()> {
        Ok(())
    }

    fn confirmed(&mut self, _values: &HashMap<String, FieldValue>) -> Result<()> {
        Ok(())
    }

    fn cancelled(&mut self) -> Result<()> {
        Ok(())
    }

    fn validation_failed(&mut self, _messages: &[String]) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl FormHooks for NoHooks {}

thread_local! {
    // Set while a hook runs on this thread; the panic report goes to the log instead
    static SILENCED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap whatever panic hook is installed (color-eyre's in the binary) so panics
/// inside a guarded hook do not print over the terminal UI.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !SILENCED.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Run one hook call, swallowing both `Err` returns and panics.
pub(super) fn guarded<F>(hook: &str, call: F)
where
    F: FnOnce() -> Result<()>,
{
    install_quiet_hook();
    let outer = SILENCED.with(|s| s.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(call));
    SILENCED.with(|s| s.set(outer));

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log_error!("{} hook failed: {}", hook, e),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log_error!("{} hook panicked: {}", hook, reason);
        }
    }
}
