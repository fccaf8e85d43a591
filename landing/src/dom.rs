//! Browser glue with lifetimes tied to the owning component.
//!
//! Window listeners and pending timeouts registered here are released by the
//! reactive owner's `on_cleanup`, so an unmounted section never receives
//! another callback.

use std::time::Duration;

use leptos::ev::EventDescriptor;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Registers a window listener for the lifetime of the current owner.
pub fn scoped_window_listener<E>(event: E, cb: impl Fn(E::EventType) + 'static)
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let name = event.name();
    let handle = window_event_listener(event, cb);
    tracing::trace!(event = %name, "window listener attached");
    on_cleanup(move || {
        tracing::trace!(event = %name, "window listener removed");
        handle.remove();
    });
}

/// Slot for at most one pending one-shot timeout.
///
/// Scheduling replaces whatever was pending. Disposal of the owner that
/// created the slot clears the pending timeout.
#[derive(Clone, Copy)]
pub struct PendingTimeout(StoredValue<Option<TimeoutHandle>>);

impl PendingTimeout {
    pub fn new() -> Self {
        let slot = StoredValue::new(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(Some(handle)) = slot.try_update_value(Option::take) {
                handle.clear();
            }
        });
        Self(slot)
    }

    pub fn schedule(&self, delay: Duration, cb: impl FnOnce() + 'static) {
        self.cancel();
        let slot = self.0;
        let fire = move || {
            slot.try_update_value(|pending| *pending = None);
            cb();
        };
        match set_timeout_with_handle(fire, delay) {
            Ok(handle) => self.0.set_value(Some(handle)),
            Err(e) => tracing::warn!("set_timeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.0.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

impl Default for PendingTimeout {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyed one-shot timeouts, any number pending at once.
///
/// A key fires at most once; rescheduling or cancelling it clears the old
/// timeout. Disposal of the owner clears everything still pending.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutSet(StoredValue<Vec<(u64, TimeoutHandle)>>);

impl TimeoutSet {
    pub fn new() -> Self {
        let pending = StoredValue::new(Vec::<(u64, TimeoutHandle)>::new());
        on_cleanup(move || {
            if let Some(handles) = pending.try_update_value(std::mem::take) {
                tracing::trace!(count = handles.len(), "clearing pending timeouts");
                for (_, handle) in handles {
                    handle.clear();
                }
            }
        });
        Self(pending)
    }

    pub fn schedule(&self, key: u64, delay: Duration, cb: impl FnOnce() + 'static) {
        self.cancel(key);
        let pending = self.0;
        let fire = move || {
            pending.try_update_value(|handles| handles.retain(|(k, _)| *k != key));
            cb();
        };
        match set_timeout_with_handle(fire, delay) {
            Ok(handle) => self.0.update_value(|handles| handles.push((key, handle))),
            Err(e) => tracing::warn!(key, "set_timeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self, key: u64) {
        let removed = self.0.try_update_value(|handles| {
            let (gone, kept): (Vec<_>, Vec<_>) =
                std::mem::take(handles).into_iter().partition(|(k, _)| *k == key);
            *handles = kept;
            gone
        });
        for (_, handle) in removed.into_iter().flatten() {
            handle.clear();
        }
    }

    /// Timeouts scheduled and not yet fired or cancelled.
    pub fn len(&self) -> usize {
        self.0.try_with_value(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TimeoutSet {
    fn default() -> Self {
        Self::new()
    }
}
