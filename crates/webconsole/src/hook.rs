//! Process-wide panic reporting into the console.
//!
//! Panics are the host's uncaught errors. The installed hook reports them
//! through the console facade, then chains to whichever hook was registered
//! before, so default stderr reporting keeps working.

use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use console::Console;
use parking_lot::Mutex;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

// The hook is process-global; tests that install or restore one hold this
// lock so their install/panic/restore windows never interleave.
#[cfg(test)]
pub(crate) static HOOK_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Keeps the displaced hook so [`restore`] can reinstate it.
pub struct HookGuard {
    previous: Arc<PanicHook>,
}

/// Install a hook that reports panics as uncaught console errors.
pub fn install(console: Arc<Mutex<Console>>) -> HookGuard {
    let previous: Arc<PanicHook> = Arc::new(panic::take_hook());
    let chained = previous.clone();

    panic::set_hook(Box::new(move |info| {
        report(&console, info);
        (*chained)(info);
    }));

    HookGuard { previous }
}

/// Remove the reporting hook and reinstate the displaced one.
pub fn restore(guard: HookGuard) {
    // Dropping our installed closure releases its clone of the previous
    // hook; only then can the original be unwrapped and re-registered.
    drop(panic::take_hook());
    if let Ok(previous) = Arc::try_unwrap(guard.previous) {
        panic::set_hook(previous);
    }
}

fn report(console: &Arc<Mutex<Console>>, info: &PanicHookInfo<'_>) {
    let message = payload_message(info);
    let location = info.location();
    let source = location.map(|l| l.file());
    let line = location.map(|l| l.line()).unwrap_or(0);
    let column = location.map(|l| l.column()).unwrap_or(0);

    // A panic raised while the console lock is held must not deadlock the
    // process; skip the report instead.
    if let Some(mut console) = console.try_lock() {
        console.report_uncaught(&message, source, line, column, None);
    }
}

fn payload_message(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Color;
    use console::MemorySurface;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_panic_reports_message_and_location() {
        let _lock = HOOK_TEST_LOCK.lock();
        let shared = MemorySurface::shared();
        let mut console = Console::new();
        console.activate(Box::new(shared.clone()));
        let console = Arc::new(Mutex::new(console));

        let guard = install(console.clone());
        let result = std::panic::catch_unwind(|| panic!("boom"));
        restore(guard);

        assert!(result.is_err());
        let lines = shared.lock().lines().to_vec();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].0.starts_with("boom at hook.rs:"), "got {:?}", lines[0].0);
        assert_eq!(lines[0].1, Color::rgb(0x91, 0x00, 0x00));
    }

    #[test]
    fn test_restore_reinstates_displaced_hook() {
        let _lock = HOOK_TEST_LOCK.lock();
        static DISPLACED_HITS: AtomicUsize = AtomicUsize::new(0);

        let displaced = panic::take_hook();
        panic::set_hook(Box::new(|_| {
            DISPLACED_HITS.fetch_add(1, Ordering::SeqCst);
        }));

        let shared = MemorySurface::shared();
        let mut console = Console::new();
        console.activate(Box::new(shared.clone()));
        let guard = install(Arc::new(Mutex::new(console)));
        restore(guard);

        let result = std::panic::catch_unwind(|| panic!("unreported"));
        assert!(result.is_err());
        assert_eq!(DISPLACED_HITS.load(Ordering::SeqCst), 1);
        assert!(shared.lock().texts().is_empty());

        drop(panic::take_hook());
        panic::set_hook(displaced);
    }
}
