//! Process-wide panic hook.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::PanicHookInfo;
use std::sync::{Arc, Condvar, Mutex, PoisonError};

use debuget_core::models::ErrorDescriptor;
use debuget_core::traits::IStackResolver;
use debuget_report::Reporter;

/// Kind-name given to descriptors built from panics.
pub const PANIC_ERROR_NAME: &str = "Panic";

/// Exit status used by [`PanicPolicy::Exit`].
pub const PANIC_EXIT_CODE: i32 = 1;

/// What happens after a panic has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanicPolicy {
    /// Terminate the process with status 1.
    #[default]
    Exit,
    /// Return from the hook and let unwinding continue.
    Continue,
}

const REPORT_THREAD_NAME: &str = "debuget-panic-report";

/// Admits one panic report at a time and lets later panics wait for it.
struct InFlight {
    busy: Mutex<bool>,
    idle: Condvar,
}

impl InFlight {
    const fn new() -> Self {
        Self {
            busy: Mutex::new(false),
            idle: Condvar::new(),
        }
    }

    /// Claim the slot. False when a report is already in flight.
    fn try_begin(&self) -> bool {
        let mut busy = self.busy.lock().unwrap_or_else(PoisonError::into_inner);
        !std::mem::replace(&mut *busy, true)
    }

    fn finish(&self) {
        let mut busy = self.busy.lock().unwrap_or_else(PoisonError::into_inner);
        *busy = false;
        self.idle.notify_all();
    }

    /// Block until no report is in flight.
    fn wait_idle(&self) {
        let busy = self.busy.lock().unwrap_or_else(PoisonError::into_inner);
        let _guard = self
            .idle
            .wait_while(busy, |busy| *busy)
            .unwrap_or_else(PoisonError::into_inner);
    }
}

static IN_FLIGHT: InFlight = InFlight::new();

fn payload_message(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Descriptor for a panic: `Panic` kind-name, payload as message, and a stack
/// whose second line is the panic location.
///
/// A backtrace is appended when `RUST_BACKTRACE` enables one.
pub fn panic_descriptor(info: &PanicHookInfo<'_>) -> ErrorDescriptor {
    let descriptor = ErrorDescriptor::new()
        .named(PANIC_ERROR_NAME)
        .with_message(payload_message(info));

    let mut stack = descriptor.error_line();
    if let Some(location) = info.location() {
        stack.push_str(&format!(
            "\n    at {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    let backtrace = Backtrace::capture();
    if backtrace.status() == BacktraceStatus::Captured {
        stack.push_str(&format!("\n{backtrace}"));
    }
    descriptor.with_stack(stack)
}

/// Report `descriptor` on a dedicated thread with its own runtime, so the hook
/// works whether or not the panicking thread is inside a runtime.
fn report_blocking<R>(reporter: &Arc<Reporter<R>>, descriptor: ErrorDescriptor)
where
    R: IStackResolver + 'static,
{
    let reporter = Arc::clone(reporter);
    let fallback = descriptor.fallback_text();
    let worker = std::thread::Builder::new()
        .name(REPORT_THREAD_NAME.to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!(error = %e, "panic report runtime failed to start");
                    return false;
                }
            };
            runtime.block_on(reporter.report(&descriptor));
            true
        });

    let reported = match worker {
        Ok(handle) => handle.join().unwrap_or(false),
        Err(e) => {
            tracing::error!(error = %e, "panic report thread failed to spawn");
            false
        }
    };
    if !reported {
        eprintln!("\n{fallback}");
    }
}

/// Replace the process panic hook with one that reports through `reporter`.
///
/// Only one panic is reported at a time. A panic raised while a report is in
/// flight is written unformatted to standard error, then waits for that
/// report to be written before applying `policy`. A panic inside the report
/// itself is left to the reporting panic, which prints the fallback text.
pub fn install_panic_hook<R>(reporter: Arc<Reporter<R>>, policy: PanicPolicy)
where
    R: IStackResolver + 'static,
{
    std::panic::set_hook(Box::new(move |info| {
        if std::thread::current().name() == Some(REPORT_THREAD_NAME) {
            return;
        }
        let descriptor = panic_descriptor(info);

        if IN_FLIGHT.try_begin() {
            report_blocking(&reporter, descriptor);
            IN_FLIGHT.finish();
        } else {
            eprintln!("\n{}", descriptor.fallback_text());
            IN_FLIGHT.wait_idle();
        }

        if policy == PanicPolicy::Exit {
            std::process::exit(PANIC_EXIT_CODE);
        }
    }));
    tracing::debug!(?policy, "panic hook installed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[test]
    fn only_one_report_is_admitted() {
        let slot = InFlight::new();
        assert!(slot.try_begin());
        assert!(!slot.try_begin());
        slot.finish();
        assert!(slot.try_begin());
    }

    #[test]
    fn later_panics_wait_for_the_report_in_flight() {
        let slot = Arc::new(InFlight::new());
        let finished = Arc::new(AtomicBool::new(false));
        assert!(slot.try_begin());

        let waiter = {
            let slot = Arc::clone(&slot);
            let finished = Arc::clone(&finished);
            std::thread::spawn(move || {
                slot.wait_idle();
                finished.load(Ordering::SeqCst)
            })
        };

        std::thread::sleep(Duration::from_millis(50));
        finished.store(true, Ordering::SeqCst);
        slot.finish();

        assert!(waiter.join().unwrap());
    }

    #[test]
    fn wait_idle_returns_at_once_when_nothing_is_in_flight() {
        InFlight::new().wait_idle();
    }
}
