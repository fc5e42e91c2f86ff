//! Reporting for errors that end the process.

use std::convert::Infallible;
use std::future::Future;

use debuget_core::models::ErrorDescriptor;
use debuget_core::traits::IStackResolver;
use debuget_report::Reporter;

use crate::panic::PANIC_EXIT_CODE;

/// Adapt any error and report it.
///
/// The "where it broke" line is the caller of `report_error`. The descriptor
/// is built when this is called, not when the returned future is awaited.
#[track_caller]
pub fn report_error<'a, R, E>(reporter: &'a Reporter<R>, err: &E) -> impl Future<Output = ()> + 'a
where
    R: IStackResolver,
    E: std::error::Error + 'static,
{
    let descriptor = ErrorDescriptor::from_error(err).with_captured_backtrace();
    async move { reporter.report(&descriptor).await }
}

/// Report `descriptor` and exit with status 1. Never returns.
pub async fn report_fatal<R: IStackResolver>(
    reporter: &Reporter<R>,
    descriptor: &ErrorDescriptor,
) -> Infallible {
    reporter.report(descriptor).await;
    std::process::exit(PANIC_EXIT_CODE)
}
