//! Call logging for unary gRPC handlers.
//!
//! [`observe_unary`] wraps one handler invocation and emits two records: one
//! before the handler runs and one after it returns, carrying the method,
//! request, response, status code and elapsed time. The handler's result is
//! returned untouched.

use std::error::Error;
use std::fmt::Debug;
use std::future::Future;
use std::time::{Duration, Instant, SystemTime};

use tonic::{Code, Request, Response, Status};

/// Everything known about one finished call.
struct CallRecord<'a, T, R> {
    method: &'static str,
    request: &'a T,
    response: Option<&'a R>,
    status: Code,
    started_at: SystemTime,
    duration: Duration,
}

impl<T: Debug, R: Debug> CallRecord<'_, T, R> {
    fn emit(&self) {
        tracing::info!(
            method = self.method,
            start = %humantime::format_rfc3339_micros(self.started_at),
            request = ?self.request,
            response = ?self.response,
            duration = %humantime::format_duration(self.duration),
            status = ?self.status,
            "call completed"
        );
    }
}

/// Run `next` with `request`, logging the call before and after.
///
/// The status code of a failed call is taken from the first [`Status`] found
/// in the error's `source()` chain, [`Code::Unknown`] if there is none.
///
/// # Errors
/// Returns exactly the error produced by `next`.
pub async fn observe_unary<T, R, E, F, Fut>(
    method: &'static str,
    request: Request<T>,
    next: F,
) -> Result<Response<R>, E>
where
    T: Debug + Clone,
    R: Debug,
    E: Error + 'static,
    F: FnOnce(Request<T>) -> Fut,
    Fut: Future<Output = Result<Response<R>, E>>,
{
    let payload = request.get_ref().clone();
    let started_at = SystemTime::now();
    let clock = Instant::now();

    tracing::info!(method, request = ?payload, "call received");

    let result = next(request).await;

    CallRecord {
        method,
        request: &payload,
        response: result.as_ref().ok().map(Response::get_ref),
        status: match &result {
            Ok(_) => Code::Ok,
            Err(e) => code_of(e),
        },
        started_at,
        duration: round_to_micros(clock.elapsed()),
    }
    .emit();

    result
}

/// gRPC status code carried by `err` or any of its sources.
pub fn code_of(err: &(dyn Error + 'static)) -> Code {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(status) = e.downcast_ref::<Status>() {
            return status.code();
        }
        current = e.source();
    }
    Code::Unknown
}

/// Round to the nearest whole microsecond, halves up.
fn round_to_micros(elapsed: Duration) -> Duration {
    let micros = elapsed.as_nanos().saturating_add(500) / 1_000;
    Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX))
}
