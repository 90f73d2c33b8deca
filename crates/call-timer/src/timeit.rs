//! Wrappers that time a single call and hand its result back.
//!
//! A callable with no result returns `()`, which is an ordinary value in
//! Rust, so one generic wrapper covers both result-less and value-returning
//! callables. The report is written only after the call has returned
//! normally: a panic propagates untouched and produces no report, and the
//! `try_*` variants also stay silent when the callable returns `Err`.

use std::future::Future;

use crate::clock::Timestamp;
use crate::report::{report, ReportSink, StdoutSink};

/// A callable that can be invoked with the argument tuple `Args`.
///
/// Implemented for every `FnOnce` taking up to eight arguments, so
/// `timeit_with(f, (a, b))` calls `f(a, b)`. Each tuple element is moved
/// into the call as-is: owned values are handed over without copying, and
/// references stay borrows that end when the call returns.
pub trait Invoke<Args> {
    type Output;

    fn invoke(self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident: $ty:ident),*) => {
        impl<Func, Ret, $($ty),*> Invoke<($($ty,)*)> for Func
        where
            Func: FnOnce($($ty),*) -> Ret,
        {
            type Output = Ret;

            #[inline]
            fn invoke(self, ($($arg,)*): ($($ty,)*)) -> Ret {
                self($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(a1: A1);
impl_invoke!(a1: A1, a2: A2);
impl_invoke!(a1: A1, a2: A2, a3: A3);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);

/// Call `func` once, print how long it took, and return its result.
#[inline]
pub fn timeit<F, R>(func: F) -> R
where
    F: FnOnce() -> R,
{
    timeit_to(&StdoutSink, func)
}

/// [`timeit`] reporting to `sink`.
pub fn timeit_to<S, F, R>(sink: &S, func: F) -> R
where
    S: ReportSink + ?Sized,
    F: FnOnce() -> R,
{
    let start = Timestamp::now();
    let result = func();
    let end = Timestamp::now();

    report(sink, end.duration_since(start));
    result
}

/// Call `func` with the arguments in `args`, print how long it took, and
/// return its result.
#[inline]
pub fn timeit_with<F, Args>(func: F, args: Args) -> F::Output
where
    F: Invoke<Args>,
{
    timeit_with_to(&StdoutSink, func, args)
}

/// [`timeit_with`] reporting to `sink`.
#[inline]
pub fn timeit_with_to<S, F, Args>(sink: &S, func: F, args: Args) -> F::Output
where
    S: ReportSink + ?Sized,
    F: Invoke<Args>,
{
    timeit_to(sink, move || func.invoke(args))
}

/// Time a fallible call. `Ok` values are reported and returned; an `Err`
/// is returned unchanged with no report.
#[inline]
pub fn try_timeit<F, T, E>(func: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    try_timeit_to(&StdoutSink, func)
}

/// [`try_timeit`] reporting to `sink`.
pub fn try_timeit_to<S, F, T, E>(sink: &S, func: F) -> Result<T, E>
where
    S: ReportSink + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    let start = Timestamp::now();
    let value = func()?;
    let end = Timestamp::now();

    report(sink, end.duration_since(start));
    Ok(value)
}

#[inline]
pub fn try_timeit_with<F, Args, T, E>(func: F, args: Args) -> Result<T, E>
where
    F: Invoke<Args, Output = Result<T, E>>,
{
    try_timeit_with_to(&StdoutSink, func, args)
}

#[inline]
pub fn try_timeit_with_to<S, F, Args, T, E>(sink: &S, func: F, args: Args) -> Result<T, E>
where
    S: ReportSink + ?Sized,
    F: Invoke<Args, Output = Result<T, E>>,
{
    try_timeit_to(sink, move || func.invoke(args))
}

/// Await `future` once, print how long it took, and return its output.
///
/// Timing starts when the returned future is first polled.
pub async fn timeit_future<Fut>(future: Fut) -> Fut::Output
where
    Fut: Future,
{
    timeit_future_to(&StdoutSink, future).await
}

/// [`timeit_future`] reporting to `sink`.
pub async fn timeit_future_to<S, Fut>(sink: &S, future: Fut) -> Fut::Output
where
    S: ReportSink + ?Sized,
    Fut: Future,
{
    let start = Timestamp::now();
    let output = future.await;
    let end = Timestamp::now();

    report(sink, end.duration_since(start));
    output
}

/// Time `func(args...)`, forwarding every argument as written.
///
/// ```ignore
/// let total = timeit!(sum_prices, &book, fee);
/// ```
#[macro_export]
macro_rules! timeit {
    ($func:expr $(, $arg:expr)* $(,)?) => {
        $crate::timeit::timeit_with($func, ($($arg,)*))
    };
}

/// Fallible counterpart of [`timeit!`]; `Err` results are not reported.
#[macro_export]
macro_rules! try_timeit {
    ($func:expr $(, $arg:expr)* $(,)?) => {
        $crate::timeit::try_timeit_with($func, ($($arg,)*))
    };
}
