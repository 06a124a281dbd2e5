//! Parallel map over fragments with a bounded worker pool (JoinSet + Semaphore).

use std::any::Any;
use std::fmt::Display;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::WordCountError;

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Run `mapper` on every fragment, at most `pool_size` at a time, and wait for all of them.
///
/// Results come back in fragment order. The first failing fragment (error or
/// panic) cancels the tasks that have not started, waits for the ones already
/// running, and returns that failure with no partial results.
pub async fn map_parallel<T, E, F>(
    fragments: Vec<String>,
    pool_size: NonZeroUsize,
    mapper: F,
) -> Result<Vec<T>, WordCountError>
where
    T: Send + 'static,
    E: Display + Send + 'static,
    F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
{
    let mapper = Arc::new(mapper);
    let sem = Arc::new(Semaphore::new(pool_size.get()));
    let mut join_set = JoinSet::new();
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
        .take(fragments.len())
        .collect();

    for (index, fragment) in fragments.into_iter().enumerate() {
        let permit = sem.clone().acquire_owned().await?;
        let mapper = Arc::clone(&mapper);
        join_set.spawn_blocking(move || {
            let _permit = permit;
            let result = panic::catch_unwind(AssertUnwindSafe(|| mapper(&fragment)))
                .map_err(panic_message)
                .and_then(|r| r.map_err(|e| e.to_string()));
            (index, result)
        });
    }

    // Drain the whole set even after a failure: running blocking tasks
    // cannot be aborted, so the caller only resumes once all of them return.
    let mut failure = None;
    while let Some(joined) = join_set.join_next().await {
        let (index, result) = match joined {
            Ok(done) => done,
            Err(e) if e.is_cancelled() && failure.is_some() => continue,
            Err(e) => {
                failure.get_or_insert(WordCountError::Join(e));
                continue;
            }
        };
        match result {
            Ok(value) => {
                tracing::debug!(fragment = index, "fragment mapped");
                slots[index] = Some(value);
            }
            Err(message) if failure.is_none() => {
                tracing::debug!(fragment = index, %message, "fragment failed, cancelling the rest");
                join_set.abort_all();
                failure = Some(WordCountError::Tokenization {
                    fragment: index,
                    message,
                });
            }
            Err(_) => {}
        }
    }
    if let Some(err) = failure {
        return Err(err);
    }

    Ok(slots.into_iter().flatten().collect())
}
