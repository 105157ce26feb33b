//! Retry logic with exponential backoff for upstream API operations.
//!
//! [`RetryContext`] re-runs an operation while it fails with an error whose
//! [`ErrorRetryStrategy`] is `Retry`. A cache of type `T` survives between
//! attempts so resources fetched by an earlier attempt are not requested
//! again.

use std::{future::Future, pin::Pin, time::Duration};

use dioxus_logger::tracing;

use crate::backend::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with retries and a per-operation cache.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 unless configured through [`RetryContext::with_max_attempts`]
/// - **Backoff strategy**: exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Retry conditions**: only errors with `ErrorRetryStrategy::Retry` are retried
///
/// # Example
///
/// ```ignore
/// let mut ctx: RetryContext<LookupCache> = RetryContext::new();
/// let client = client.clone();
///
/// ctx.execute_with_retry("lookup of pikachu", |cache| {
///     let client = client.clone();
///
///     Box::pin(async move {
///         if cache.pokemon.is_none() {
///             cache.pokemon = Some(client.pokemon().get_pokemon("pikachu").await?);
///         }
///         Ok(())
///     })
/// }).await?;
/// ```
pub struct RetryContext<T> {
    /// Cache to be used between retries to prevent unnecessary additional fetches
    cache: T,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff (doubles with each retry)
    initial_backoff: Duration,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    /// Creates a new retry context with 3 max attempts and 1 second initial backoff.
    pub fn new() -> Self {
        Self {
            cache: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Sets the attempt limit; values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Consumes the context, returning whatever the attempts cached.
    pub fn into_cache(self) -> T {
        self.cache
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "lookup of pikachu")
    /// - `operation` - Async function that receives the mutable cache and returns `Result<R, Error>`
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(&'a mut T) -> Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 'a>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation(&mut self.cache).await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl<T> Default for RetryContext<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
