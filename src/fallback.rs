//! "Try one thing, and if it fails, try another."

/// Which branch of an [`attempt`] produced the value.
#[derive(Debug)]
pub enum FallbackOutcome<T, E> {
    /// The primary action succeeded; the fallback never ran.
    Primary(T),
    /// The primary action failed with `primary_error` and the fallback succeeded.
    Fallback { value: T, primary_error: E },
}

impl<T, E> FallbackOutcome<T, E> {
    pub fn used_fallback(&self) -> bool {
        matches!(self, FallbackOutcome::Fallback { .. })
    }
}

/// Runs `primary`; on failure keeps its error in the outcome and runs
/// `fallback`. Only the fallback's error is returned to the caller.
pub fn attempt<T, E, F, P, B>(primary: P, fallback: B) -> Result<FallbackOutcome<T, E>, F>
where
    P: FnOnce() -> Result<T, E>,
    B: FnOnce(&E) -> Result<T, F>,
{
    match primary() {
        Ok(value) => Ok(FallbackOutcome::Primary(value)),
        Err(primary_error) => {
            let value = fallback(&primary_error)?;
            Ok(FallbackOutcome::Fallback {
                value,
                primary_error,
            })
        }
    }
}
