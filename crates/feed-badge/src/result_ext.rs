use tracing::*;

/// Log an error with the caller's location before propagating it.
pub trait ResultExt<T, E, S>
where
    S: ToString,
{
    fn log(self, context: S) -> Result<T, E>;
}

impl<T, E: std::fmt::Display, S: ToString> ResultExt<T, E, S> for Result<T, E> {
    #[track_caller]
    fn log(self, context: S) -> Result<T, E> {
        if let Err(err) = &self {
            let location = std::panic::Location::caller();
            error!(
                err = %err,
                file = %format!("{}:{}", location.file(), location.line()),
                "{}",
                context.to_string()
            );
        }
        self
    }
}
