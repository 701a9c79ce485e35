use std::fmt::Display;
use std::io;

#[cfg_attr(not(any(test, all(windows, feature = "wasapi"))), allow(dead_code))]
pub(crate) fn custom_err_with_code<C>(err_text: &str, result_code: C) -> io::Error
where
    C: Display,
{
    io::Error::other(format!("{err_text}. Code: {result_code}"))
}

/// Prefixes an error with the operation that produced it, keeping its kind.
pub(crate) fn err_with_context(err: io::Error, context: &str) -> io::Error {
    io::Error::new(err.kind(), format!("{context}: {err}"))
}

pub(crate) trait ResultExt<T> {
    fn unwrap_or_default_and_log_error(self) -> T
    where
        T: Default;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn unwrap_or_default_and_log_error(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|err| {
            log::error!("{err}");
            T::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_keeps_error_kind() {
        let err = io::Error::new(io::ErrorKind::NotFound, "Element not found");
        let err = err_with_context(err, "Failed to get default audio endpoint");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "Failed to get default audio endpoint: Element not found"
        );
    }

    #[test]
    fn custom_err_contains_code() {
        let err = custom_err_with_code("Unexpected variant type", 8);
        assert_eq!(err.to_string(), "Unexpected variant type. Code: 8");
    }

    #[test]
    fn log_error_falls_back_to_default() {
        let failed: Result<String, io::Error> = Err(io::ErrorKind::Other.into());
        assert_eq!(failed.unwrap_or_default_and_log_error(), "");
        let succeeded: Result<String, io::Error> = Ok("dev-1".to_owned());
        assert_eq!(succeeded.unwrap_or_default_and_log_error(), "dev-1");
    }
}
