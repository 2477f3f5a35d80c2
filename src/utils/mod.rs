use std::fmt::Display;

pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

/// Builds a `map_err` adapter that prefixes an error with what was being done.
pub fn with_context<E: Display>(context: &'static str) -> impl FnOnce(E) -> String {
    move |e| format!("{}: {}", context, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_prefixed() {
        let err: Result<()> = Err("broken pipe").map_err(with_context("Failed to write report"));
        assert_eq!(err, Err("Failed to write report: broken pipe".to_string()));
    }
}
