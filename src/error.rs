/// Process-level error carrying the exit code reported to the scheduler.
///
/// Exit codes are part of the CLI contract (cron/CI logs key off them):
///
/// - 2: usage, configuration, or local file I/O
/// - 3: the weather request could not complete
/// - 4: the weather response had an unexpected shape
/// - 5: the assembled weather window failed its consistency checks
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Usage, configuration, or local file I/O failure.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// The outbound weather request failed or timed out.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// The weather response was missing fields or internally inconsistent.
    pub fn data_format(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    /// The assembled window is not 10 contiguous ascending days.
    pub fn invalid_window(message: impl Into<String>) -> Self {
        Self::new(5, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_distinct_exit_codes() {
        assert_eq!(AppError::config("x").exit_code(), 2);
        assert_eq!(AppError::network("x").exit_code(), 3);
        assert_eq!(AppError::data_format("x").exit_code(), 4);
        assert_eq!(AppError::invalid_window("x").exit_code(), 5);
    }

    #[test]
    fn display_shows_only_the_message() {
        let err = AppError::network("Weather request failed: timeout");
        assert_eq!(format!("{err}"), "Weather request failed: timeout");
    }
}
