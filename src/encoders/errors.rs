use std::fmt;

/// Errors returned by the codec.
///
/// Every variant carries the context needed to explain the failure, so
/// callers can match on the kind instead of parsing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Unrecognized format selector
    InvalidOption { option: String },
    /// A dynamically typed argument had the wrong type
    InvalidArgument {
        expected: &'static str,
        found: &'static str,
    },
    /// RFC 4648 input length is not a multiple of 8
    InvalidLength { actual: usize },
    /// RFC 4648 trailing `=` count is not one of 0, 1, 3, 4, 6
    InvalidPadding { count: usize },
    /// A byte outside the active alphabet, with its 1-based position
    IllegalCharacter { byte: u8, position: usize },
}

impl CodecError {
    /// Create an InvalidOption error for an unknown format selector
    pub fn invalid_option(option: impl Into<String>) -> Self {
        CodecError::InvalidOption {
            option: option.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(expected: &'static str, found: &'static str) -> Self {
        CodecError::InvalidArgument { expected, found }
    }

    /// Stable snake_case tag for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::InvalidOption { .. } => "invalid_option",
            CodecError::InvalidArgument { .. } => "invalid_argument",
            CodecError::InvalidLength { .. } => "invalid_length",
            CodecError::InvalidPadding { .. } => "invalid_padding",
            CodecError::IllegalCharacter { .. } => "illegal_character",
        }
    }

    /// One-line description without the `error:` prefix or hints.
    pub fn message(&self) -> String {
        match self {
            CodecError::InvalidOption { option } => format!(
                "invalid option '{}' (expected 'rfc' or 'crockford')",
                option
            ),
            CodecError::InvalidArgument { expected, found } => {
                format!("invalid argument: expected {}, got {}", expected, found)
            }
            CodecError::InvalidLength { .. } => {
                "RFC 4648 Base32 requires input length to be a multiple of 8".to_string()
            }
            CodecError::InvalidPadding { .. } => {
                "RFC 4648 Base32 padding length must be 0, 1, 3, 4, or 6".to_string()
            }
            CodecError::IllegalCharacter { byte, position } => format!(
                "illegal character in Base32 string: '{}' (0x{:02X}) at position {}",
                byte.escape_ascii(),
                byte,
                position
            ),
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            CodecError::InvalidLength { actual } => {
                Some(format!("input is {} characters", actual))
            }
            CodecError::InvalidPadding { count } => {
                Some(format!("found {} trailing '=' characters", count))
            }
            _ => None,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            CodecError::InvalidLength { .. } => {
                Some("add '=' padding or check for missing characters")
            }
            CodecError::InvalidPadding { .. } => {
                Some("check for missing or extra '=' characters at end of input")
            }
            CodecError::InvalidOption { .. }
            | CodecError::InvalidArgument { .. }
            | CodecError::IllegalCharacter { .. } => None,
        }
    }

    /// Full report: `error:` header, optional detail line and `hint:`.
    pub fn render(&self, use_color: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_report(&mut out, use_color);
        out
    }

    fn write_report(&self, out: &mut impl fmt::Write, use_color: bool) -> fmt::Result {
        if use_color {
            write!(out, "\x1b[1;31merror:\x1b[0m {}", self.message())?;
        } else {
            write!(out, "error: {}", self.message())?;
        }

        if let Some(detail) = self.detail() {
            write!(out, "\n\n  {}", detail)?;
        }

        if let Some(hint) = self.hint() {
            if use_color {
                write!(out, "\n\n\x1b[1;36mhint:\x1b[0m {}", hint)?;
            } else {
                write!(out, "\n\nhint: {}", hint)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, should_use_color())
    }
}

impl std::error::Error for CodecError {}

/// Check if colored output should be used
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
