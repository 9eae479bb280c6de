//! Error codes for window setup.
//!
//! Each setup failure has a small integer code and a fixed message. The
//! code table is stable: 0 is success, 1-5 are the setup failures and any
//! other value is "unexpected".

use thiserror::Error;
use x11rb::errors::{ConnectError, ReplyError, ReplyOrIdError};

/// Integer error codes reported by window setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    ConnectFailed = 1,
    SetupUnavailable = 2,
    NoScreen = 3,
    CreateWindowFailed = 4,
    PropertyChangeFailed = 5,
}

impl ErrorCode {
    /// The raw integer value of this code
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Map a raw integer back to a code. 0 and unknown values give `None`.
    pub fn from_raw(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::ConnectFailed),
            2 => Some(Self::SetupUnavailable),
            3 => Some(Self::NoScreen),
            4 => Some(Self::CreateWindowFailed),
            5 => Some(Self::PropertyChangeFailed),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::ConnectFailed => "failed to connect with X server",
            Self::SetupUnavailable => "failed to get a setup",
            Self::NoScreen => "failed to get a screen",
            Self::CreateWindowFailed => "failed to create a window",
            Self::PropertyChangeFailed => "failed to change window property",
        }
    }
}

/// Message for a raw error code
pub fn error_message(code: i32) -> &'static str {
    ErrorCode::from_raw(code).map_or("unexpected", ErrorCode::message)
}

/// Errors from window setup.
///
/// The `Display` text of every variant is the message of its code; the
/// x11rb error that caused it is available through `source()`.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to connect with X server")]
    Connect(#[source] ConnectError),

    #[error("failed to get a setup")]
    Setup(#[source] ConnectError),

    #[error("failed to get a screen")]
    Screen { screen: usize },

    #[error("failed to create a window")]
    CreateWindow(#[source] ReplyOrIdError),

    #[error("failed to change window property")]
    ChangeProperty {
        property: &'static str,
        #[source]
        source: ReplyError,
    },
}

impl WindowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Connect(_) => ErrorCode::ConnectFailed,
            Self::Setup(_) => ErrorCode::SetupUnavailable,
            Self::Screen { .. } => ErrorCode::NoScreen,
            Self::CreateWindow(_) => ErrorCode::CreateWindowFailed,
            Self::ChangeProperty { .. } => ErrorCode::PropertyChangeFailed,
        }
    }

    /// Sort a connection failure into connect, setup or screen errors
    pub(crate) fn from_connect(err: ConnectError) -> Self {
        match err {
            ConnectError::SetupAuthenticate(_)
            | ConnectError::SetupFailed(_)
            | ConnectError::Incomplete { .. }
            | ConnectError::ParseError(_) => Self::Setup(err),
            ConnectError::InvalidScreen => Self::Screen { screen: 0 },
            _ => Self::Connect(err),
        }
    }

    pub(crate) fn property(property: &'static str, source: impl Into<ReplyError>) -> Self {
        Self::ChangeProperty {
            property,
            source: source.into(),
        }
    }
}

impl From<ReplyOrIdError> for WindowError {
    fn from(err: ReplyOrIdError) -> Self {
        Self::CreateWindow(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use x11rb::errors::ConnectionError;

    #[test]
    fn test_error_message_table() {
        assert_eq!(error_message(1), "failed to connect with X server");
        assert_eq!(error_message(2), "failed to get a setup");
        assert_eq!(error_message(3), "failed to get a screen");
        assert_eq!(error_message(4), "failed to create a window");
        assert_eq!(error_message(5), "failed to change window property");
    }

    #[test]
    fn test_error_message_unexpected() {
        assert_eq!(error_message(0), "unexpected");
        assert_eq!(error_message(6), "unexpected");
        assert_eq!(error_message(99), "unexpected");
        assert_eq!(error_message(-1), "unexpected");
    }

    #[test]
    fn test_code_round_trip() {
        for raw in 1..=5 {
            let code = ErrorCode::from_raw(raw).unwrap();
            assert_eq!(code.raw(), raw);
        }
        assert_eq!(ErrorCode::from_raw(0), None);
    }

    #[test]
    fn test_connect_error_classification() {
        let err = WindowError::from_connect(ConnectError::UnknownError);
        assert_eq!(err.code(), ErrorCode::ConnectFailed);

        let err = WindowError::from_connect(ConnectError::InvalidScreen);
        assert_eq!(err.code(), ErrorCode::NoScreen);

        let err = WindowError::from_connect(ConnectError::Incomplete {
            expected: 32,
            received: 8,
        });
        assert_eq!(err.code(), ErrorCode::SetupUnavailable);
    }

    #[test]
    fn test_display_matches_code_message() {
        let err = WindowError::from(ReplyOrIdError::ConnectionError(
            ConnectionError::UnknownError,
        ));
        assert_eq!(err.code(), ErrorCode::CreateWindowFailed);
        assert_eq!(err.to_string(), err.code().message());
        assert!(err.source().is_some());

        let err = WindowError::property("WM_NAME", ConnectionError::UnknownError);
        assert_eq!(err.code(), ErrorCode::PropertyChangeFailed);
        assert_eq!(err.to_string(), "failed to change window property");
    }
}
