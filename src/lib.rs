//! skd-window - a single fixed-size X11 window.
//!
//! Opens a connection, creates a window that the window manager may not
//! resize, registers for `WM_DELETE_WINDOW` and reports close requests
//! from a non-blocking poll.

pub mod atoms;
pub mod config;
pub mod error;
pub mod hints;
pub mod query;
pub mod window;

pub use config::WindowConfig;
pub use error::{error_message, ErrorCode, WindowError};
pub use hints::SizeHints;
pub use window::{scan_for_close, CloseProtocol, PlatformWindow, WindowDescriptor, WindowKind};
