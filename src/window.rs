//! The fixed-size window and its close-request polling.
//!
//! A `PlatformWindow` owns its connection to the X server, so several
//! windows (or tests) can coexist without sharing state.
//!
//! ```text
//!   create_window ──► connect ──► create ──► WM_NAME ──► WM_NORMAL_HINTS
//!                                                             │
//!          poll_events ◄── map + flush ◄── WM_PROTOCOLS ◄─────┘
//!               │
//!               ▼
//!       terminate_window
//! ```

use x11rb::connection::{Connection, RequestConnection};
use x11rb::cookie::VoidCookie;
use x11rb::errors::{ConnectionError, ReplyError, ReplyOrIdError};
use x11rb::protocol::xproto::*;
use x11rb::protocol::Event;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::atoms::Atoms;
use crate::config::WindowConfig;
use crate::error::WindowError;
use crate::hints::SizeHints;

/// Windowing backend behind a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WindowKind {
    X11,
}

/// Read-only view of an open window, for code that renders into it
#[derive(Debug, Clone, Copy)]
pub struct WindowDescriptor<'a> {
    pub kind: WindowKind,
    pub connection: &'a RustConnection,
    pub window: Window,
}

/// Recognizes the client message a window manager sends for WM_DELETE_WINDOW
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseProtocol {
    marker: Atom,
}

impl CloseProtocol {
    pub fn new(marker: Atom) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> Atom {
        self.marker
    }

    /// Whether `event` is a client message whose first data word is the marker
    pub fn is_close_request(&self, event: &Event) -> bool {
        match event {
            Event::ClientMessage(e) => e.data.as_data32()[0] == self.marker,
            _ => false,
        }
    }
}

/// Pull events from `next` until it runs dry or a close request shows up.
///
/// Returns true on a close request. Events after it are left with the source.
pub fn scan_for_close(close: &CloseProtocol, mut next: impl FnMut() -> Option<Event>) -> bool {
    while let Some(event) = next() {
        if close.is_close_request(&event) {
            return true;
        }
        log::trace!("Discarding event {:?}", event);
    }
    false
}

/// A single fixed-size X11 window
pub struct PlatformWindow {
    conn: Option<RustConnection>,
    screen_num: usize,
    window: Window,
    atoms: Atoms,
    close: Option<CloseProtocol>,
    width: u16,
    height: u16,
}

impl PlatformWindow {
    /// Create and map a window on the default display
    pub fn create_window(title: &str, width: u16, height: u16) -> Result<Self, WindowError> {
        Self::with_config(&WindowConfig::new(title, width, height))
    }

    /// Create and map a window described by `config`.
    ///
    /// Server-side resources created before a failing step are not rolled
    /// back one by one; dropping the connection on the error path releases
    /// them.
    pub fn with_config(config: &WindowConfig) -> Result<Self, WindowError> {
        let (conn, screen_num) =
            RustConnection::connect(config.display.as_deref()).map_err(WindowError::from_connect)?;

        let screen = conn
            .setup()
            .roots
            .get(screen_num)
            .ok_or(WindowError::Screen { screen: screen_num })?;
        let root = screen.root;
        let root_visual = screen.root_visual;

        log::debug!(
            "Connected to X11, screen {}, root window 0x{:x}, {}x{}",
            screen_num,
            root,
            screen.width_in_pixels,
            screen.height_in_pixels
        );

        let window = create_fixed_window(&conn, root, root_visual, config)?;
        log::debug!("Created window 0x{:x}", window);

        checked(conn.change_property8(
            PropMode::REPLACE,
            window,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            config.title.as_bytes(),
        ))
        .map_err(|e| WindowError::property("WM_NAME", e))?;

        let hints = SizeHints::fixed(config.width, config.height);
        checked(conn.change_property32(
            PropMode::REPLACE,
            window,
            AtomEnum::WM_NORMAL_HINTS,
            AtomEnum::WM_SIZE_HINTS,
            &hints.to_words(),
        ))
        .map_err(|e| WindowError::property("WM_NORMAL_HINTS", e))?;

        let atoms = Atoms::new(&conn).map_err(|e| WindowError::property("WM_PROTOCOLS", e))?;
        checked(conn.change_property32(
            PropMode::REPLACE,
            window,
            atoms.wm_protocols,
            AtomEnum::ATOM,
            &[atoms.wm_delete_window],
        ))
        .map_err(|e| WindowError::property("WM_PROTOCOLS", e))?;

        conn.map_window(window).map_err(ReplyOrIdError::from)?;
        conn.flush().map_err(ReplyOrIdError::from)?;

        log::info!(
            "Mapped window 0x{:x} \"{}\" ({}x{})",
            window,
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            conn: Some(conn),
            screen_num,
            window,
            atoms,
            close: Some(CloseProtocol::new(atoms.wm_delete_window)),
            width: config.width,
            height: config.height,
        })
    }

    /// Drain queued events without blocking.
    ///
    /// Returns true as soon as a close request is found; returns false once
    /// the queue is empty, after teardown, or if the connection fails.
    pub fn poll_events(&mut self) -> bool {
        let (conn, close) = match (&self.conn, &self.close) {
            (Some(conn), Some(close)) => (conn, close),
            _ => return false,
        };

        scan_for_close(close, || match conn.poll_for_event() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Error polling for X11 event: {}", e);
                None
            }
        })
    }

    /// Close the connection and forget the close marker. Safe to call
    /// more than once.
    pub fn terminate_window(&mut self) {
        if let Some(conn) = self.conn.take() {
            log::debug!("Closing connection for window 0x{:x}", self.window);
            drop(conn);
        }
        self.close = None;
    }

    /// View of the window for rendering code, while the connection is open
    pub fn window_descriptor(&self) -> Option<WindowDescriptor<'_>> {
        self.conn.as_ref().map(|connection| WindowDescriptor {
            kind: WindowKind::X11,
            connection,
            window: self.window,
        })
    }

    pub fn window_id(&self) -> Window {
        self.window
    }

    pub fn screen_num(&self) -> usize {
        self.screen_num
    }

    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    /// The close marker, `None` after teardown
    pub fn close_protocol(&self) -> Option<CloseProtocol> {
        self.close
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

impl Drop for PlatformWindow {
    fn drop(&mut self) {
        self.terminate_window();
    }
}

/// Wait for the server to acknowledge a request
fn checked<C: RequestConnection + ?Sized>(
    request: Result<VoidCookie<'_, C>, ConnectionError>,
) -> Result<(), ReplyError> {
    request?.check()
}

/// Create an InputOutput child of `root` that only asks for Expose events
fn create_fixed_window(
    conn: &RustConnection,
    root: Window,
    visual: Visualid,
    config: &WindowConfig,
) -> Result<Window, ReplyOrIdError> {
    let window = conn.generate_id()?;
    conn.create_window(
        x11rb::COPY_DEPTH_FROM_PARENT,
        window,
        root,
        0,
        0,
        config.width,
        config.height,
        config.border_width,
        WindowClass::INPUT_OUTPUT,
        visual,
        &CreateWindowAux::new().event_mask(EventMask::EXPOSURE),
    )?
    .check()?;
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    const DELETE_WINDOW: Atom = 0x1a5;

    fn client_message(first_word: u32) -> Event {
        Event::ClientMessage(ClientMessageEvent::new(
            32,
            0x200001,
            0x1a4u32,
            [first_word, 0, 0, 0, 0],
        ))
    }

    fn expose() -> Event {
        Event::Expose(ExposeEvent {
            response_type: EXPOSE_EVENT,
            sequence: 0,
            window: 0x200001,
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            count: 0,
        })
    }

    #[test]
    fn test_is_close_request() {
        let close = CloseProtocol::new(DELETE_WINDOW);
        assert!(close.is_close_request(&client_message(DELETE_WINDOW)));
        assert!(!close.is_close_request(&client_message(DELETE_WINDOW + 1)));
        assert!(!close.is_close_request(&expose()));
    }

    #[test]
    fn test_scan_empty_queue() {
        let close = CloseProtocol::new(DELETE_WINDOW);
        let mut queue: VecDeque<Event> = VecDeque::new();
        assert!(!scan_for_close(&close, || queue.pop_front()));
        assert!(!scan_for_close(&close, || queue.pop_front()));
    }

    #[test]
    fn test_scan_discards_other_events() {
        let close = CloseProtocol::new(DELETE_WINDOW);
        let mut queue = VecDeque::from(vec![expose(), client_message(7), expose()]);
        assert!(!scan_for_close(&close, || queue.pop_front()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_scan_stops_at_close_request() {
        let close = CloseProtocol::new(DELETE_WINDOW);
        let mut queue = VecDeque::from(vec![expose(), client_message(DELETE_WINDOW), expose()]);

        assert!(scan_for_close(&close, || queue.pop_front()));
        // The event after the close request stays queued
        assert_eq!(queue.len(), 1);

        assert!(!scan_for_close(&close, || queue.pop_front()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_close_request_reported_once() {
        let close = CloseProtocol::new(DELETE_WINDOW);
        let mut queue = VecDeque::from(vec![client_message(DELETE_WINDOW)]);
        assert!(scan_for_close(&close, || queue.pop_front()));
        assert!(!scan_for_close(&close, || queue.pop_front()));
    }
}
