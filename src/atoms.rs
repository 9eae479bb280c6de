//! ICCCM atom management.
//!
//! The window only needs the two atoms of the close protocol.

use x11rb::connection::Connection;
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto::{Atom, ConnectionExt};

/// ICCCM atoms used by the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atoms {
    pub wm_protocols: Atom,
    pub wm_delete_window: Atom,
}

impl Atoms {
    /// Intern all required atoms
    pub fn new(conn: &impl Connection) -> Result<Self, ReplyError> {
        // Send both requests before waiting on either reply
        let protocols = conn.intern_atom(false, b"WM_PROTOCOLS")?;
        let delete_window = conn.intern_atom(false, b"WM_DELETE_WINDOW")?;
        Ok(Self {
            wm_protocols: protocols.reply()?.atom,
            wm_delete_window: delete_window.reply()?.atom,
        })
    }
}
