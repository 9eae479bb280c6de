//! Window property query functions.
//!
//! Stateless functions for reading back the properties set on a window.
//! Failures read as missing values.

use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;

use crate::atoms::Atoms;
use crate::hints::{SizeHints, SIZE_HINTS_WORDS};

/// Get the window title from WM_NAME.
pub fn window_title(conn: &impl Connection, window: Window) -> Option<String> {
    let reply = conn
        .get_property(false, window, AtomEnum::WM_NAME, AtomEnum::STRING, 0, 1024)
        .ok()?
        .reply()
        .ok()?;
    if reply.format != 8 {
        return None;
    }
    String::from_utf8(reply.value).ok()
}

/// Get the WM_NORMAL_HINTS record of a window.
pub fn size_hints(conn: &impl Connection, window: Window) -> Option<SizeHints> {
    let reply = conn
        .get_property(
            false,
            window,
            AtomEnum::WM_NORMAL_HINTS,
            AtomEnum::WM_SIZE_HINTS,
            0,
            SIZE_HINTS_WORDS as u32,
        )
        .ok()?
        .reply()
        .ok()?;
    let words: Vec<u32> = reply.value32()?.collect();
    SizeHints::from_words(&words)
}

/// Get the protocols a window participates in (WM_PROTOCOLS).
pub fn protocols(conn: &impl Connection, atoms: &Atoms, window: Window) -> Vec<Atom> {
    let reply = match conn.get_property(false, window, atoms.wm_protocols, AtomEnum::ATOM, 0, 32) {
        Ok(cookie) => match cookie.reply() {
            Ok(reply) => reply,
            Err(_) => return Vec::new(),
        },
        Err(_) => return Vec::new(),
    };

    reply
        .value32()
        .map(|atoms| atoms.collect())
        .unwrap_or_default()
}
