//! ICCCM `WM_SIZE_HINTS` record.
//!
//! The record is sent as eighteen 32-bit words in client byte order. It is
//! built field by field rather than from an in-memory struct layout.

/// User-specified position
pub const US_POSITION: u32 = 1 << 0;
/// User-specified size
pub const US_SIZE: u32 = 1 << 1;
/// Program-specified position
pub const P_POSITION: u32 = 1 << 2;
/// Program-specified size
pub const P_SIZE: u32 = 1 << 3;
/// Minimum size present
pub const P_MIN_SIZE: u32 = 1 << 4;
/// Maximum size present
pub const P_MAX_SIZE: u32 = 1 << 5;
pub const P_RESIZE_INC: u32 = 1 << 6;
pub const P_ASPECT: u32 = 1 << 7;
pub const P_BASE_SIZE: u32 = 1 << 8;
pub const P_WIN_GRAVITY: u32 = 1 << 9;

/// Number of 32-bit words in the record
pub const SIZE_HINTS_WORDS: usize = 18;

/// Window manager size hints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeHints {
    pub flags: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub width_inc: i32,
    pub height_inc: i32,
    pub min_aspect_num: i32,
    pub min_aspect_den: i32,
    pub max_aspect_num: i32,
    pub max_aspect_den: i32,
    pub base_width: i32,
    pub base_height: i32,
    pub win_gravity: u32,
}

impl SizeHints {
    /// Hints pinning both minimum and maximum size to `width` x `height`,
    /// which tells the window manager the window is not resizable.
    pub fn fixed(width: u16, height: u16) -> Self {
        Self {
            flags: P_MIN_SIZE | P_MAX_SIZE,
            min_width: i32::from(width),
            min_height: i32::from(height),
            max_width: i32::from(width),
            max_height: i32::from(height),
            ..Self::default()
        }
    }

    /// Whether these hints forbid resizing
    pub fn is_fixed_size(&self) -> bool {
        self.flags & (P_MIN_SIZE | P_MAX_SIZE) == (P_MIN_SIZE | P_MAX_SIZE)
            && self.min_width == self.max_width
            && self.min_height == self.max_height
    }

    /// Wire words in ICCCM order
    pub fn to_words(&self) -> [u32; SIZE_HINTS_WORDS] {
        [
            self.flags,
            self.x as u32,
            self.y as u32,
            self.width as u32,
            self.height as u32,
            self.min_width as u32,
            self.min_height as u32,
            self.max_width as u32,
            self.max_height as u32,
            self.width_inc as u32,
            self.height_inc as u32,
            self.min_aspect_num as u32,
            self.min_aspect_den as u32,
            self.max_aspect_num as u32,
            self.max_aspect_den as u32,
            self.base_width as u32,
            self.base_height as u32,
            self.win_gravity,
        ]
    }

    /// The record as bytes in native byte order (72 bytes)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_words()
            .iter()
            .flat_map(|word| word.to_ne_bytes())
            .collect()
    }

    /// Parse a property value. Older clients may send a shorter record;
    /// anything under eighteen words is rejected.
    pub fn from_words(words: &[u32]) -> Option<Self> {
        if words.len() < SIZE_HINTS_WORDS {
            return None;
        }
        Some(Self {
            flags: words[0],
            x: words[1] as i32,
            y: words[2] as i32,
            width: words[3] as i32,
            height: words[4] as i32,
            min_width: words[5] as i32,
            min_height: words[6] as i32,
            max_width: words[7] as i32,
            max_height: words[8] as i32,
            width_inc: words[9] as i32,
            height_inc: words[10] as i32,
            min_aspect_num: words[11] as i32,
            min_aspect_den: words[12] as i32,
            max_aspect_num: words[13] as i32,
            max_aspect_den: words[14] as i32,
            base_width: words[15] as i32,
            base_height: words[16] as i32,
            win_gravity: words[17],
        })
    }
}
