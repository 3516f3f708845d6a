//! Key code definitions and key event handling

use std::fmt;

/// Hardware-independent virtual key code (macOS `kVK_*` values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u16);

impl KeyCode {
    // Editing keys
    pub const RETURN: KeyCode = KeyCode(36);
    pub const TAB: KeyCode = KeyCode(48);
    pub const SPACE: KeyCode = KeyCode(49);
    pub const DELETE: KeyCode = KeyCode(51);
    pub const ESCAPE: KeyCode = KeyCode(53);
    pub const FORWARD_DELETE: KeyCode = KeyCode(117);

    // Cursor movement
    pub const LEFT: KeyCode = KeyCode(123);
    pub const RIGHT: KeyCode = KeyCode(124);
    pub const DOWN: KeyCode = KeyCode(125);
    pub const UP: KeyCode = KeyCode(126);

    // Input source switching (JIS keyboards)
    pub const JIS_EISU: KeyCode = KeyCode(102);

    /// Key code of `ch` on an ANSI US layout, ignoring shift.
    pub fn for_char(ch: char) -> Option<KeyCode> {
        let code = match ch.to_ascii_lowercase() {
            'a' => 0x00,
            's' => 0x01,
            'd' => 0x02,
            'f' => 0x03,
            'h' => 0x04,
            'g' => 0x05,
            'z' => 0x06,
            'x' => 0x07,
            'c' => 0x08,
            'v' => 0x09,
            'b' => 0x0B,
            'q' => 0x0C,
            'w' => 0x0D,
            'e' => 0x0E,
            'r' => 0x0F,
            'y' => 0x10,
            't' => 0x11,
            '1' | '!' => 0x12,
            '2' | '@' => 0x13,
            '3' | '#' => 0x14,
            '4' | '$' => 0x15,
            '6' | '^' => 0x16,
            '5' | '%' => 0x17,
            '=' | '+' => 0x18,
            '9' | '(' => 0x19,
            '7' | '&' => 0x1A,
            '-' | '_' => 0x1B,
            '8' | '*' => 0x1C,
            '0' | ')' => 0x1D,
            ']' | '}' => 0x1E,
            'o' => 0x1F,
            'u' => 0x20,
            '[' | '{' => 0x21,
            'i' => 0x22,
            'p' => 0x23,
            'l' => 0x25,
            'j' => 0x26,
            '\'' | '"' => 0x27,
            'k' => 0x28,
            ';' | ':' => 0x29,
            '\\' | '|' => 0x2A,
            ',' | '<' => 0x2B,
            '/' | '?' => 0x2C,
            'n' => 0x2D,
            'm' => 0x2E,
            '.' | '>' => 0x2F,
            ' ' => return Some(Self::SPACE),
            '`' | '~' => 0x32,
            _ => return None,
        };
        Some(KeyCode(code))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key modifier flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift_key: bool,
    pub control_key: bool,
    pub option_key: bool,
    pub command_key: bool,
}

/// Device-independent modifier flag bits as delivered by the host event
impl KeyModifiers {
    pub const SHIFT_MASK: u64 = 1 << 17;
    pub const CONTROL_MASK: u64 = 1 << 18;
    pub const OPTION_MASK: u64 = 1 << 19;
    pub const COMMAND_MASK: u64 = 1 << 20;

    /// Decode a modifier flag bitmask into a `KeyModifiers` struct.
    pub fn from_modifier_flags(flags: u64) -> Self {
        Self {
            shift_key: (flags & Self::SHIFT_MASK) != 0,
            control_key: (flags & Self::CONTROL_MASK) != 0,
            option_key: (flags & Self::OPTION_MASK) != 0,
            command_key: (flags & Self::COMMAND_MASK) != 0,
        }
    }
}

impl KeyModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift_key = shift;
        self
    }

    pub fn with_control(mut self, control: bool) -> Self {
        self.control_key = control;
        self
    }

    pub fn with_command(mut self, command: bool) -> Self {
        self.command_key = command;
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.shift_key && !self.control_key && !self.option_key && !self.command_key
    }
}

/// A key-down event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The virtual key code
    pub key_code: KeyCode,
    /// Characters produced by the key, after modifiers are applied
    pub characters: Option<String>,
    /// Modifier key state
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(key_code: KeyCode, characters: Option<String>, modifiers: KeyModifiers) -> Self {
        Self {
            key_code,
            characters,
            modifiers,
        }
    }

    /// Create a key press without characters or modifiers (Return, arrows, ...)
    pub fn press(key_code: KeyCode) -> Self {
        Self::new(key_code, None, KeyModifiers::default())
    }

    /// Create the event a US keyboard produces when typing `ch`.
    ///
    /// Shift is set for uppercase letters and shifted symbols. Characters that
    /// have no key on the layout get key code 0xFFFF.
    pub fn typed(ch: char) -> Self {
        let key_code = KeyCode::for_char(ch).unwrap_or(KeyCode(0xFFFF));
        let shifted = ch.is_ascii_uppercase() || "~!@#$%^&*()_+{}|:\"<>?".contains(ch);
        Self::new(
            key_code,
            Some(ch.to_string()),
            KeyModifiers::new().with_shift(shifted),
        )
    }

    /// Same event with the command modifier held
    pub fn with_command(mut self) -> Self {
        self.modifiers.command_key = true;
        self
    }

    /// Characters carried by the event, `None` when absent or empty
    pub fn text(&self) -> Option<&str> {
        self.characters.as_deref().filter(|s| !s.is_empty())
    }
}
