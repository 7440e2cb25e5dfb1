//! PS/2 scan code set 1 to held [`Buttons`]
//!
//! | Button   | Keys                    |
//! |----------|-------------------------|
//! | CROSS    | Enter, X, Right         |
//! | CIRCLE   | Space, O, Down          |
//! | SQUARE   | Backspace, Left         |
//! | TRIANGLE | T, Up                   |
//! | SELECT   | Tab                     |
//! | START    | Esc                     |
//! | LTRIGGER | `[`, Q                  |
//! | RTRIGGER | `]`, E                  |

use crate::devices::input::events::Buttons;

const EXTENDED_PREFIX: u8 = 0xE0;
const RELEASE_BIT: u8 = 0x80;

fn button_for(key: u8, extended: bool) -> Buttons {
    match (extended, key) {
        (_, 0x1C) | (false, 0x2D) | (true, 0x4D) => Buttons::CROSS,
        (false, 0x39) | (false, 0x18) | (true, 0x50) => Buttons::CIRCLE,
        (false, 0x0E) | (true, 0x4B) => Buttons::SQUARE,
        (false, 0x14) | (true, 0x48) => Buttons::TRIANGLE,
        (false, 0x0F) => Buttons::SELECT,
        (false, 0x01) => Buttons::START,
        (false, 0x1A) | (false, 0x10) => Buttons::LTRIGGER,
        (false, 0x1B) | (false, 0x12) => Buttons::RTRIGGER,
        _ => Buttons::empty(),
    }
}

/// Tracks which keys are down and folds them into a button snapshot.
///
/// Several keys may drive the same button; the button stays held until all
/// of them are released. Typematic repeats are idempotent.
pub struct ScancodeDecoder {
    is_extended: bool,
    held: [u64; 4],
}

impl ScancodeDecoder {
    pub const fn new() -> Self {
        Self {
            is_extended: false,
            held: [0; 4],
        }
    }

    fn slot(key: u8, extended: bool) -> (usize, u64) {
        let index = (usize::from(extended) << 7) | usize::from(key);
        (index / 64, 1 << (index % 64))
    }

    pub fn process_scancode(&mut self, scancode: u8) {
        if scancode == EXTENDED_PREFIX {
            self.is_extended = true;
            return;
        }

        let key = scancode & !RELEASE_BIT;
        let (word, bit) = Self::slot(key, self.is_extended);
        if scancode & RELEASE_BIT != 0 {
            self.held[word] &= !bit;
        } else {
            self.held[word] |= bit;
        }
        self.is_extended = false;
    }

    /// Buttons whose keys are currently down.
    pub fn buttons(&self) -> Buttons {
        let mut buttons = Buttons::empty();
        for (word, bits) in self.held.iter().enumerate() {
            let mut bits = *bits;
            while bits != 0 {
                let index = word * 64 + bits.trailing_zeros() as usize;
                buttons |= button_for((index & 0x7F) as u8, index >= 0x80);
                bits &= bits - 1;
            }
        }
        buttons
    }
}

impl Default for ScancodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(decoder: &mut ScancodeDecoder, codes: &[u8]) {
        for &code in codes {
            decoder.process_scancode(code);
        }
    }

    #[test]
    fn test_press_and_release() {
        let mut decoder = ScancodeDecoder::new();
        feed(&mut decoder, &[0x1C]);
        assert_eq!(decoder.buttons(), Buttons::CROSS);
        feed(&mut decoder, &[0x9C]);
        assert_eq!(decoder.buttons(), Buttons::empty());
    }

    #[test]
    fn test_extended_arrows() {
        let mut decoder = ScancodeDecoder::new();
        feed(&mut decoder, &[0xE0, 0x4B, 0xE0, 0x48]);
        assert_eq!(decoder.buttons(), Buttons::SQUARE | Buttons::TRIANGLE);
        feed(&mut decoder, &[0xE0, 0xCB]);
        assert_eq!(decoder.buttons(), Buttons::TRIANGLE);
    }

    #[test]
    fn test_keypad_digits_are_not_arrows() {
        let mut decoder = ScancodeDecoder::new();
        feed(&mut decoder, &[0x4D, 0x50]);
        assert_eq!(decoder.buttons(), Buttons::empty());
    }

    #[test]
    fn test_shared_button_needs_all_keys_released() {
        let mut decoder = ScancodeDecoder::new();
        feed(&mut decoder, &[0x1C, 0x2D, 0x9C]);
        assert_eq!(decoder.buttons(), Buttons::CROSS);
        feed(&mut decoder, &[0xAD]);
        assert_eq!(decoder.buttons(), Buttons::empty());
    }

    #[test]
    fn test_repeat_is_idempotent() {
        let mut decoder = ScancodeDecoder::new();
        feed(&mut decoder, &[0x01, 0x01, 0x01, 0x81]);
        assert_eq!(decoder.buttons(), Buttons::empty());
    }

    #[test]
    fn test_full_mapping() {
        let cases = [
            (0x39, Buttons::CIRCLE),
            (0x18, Buttons::CIRCLE),
            (0x0E, Buttons::SQUARE),
            (0x14, Buttons::TRIANGLE),
            (0x0F, Buttons::SELECT),
            (0x01, Buttons::START),
            (0x1A, Buttons::LTRIGGER),
            (0x10, Buttons::LTRIGGER),
            (0x1B, Buttons::RTRIGGER),
            (0x12, Buttons::RTRIGGER),
            (0x1E, Buttons::empty()),
        ];
        for (code, expected) in cases {
            let mut decoder = ScancodeDecoder::new();
            decoder.process_scancode(code);
            assert_eq!(decoder.buttons(), expected, "scancode {:#x}", code);
        }
    }

    #[test]
    fn test_extended_enter_and_down() {
        let mut decoder = ScancodeDecoder::new();
        feed(&mut decoder, &[0xE0, 0x1C, 0xE0, 0x50]);
        assert_eq!(decoder.buttons(), Buttons::CROSS | Buttons::CIRCLE);
    }
}
