use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;

use crate::error::Error;
use crate::machine::KEYPAD_KEYS;

/// left-hand side of a qwerty keyboard mapped onto the hex keypad
const QWERTY_KEYMAP: [(char, u8); 16] = [
    ('x', 0x0),
    ('1', 0x1),
    ('2', 0x2),
    ('3', 0x3),
    ('q', 0x4),
    ('w', 0x5),
    ('e', 0x6),
    ('a', 0x7),
    ('s', 0x8),
    ('d', 0x9),
    ('z', 0xa),
    ('c', 0xb),
    ('4', 0xc),
    ('r', 0xd),
    ('f', 0xe),
    ('v', 0xf),
];

/// how many polls a key reads as held after its last event. terminals
/// report repeats, never releases, so a held key arrives as a trickle of
/// events with a repeat-delay gap this has to outlast
const KEY_HOLD_POLLS: u8 = 6;

/// one frame's worth of outside world: the keypad, plus the control
/// requests that belong to the emulator rather than the program
#[derive(Debug, Default)]
pub struct InputState {
    pub keys: [bool; KEYPAD_KEYS],
    pub toggle_pause: bool,
    pub quit: bool,
}

/// reads keypresses
pub trait Input {
    /// drain pending events and report the current frame's input
    fn poll(&mut self) -> Result<InputState, Error>;
}

/// terminal implementation over crossterm events
pub struct TermInput {
    keymap: HashMap<char, u8>,
    held: [u8; KEYPAD_KEYS],
}

impl TermInput {
    pub fn new() -> Result<TermInput, Error> {
        terminal::enable_raw_mode()?;
        Ok(TermInput {
            keymap: HashMap::from(QWERTY_KEYMAP),
            held: [0; KEYPAD_KEYS],
        })
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Input for TermInput {
    fn poll(&mut self) -> Result<InputState, Error> {
        let mut state = InputState::default();
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) => match evt.code {
                    KeyCode::Esc => state.quit = true,
                    KeyCode::Char(' ') => state.toggle_pause = true,
                    KeyCode::Char(key) => {
                        if let Some(&mapped) = self.keymap.get(&key) {
                            self.held[mapped as usize] = KEY_HOLD_POLLS;
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        for (key, polls) in self.held.iter_mut().enumerate() {
            state.keys[key] = *polls > 0;
            *polls = polls.saturating_sub(1);
        }
        Ok(state)
    }
}

/// scripted input for tests: the given keys are down on every poll
pub struct DummyInput {
    state: [bool; KEYPAD_KEYS],
}

impl DummyInput {
    pub fn new(down: &[u8]) -> DummyInput {
        let mut state = [false; KEYPAD_KEYS];
        for &key in down {
            state[key as usize & 0x0f] = true;
        }
        DummyInput { state }
    }
}

impl Input for DummyInput {
    fn poll(&mut self) -> Result<InputState, Error> {
        Ok(InputState {
            keys: self.state,
            ..InputState::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_the_whole_keypad() {
        let keymap = HashMap::from(QWERTY_KEYMAP);
        let mut seen: Vec<u8> = keymap.values().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0x0..=0xf).collect::<Vec<u8>>());
    }

    #[test]
    fn test_dummy_input_reports_its_keys() -> Result<(), Error> {
        let mut input = DummyInput::new(&[0x1, 0xf]);
        let state = input.poll()?;
        assert!(state.keys[0x1] && state.keys[0xf]);
        assert_eq!(state.keys.iter().filter(|&&down| down).count(), 2);
        assert!(!state.quit && !state.toggle_pause);
        Ok(())
    }
}
