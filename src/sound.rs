use beep::beep;
use std::error::Error;

/// the interpreter's whole audio contract is "sound timer above zero
/// means tone"; the driver relays that here once per frame
pub trait Sound {
    fn set_active(&mut self, active: bool) -> Result<(), Box<dyn Error>>;
}

const SIMPLEBEEP_PITCH: u16 = 2093; // C

/// fixed-pitch tone through the pc speaker, latched so the device is
/// only poked on edges
pub struct SimpleBeep {
    is_beeping: bool,
}

impl SimpleBeep {
    pub fn new() -> Self {
        SimpleBeep { is_beeping: false }
    }
}

impl Sound for SimpleBeep {
    fn set_active(&mut self, active: bool) -> Result<(), Box<dyn Error>> {
        if active != self.is_beeping {
            beep(if active { SIMPLEBEEP_PITCH } else { 0 })?;
            self.is_beeping = active;
        }
        Ok(())
    }
}

pub struct Mute {}

impl Mute {
    pub fn new() -> Self {
        Mute {}
    }
}

impl Sound for Mute {
    fn set_active(&mut self, _active: bool) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
