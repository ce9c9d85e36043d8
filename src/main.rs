use std::env;
use std::error::Error;
use std::fs::File;
use std::process;
use std::time::{Duration, Instant};

use crisp8::display::{Display, MonoTermDisplay};
use crisp8::input::{Input, TermInput};
use crisp8::machine::{Machine, RunState};
use crisp8::sound::{SimpleBeep, Sound};

/// timers and the screen run at 60Hz
const FRAME: Duration = Duration::from_micros(16_667);

/// instruction cadence is decoupled from the timer tick; around 700
/// instructions per second suits most programs
const STEPS_PER_FRAME: u32 = 12;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let rom_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: crisp8 <rom-file>");
            process::exit(2);
        }
    };

    // initialise the machine first: a bad rom should fail before the
    // terminal is put into raw mode
    let mut rom = File::open(&rom_path)?;
    let mut machine = Machine::with_program(&mut rom)?;
    let mut input = TermInput::new()?;
    let mut display = MonoTermDisplay::new()?;
    let mut sound = SimpleBeep::new();
    log::info!("running {}", rom_path);

    while machine.run_state() != RunState::Halted {
        let frame_start = Instant::now();

        let controls = input.poll()?;
        if controls.quit {
            machine.halt();
        }
        if controls.toggle_pause {
            machine.toggle_pause();
            log::info!("state: {:?}", machine.run_state());
        }
        machine.set_keypad(controls.keys);

        if machine.run_state() == RunState::Running {
            for _ in 0..STEPS_PER_FRAME {
                machine.step();
            }
            machine.tick_delay();
            machine.tick_sound();
        }

        display.draw(machine.framebuffer())?;
        sound.set_active(machine.sound_active())?;

        spin_sleep::sleep(FRAME.saturating_sub(frame_start.elapsed()));
    }

    sound.set_active(false)?;

    // shove some newlines at stdout so the shell prompt lands below the
    // last frame instead of on top of it
    for _ in 0..12 {
        println!();
    }
    Ok(())
}
