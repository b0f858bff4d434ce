use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};

use crate::events::{CarouselEvent, ControlClick, PointerEvent, TouchEvent};
use crate::keys::Key;

pub const USAGE: &str = "commands: next | prev | goto <n> | key <KeyName> | enter | leave | \
touch-start <x> | touch-move <x> | touch-end | settings | \
toggle autoplay|controls|indicators | interval <ms> | show | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    AutoPlay,
    Controls,
    Indicators,
}

/// One line typed by the user of the command-line host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Forwarded to the mounted carousel as-is.
    Event(CarouselEvent),
    /// Click on the indicator for this zero-based slide.
    GoTo(usize),
    Key(Key),
    Settings,
    Toggle(Toggle),
    Interval(u64),
    Show,
    Quit,
}

impl FromStr for HostCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };
        let arg = words.next();
        if words.next().is_some() {
            bail!("too many arguments for '{verb}'");
        }

        let cmd = match (verb, arg) {
            ("next", None) => HostCommand::Event(CarouselEvent::Control(ControlClick::Next)),
            ("prev" | "previous", None) => {
                HostCommand::Event(CarouselEvent::Control(ControlClick::Previous))
            }
            ("goto", Some(n)) => {
                let n: usize = n.parse().with_context(|| format!("invalid slide '{n}'"))?;
                let index = n
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("slides are numbered from 1"))?;
                HostCommand::GoTo(index)
            }
            ("key", Some(name)) => HostCommand::Key(name.parse()?),
            ("enter", None) => HostCommand::Event(CarouselEvent::Pointer(PointerEvent::Enter)),
            ("leave", None) => HostCommand::Event(CarouselEvent::Pointer(PointerEvent::Leave)),
            ("touch-start", Some(x)) => HostCommand::Event(CarouselEvent::Touch(TouchEvent::Start {
                x: parse_coord(x)?,
            })),
            ("touch-move", Some(x)) => HostCommand::Event(CarouselEvent::Touch(TouchEvent::Move {
                x: parse_coord(x)?,
            })),
            ("touch-end", None) => HostCommand::Event(CarouselEvent::Touch(TouchEvent::End)),
            ("settings", None) => HostCommand::Settings,
            ("toggle", Some("autoplay")) => HostCommand::Toggle(Toggle::AutoPlay),
            ("toggle", Some("controls")) => HostCommand::Toggle(Toggle::Controls),
            ("toggle", Some("indicators")) => HostCommand::Toggle(Toggle::Indicators),
            ("interval", Some(ms)) => {
                HostCommand::Interval(ms.parse().with_context(|| format!("invalid interval '{ms}'"))?)
            }
            ("show", None) => HostCommand::Show,
            ("quit" | "exit", None) => HostCommand::Quit,
            _ => bail!("unrecognized command '{}'", line.trim()),
        };
        Ok(cmd)
    }
}

fn parse_coord(raw: &str) -> Result<f32> {
    let x: f32 = raw
        .parse()
        .with_context(|| format!("invalid coordinate '{raw}'"))?;
    if !x.is_finite() {
        bail!("coordinate must be finite");
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> HostCommand {
        line.parse().unwrap()
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(
            parse("next"),
            HostCommand::Event(CarouselEvent::Control(ControlClick::Next))
        );
        assert_eq!(
            parse("  prev "),
            HostCommand::Event(CarouselEvent::Control(ControlClick::Previous))
        );
        assert_eq!(parse("goto 3"), HostCommand::GoTo(2));
        assert!("goto 0".parse::<HostCommand>().is_err());
    }

    #[test]
    fn touch_and_pointer_commands() {
        assert_eq!(
            parse("touch-start 100"),
            HostCommand::Event(CarouselEvent::Touch(TouchEvent::Start { x: 100.0 }))
        );
        assert_eq!(
            parse("touch-move 40.5"),
            HostCommand::Event(CarouselEvent::Touch(TouchEvent::Move { x: 40.5 }))
        );
        assert_eq!(
            parse("enter"),
            HostCommand::Event(CarouselEvent::Pointer(PointerEvent::Enter))
        );
        assert!("touch-move NaN".parse::<HostCommand>().is_err());
    }

    #[test]
    fn host_commands() {
        assert_eq!(parse("key ArrowLeft"), HostCommand::Key(Key::ArrowLeft));
        assert_eq!(parse("key q"), HostCommand::Key(Key::Other("q".into())));
        assert_eq!(parse("toggle indicators"), HostCommand::Toggle(Toggle::Indicators));
        assert_eq!(parse("interval 2500"), HostCommand::Interval(2500));
        assert_eq!(parse("quit"), HostCommand::Quit);
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<HostCommand>().is_err());
        assert!("dance".parse::<HostCommand>().is_err());
        assert!("next now".parse::<HostCommand>().is_err());
        assert!("toggle lights".parse::<HostCommand>().is_err());
        assert!("interval fast".parse::<HostCommand>().is_err());
    }
}
