// SPDX-License-Identifier: MPL-2.0
//! Shell commands.
//!
//! Each input line is one command. Item indexes are zero-based catalog
//! positions, as used by the gallery itself.

use crate::app::Message;
use crate::domain::gallery::{CategoryFilter, ImageFilter, ItemIndex};
use crate::ui::state::TouchPoint;
use crate::ui::viewer::{Key, Message as GalleryMessage};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
filter <label>     show one category (`all` shows everything)
open <index>       open the viewer on a catalog item (zero-based)
next | prev        step through visible items
close              close the viewer
img <name>         apply an image filter (none, grayscale, sepia, blur, high-contrast)
key <name>         press a key (ArrowLeft, ArrowRight, Escape, Enter, Space)
swipe <dx> [dy]    single-finger swipe on the viewer image
click              click the viewer image
backdrop           click the viewer backdrop
focus-out          move focus outside the viewer
theme              toggle the light/dark theme
tick               release a due announcement
state              print the gallery state
help               print this list
quit               leave the shell";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Messages forwarded to the application, in order.
    Update(Vec<Message>),
    Tick,
    State,
    Help,
    Quit,
    /// Blank or comment line.
    Nothing,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Nothing);
        };
        if name.starts_with('#') {
            return Ok(Command::Nothing);
        }

        let gallery = |message: GalleryMessage| Command::Update(vec![message.into()]);

        let command = match name {
            "filter" => {
                let label = words.next().ok_or(CommandError::MissingArgument {
                    command: "filter",
                    argument: "a category label",
                })?;
                gallery(GalleryMessage::CategorySelected(CategoryFilter::parse(label)))
            }
            "open" => {
                let raw = words.next().ok_or(CommandError::MissingArgument {
                    command: "open",
                    argument: "an item index",
                })?;
                gallery(GalleryMessage::ItemClicked(ItemIndex::new(parse_number(raw)?)))
            }
            "next" => gallery(GalleryMessage::NextPressed),
            "prev" => gallery(GalleryMessage::PreviousPressed),
            "close" => gallery(GalleryMessage::ClosePressed),
            "img" => {
                let filter = words.next().map(ImageFilter::parse).unwrap_or_default();
                gallery(GalleryMessage::ImageFilterSelected(filter))
            }
            "key" => {
                let key = words.next().ok_or(CommandError::MissingArgument {
                    command: "key",
                    argument: "a key name",
                })?;
                gallery(GalleryMessage::KeyPressed(Key::from_name(key)))
            }
            "swipe" => {
                let dx = words.next().ok_or(CommandError::MissingArgument {
                    command: "swipe",
                    argument: "a horizontal distance",
                })?;
                let dx = parse_distance(dx)?;
                let dy = words.next().map(parse_distance).transpose()?.unwrap_or(0.0);
                Command::Update(vec![
                    GalleryMessage::TouchStarted(vec![TouchPoint::default()]).into(),
                    GalleryMessage::TouchEnded(TouchPoint::new(dx, dy)).into(),
                ])
            }
            "click" => gallery(GalleryMessage::ImageClicked),
            "backdrop" => gallery(GalleryMessage::BackdropClicked),
            "focus-out" => gallery(GalleryMessage::FocusLeftViewer),
            "theme" => Command::Update(vec![Message::ToggleTheme]),
            "tick" => Command::Tick,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_number(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

fn parse_distance(raw: &str) -> Result<f32, CommandError> {
    raw.parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(command: Command) -> GalleryMessage {
        match command {
            Command::Update(mut messages) if messages.len() == 1 => match messages.remove(0) {
                Message::Gallery(message) => message,
                other => panic!("expected gallery message, got {other:?}"),
            },
            other => panic!("expected one update, got {other:?}"),
        }
    }

    #[test]
    fn parses_gallery_commands() {
        assert_eq!(
            single("open 2".parse().unwrap()),
            GalleryMessage::ItemClicked(ItemIndex::new(2))
        );
        assert_eq!(
            single("filter nature".parse().unwrap()),
            GalleryMessage::CategorySelected(CategoryFilter::parse("nature"))
        );
        assert_eq!(
            single("img sepia".parse().unwrap()),
            GalleryMessage::ImageFilterSelected(ImageFilter::Sepia)
        );
        assert_eq!(
            single("key Escape".parse().unwrap()),
            GalleryMessage::KeyPressed(Key::Escape)
        );
    }

    #[test]
    fn swipe_produces_touch_pair() {
        let Command::Update(messages) = "swipe -80".parse().unwrap() else {
            panic!("expected update");
        };
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[1],
            Message::Gallery(GalleryMessage::TouchEnded(TouchPoint::new(-80.0, 0.0)))
        );
    }

    #[test]
    fn blank_and_comment_lines_do_nothing() {
        assert_eq!("   ".parse::<Command>(), Ok(Command::Nothing));
        assert_eq!("# setup".parse::<Command>(), Ok(Command::Nothing));
    }

    #[test]
    fn errors_are_reported() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(
            "open x".parse::<Command>(),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
        assert!(matches!(
            "filter".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "filter", .. })
        ));
    }

    #[test]
    fn img_without_name_resets_filter() {
        assert_eq!(
            single("img".parse().unwrap()),
            GalleryMessage::ImageFilterSelected(ImageFilter::None)
        );
    }
}
