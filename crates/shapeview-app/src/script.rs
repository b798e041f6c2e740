//! Line-oriented command script that drives a [`Screen`](crate::Screen).
//!
//! One command per line, `//` starts a comment:
//!
//! ```text
//! shape Circle
//! tap 10 10
//! tap 40 50
//! select 45 50
//! rotate 30
//! release
//! color #ff0000
//! ```

use crate::screen::ScreenAction;
use kurbo::Point;
use shapeview_core::{ShapeRegistry, TintColor};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: unknown shape `{name}`")]
    UnknownShape { line: usize, name: String },
    #[error("line {line}: bad argument `{arg}`")]
    BadArgument { line: usize, arg: String },
    #[error("line {line}: `{command}` expects {expected} argument(s)")]
    Arity {
        line: usize,
        command: String,
        expected: usize,
    },
}

/// Parse one script line. Blank lines and comments yield `None`.
///
/// `line` is 1-based and only used for error messages.
pub fn parse_line(
    registry: &ShapeRegistry,
    line: usize,
    text: &str,
) -> Result<Option<ScreenAction>, ScriptError> {
    let text = text.split("//").next().unwrap_or_default().trim();
    let mut words = text.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let arity = |expected: usize| -> Result<(), ScriptError> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ScriptError::Arity {
                line,
                command: command.to_string(),
                expected,
            })
        }
    };
    let number = |arg: &str| -> Result<f64, ScriptError> {
        match arg.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ScriptError::BadArgument {
                line,
                arg: arg.to_string(),
            }),
        }
    };

    let action = match command {
        "shape" => {
            arity(1)?;
            let index = registry
                .entries()
                .iter()
                .position(|e| e.name.eq_ignore_ascii_case(args[0]))
                .ok_or_else(|| ScriptError::UnknownShape {
                    line,
                    name: args[0].to_string(),
                })?;
            ScreenAction::PickShape(index)
        }
        "tap" => {
            arity(2)?;
            ScreenAction::Tap(Point::new(number(args[0])?, number(args[1])?))
        }
        "select" => {
            arity(2)?;
            ScreenAction::Select(Point::new(number(args[0])?, number(args[1])?))
        }
        "finish" => {
            arity(0)?;
            ScreenAction::Finish
        }
        "cancel" => {
            arity(0)?;
            ScreenAction::Cancel
        }
        "remove" => {
            arity(0)?;
            ScreenAction::RemoveSelected
        }
        "rotate" => {
            arity(1)?;
            ScreenAction::SlideRotation(number(args[0])?)
        }
        "release" => {
            arity(0)?;
            ScreenAction::ReleaseRotation
        }
        "tool" => {
            arity(1)?;
            match args[0] {
                "on" => ScreenAction::ToggleRotateTool(true),
                "off" => ScreenAction::ToggleRotateTool(false),
                other => {
                    return Err(ScriptError::BadArgument {
                        line,
                        arg: other.to_string(),
                    });
                }
            }
        }
        "color" => {
            arity(1)?;
            ScreenAction::PickColor(parse_hex(args[0]).ok_or_else(|| {
                ScriptError::BadArgument {
                    line,
                    arg: args[0].to_string(),
                }
            })?)
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(action))
}

/// Parse `#rrggbb` or `#rrggbbaa`.
fn parse_hex(text: &str) -> Option<TintColor> {
    let hex = text.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(TintColor::new(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(TintColor::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Option<ScreenAction>, ScriptError> {
        parse_line(&ShapeRegistry::standard(), 1, text)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("shape circle"), Ok(Some(ScreenAction::PickShape(4))));
        assert_eq!(
            parse("tap 1.5 -2"),
            Ok(Some(ScreenAction::Tap(Point::new(1.5, -2.0))))
        );
        assert_eq!(
            parse("select 3 4"),
            Ok(Some(ScreenAction::Select(Point::new(3.0, 4.0))))
        );
        assert_eq!(parse("finish"), Ok(Some(ScreenAction::Finish)));
        assert_eq!(parse("rotate 45"), Ok(Some(ScreenAction::SlideRotation(45.0))));
        assert_eq!(
            parse("tool off"),
            Ok(Some(ScreenAction::ToggleRotateTool(false)))
        );
        assert_eq!(
            parse("color #ff000080"),
            Ok(Some(ScreenAction::PickColor(TintColor::new(255, 0, 0, 128))))
        );
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   // just a note"), Ok(None));
        assert_eq!(parse("remove // trailing"), Ok(Some(ScreenAction::RemoveSelected)));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse("jump"), Err(ScriptError::UnknownCommand { .. })));
        assert!(matches!(parse("shape Hexagon"), Err(ScriptError::UnknownShape { .. })));
        assert!(matches!(parse("tap 1"), Err(ScriptError::Arity { expected: 2, .. })));
        assert!(matches!(parse("tap x 1"), Err(ScriptError::BadArgument { .. })));
        assert!(matches!(parse("color red"), Err(ScriptError::BadArgument { .. })));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for text in ["rotate nan", "rotate inf", "rotate -infinity", "tap NaN 0", "select 0 inf"] {
            assert!(
                matches!(parse(text), Err(ScriptError::BadArgument { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#000000"), Some(TintColor::black()));
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("123456"), None);
    }
}
