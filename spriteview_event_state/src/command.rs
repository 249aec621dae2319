// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `:` command grammar.
//!
//! A command is split on whitespace; the first token is the verb.
//!
//! | input        | command              |
//! |--------------|----------------------|
//! | `e <path>`   | [`Command::Edit`]    |
//! | `q`          | [`Command::Quit`]    |
//! | (blank)      | [`Command::Nothing`] |

use alloc::string::{String, ToString};

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load the image at the given path as the active sprite.
    Edit(String),
    /// Ask the embedding application to quit.
    Quit,
    /// Blank input; nothing to do.
    Nothing,
}

/// Why a command line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The verb is not recognized.
    #[error("unknown command: {0}")]
    UnknownVerb(String),
    /// The verb needs an argument that was not given.
    #[error(":{verb} needs an argument")]
    MissingArgument {
        /// The verb.
        verb: &'static str,
    },
    /// The verb was given more arguments than it takes.
    #[error(":{verb} takes {expected} argument(s), got {found}")]
    TooManyArguments {
        /// The verb.
        verb: &'static str,
        /// Number of arguments the verb takes.
        expected: usize,
        /// Number of arguments given.
        found: usize,
    },
}

impl Command {
    /// Parses a command line (without the leading `:`).
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let mut tokens = text.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(Self::Nothing);
        };
        let args: alloc::vec::Vec<&str> = tokens.collect();
        match verb {
            "e" => match args.as_slice() {
                [] => Err(CommandError::MissingArgument { verb: "e" }),
                [path] => Ok(Self::Edit((*path).to_string())),
                _ => Err(CommandError::TooManyArguments {
                    verb: "e",
                    expected: 1,
                    found: args.len(),
                }),
            },
            "q" => {
                if args.is_empty() {
                    Ok(Self::Quit)
                } else {
                    Err(CommandError::TooManyArguments {
                        verb: "q",
                        expected: 0,
                        found: args.len(),
                    })
                }
            }
            other => Err(CommandError::UnknownVerb(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Command, CommandError};

    #[test]
    fn edit_takes_one_path() {
        assert_eq!(
            Command::parse("e samples/cat.png"),
            Ok(Command::Edit("samples/cat.png".to_string()))
        );
        assert_eq!(
            Command::parse("  e   art.png  "),
            Ok(Command::Edit("art.png".to_string()))
        );
    }

    #[test]
    fn edit_arity_is_checked() {
        assert_eq!(
            Command::parse("e"),
            Err(CommandError::MissingArgument { verb: "e" })
        );
        assert_eq!(
            Command::parse("e a b"),
            Err(CommandError::TooManyArguments {
                verb: "e",
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn quit_and_blank() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert!(Command::parse("q now").is_err());
        assert_eq!(Command::parse(""), Ok(Command::Nothing));
        assert_eq!(Command::parse(" \t "), Ok(Command::Nothing));
    }

    #[test]
    fn unknown_verb_is_reported() {
        let err = Command::parse("w out.png").unwrap_err();
        assert_eq!(err, CommandError::UnknownVerb("w".to_string()));
        assert_eq!(err.to_string(), "unknown command: w");
    }

    #[test]
    fn arity_errors_render() {
        let err = Command::parse("e a b").unwrap_err();
        assert_eq!(err.to_string(), ":e takes 1 argument(s), got 2");
        let err = Command::parse("e").unwrap_err();
        assert_eq!(err.to_string(), ":e needs an argument");
    }
}
