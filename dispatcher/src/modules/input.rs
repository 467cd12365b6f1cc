use std::io::BufRead;

use crossbeam_channel::Sender;
use log::warn;
use thiserror::Error;

use shared_resources::direction::Direction;
use shared_resources::{ElevatorId, Floor};

pub const USAGE: &str = "\
Commands:
  generate <n>                   submit n random requests to both systems
  step <n>                       advance both systems n ticks
  status                         print the status of every elevator
  call up|down <floor>           hall call
  floor <id> <floor>             floor request from inside elevator <id>
  evacuate                       send every elevator to the evacuation floor
  force <id> <current> <dest>    move elevator <id> and restart it towards <dest>
  usage                          print this text
  end                            finish all pending work and print the summary";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate(usize),
    Step(u64),
    Status,
    Call(Direction, Floor),
    Floor(ElevatorId, Floor),
    Evacuate,
    Force(ElevatorId, Floor, Floor),
    Usage,
    End,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s)")]
    WrongArgumentCount { command: &'static str, expected: usize },

    #[error("{argument:?} is not a valid {what}")]
    InvalidArgument { argument: String, what: &'static str },
}

fn argument<T: std::str::FromStr>(argument: &str, what: &'static str) -> Result<T, InputError> {
    argument.parse().map_err(|_| InputError::InvalidArgument {
        argument: argument.to_string(),
        what: what,
    })
}

fn direction(argument: &str) -> Result<Direction, InputError> {
    match argument.to_ascii_lowercase().as_str() {
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        _ => Err(InputError::InvalidArgument {
            argument: argument.to_string(),
            what: "direction",
        }),
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let (name, args) = match words.split_first() {
        Some((name, args)) => (name.to_ascii_lowercase(), args),
        None => return Ok(None),
    };

    let arity = |command: &'static str, expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(InputError::WrongArgumentCount { command: command, expected: expected })
        }
    };

    let command = match name.as_str() {
        "generate" => {
            arity("generate", 1)?;
            Command::Generate(argument(args[0], "request count")?)
        },
        "step" => {
            arity("step", 1)?;
            Command::Step(argument(args[0], "step count")?)
        },
        "status" => {
            arity("status", 0)?;
            Command::Status
        },
        "call" => {
            arity("call", 2)?;
            Command::Call(direction(args[0])?, argument(args[1], "floor")?)
        },
        "floor" => {
            arity("floor", 2)?;
            Command::Floor(argument(args[0], "elevator id")?, argument(args[1], "floor")?)
        },
        "evacuate" => {
            arity("evacuate", 0)?;
            Command::Evacuate
        },
        "force" => {
            arity("force", 3)?;
            Command::Force(
                argument(args[0], "elevator id")?,
                argument(args[1], "floor")?,
                argument(args[2], "floor")?,
            )
        },
        "usage" | "help" => Command::Usage,
        "end" | "exit" | "quit" => Command::End,
        _ => return Err(InputError::UnknownCommand(name)),
    };
    Ok(Some(command))
}

/// Reads commands until `end` or end of input and forwards them. End of
/// input is forwarded as `Command::End`.
pub fn main<R: BufRead>(input: R, command_tx: Sender<Command>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            },
        };
        match parse_command(&line) {
            Ok(Some(command)) => {
                if command_tx.send(command).is_err() || command == Command::End {
                    return;
                }
            },
            Ok(None) => {},
            Err(e) => {
                println!("Error: {}", e);
                println!("{}", USAGE);
            },
        }
    }
    let _ = command_tx.send(Command::End);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crossbeam_channel::unbounded;

    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!(parse_command("generate 40"), Ok(Some(Command::Generate(40))));
        assert_eq!(parse_command("step 3"), Ok(Some(Command::Step(3))));
        assert_eq!(parse_command("status"), Ok(Some(Command::Status)));
        assert_eq!(parse_command("call UP 7"), Ok(Some(Command::Call(Direction::Up, 7))));
        assert_eq!(parse_command("call down -2"), Ok(Some(Command::Call(Direction::Down, -2))));
        assert_eq!(parse_command("floor 1 9"), Ok(Some(Command::Floor(1, 9))));
        assert_eq!(parse_command("  evacuate  "), Ok(Some(Command::Evacuate)));
        assert_eq!(parse_command("force 0 1 8"), Ok(Some(Command::Force(0, 1, 8))));
        assert_eq!(parse_command("usage"), Ok(Some(Command::Usage)));
        assert_eq!(parse_command("End"), Ok(Some(Command::End)));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_command("jump"), Err(InputError::UnknownCommand("jump".to_string())));
        assert_eq!(
            parse_command("step"),
            Err(InputError::WrongArgumentCount { command: "step", expected: 1 })
        );
        assert!(matches!(parse_command("call sideways 3"), Err(InputError::InvalidArgument { .. })));
        assert!(matches!(parse_command("floor 300 2"), Err(InputError::InvalidArgument { .. })));
        assert!(matches!(parse_command("generate -1"), Err(InputError::InvalidArgument { .. })));
    }

    #[test]
    fn forwards_commands_and_ends_on_eof() {
        let (command_tx, command_rx) = unbounded();
        main(Cursor::new("generate 2\nnonsense\n\nstep 1\n"), command_tx);
        let received: Vec<Command> = command_rx.try_iter().collect();
        assert_eq!(received, vec![Command::Generate(2), Command::Step(1), Command::End]);
    }

    #[test]
    fn stops_reading_after_end() {
        let (command_tx, command_rx) = unbounded();
        main(Cursor::new("end\nstatus\n"), command_tx);
        let received: Vec<Command> = command_rx.try_iter().collect();
        assert_eq!(received, vec![Command::End]);
    }
}
