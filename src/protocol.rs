use std::fmt;

use collections::DynamicArray;
use log::trace;
use thiserror::Error;

use crate::hash_map::HashMap;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line, nothing to run
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Right verb, wrong number of arguments
    #[error("wrong number of arguments for '{command}' (expected: {expected}, got: {got})")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("not an integer: {0}")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get(String),
    Remove(String),
    Contains(String),
    Clear,
    Resize(i64),
    Load,
    EmptyBuckets,
    Keys,
    Size,
    Capacity,
    Dump,
}

#[derive(Debug, PartialEq)]
pub enum Response {
    Ok,
    Nil,
    Value(String),
    Bool(bool),
    Count(usize),
    Load(f64),
    Keys(DynamicArray<String>),
    Dump(String),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => write!(f, "OK"),
            Response::Nil => write!(f, "(nil)"),
            Response::Value(v) => write!(f, "{v}"),
            Response::Bool(b) => write!(f, "{b}"),
            Response::Count(n) => write!(f, "{n}"),
            Response::Load(load) => write!(f, "{load}"),
            Response::Keys(keys) => write!(f, "{keys}"),
            Response::Dump(dump) => write!(f, "{}", dump.trim_end()),
        }
    }
}

/// Parses one line of input into a [`Command`]
pub fn parse_request(line: &str) -> Result<Command, ParseError> {
    let args: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, rest)) = args.split_first() else {
        return Err(ParseError::Empty);
    };

    let cmd = match verb {
        "put" => {
            let [key, value] = arity::<2>("put", rest)?;
            Command::Put {
                key: key.into(),
                value: value.into(),
            }
        }
        "get" => Command::Get(arity::<1>("get", rest)?[0].into()),
        "remove" => Command::Remove(arity::<1>("remove", rest)?[0].into()),
        "contains" => Command::Contains(arity::<1>("contains", rest)?[0].into()),
        "resize" => {
            let [cap] = arity::<1>("resize", rest)?;
            let cap = cap
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidNumber(cap.to_string()))?;
            Command::Resize(cap)
        }
        "clear" => nullary("clear", rest, Command::Clear)?,
        "load" => nullary("load", rest, Command::Load)?,
        "empty" => nullary("empty", rest, Command::EmptyBuckets)?,
        "keys" => nullary("keys", rest, Command::Keys)?,
        "size" => nullary("size", rest, Command::Size)?,
        "capacity" => nullary("capacity", rest, Command::Capacity)?,
        "dump" => nullary("dump", rest, Command::Dump)?,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(cmd)
}

/// Runs `cmd` against the map and builds the reply
pub fn handle_request(map: &mut HashMap<String>, cmd: Command) -> Response {
    trace!(target: "handle_request", "{cmd:?}");
    match cmd {
        Command::Put { key, value } => {
            map.put(&key, value);
            Response::Ok
        }
        Command::Get(key) => match map.get(&key) {
            Some(v) => Response::Value(v.clone()),
            None => Response::Nil,
        },
        Command::Remove(key) => {
            map.remove(&key);
            Response::Ok
        }
        Command::Contains(key) => Response::Bool(map.contains_key(&key)),
        Command::Clear => {
            map.clear();
            Response::Ok
        }
        Command::Resize(cap) => {
            map.resize_table(cap);
            Response::Ok
        }
        Command::Load => Response::Load(map.table_load()),
        Command::EmptyBuckets => Response::Count(map.empty_buckets()),
        Command::Keys => Response::Keys(map.get_keys()),
        Command::Size => Response::Count(map.size()),
        Command::Capacity => Response::Count(map.capacity()),
        Command::Dump => Response::Dump(map.to_string()),
    }
}

fn arity<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::WrongArity {
        command,
        expected: N,
        got: args.len(),
    })
}

fn nullary(command: &'static str, args: &[&str], cmd: Command) -> Result<Command, ParseError> {
    arity::<0>(command, args).map(|_| cmd)
}

#[cfg(test)]
mod test {
    use super::{Command, ParseError, Response, handle_request, parse_request};
    use crate::{hash_functions::hash_function_1, hash_map::HashMap};

    fn run(map: &mut HashMap<String>, line: &str) -> String {
        let cmd = parse_request(line).unwrap();
        handle_request(map, cmd).to_string()
    }

    #[test]
    fn parse() {
        assert_eq!(
            parse_request("put key1 10"),
            Ok(Command::Put {
                key: "key1".into(),
                value: "10".into()
            })
        );
        assert_eq!(parse_request("  get   key1 "), Ok(Command::Get("key1".into())));
        assert_eq!(parse_request("resize -5"), Ok(Command::Resize(-5)));
        assert_eq!(parse_request("empty"), Ok(Command::EmptyBuckets));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_request(""), Err(ParseError::Empty));
        assert_eq!(parse_request("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_request("set a b"),
            Err(ParseError::UnknownCommand("set".into()))
        );
        assert_eq!(
            parse_request("put a"),
            Err(ParseError::WrongArity {
                command: "put",
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            parse_request("clear now"),
            Err(ParseError::WrongArity {
                command: "clear",
                expected: 0,
                got: 1
            })
        );
        assert_eq!(
            parse_request("resize ten"),
            Err(ParseError::InvalidNumber("ten".into()))
        );
        assert_eq!(
            ParseError::WrongArity {
                command: "get",
                expected: 1,
                got: 3
            }
            .to_string(),
            "wrong number of arguments for 'get' (expected: 1, got: 3)"
        );
    }

    #[test]
    fn session() {
        let mut map = HashMap::new(10, hash_function_1);

        assert_eq!(run(&mut map, "get key1"), "(nil)");
        assert_eq!(run(&mut map, "put key1 10"), "OK");
        assert_eq!(run(&mut map, "put key2 20"), "OK");
        assert_eq!(run(&mut map, "put key1 30"), "OK");
        assert_eq!(run(&mut map, "get key1"), "30");
        assert_eq!(run(&mut map, "size"), "2");
        assert_eq!(run(&mut map, "contains key3"), "false");
        assert_eq!(run(&mut map, "load"), "0.2");
        assert_eq!(run(&mut map, "empty"), "8");

        assert_eq!(run(&mut map, "resize 0"), "OK");
        assert_eq!(run(&mut map, "capacity"), "10");
        assert_eq!(run(&mut map, "resize 1"), "OK");
        assert_eq!(run(&mut map, "capacity"), "1");
        assert_eq!(run(&mut map, "get key2"), "20");

        assert_eq!(run(&mut map, "remove key2"), "OK");
        assert_eq!(run(&mut map, "keys"), "[key1]");
        assert_eq!(run(&mut map, "dump"), "0: SLL [key1: 30]");

        assert_eq!(run(&mut map, "clear"), "OK");
        assert_eq!(run(&mut map, "size"), "0");
        assert_eq!(
            handle_request(&mut map, Command::Keys),
            Response::Keys(Default::default())
        );
    }
}
