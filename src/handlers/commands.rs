//! Terminal commands
//!
//! The development driver reads one command per line and turns it into an
//! `Action`. Form fields are given as `key=value`; a bare word continues the
//! previous value, so `name=Ana María email=ana@email.com` works unquoted.

use crate::handlers::Action;
use crate::models::{parse_id, FormData, RecordId};
use crate::utils::errors::{CourseDeskError, Result};

pub const HELP: &str = "\
Commands:
  go <path>                 navigate to a route
  back | forward            move through history
  login <email> <password>  sign in
  register key=value...     create a visitor account
  logout                    sign out
  user new | edit <id> | save [id] key=value... | delete <id>
  course new | edit <id> | save [id] key=value... | delete <id>
  enroll <courseId>         enroll in a course
  cancel <enrollmentId>     cancel an enrollment
  close                     close the open form
  links                     list the links on screen
  help                      show this text
  quit                      exit";

/// A parsed terminal line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(Action),
    Links,
    Help,
    Quit,
}

fn usage(text: &str) -> CourseDeskError {
    CourseDeskError::Validation(vec![format!("Usage: {}", text)])
}

fn id_arg(token: Option<&str>, text: &str) -> Result<RecordId> {
    token.and_then(parse_id).ok_or_else(|| usage(text))
}

/// Collect `key=value` tokens; bare words extend the previous value
pub fn parse_form<'a, I>(tokens: I) -> FormData
where
    I: IntoIterator<Item = &'a str>,
{
    let mut form = FormData::new();
    let mut last_key: Option<String> = None;

    for token in tokens {
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                form.insert(key, value);
                last_key = Some(key.to_string());
            }
            _ => {
                if let Some(key) = &last_key {
                    let joined = format!("{} {}", form.get(key), token);
                    form.insert(key, &joined);
                }
            }
        }
    }
    form
}

/// Split `[id] key=value...` for the save commands
fn save_args(tokens: &[&str]) -> (Option<RecordId>, FormData) {
    match tokens.split_first() {
        Some((first, rest)) if !first.contains('=') => match parse_id(first) {
            Some(id) => (Some(id), parse_form(rest.iter().copied())),
            None => (None, parse_form(tokens.iter().copied())),
        },
        _ => (None, parse_form(tokens.iter().copied())),
    }
}

/// Parse one line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match *verb {
        "go" => {
            let path = args.first().ok_or_else(|| usage("go <path>"))?;
            Command::Action(Action::Navigate(path.to_string()))
        }
        "back" => Command::Action(Action::Back),
        "forward" => Command::Action(Action::Forward),
        "login" => match args {
            [email, password] => Command::Action(Action::Login {
                email: email.to_string(),
                password: password.to_string(),
            }),
            _ => return Err(usage("login <email> <password>")),
        },
        "register" => Command::Action(Action::Register(parse_form(args.iter().copied()))),
        "logout" => Command::Action(Action::Logout),
        "user" => {
            let text = "user new | edit <id> | save [id] key=value... | delete <id>";
            let action = match args.split_first() {
                Some((&"new", _)) => Action::NewUser,
                Some((&"edit", rest)) => Action::EditUser(id_arg(rest.first().copied(), text)?),
                Some((&"delete", rest)) => Action::DeleteUser(id_arg(rest.first().copied(), text)?),
                Some((&"save", rest)) => {
                    let (id, form) = save_args(rest);
                    Action::SaveUser { id, form }
                }
                _ => return Err(usage(text)),
            };
            Command::Action(action)
        }
        "course" => {
            let text = "course new | edit <id> | save [id] key=value... | delete <id>";
            let action = match args.split_first() {
                Some((&"new", _)) => Action::NewCourse,
                Some((&"edit", rest)) => Action::EditCourse(id_arg(rest.first().copied(), text)?),
                Some((&"delete", rest)) => Action::DeleteCourse(id_arg(rest.first().copied(), text)?),
                Some((&"save", rest)) => {
                    let (id, form) = save_args(rest);
                    Action::SaveCourse { id, form }
                }
                _ => return Err(usage(text)),
            };
            Command::Action(action)
        }
        "enroll" => Command::Action(Action::Enroll(id_arg(args.first().copied(), "enroll <courseId>")?)),
        "cancel" => Command::Action(Action::CancelEnrollment(id_arg(
            args.first().copied(),
            "cancel <enrollmentId>",
        )?)),
        "close" => Command::Action(Action::CloseModal),
        "links" => Command::Links,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(CourseDeskError::Validation(vec![format!(
                "Unknown command: {} (type help)",
                other
            )]))
        }
    };

    Ok(Some(command))
}
