//! The dispatch adapter: textual method name + textual argument blob in,
//! typed operation against a [`StrList`] out, result marshalled back into
//! the narrow [`Reply`] envelope.
//!
//! The adapter is stateless; all state lives in the target list. Dispatch
//! success (`Ok`/`Err`) only says the name was recognized and the argument
//! decoded — the operation's own semantic outcome rides in the envelope, so
//! "replace matched nothing" is `Ok(Int(0))` while "replace got one token"
//! is an `Err`.

use std::fmt;

use crate::args;
use crate::list::StrList;


/// Canonical method identifiers accepted by the dispatcher.
///
/// Name lookup is case-sensitive; past that single lookup, dispatch is a
/// match on this tag, not on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodId {
    Count,
    Clear,
    Contains,
    Splice,
    Index,
    Item,
    Insert,
    Sort,
    Reverse,
    Append,
    Remove,
    Erase,
    Replace,
}

/// How a method decodes its argument blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// Any supplied text is ignored.
    None,
    /// The whole blob is a single value, taken verbatim.
    Value,
    /// The blob is a single non-negative integer.
    Index,
    /// The blob is comma-tokenized.
    Tokens,
}

impl MethodId {
    /// Every recognized method, in canonical order.
    pub const ALL: [MethodId; 13] = [
        MethodId::Count,
        MethodId::Clear,
        MethodId::Contains,
        MethodId::Splice,
        MethodId::Index,
        MethodId::Item,
        MethodId::Insert,
        MethodId::Sort,
        MethodId::Reverse,
        MethodId::Append,
        MethodId::Remove,
        MethodId::Erase,
        MethodId::Replace,
    ];

    /// The canonical method name.
    pub fn name(self) -> &'static str {
        match self {
            MethodId::Count => "Count",
            MethodId::Clear => "Clear",
            MethodId::Contains => "Contains",
            MethodId::Splice => "Splice",
            MethodId::Index => "Index",
            MethodId::Item => "Item",
            MethodId::Insert => "Insert",
            MethodId::Sort => "Sort",
            MethodId::Reverse => "Reverse",
            MethodId::Append => "Append",
            MethodId::Remove => "Remove",
            MethodId::Erase => "Erase",
            MethodId::Replace => "Replace",
        }
    }

    /// Resolve a method by its canonical (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Count" => Some(MethodId::Count),
            "Clear" => Some(MethodId::Clear),
            "Contains" => Some(MethodId::Contains),
            "Splice" => Some(MethodId::Splice),
            "Index" => Some(MethodId::Index),
            "Item" => Some(MethodId::Item),
            "Insert" => Some(MethodId::Insert),
            "Sort" => Some(MethodId::Sort),
            "Reverse" => Some(MethodId::Reverse),
            "Append" => Some(MethodId::Append),
            "Remove" => Some(MethodId::Remove),
            "Erase" => Some(MethodId::Erase),
            "Replace" => Some(MethodId::Replace),
            _ => None,
        }
    }

    /// The argument decoding rule for this method.
    pub fn arg_shape(self) -> ArgShape {
        match self {
            MethodId::Count | MethodId::Clear | MethodId::Sort | MethodId::Reverse => {
                ArgShape::None
            }
            MethodId::Contains | MethodId::Index | MethodId::Remove => ArgShape::Value,
            MethodId::Item | MethodId::Erase => ArgShape::Index,
            MethodId::Splice | MethodId::Insert | MethodId::Append | MethodId::Replace => {
                ArgShape::Tokens
            }
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tagged response envelope for a dispatched method call.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply<'a> {
    /// Boolean-flavoured outcomes as 1/0, counts as themselves.
    Int(i64),
    /// Borrowed element view; `None` marks "not found". Valid only until the
    /// next mutation of the source list.
    Str(Option<&'a str>),
    /// A newly created, independently owned list, moved to the caller.
    List(StrList),
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Int(value) => write!(f, "{value}"),
            Reply::Str(Some(value)) => write!(f, "\"{value}\""),
            Reply::Str(None) => write!(f, "nil"),
            Reply::List(list) => write!(f, "{list}"),
        }
    }
}

/// Dispatch-level failure: the request never reached the list.
///
/// Semantic zero-effect outcomes (bounds misses, absent values) are not
/// errors; they come back as `Reply::Int(0)` or `Reply::Str(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The method name is not one of the canonical set. A programming or
    /// integration error on the host side, not a data condition.
    UnknownMethod(String),
    /// The argument blob could not be decoded into the shape the method
    /// requires. No partial execution took place.
    BadArgument {
        method: MethodId,
        message: String,
    },
}

impl DispatchError {
    fn bad_argument(method: MethodId, message: impl Into<String>) -> Self {
        DispatchError::BadArgument {
            method,
            message: message.into(),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownMethod(name) => {
                write!(f, "unknown method '{name}'")
            }
            DispatchError::BadArgument { method, message } => {
                write!(f, "{method}: {message}")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Execute a method by name against `list`.
///
/// `Ok` means the name was recognized and the argument decoded; the
/// operation's semantic result is in the returned [`Reply`]. An absent
/// argument is equivalent to an empty blob.
pub fn dispatch<'a>(
    list: &'a mut StrList,
    method: &str,
    argument: Option<&str>,
) -> Result<Reply<'a>, DispatchError> {
    let id = MethodId::from_name(method)
        .ok_or_else(|| DispatchError::UnknownMethod(method.to_string()))?;
    call(list, id, argument)
}

/// Execute an already-resolved method against `list`.
pub fn call<'a>(
    list: &'a mut StrList,
    id: MethodId,
    argument: Option<&str>,
) -> Result<Reply<'a>, DispatchError> {
    let blob = argument.unwrap_or("");

    match id {
        MethodId::Count => Ok(Reply::Int(list.count() as i64)),
        MethodId::Clear => {
            list.clear();
            Ok(Reply::Int(1))
        }
        MethodId::Sort => {
            list.sort();
            Ok(Reply::Int(1))
        }
        MethodId::Reverse => {
            list.reverse();
            Ok(Reply::Int(1))
        }

        // The whole blob is the value, verbatim.
        MethodId::Contains => Ok(Reply::Int(list.contains(blob) as i64)),
        MethodId::Index => Ok(Reply::Int(
            list.position(blob).map_or(-1, |position| position as i64),
        )),
        MethodId::Remove => Ok(Reply::Int(list.remove(blob) as i64)),

        MethodId::Item => {
            let index = decode_index(id, blob)?;
            Ok(Reply::Str(list.item(index)))
        }
        MethodId::Erase => {
            let index = decode_index(id, blob)?;
            Ok(Reply::Int(list.erase(index) as i64))
        }

        MethodId::Append => {
            let values = args::split_args(blob);
            Ok(Reply::Int(list.append(values) as i64))
        }
        MethodId::Insert => {
            let tokens = args::split_args(blob);
            let Some((position, values)) = tokens.split_first() else {
                return Err(DispatchError::bad_argument(id, "expects a position"));
            };
            let position = decode_index(id, position)?;
            Ok(Reply::Int(list.insert(position, values.iter().copied()) as i64))
        }
        MethodId::Replace => {
            let tokens = args::split_args(blob);
            match tokens.as_slice() {
                [old, new] => Ok(Reply::Int(list.replace(old, new) as i64)),
                _ => Err(DispatchError::bad_argument(
                    id,
                    format!("expects two values, got {}", tokens.len()),
                )),
            }
        }
        MethodId::Splice => {
            let tokens = args::split_args(blob);
            let (origin, length) = match tokens.as_slice() {
                [origin] => (decode_index(id, origin)?, None),
                [origin, length] => {
                    (decode_index(id, origin)?, Some(decode_index(id, length)?))
                }
                [] => return Err(DispatchError::bad_argument(id, "expects an origin")),
                _ => {
                    return Err(DispatchError::bad_argument(
                        id,
                        format!("expects at most two values, got {}", tokens.len()),
                    ))
                }
            };
            Ok(Reply::List(list.splice(origin, length)))
        }
    }
}

fn decode_index(method: MethodId, token: &str) -> Result<usize, DispatchError> {
    args::parse_index(token).ok_or_else(|| {
        DispatchError::bad_argument(method, format!("expects a non-negative integer, got '{token}'"))
    })
}
