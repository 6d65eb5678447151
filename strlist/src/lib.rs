//! Command-dispatched string sequence engine.
//!
//! A macro/scripting host manipulates an ordered list of strings purely
//! through textual method names and a single textual argument blob. The host
//! never sees native types: requests go through [`dispatch()`], results come
//! back in the [`Reply`] envelope (integer, borrowed element view, or a newly
//! created owned list).

pub mod args;
pub mod dispatch;
pub mod list;

pub use dispatch::{dispatch, DispatchError, MethodId, Reply};
pub use list::{Cursor, StrList};
