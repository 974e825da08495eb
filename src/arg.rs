//! Substitution arguments.
//!
//! An [`Arg`] is what fills one `{}` in a template. Arguments borrow their values and
//! are only rendered once the formatter has decided the line is enabled. Errors are
//! tagged explicitly with [`Arg::error`] so the formatter can render a trace for the
//! ones left over after substitution.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;

/// One substitution argument.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// Absent value. Leaves its placeholder as a literal `{}`.
    Null,
    Value(&'a dyn fmt::Display),
    Error(ErrorArg<'a>),
}

/// An error value together with the name of its concrete type.
#[derive(Clone, Copy)]
pub struct ErrorArg<'a> {
    type_name: &'static str,
    error: &'a (dyn StdError + 'static),
}

impl<'a> ErrorArg<'a> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn error(&self) -> &'a (dyn StdError + 'static) {
        self.error
    }
}

impl<'a> Arg<'a> {
    pub fn value<T: fmt::Display>(value: &'a T) -> Self {
        Arg::Value(value)
    }

    pub fn error<E: StdError + 'static>(error: &'a E) -> Self {
        Arg::Error(ErrorArg {
            type_name: type_name::<E>(),
            error,
        })
    }

    /// `None` becomes [`Arg::Null`].
    pub fn option<T: fmt::Display>(value: &'a Option<T>) -> Self {
        match value {
            Some(v) => Arg::Value(v),
            None => Arg::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }

    pub fn as_error(&self) -> Option<&ErrorArg<'a>> {
        match self {
            Arg::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("Null"),
            Arg::Value(v) => f.debug_tuple("Value").field(&format_args!("{v}")).finish(),
            Arg::Error(e) => f
                .debug_struct("Error")
                .field("type_name", &e.type_name)
                .field("message", &format_args!("{}", e.error))
                .finish(),
        }
    }
}

/// Conversion used by the logging macros.
///
/// Anything implementing `Display` becomes [`Arg::Value`]; an [`Arg`] converts to itself,
/// which is how callers pass [`Arg::Null`] or [`Arg::error`] through a macro.
pub trait ToArg {
    fn to_arg(&self) -> Arg<'_>;
}

impl<T: fmt::Display> ToArg for T {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Value(self)
    }
}

impl ToArg for Arg<'_> {
    fn to_arg(&self) -> Arg<'_> {
        *self
    }
}
