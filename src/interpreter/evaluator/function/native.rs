use std::io::{self, Write};

use crate::interpreter::{evaluator::function::print, keywords::PRINT, value::Value};

/// Signature of a native function: it receives resolved argument values and
/// the program output.
pub type NativeFn = fn(&[Value], &mut dyn Write) -> io::Result<()>;

/// An entry of the native table.
#[derive(Clone, Copy)]
pub struct NativeDef {
    /// The name programs call the function by.
    pub name: &'static str,
    /// The implementation.
    pub func: NativeFn,
}

static NATIVE_TABLE: &[NativeDef] = &[NativeDef { name: PRINT,
                                                  func: print::print, }];

/// Finds a native function by name.
///
/// # Examples
/// ```
/// use ban::interpreter::evaluator::function::native::lookup;
///
/// assert!(lookup("տպիր").is_some());
/// assert!(lookup("գումարիր").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<NativeDef> {
    NATIVE_TABLE.iter().find(|def| def.name == name).copied()
}
