/// Call dispatch: user functions first, then the native table.
pub mod core;

/// The table of functions provided by the runtime.
pub mod native;

/// The native print function.
pub mod print;
