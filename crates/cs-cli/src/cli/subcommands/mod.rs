mod exceptions;

pub use exceptions::ExceptionsCommands;
