//! Output helpers shared by the dispatcher.

/// Write a line to `$dest`, returning [`exit_code::ERROR`](crate::exit_code::ERROR)
/// from the enclosing function if the stream is gone.
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
