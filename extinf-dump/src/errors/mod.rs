/// Builds a `map_err` closure that logs the error and yields `$value`.
#[macro_export]
macro_rules! something_with_error_log {
    ($value:expr) => {
        |e| {
            use log::error;

            error!("{}", e);
            $value
        }
    };

    ($position:expr, $value:expr) => {
        |e| {
            use log::error;

            error!("{}: {}", $position, e);
            $value
        }
    };
}

pub use something_with_error_log;
