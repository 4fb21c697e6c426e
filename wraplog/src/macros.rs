/// Append a formatted line through a [`Logger`](crate::Logger).
///
/// ```no_run
/// use wraplog::{tlog, LogSink};
///
/// let sink = LogSink::at("/tmp/updater-support.log");
/// let log = sink.logger(Some("UpdateChecker"));
/// let version = "2.4.1";
/// tlog!(log, "found update {version} ({} bytes)", 1_048_576);
/// ```
///
/// Arguments are type-checked by `format_args!`; failures to write are
/// swallowed like [`Logger::log`](crate::Logger::log).
#[macro_export]
macro_rules! tlog {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(::std::format_args!($($arg)+))
    };
}
