//! Writes statistics as `PREFIX name=value` lines to a sink configured once per process.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::warn;

struct StatisticSink {
    prefix: &'static str,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl Debug for StatisticSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticSink")
            .field("prefix", &self.prefix)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_SINK: OnceLock<Mutex<StatisticSink>> = OnceLock::new();

/// Enables statistic logging.
///
/// Every statistic is written as `{prefix} {name}={value}`, with the name converted to `casing`
/// if one is given. Without a `writer` the statistics go to stdout. Only the first call has an
/// effect; until it is made, [`log_statistic`] does nothing.
pub fn configure_statistic_logging(
    prefix: &'static str,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_SINK.get_or_init(|| {
        Mutex::new(StatisticSink {
            prefix,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Write a single statistic, if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(sink) = STATISTIC_SINK.get() else {
        return;
    };
    let Ok(mut sink) = sink.lock() else {
        return;
    };

    let name = match sink.casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    let prefix = sink.prefix;
    if let Err(error) = writeln!(sink.writer, "{prefix} {name}={value}") {
        warn!("Failed to write statistic {name}: {error}");
    }
}

pub fn should_log_statistics() -> bool {
    STATISTIC_SINK.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    // The sink is process-wide, so this is the only test in the crate which configures it.
    #[test]
    fn write_failures_do_not_abort_logging() {
        configure_statistic_logging("c STAT", Some(Case::Snake), Some(Box::new(FailingWriter)));

        assert!(should_log_statistics());
        log_statistic("pairsExamined", 3);
        log_statistic("pairsExamined", 4);
    }
}
