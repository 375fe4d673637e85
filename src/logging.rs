//! Backends for the `log` facade, selected by cargo feature. The core
//! crate only ever talks to `log`, so swapping the transport is a feature
//! flag, not a code change.

#[cfg(all(feature = "defmt_logger", not(feature = "null_logger")))]
mod backend {
    use defmt::Display2Format;
    use log::{Level, LevelFilter, Metadata, Record};

    struct DefmtLogger;

    static LOGGER: DefmtLogger = DefmtLogger;

    impl log::Log for DefmtLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Info
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                let args = Display2Format(record.args());
                match record.level() {
                    Level::Error => defmt::error!("{}", args),
                    Level::Warn => defmt::warn!("{}", args),
                    Level::Info => defmt::info!("{}", args),
                    Level::Debug => defmt::debug!("{}", args),
                    Level::Trace => defmt::trace!("{}", args),
                }
            }
        }

        fn flush(&self) {}
    }

    pub fn init() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Info);
    }
}

#[cfg(all(feature = "null_logger", not(feature = "defmt_logger")))]
mod backend {
    use log::{LevelFilter, Metadata, Record};

    struct NullLogger;

    static LOGGER: NullLogger = NullLogger;

    impl log::Log for NullLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            false
        }

        fn log(&self, _record: &Record) {}

        fn flush(&self) {}
    }

    pub fn init() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Off);
    }
}

pub use backend::init;
