use std::time::{Duration, Instant};

/// Wall-clock timer for one block of work.
///
/// The end instant is recorded at most once, by [`ElapsedTimer::stop`] or by
/// `Drop`, so leaving the scope through `?`, an error value or a panic still
/// reports the duration.
#[derive(Debug)]
pub(crate) struct ElapsedTimer {
    description: String,
    start: Instant,
    end: Option<Instant>,
}

impl ElapsedTimer {
    pub(crate) fn start(description: impl Into<String>) -> Self {
        ElapsedTimer {
            description: description.into(),
            start: Instant::now(),
            end: None,
        }
    }

    /// Time since start while running, the frozen duration once stopped
    pub(crate) fn elapsed(&self) -> Duration {
        match self.end {
            Some(end) => end.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_stopped(&self) -> bool {
        self.end.is_some()
    }

    /// Record the end instant and report the duration. Later calls only
    /// return the frozen duration.
    pub(crate) fn stop(&mut self) -> Duration {
        if self.end.is_none() {
            self.end = Some(Instant::now());
            tracing::info!(
                "{}: {:.3}s",
                self.description,
                self.elapsed().as_secs_f64()
            );
        }
        self.elapsed()
    }

    /// Run `f` inside this timer's scope and hand back its result untouched
    pub(crate) fn run<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let result = f();
        self.stop();
        result
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Time `f` under `description`
pub(crate) fn timed<T>(description: &str, f: impl FnOnce() -> T) -> T {
    let _timer = ElapsedTimer::start(description);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::thread::sleep;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn elapsed_grows_until_stopped() {
        let mut timer = ElapsedTimer::start("work");
        let first = timer.elapsed();
        sleep(Duration::from_millis(5));
        assert!(timer.elapsed() > first);
        assert!(!timer.is_stopped());

        let frozen = timer.stop();
        assert!(timer.is_stopped());
        sleep(Duration::from_millis(5));
        assert_eq!(timer.elapsed(), frozen);
        assert_eq!(timer.stop(), frozen);
    }

    #[test]
    fn stop_reports_once() {
        let logs = capture_logs(|| {
            let mut timer = ElapsedTimer::start("Loading prompt");
            timer.stop();
            timer.stop();
            drop(timer);
        });
        assert_eq!(logs.matches("Loading prompt: ").count(), 1);
        assert!(logs.contains("s\n"));
    }

    #[test]
    fn drop_reports_duration() {
        let logs = capture_logs(|| {
            let _timer = ElapsedTimer::start("Scoped block");
        });
        assert!(logs.contains("Scoped block: 0.0"));
    }

    #[test]
    fn run_returns_result_and_stops() {
        let mut timer = ElapsedTimer::start("sum");
        let value = timer.run(|| 2 + 2);
        assert_eq!(value, 4);
        assert!(timer.is_stopped());
    }

    #[test]
    fn error_in_block_still_reports_and_propagates() {
        let logs = capture_logs(|| {
            let result: Result<(), AppError> =
                timed("Failing step", || Err(AppError::invalid_input("boom")));
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), "Invalid input: boom");
        });
        assert!(logs.contains("Failing step: "));
    }

    #[test]
    fn error_through_run_keeps_timer_stopped() {
        let mut timer = ElapsedTimer::start("fallible");
        let result: Result<u32, AppError> = timer.run(|| Err(AppError::invalid_input("nope")));
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
        assert!(timer.is_stopped());
    }

    #[test]
    fn panic_in_block_still_reports() {
        let logs = capture_logs(|| {
            let outcome = std::panic::catch_unwind(|| {
                timed("Panicking step", || -> u32 { panic!("boom") })
            });
            assert!(outcome.is_err());
        });
        assert!(logs.contains("Panicking step: "));
    }
}
