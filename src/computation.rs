use std::fmt::Arguments;
use std::io::Write;

///
/// Trait for objects that observe a potentially long-running computation.
///
/// Algorithms in this crate that may run for a long time (currently the strong
/// Groebner basis computation and polynomial factorization) take a controller,
/// and report their progress through it. Progress is reported as a stream of short
/// symbols, which are documented at the corresponding algorithm.
///
pub trait ComputationController: Clone {

    fn log(&self, args: Arguments);

    ///
    /// Runs the given computation, surrounding the reported progress with a
    /// description of the computation.
    ///
    fn run_computation<F, T>(self, description: Arguments, computation: F) -> T
        where F: FnOnce(&Self) -> T
    {
        self.log(format_args!("{}", description));
        let result = computation(&self);
        self.log(format_args!("done\n"));
        return result;
    }
}

#[macro_export]
macro_rules! log_progress {
    ($controller:expr, $($args:tt)*) => {
        ($controller).log(std::format_args!($($args)*))
    };
}

///
/// Writes all progress to stdout.
///
/// We use `print!` instead of writing to `Stdout` directly, since this works
/// with output capture in tests.
///
#[derive(Clone, Copy, Debug)]
pub struct LogProgress;

impl ComputationController for LogProgress {

    fn log(&self, args: Arguments) {
        print!("{}", args);
        _ = std::io::stdout().flush();
    }
}

///
/// Ignores all progress reports.
///
#[derive(Clone, Copy, Debug)]
pub struct DontObserve;

impl ComputationController for DontObserve {

    fn log(&self, _args: Arguments) {}
}

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
#[derive(Clone)]
struct RecordProgress(Rc<RefCell<String>>);

#[cfg(test)]
impl ComputationController for RecordProgress {

    fn log(&self, args: Arguments) {
        self.0.borrow_mut().push_str(&format!("{}", args));
    }
}

#[test]
fn test_run_computation() {
    let record = RecordProgress(Rc::new(RefCell::new(String::new())));
    let result = record.clone().run_computation(format_args!("compute[{}]", 3), |controller| {
        log_progress!(controller, "s");
        log_progress!(controller, "(b={})", 2);
        5
    });
    assert_eq!(5, result);
    assert_eq!("compute[3]s(b=2)done\n", record.0.borrow().as_str());

    assert_eq!(7, DontObserve.run_computation(format_args!("ignored"), |_| 7));
}
