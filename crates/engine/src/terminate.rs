//! Process termination capability used by the "or die" entry points.

/// Ends the program with an exit status.
pub trait Terminate {
    fn terminate(&self, status: i32) -> !;
}

/// Exits the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, status: i32) -> ! {
        std::process::exit(status)
    }
}

/// Panics with the exit status instead of exiting.
///
/// Lets tests observe a termination with `#[should_panic]` or
/// `std::panic::catch_unwind`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicExit;

impl Terminate for PanicExit {
    fn terminate(&self, status: i32) -> ! {
        panic!("terminated with exit status {status}")
    }
}
