/// Runs work after the current event has finished dispatching.
pub trait Scheduler {
    fn defer(&self, task: Box<dyn FnOnce()>);
}

/// Zero-delay browser timeout: the task runs on the next macrotask tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextTick;

impl Scheduler for NextTick {
    fn defer(&self, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(0, task).forget();
    }
}
