#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::{Arc, Mutex};

use bootseq::container::TaskModule;
use bootseq::dag::TaskDescriptor;
use bootseq::exec::from_fn;

pub use bootseq_test_utils::builders;
pub use bootseq_test_utils::{RecordingResolver, descriptors, init_tracing};

pub type ExecutionLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> ExecutionLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn logged(log: &ExecutionLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Add a concrete task to `module` that appends its name to `log` when run.
pub fn with_logged_task(module: TaskModule, log: &ExecutionLog, name: &str, deps: &[&str]) -> TaskModule {
    let descriptor = deps
        .iter()
        .fold(TaskDescriptor::new(name), |d, dep| d.after(*dep));
    let log = Arc::clone(log);
    let name = name.to_string();

    module.with_task(descriptor, move || {
        let log = Arc::clone(&log);
        let name = name.clone();
        from_fn(move || {
            log.lock().unwrap().push(name.clone());
            Ok(())
        })
    })
}
