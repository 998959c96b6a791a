//! GUI-thread executor
//!
//! The dialog lives on one thread. Other threads hand it closures through a
//! [`GuiHandle`] and block until the closure has run, so commands never
//! interleave and each one sees the state the previous one left behind.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::dialog::Dialog;

type Job = Box<dyn FnOnce(&mut Dialog) + Send>;

/// Owns the dialog and runs marshalled jobs against it
pub struct GuiExecutor {
    dialog: Dialog,
    jobs: Receiver<Job>,
}

/// Cloneable, sendable handle for running code on the GUI thread
#[derive(Clone)]
pub struct GuiHandle {
    jobs: Sender<Job>,
}

impl GuiExecutor {
    /// Create an executor for `dialog` and the first handle to it
    pub fn new(dialog: Dialog) -> (Self, GuiHandle) {
        let (tx, rx) = mpsc::channel();
        (
            Self { dialog, jobs: rx },
            GuiHandle { jobs: tx },
        )
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Run the next job, blocking until one arrives. Returns `false` once
    /// every handle has been dropped.
    pub fn run_once(&mut self) -> bool {
        match self.jobs.recv() {
            Ok(job) => {
                job(&mut self.dialog);
                true
            }
            Err(_) => false,
        }
    }

    /// Service jobs until every handle is gone, then hand the dialog back
    pub fn run(mut self) -> Dialog {
        crate::log!("GuiExecutor: running");
        while self.run_once() {}
        crate::log!("GuiExecutor: all handles dropped");
        self.dialog
    }
}

impl GuiHandle {
    /// Run `f` on the GUI thread and wait for its result. Returns `None`
    /// without running anything if the executor no longer exists.
    pub fn execute_on_gui<R, F>(&self, f: F) -> Option<R>
    where
        R: Send + 'static,
        F: FnOnce(&mut Dialog) -> R + Send + 'static,
    {
        let (reply_tx, reply_rx) = mpsc::channel();
        let job: Job = Box::new(move |dialog| {
            // Receiver gone means the caller stopped waiting
            let _ = reply_tx.send(f(dialog));
        });

        if self.jobs.send(job).is_err() {
            crate::log!("execute_on_gui: executor gone, skipping");
            return None;
        }
        reply_rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::options::CheckBoxOptions;
    use std::thread;

    #[test]
    fn test_jobs_run_in_order_on_owner() {
        let (executor, handle) = GuiExecutor::new(Dialog::new("t", None, false));

        let worker = thread::spawn(move || {
            let mut counts = Vec::new();
            for i in 0..5 {
                let count = handle.execute_on_gui(move |dialog| {
                    dialog.add_check_box(CheckBoxOptions {
                        title: format!("Box {i}"),
                        name: format!("box{i}"),
                        checked: false,
                    });
                    dialog.cursor().current_index
                });
                counts.push(count);
            }
            counts
        });

        let dialog = executor.run();
        let counts = worker.join().unwrap();
        assert_eq!(counts, (1..=5).map(Some).collect::<Vec<_>>());
        assert_eq!(dialog.cursor().current_index, 5);
    }

    #[test]
    fn test_handles_can_be_cloned_across_threads() {
        let (executor, handle) = GuiExecutor::new(Dialog::new("t", None, false));
        let workers: Vec<_> = (0..3)
            .map(|_| {
                let handle = handle.clone();
                thread::spawn(move || handle.execute_on_gui(|d| d.title().to_string()))
            })
            .collect();
        drop(handle);

        executor.run();
        for worker in workers {
            assert_eq!(worker.join().unwrap().as_deref(), Some("t"));
        }
    }

    #[test]
    fn test_call_skipped_when_executor_gone() {
        let (executor, handle) = GuiExecutor::new(Dialog::new("t", None, false));
        drop(executor);
        assert_eq!(handle.execute_on_gui(|d| d.pages().len()), None);
    }

    #[test]
    fn test_run_once() {
        let (mut executor, handle) = GuiExecutor::new(Dialog::new("t", None, false));
        let worker = thread::spawn(move || handle.execute_on_gui(|d| d.root()));
        assert!(executor.run_once());
        let root = worker.join().unwrap();
        assert_eq!(root, Some(executor.dialog().root()));
        // the worker's handle is gone now
        assert!(!executor.run_once());
    }
}
