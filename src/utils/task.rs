use eframe::egui;
use std::future::Future;
use std::io;
use std::sync::mpsc::{self, Receiver};
use tokio::runtime::{Builder, Runtime};

/// Runs network work off the UI thread.
///
/// Results come back over a std channel that the UI drains with `try_recv`
/// once per frame.
pub struct TaskRunner {
    runtime: Runtime,
}

impl TaskRunner {
    pub fn new() -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("latex-uploader-io")
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }

    /// Spawn `future` and return the receiver its single result arrives on.
    ///
    /// `ctx` is asked to repaint once the result is sent so the UI picks it up
    /// without waiting for input.
    pub fn spawn<T, F>(&self, ctx: &egui::Context, future: F) -> Receiver<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = future.await;
            if sender.send(result).is_err() {
                log::debug!("Task finished after its receiver was dropped");
            }
            ctx.request_repaint();
        });
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn result_arrives_on_receiver() {
        let runner = TaskRunner::new().unwrap();
        let ctx = egui::Context::default();
        let receiver = runner.spawn(&ctx, async { 40 + 2 });
        assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).unwrap(), 42);
    }

    #[test]
    fn panicking_task_disconnects() {
        let runner = TaskRunner::new().unwrap();
        let ctx = egui::Context::default();
        let receiver = runner.spawn(&ctx, async {
            if true {
                panic!("boom");
            }
            1
        });
        assert_eq!(
            receiver.recv_timeout(Duration::from_secs(5)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        );
    }
}
