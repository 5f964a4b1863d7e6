use crate::control::GapFollowController;
use crate::time::sleep_ms;
use crate::transport::{ActuatorSink, RangeSource};
use crossbeam_channel::{Receiver, Sender};
use gapfollow_data::Command;
use std::thread::JoinHandle;

/// Struct that owns the control thread.
pub struct ControllerThreads {
    pub(crate) terminator_tx: Sender<bool>,
    pub(crate) control_thread: Option<JoinHandle<()>>,
}

/// One synchronous pipeline run per scan, until the terminator fires or a
/// channel peer disconnects. Empty scans are dropped here so `compute`
/// always sees at least one beam.
pub(crate) fn control_loop<S, A>(
    controller: GapFollowController,
    mut source: S,
    mut sink: A,
    terminator_rx: Receiver<bool>,
) where
    S: RangeSource,
    A: ActuatorSink,
{
    while !do_terminate(&terminator_rx) {
        let scan = match source.poll_scan() {
            Ok(Some(scan)) => scan,
            Ok(None) => {
                sleep_ms(1);
                continue;
            }
            Err(_) => break,
        };

        if scan.is_empty() {
            eprintln!("Dropping empty scan");
            continue;
        }

        let command = controller.compute(&scan);
        if let Err(e) = sink.send_command(command) {
            eprintln!("{e}");
            break;
        }
    }

    // Failsafe: zero the actuators before releasing the sink, on every
    // exit path.
    if let Err(e) = sink.send_command(Command::STOP) {
        eprintln!("{e}");
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join the control thread.
/// This function is automatically called when `controller_threads` is dropped.
pub fn join(controller_threads: &mut ControllerThreads) {
    // The thread may already have exited on disconnect and dropped its
    // receiver, so a failed send is fine here.
    let _ = controller_threads.terminator_tx.send(true);

    if controller_threads.control_thread.is_some() {
        let thread = controller_threads.control_thread.take().unwrap();
        thread.join().unwrap();
    }
}

impl Drop for ControllerThreads {
    fn drop(&mut self) {
        join(self);
    }
}
