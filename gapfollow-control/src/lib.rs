use std::sync::mpsc;

mod config;
mod constants;
mod control;
mod controller_threads;
mod error;
mod gap;
mod smoothing;
mod time;
mod transport;

use crate::constants::{COMMAND_QUEUE_DEPTH, SCAN_QUEUE_DEPTH};
use crate::controller_threads::control_loop;
use crossbeam_channel::bounded;

pub use crate::config::ControllerConfig;
pub use crate::control::GapFollowController;
pub use crate::controller_threads::{join, ControllerThreads};
pub use crate::error::GapFollowError;
pub use crate::gap::Gap;
pub use crate::transport::{ActuatorSink, RangeSource};
pub use gapfollow_data::{Command, Scan};

/// Function to launch the controller over a custom scan source and command
/// sink.
///
/// Spawns one control thread that runs the pipeline once per delivered scan
/// and zeroes the actuators before exiting. Dropping the returned
/// [`ControllerThreads`] terminates and joins the thread.
pub fn run_controller_with<S, A>(
    config: ControllerConfig,
    source: S,
    sink: A,
) -> ControllerThreads
where
    S: RangeSource + Send + 'static,
    A: ActuatorSink + Send + 'static,
{
    let (terminator_tx, terminator_rx) = bounded(10);
    let controller = GapFollowController::new(config);

    let control_thread = Some(std::thread::spawn(move || {
        control_loop(controller, source, sink, terminator_rx);
    }));

    ControllerThreads {
        terminator_tx,
        control_thread,
    }
}

/// Function to launch the controller over bounded in-process channels.
///
/// Returns the thread handle, the sender to feed scans into, and the
/// receiver the commands come out of. The channels are bounded, so at most
/// one computation is in flight and a slow consumer backpressures the
/// sensor side.
pub fn run_controller(
    config: ControllerConfig,
) -> (
    ControllerThreads,
    mpsc::SyncSender<Scan>,
    mpsc::Receiver<Command>,
) {
    let (scan_tx, scan_rx) = mpsc::sync_channel::<Scan>(SCAN_QUEUE_DEPTH);
    let (command_tx, command_rx) = mpsc::sync_channel::<Command>(COMMAND_QUEUE_DEPTH);
    let threads = run_controller_with(config, scan_rx, command_tx);
    (threads, scan_tx, command_rx)
}
