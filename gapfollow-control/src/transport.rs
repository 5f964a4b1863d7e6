use crate::error::GapFollowError;
use gapfollow_data::{Command, Scan};
use std::sync::mpsc;

/// Capability interface over whatever transport delivers scans.
///
/// The controller makes no assumption about the delivery rate, only that
/// each scan is angularly uniform over the configured field of view.
pub trait RangeSource {
    /// Returns the next scan if one is ready. `Ok(None)` means no scan has
    /// arrived yet; an error means the source is gone for good.
    fn poll_scan(&mut self) -> Result<Option<Scan>, GapFollowError>;
}

/// Capability interface over whatever transport accepts commands.
pub trait ActuatorSink {
    fn send_command(&mut self, command: Command) -> Result<(), GapFollowError>;
}

impl RangeSource for mpsc::Receiver<Scan> {
    fn poll_scan(&mut self) -> Result<Option<Scan>, GapFollowError> {
        match self.try_recv() {
            Ok(scan) => Ok(Some(scan)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(GapFollowError::Disconnected),
        }
    }
}

impl ActuatorSink for mpsc::SyncSender<Command> {
    fn send_command(&mut self, command: Command) -> Result<(), GapFollowError> {
        self.send(command)
            .map_err(|_| GapFollowError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_range_source() {
        let (scan_tx, mut scan_rx) = mpsc::sync_channel::<Scan>(1);
        assert!(matches!(scan_rx.poll_scan(), Ok(None)));

        scan_tx.send(Scan::new(vec![1.0, 2.0])).unwrap();
        let scan = scan_rx.poll_scan().unwrap().unwrap();
        assert_eq!(scan.len(), 2);

        drop(scan_tx);
        assert!(matches!(
            scan_rx.poll_scan(),
            Err(GapFollowError::Disconnected)
        ));
    }

    #[test]
    fn test_channel_actuator_sink() {
        let (mut command_tx, command_rx) = mpsc::sync_channel::<Command>(1);
        command_tx.send_command(Command::STOP).unwrap();
        assert_eq!(command_rx.recv().unwrap(), Command::STOP);

        drop(command_rx);
        assert!(matches!(
            command_tx.send_command(Command::STOP),
            Err(GapFollowError::Disconnected)
        ));
    }
}
