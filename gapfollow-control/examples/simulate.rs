use clap::{Arg, Command};
use gapfollow_control::{run_controller, ControllerConfig, Scan};

fn parse_args() -> (Option<String>, Option<String>) {
    let matches = Command::new("Follow-the-gap simulator.")
        .about("Replays scans through the controller and prints the commands.")
        .disable_version_flag(true)
        .arg(
            Arg::new("scans").help("JSON file holding an array of range arrays"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the controller tuning"),
        )
        .get_matches();

    (
        matches.get_one::<String>("scans").cloned(),
        matches.get_one::<String>("config").cloned(),
    )
}

/// Corridor with an obstacle sweeping across the field of view.
fn synthetic_scans() -> Vec<Vec<f64>> {
    (0..30)
        .map(|step| {
            let mut ranges = vec![9.0; 100];
            let obstacle = 10 + step * 3;
            for i in obstacle..(obstacle + 7).min(ranges.len()) {
                ranges[i] = 0.4;
            }
            ranges
        })
        .collect()
}

fn main() {
    let (scan_path, config_path) = parse_args();

    let config = match config_path {
        Some(path) => ControllerConfig::from_file(&path).unwrap(),
        None => ControllerConfig::default(),
    };

    let scans: Vec<Vec<f64>> = match scan_path {
        Some(path) => {
            let contents = std::fs::read_to_string(&path).unwrap();
            serde_json::from_str(&contents).unwrap()
        }
        None => synthetic_scans(),
    };

    let (threads, scan_tx, command_rx) = run_controller(config);

    for ranges in scans {
        scan_tx.send(Scan::new(ranges)).unwrap();
        let command = command_rx.recv().unwrap();
        println!("{}", serde_json::to_string(&command).unwrap());
    }

    // Dropping the scan sender shuts the controller down; it zeroes the
    // actuators on the way out.
    drop(scan_tx);
    let stop = command_rx.recv().unwrap();
    println!("{}", serde_json::to_string(&stop).unwrap());

    drop(threads);
}
