#[cfg(windows)]
fn main() {
    use audio_monitoring_devices::{
        DEFAULT_DEVICE_ID,
        enumerate_devices,
        identifiers_match,
    };

    env_logger::init();

    enumerate_devices(|device| {
        let default_marker = if identifiers_match(Some(DEFAULT_DEVICE_ID), Some(&device.id)) {
            " (default)"
        } else {
            ""
        };
        println!(
            "Friendly name: '{}', ID: {}{}",
            device.display_name, device.id, default_marker
        );
        true
    });
}

#[cfg(not(windows))]
fn main() {
    println!("The WASAPI backend is only available on Windows");
}
