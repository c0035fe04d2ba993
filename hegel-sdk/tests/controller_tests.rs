//! Integration tests for `AmpController` against an in-process fake amplifier.
//!
//! The controller is connect-per-request, so the fake device accepts one
//! connection per scripted exchange.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use hegel_sdk::{
    AmpController, HegelClient, Input, LineClient, MemoryStore, SettingsStore, SwitchState,
    HOST_KEY,
};

/// Script a sequence of exchanges, one connection each. Returns the fake
/// device's port and its thread handle.
fn scripted_device(
    script: Vec<(&'static str, &'static [u8])>,
) -> (u16, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake device");
    let port = listener.local_addr().expect("local addr").port();

    let device = thread::spawn(move || {
        for (expected_request, reply) in script {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut buffer = Vec::new();
            let mut chunk = [0u8; 16];
            while !buffer.contains(&b'\r') {
                let n = stream.read(&mut chunk).expect("device read");
                assert!(n > 0, "client closed before completing request");
                buffer.extend_from_slice(&chunk[..n]);
            }
            let end = buffer.iter().position(|&b| b == b'\r').unwrap();
            assert_eq!(String::from_utf8_lossy(&buffer[..end]), expected_request);
            stream.write_all(reply).expect("device write");
        }
    });

    (port, device)
}

fn controller_for_port(port: u16) -> AmpController {
    let line_client = LineClient::with_port(port)
        .io_timeout(Duration::from_secs(2))
        .probe_timeout(Duration::from_millis(500));
    let mut controller = AmpController::with_client(
        HegelClient::with_line_client(line_client),
        Box::new(MemoryStore::new()),
    );
    controller.set_host("127.0.0.1");
    controller
}

#[test]
fn status_reads_all_four_attributes() {
    let (port, device) = scripted_device(vec![
        ("-i.?", b"-i.5\r"),
        ("-v.?", b"-v.37\r"),
        ("-p.?", b"-p.1\r"),
        ("-m.?", b"-m.0\r"),
    ]);

    let controller = controller_for_port(port);
    let status = controller.status().expect("status");
    assert_eq!(status.input, Input::Optical1);
    assert_eq!(status.input_label(), "Optical 1");
    assert_eq!(status.volume, 37);
    assert_eq!(status.power, SwitchState::On);
    assert_eq!(status.mute, SwitchState::Off);

    device.join().expect("device thread");
}

#[test]
fn set_and_step_operations_pass_through() {
    let (port, device) = scripted_device(vec![
        ("-p.1", b"-p.1\r"),
        ("-v.u", b"-v.38\r"),
        ("-v.20", b"-v.20\r"),
        ("-i.9", b"-i.9\r"),
        ("-m.1", b"-m.1\r"),
    ]);

    let controller = controller_for_port(port);
    assert_eq!(
        controller.set_power(SwitchState::On).unwrap(),
        SwitchState::On
    );
    assert_eq!(
        controller
            .step_volume(hegel_sdk::VolumeChange::Up)
            .unwrap(),
        38
    );
    assert_eq!(controller.set_volume(20).unwrap(), 20);
    assert_eq!(
        controller.select_input(Input::Network).unwrap(),
        Input::Network
    );
    assert_eq!(
        controller.set_mute(SwitchState::On).unwrap(),
        SwitchState::On
    );

    device.join().expect("device thread");
}

#[test]
fn adopt_host_persists_on_successful_probe() {
    // A live listener is enough for the probe; no exchange happens.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();

    let store = Arc::new(MemoryStore::new());
    let line_client = LineClient::with_port(port).probe_timeout(Duration::from_millis(500));
    let mut controller = AmpController::with_client(
        HegelClient::with_line_client(line_client),
        Box::new(Arc::clone(&store)),
    );

    assert!(controller.adopt_host("127.0.0.1").expect("adopt"));
    assert_eq!(controller.host(), Some("127.0.0.1"));
    assert_eq!(store.get(HOST_KEY).as_deref(), Some("127.0.0.1"));
}

#[test]
fn adopt_host_leaves_state_untouched_on_failed_probe() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let store = Arc::new(MemoryStore::new());
    let line_client = LineClient::with_port(port).probe_timeout(Duration::from_millis(200));
    let mut controller = AmpController::with_client(
        HegelClient::with_line_client(line_client),
        Box::new(Arc::clone(&store)),
    );
    controller.set_host("existing-host.local");

    assert!(!controller.adopt_host("127.0.0.1").expect("adopt"));
    assert_eq!(controller.host(), Some("existing-host.local"));
    assert_eq!(store.get(HOST_KEY), None);
}
