/// Console-level tests for the probe binary: the report lines on stdout and
/// the closed-connection line policy when socket acquisition fails early.

use std::net::UdpSocket;
use std::process::{Command, Output};
use std::thread;

const CLOSED_LINE: &str = "Connection closed. Have a blessed day.";

fn run_probe(envs: &[(&str, String)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_udp-probe"));
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run probe binary")
}

#[test]
fn test_reply_run_prints_all_report_lines() {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = socket.local_addr().unwrap().port();
    let responder = thread::spawn(move || {
        let mut buf = [0u8; 4096];
        let (len, src) = socket.recv_from(&mut buf).expect("responder got no probe");
        socket.send_to(&buf[..len], src).unwrap();
    });

    let output = run_probe(&[
        ("PROBE_HOST", "127.0.0.1".to_string()),
        ("PROBE_PORT", port.to_string()),
        ("PROBE_TIMEOUT_MS", "2000".to_string()),
    ]);
    responder.join().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success(), "probe exited with {:?}", output.status);
    assert!(stdout.contains(&format!(
        "Sending: 'Hello from the otherside' to 127.0.0.1:{}",
        port
    )));
    assert!(stdout.contains(&format!(
        "Received from 127.0.0.1:{}: Hello from the otherside",
        port
    )));
    assert!(stdout.contains(CLOSED_LINE));
}

#[test]
fn test_timeout_run_exits_zero_and_still_closes() {
    let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = silent.local_addr().unwrap().port();

    let output = run_probe(&[
        ("PROBE_HOST", "127.0.0.1".to_string()),
        ("PROBE_PORT", port.to_string()),
        ("PROBE_TIMEOUT_MS", "200".to_string()),
    ]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success(), "timeout is a normal outcome");
    assert!(stdout.contains("No response received (you might be ugly)"));
    assert!(stdout.contains(CLOSED_LINE));
}

#[test]
fn test_unresolvable_host_fails_before_any_socket_exists() {
    // .invalid never resolves (RFC 6761), so the run dies before binding
    // and the closed line must not appear.
    let output = run_probe(&[("PROBE_HOST", "host.invalid".to_string())]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!output.status.success());
    assert!(!stdout.contains("Sending:"));
    assert!(!stdout.contains(CLOSED_LINE));
}
