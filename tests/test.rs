use std::process::Command;

#[test]
fn can_start_and_stop_weatherform() {
    let executable = env!("CARGO_BIN_EXE_weatherform");
    println!("Running `weatherform` {executable}");
    let mut process = Command::new(executable)
        .args(["--fake-predictor", "--address", "127.0.0.1:3910"])
        .spawn()
        .expect("Could not start weatherform");

    Command::new("kill")
        .args(["-s", "TERM", &process.id().to_string()])
        .status()
        .expect("Failed to send signal");

    process.wait().expect("weatherform failed to stop");
}

#[test]
fn missing_config_file_is_fatal() {
    let executable = env!("CARGO_BIN_EXE_weatherform");
    let status = Command::new(executable)
        .args(["--config", "does-not-exist.toml"])
        .status()
        .expect("Could not start weatherform");
    assert!(!status.success());
}
