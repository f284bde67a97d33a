//! Helper to start and stop a favicon server for each integration test.

use std::{
    io::Write,
    net::TcpStream,
    process::{Child, Command, ExitStatus},
    thread::sleep,
    time::{Duration, Instant},
};
use tempfile::{NamedTempFile, TempPath};

/// Upper bound for the server process to boot, or to give up.
const BOOT_TIMEOUT: Duration = Duration::from_secs(10);

/// Helps us instantiate a favicon server in a child process in each test.
pub struct Server {
    /// The port our server instance is running on
    port: u16,
    /// Configuration file read by the server. File is cleaned once TempPath is dropped.
    _config: TempPath,
    /// Child processes running the server
    proc: Child,
}

impl Server {
    /// Since our tests run in parallel, we want to give each one its own server, with its own
    /// port.
    pub fn new(port: u16, config: &str) -> Server {
        let mut server = Server::spawn(port, config);
        let start = Instant::now();
        // Give server process some time to boot, and be ready to take requests.
        while TcpStream::connect(("127.0.0.1", port)).is_err() {
            if let Some(status) = server.proc.try_wait().unwrap() {
                panic!("Server exited during startup with {status}");
            }
            assert!(start.elapsed() < BOOT_TIMEOUT, "Server did not start listening");
            sleep(Duration::from_millis(10));
        }
        server
    }

    /// Starts a server which is expected to refuse to start. Returns its exit status.
    pub fn fail_to_start(port: u16, config: &str) -> ExitStatus {
        let mut server = Server::spawn(port, config);
        let start = Instant::now();
        loop {
            if let Some(status) = server.proc.try_wait().unwrap() {
                return status;
            }
            assert!(start.elapsed() < BOOT_TIMEOUT, "Server did not exit");
            sleep(Duration::from_millis(10));
        }
    }

    fn spawn(port: u16, config: &str) -> Server {
        // Write configuration into temporary file
        let mut config_file = NamedTempFile::new().unwrap();
        config_file.write_all(config.as_bytes()).unwrap();
        // Pass path to server process. File is cleaned once path is dropped.
        let config = config_file.into_temp_path();

        let proc = Command::new(env!("CARGO_BIN_EXE_favicon-server"))
            .args(["--port"])
            .arg(port.to_string())
            .arg("-c")
            .arg(&config)
            .spawn()
            .unwrap();

        Server {
            port,
            _config: config,
            proc,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

/// Of course we want to clean up, after each test is done. So we implement drop.
impl Drop for Server {
    fn drop(&mut self) {
        // The process may have exited on its own already.
        let _ = self.proc.kill();
        let _ = self.proc.wait();
    }
}
