use std::io::{self, Write};
use std::time::Duration;

use ureq::Agent;

use crate::registry::Registry;
use crate::tasks::Task;
use crate::utils::{TaskError, TaskResult};

/// The endpoint the probe talks to. The server is an external collaborator;
/// we never start or stop it, just send one GET and dump what comes back.
#[derive(Debug, Clone, Copy)]
pub struct ProbeTarget {
    pub host: &'static str,
    /// Must be non-zero.
    pub port: u16,
    pub path: &'static str,
}

impl ProbeTarget {
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

pub const DEFAULT_TARGET: ProbeTarget = ProbeTarget {
    host: "localhost",
    port: 4221,
    path: "/",
};

/// Bound on the single connection attempt; the probe never retries.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct CheckTask {
    target: ProbeTarget,
}

impl CheckTask {
    pub fn new(target: ProbeTarget) -> Self {
        CheckTask { target }
    }
}

impl Task for CheckTask {
    fn execute(&self, _registry: &Registry) -> TaskResult<()> {
        let stdout = io::stdout();
        probe(&self.target, &mut stdout.lock())
    }
}

/// Send one GET to the target and write the response dump: status line,
/// every header in receipt order, a blank line, then the body. Any HTTP
/// status is a valid probe result; only transport failures are errors.
pub fn probe(target: &ProbeTarget, w: &mut impl Write) -> TaskResult<()> {
    probe_with_timeout(target, PROBE_TIMEOUT, w)
}

fn probe_with_timeout(
    target: &ProbeTarget,
    timeout: Duration,
    w: &mut impl Write,
) -> TaskResult<()> {
    let url = target.url();
    info!("==> Probing {}", url);

    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into();

    let mut response = agent
        .get(url.as_str())
        .call()
        .map_err(|e| TaskError::Connection(format!("GET {}: {}", url, e)))?;

    writeln!(w, "{:?} {}", response.version(), response.status())?;
    for (name, value) in response.headers() {
        writeln!(w, "{}: {}", name, String::from_utf8_lossy(value.as_bytes()))?;
    }
    writeln!(w)?;

    // Body bytes pass through untouched; they need not be UTF-8.
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| TaskError::Connection(format!("reading body from {}: {}", url, e)))?;
    w.write_all(&body)?;

    Ok(())
}
