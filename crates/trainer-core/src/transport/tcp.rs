use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Port the console debug server listens on.
pub const DEFAULT_PORT: u16 = 7331;

/// The debug server answers simple requests immediately; anything slower
/// than this means the console is gone.
const IO_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking TCP connection to the console.
///
/// A socket error mid-operation poisons the transport: the in-flight call
/// fails and every later call fails until the caller reconnects. There is no
/// implicit reconnect.
pub struct TcpTransport {
    stream: TcpStream,
    poisoned: bool,
}

impl TcpTransport {
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(|e| Error::Connection(format!("invalid address {host}:{port}: {e}")))?
            .next()
            .ok_or_else(|| Error::Connection(format!("no address for {host}:{port}")))?;

        let stream = TcpStream::connect_timeout(&addr, IO_TIMEOUT)
            .map_err(|e| Error::Connection(format!("connect to {addr} failed: {e}")))?;
        stream
            .set_read_timeout(Some(IO_TIMEOUT))
            .and_then(|_| stream.set_write_timeout(Some(IO_TIMEOUT)))
            .map_err(|e| Error::Connection(format!("socket setup failed: {e}")))?;
        stream.set_nodelay(true).ok();

        info!("Connected to console at {addr}");

        Ok(Self {
            stream,
            poisoned: false,
        })
    }

    fn check_usable(&self) -> Result<()> {
        if self.poisoned {
            return Err(Error::Connection(
                "connection is unusable after an I/O error, reconnect required".into(),
            ));
        }
        Ok(())
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.check_usable()?;
        self.stream.write_all(data).map_err(|e| {
            self.poisoned = true;
            Error::Connection(format!("send failed: {e}"))
        })
    }

    fn receive_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        self.check_usable()?;
        let mut buf = vec![0u8; len];
        self.stream.read_exact(&mut buf).map_err(|e| {
            self.poisoned = true;
            Error::Connection(format!("receive failed: {e}"))
        })?;
        Ok(buf)
    }

    fn close(&mut self) -> Result<()> {
        debug!("Closing console connection");
        self.poisoned = true;
        self.stream
            .shutdown(Shutdown::Both)
            .map_err(|e| Error::Connection(format!("close failed: {e}")))
    }
}
