//! Port availability checks for the `check-ports` utility.

use std::net::TcpListener;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("port {port} is occupied: {source}")]
pub struct PortInUse {
    pub port: u16,
    #[source]
    pub source: std::io::Error,
}

/// Try to bind each port in turn; the first port that cannot be bound fails
/// the whole check. The probe sockets are released immediately.
pub fn check_ports(ports: &[u16]) -> Result<(), PortInUse> {
    for &port in ports {
        if let Err(source) = TcpListener::bind(("0.0.0.0", port)) {
            return Err(PortInUse { port, source });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_port_is_reported() {
        let holder = TcpListener::bind(("0.0.0.0", 0)).unwrap();
        let port = holder.local_addr().unwrap().port();
        let err = check_ports(&[port]).unwrap_err();
        assert_eq!(err.port, port);
    }

    #[test]
    fn released_port_is_available() {
        let holder = TcpListener::bind(("0.0.0.0", 0)).unwrap();
        let port = holder.local_addr().unwrap().port();
        drop(holder);
        assert!(check_ports(&[port]).is_ok());
    }

    #[test]
    fn empty_list_is_available() {
        assert!(check_ports(&[]).is_ok());
    }
}
