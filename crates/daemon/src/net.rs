//! Best-guess LAN address discovery.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Discover the LAN-facing IP of this device.
///
/// Connects a UDP socket toward a well-known external address and reads
/// back the local address the OS picked for that route. No packet is sent.
/// Falls back to the loopback address when the probe fails (e.g. no
/// network at all). The result is for display only and never validated.
pub fn local_ip() -> IpAddr {
    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn probe() -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(("8.8.8.8", 80))?;
    Ok(socket.local_addr()?.ip())
}
