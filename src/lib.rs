extern crate pnet;

pub mod arp;
pub mod frame;
mod error;

pub use self::error::{ChannelError, NetResult};

use pnet::datalink::{self, MacAddr, NetworkInterface};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// Exclusive handle on a raw Ethernet channel. Both halves are released
/// when the value is dropped, on every exit path.
pub struct NetChannel {
    pub sender: Box<dyn datalink::DataLinkSender>,
    pub receiver: Box<dyn datalink::DataLinkReceiver>,
}

pub fn get_interface(name: &str) -> NetResult<NetworkInterface> {
    datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| ChannelError::NoInterface(name.to_string()))
}

/// Opens the raw channel on `interface`. `read_timeout` bounds each
/// receive call; `None` blocks until a frame arrives.
pub fn get_channel(
    interface: &NetworkInterface,
    read_timeout: Option<Duration>,
) -> NetResult<NetChannel> {
    match datalink::channel(
        interface,
        datalink::Config {
            read_timeout,
            ..Default::default()
        },
    ) {
        Ok(datalink::Channel::Ethernet(tx, rx)) => Ok(NetChannel {
            sender: tx,
            receiver: rx,
        }),
        Ok(_) => Err(ChannelError::UnsupportedChannel),
        Err(e) => Err(ChannelError::ChannelOpen(e)),
    }
}

pub fn hardware_addr(interface: &NetworkInterface) -> NetResult<MacAddr> {
    interface
        .mac
        .ok_or_else(|| ChannelError::NoHardwareAddr(interface.name.clone()))
}

pub fn ipv4_addr(interface: &NetworkInterface) -> NetResult<Ipv4Addr> {
    interface
        .ips
        .iter()
        .find_map(|net| match net.ip() {
            IpAddr::V4(ip) => Some(ip),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| ChannelError::NoIpv4Addr(interface.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_interface_is_an_error() {
        match get_interface("arpreq-missing0") {
            Err(ChannelError::NoInterface(name)) => assert_eq!(name, "arpreq-missing0"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
