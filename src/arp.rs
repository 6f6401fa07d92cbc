use pnet::datalink::MacAddr;
use pnet::packet::arp::ArpHardwareTypes;
use pnet::packet::ethernet::EtherTypes;

pub use pnet::packet::arp::ArpOperations;

use std::net::Ipv4Addr;

use super::frame::ArpFrame;
use super::{ChannelError, NetChannel, NetResult};

/// Builds the broadcast request asking who holds `target_ip`.
pub fn build_request(sender_mac: MacAddr, sender_ip: Ipv4Addr, target_ip: Ipv4Addr) -> ArpFrame {
    ArpFrame {
        destination: MacAddr::new(0xff, 0xff, 0xff, 0xff, 0xff, 0xff),
        source: sender_mac,
        ethertype: EtherTypes::Arp,
        hardware_type: ArpHardwareTypes::Ethernet,
        protocol_type: EtherTypes::Ipv4,
        hw_addr_len: 6,
        proto_addr_len: 4,
        operation: ArpOperations::Request,
        sender_hw_addr: sender_mac,
        sender_proto_addr: sender_ip,
        target_hw_addr: MacAddr::new(0, 0, 0, 0, 0, 0),
        target_proto_addr: target_ip,
    }
}

pub fn is_matching_reply(frame: &ArpFrame, target_ip: Ipv4Addr) -> bool {
    frame.ethertype == EtherTypes::Arp
        && frame.operation == ArpOperations::Reply
        && frame.sender_proto_addr == target_ip
}

/// One receive-loop step: decode a raw datagram and test it against the
/// reply we are waiting for. Datagrams too short to hold an ARP frame are
/// traffic for somebody else and yield `None`.
pub fn filter_reply(buf: &[u8], target_ip: Ipv4Addr) -> Option<MacAddr> {
    let frame = ArpFrame::decode(buf).ok()?;
    if is_matching_reply(&frame, target_ip) {
        Some(frame.sender_hw_addr)
    } else {
        None
    }
}

/// Broadcasts `request` once, then blocks on the channel until a matching
/// reply arrives. Runs forever if no host answers and the channel was
/// opened without a read timeout.
pub fn resolve(channel: &mut NetChannel, request: &ArpFrame) -> NetResult<MacAddr> {
    match channel.sender.send_to(&request.encode(), None) {
        Some(Ok(())) => {}
        Some(Err(e)) => return Err(ChannelError::Send(e)),
        None => return Err(ChannelError::NeverSent),
    }

    loop {
        let buf = match channel.receiver.next() {
            Ok(buf) => buf,
            Err(e) => return Err(ChannelError::Receive(e)),
        };

        if let Some(mac) = filter_reply(buf, request.target_proto_addr) {
            return Ok(mac);
        }
    }
}

pub fn resolution_line(ip: Ipv4Addr, mac: MacAddr) -> String {
    format!(
        "IP: {} - MAC: {:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        ip, mac.0, mac.1, mac.2, mac.3, mac.4, mac.5
    )
}
