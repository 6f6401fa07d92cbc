//! Wire layout of an Ethernet frame carrying an ARP message for IPv4.

use pnet::datalink::MacAddr;
use pnet::packet::arp::{ArpHardwareType, ArpOperation, ArpPacket, MutableArpPacket};
use pnet::packet::ethernet::{EtherType, EthernetPacket, MutableEthernetPacket};
use pnet::packet::Packet;

use std::fmt;
use std::net::Ipv4Addr;

/// 14-byte Ethernet header plus 28-byte ARP body.
pub const FRAME_LEN: usize = 42;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    TooShort,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::TooShort => write!(f, "datagram shorter than an ARP frame"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// One combined Ethernet + ARP frame, fields in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArpFrame {
    pub destination: MacAddr,
    pub source: MacAddr,
    pub ethertype: EtherType,
    pub hardware_type: ArpHardwareType,
    pub protocol_type: EtherType,
    pub hw_addr_len: u8,
    pub proto_addr_len: u8,
    pub operation: ArpOperation,
    pub sender_hw_addr: MacAddr,
    pub sender_proto_addr: Ipv4Addr,
    pub target_hw_addr: MacAddr,
    pub target_proto_addr: Ipv4Addr,
}

impl ArpFrame {
    /// Serializes the frame into exactly `FRAME_LEN` bytes, multi-byte
    /// fields in network byte order.
    pub fn encode(&self) -> Vec<u8> {
        let arp_buf = vec![0u8; ArpPacket::minimum_packet_size()];
        let mut arp = MutableArpPacket::owned(arp_buf).unwrap();

        arp.set_hardware_type(self.hardware_type);
        arp.set_protocol_type(self.protocol_type);
        arp.set_hw_addr_len(self.hw_addr_len);
        arp.set_proto_addr_len(self.proto_addr_len);
        arp.set_operation(self.operation);
        arp.set_sender_hw_addr(self.sender_hw_addr);
        arp.set_sender_proto_addr(self.sender_proto_addr);
        arp.set_target_hw_addr(self.target_hw_addr);
        arp.set_target_proto_addr(self.target_proto_addr);
        let arp = arp.consume_to_immutable();

        let eth_buf = vec![0u8; FRAME_LEN];
        let mut eth = MutableEthernetPacket::owned(eth_buf).unwrap();

        eth.set_destination(self.destination);
        eth.set_source(self.source);
        eth.set_ethertype(self.ethertype);
        eth.set_payload(arp.packet());

        eth.consume_to_immutable().packet().to_vec()
    }

    /// Reads the first `FRAME_LEN` bytes positionally; trailing link-layer
    /// padding is ignored.
    pub fn decode(buf: &[u8]) -> Result<ArpFrame, DecodeError> {
        let eth = EthernetPacket::new(buf).ok_or(DecodeError::TooShort)?;
        let arp = ArpPacket::new(eth.payload()).ok_or(DecodeError::TooShort)?;

        Ok(ArpFrame {
            destination: eth.get_destination(),
            source: eth.get_source(),
            ethertype: eth.get_ethertype(),
            hardware_type: arp.get_hardware_type(),
            protocol_type: arp.get_protocol_type(),
            hw_addr_len: arp.get_hw_addr_len(),
            proto_addr_len: arp.get_proto_addr_len(),
            operation: arp.get_operation(),
            sender_hw_addr: arp.get_sender_hw_addr(),
            sender_proto_addr: arp.get_sender_proto_addr(),
            target_hw_addr: arp.get_target_hw_addr(),
            target_proto_addr: arp.get_target_proto_addr(),
        })
    }
}

impl fmt::Display for ArpFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Destination MAC: {}", self.destination)?;
        writeln!(f, "Source MAC: {}", self.source)?;
        writeln!(f, "Ethertype: 0x{:04x}", self.ethertype.0)?;
        writeln!(f, "Hardware type: 0x{:04x}", self.hardware_type.0)?;
        writeln!(f, "Protocol type: 0x{:04x}", self.protocol_type.0)?;
        writeln!(f, "Hardware address length: {}", self.hw_addr_len)?;
        writeln!(f, "Protocol address length: {}", self.proto_addr_len)?;
        writeln!(f, "Opcode: {}", self.operation.0)?;
        writeln!(f, "Sender MAC: {}", self.sender_hw_addr)?;
        writeln!(f, "Sender IP: {}", self.sender_proto_addr)?;
        writeln!(f, "Target MAC: {}", self.target_hw_addr)?;
        write!(f, "Target IP: {}", self.target_proto_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::packet::arp::{ArpHardwareTypes, ArpOperations};
    use pnet::packet::ethernet::EtherTypes;
    use std::str::FromStr;

    fn sample_reply() -> ArpFrame {
        ArpFrame {
            destination: MacAddr::from_str("aa:bb:cc:dd:ee:ff").unwrap(),
            source: MacAddr::from_str("11:22:33:44:55:66").unwrap(),
            ethertype: EtherTypes::Arp,
            hardware_type: ArpHardwareTypes::Ethernet,
            protocol_type: EtherTypes::Ipv4,
            hw_addr_len: 6,
            proto_addr_len: 4,
            operation: ArpOperations::Reply,
            sender_hw_addr: MacAddr::from_str("11:22:33:44:55:66").unwrap(),
            sender_proto_addr: Ipv4Addr::new(10, 0, 0, 5),
            target_hw_addr: MacAddr::from_str("aa:bb:cc:dd:ee:ff").unwrap(),
            target_proto_addr: Ipv4Addr::new(10, 0, 0, 1),
        }
    }

    #[test]
    fn round_trip() {
        let frame = sample_reply();
        let wire = frame.encode();
        assert_eq!(ArpFrame::decode(&wire), Ok(frame));

        let mut request = frame;
        request.operation = ArpOperations::Request;
        request.target_hw_addr = MacAddr::new(0, 0, 0, 0, 0, 0);
        assert_eq!(ArpFrame::decode(&request.encode()), Ok(request));
    }

    #[test]
    fn encoded_length_is_fixed() {
        assert_eq!(sample_reply().encode().len(), FRAME_LEN);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let wire = sample_reply().encode();
        assert_eq!(
            ArpFrame::decode(&wire[..FRAME_LEN - 1]),
            Err(DecodeError::TooShort)
        );
        assert_eq!(ArpFrame::decode(&[]), Err(DecodeError::TooShort));
    }

    #[test]
    fn trailing_padding_is_ignored() {
        let frame = sample_reply();
        let mut wire = frame.encode();
        wire.extend_from_slice(&[0u8; 18]);
        assert_eq!(ArpFrame::decode(&wire), Ok(frame));
    }

    #[test]
    fn numeric_fields_decode_from_network_byte_order() {
        let mut wire = vec![0u8; FRAME_LEN];
        wire[12..14].copy_from_slice(&[0x08, 0x06]);
        wire[14..16].copy_from_slice(&[0x00, 0x01]);
        wire[16..18].copy_from_slice(&[0x08, 0x00]);
        wire[20..22].copy_from_slice(&[0x00, 0x01]);

        let frame = ArpFrame::decode(&wire).unwrap();
        assert_eq!(frame.ethertype, EtherTypes::Arp);
        assert_eq!(frame.hardware_type, ArpHardwareTypes::Ethernet);
        assert_eq!(frame.protocol_type, EtherTypes::Ipv4);
        assert_eq!(frame.operation, ArpOperations::Request);
        assert_eq!(frame.operation.0, 1);
    }

    #[test]
    fn render_lists_every_field() {
        let text = sample_reply().to_string();
        assert!(text.contains("Destination MAC: aa:bb:cc:dd:ee:ff"));
        assert!(text.contains("Source MAC: 11:22:33:44:55:66"));
        assert!(text.contains("Ethertype: 0x0806"));
        assert!(text.contains("Hardware type: 0x0001"));
        assert!(text.contains("Protocol type: 0x0800"));
        assert!(text.contains("Hardware address length: 6"));
        assert!(text.contains("Protocol address length: 4"));
        assert!(text.contains("Opcode: 2"));
        assert!(text.contains("Sender IP: 10.0.0.5"));
        assert!(text.contains("Target IP: 10.0.0.1"));
    }
}
