use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ChannelError {
    ChannelOpen(io::Error),
    UnsupportedChannel,
    NoInterface(String),
    NoHardwareAddr(String),
    NoIpv4Addr(String),
    Send(io::Error),
    NeverSent,
    Receive(io::Error),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChannelError::ChannelOpen(e) => write!(f, "cannot open datalink channel: {}", e),
            ChannelError::UnsupportedChannel => {
                write!(f, "datalink channel is not an Ethernet channel")
            }
            ChannelError::NoInterface(name) => write!(f, "no such interface: {}", name),
            ChannelError::NoHardwareAddr(name) => {
                write!(f, "interface {} has no hardware address", name)
            }
            ChannelError::NoIpv4Addr(name) => write!(f, "interface {} has no IPv4 address", name),
            ChannelError::Send(e) => write!(f, "cannot send request frame: {}", e),
            ChannelError::NeverSent => write!(f, "datalink channel refused the request frame"),
            ChannelError::Receive(e) => write!(f, "cannot receive reply frame: {}", e),
        }
    }
}

impl Error for ChannelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChannelError::ChannelOpen(e) | ChannelError::Send(e) | ChannelError::Receive(e) => {
                Some(e)
            }
            _ => None,
        }
    }
}

pub type NetResult<T> = Result<T, ChannelError>;
