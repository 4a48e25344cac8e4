//! Builder for [RFC 5424](https://tools.ietf.org/html/rfc5424) Syslog messages. Not to be confused
//! with the older [RFC 3164](https://tools.ietf.org/html/rfc3164) BSD Syslog protocol, which many
//! systems still speak; this crate only produces the newer format.
//!
//! A [`Packet`] validates every field as it is assigned, keeps the PRI value
//! consistent with facility and severity, and serializes to the exact wire
//! layout, truncating the message body so the whole packet fits in 1024
//! bytes. Delivering the bytes is the caller's business.
//!
//! # Example
//!
//! Build a message and ship it over UDP
//!
//! ```no_run
//! use syslog_packet::{Packet, StructuredElement};
//! use std::net::UdpSocket;
//!
//! let mut packet = Packet::new();
//! packet.set_facility("local4").unwrap();
//! packet.set_severity("notice").unwrap();
//! packet.set_hostname("mymachine.example.com").unwrap();
//! packet.set_appname("evntslog").unwrap();
//! packet.set_msgid("ID47").unwrap();
//! packet.set_timestamp_now();
//! packet.add_structured_data(
//!     StructuredElement::new("exampleSDID@32473")
//!         .unwrap()
//!         .param("iut", "3")
//!         .unwrap(),
//! );
//! packet.set_content("An application event log entry...");
//!
//! let s = UdpSocket::bind("127.0.0.1:0").unwrap();
//! s.send_to(packet.render().unwrap().as_bytes(), "127.0.0.1:514")
//!     .unwrap();
//! ```
//!
//! # Unimplemented Features
//!
//!  * Octet-counting/non-transparent framing for TCP transports belongs to
//!    the delivery layer, not the packet, so there is no framing here.
//!  * Theoretically, the message part may carry arbitrary (non-unicode)
//!    bytes. The builder works in `String`s, so content is always UTF-8;
//!    truncation never splits a character.

mod error;
mod facility;
mod packet;
mod procid;
mod severity;
mod structured_data;
mod timestamp;

pub use error::{Error, ErrorKind};
pub use facility::Facility;
pub use packet::Packet;
pub use procid::ProcId;
pub use severity::Severity;
pub use structured_data::StructuredElement;
pub use timestamp::generate_timestamp;
