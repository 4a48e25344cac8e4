//! In-memory representation of a single not-yet-sent Syslog message.

use crate::procid::ProcId;
use crate::structured_data::StructuredElement;
use crate::timestamp::{generate_timestamp, validate_timestamp};
use crate::{Error, Facility, Severity};

/// The longest message a conforming receiver must accept (RFC 5424
/// section 6.1). Overflow is shed from the content, never the header.
const MAX_PACKET_SIZE: usize = 1024;

// PROCID is 1*128PRINTUSASCII, MSGID is 1*32PRINTUSASCII
const PROCID_MAX: usize = 128;
const MSGID_MAX: usize = 32;

/// A RFC5424-protocol syslog message under construction.
///
/// Fields are validated as they are assigned and the packet is only
/// serialized on [`render`](Packet::render), which checks that the
/// mandatory fields (facility, severity, hostname) are present. Rendering
/// reads the current state and can be repeated freely.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Packet {
    facility: Option<Facility>,
    severity: Option<Severity>,
    timestamp: Option<String>,
    hostname: Option<String>,
    appname: Option<String>,
    procid: Option<ProcId>,
    msgid: Option<String>,
    structured_data: Vec<StructuredElement>,
    content: String,
}

impl Packet {
    pub fn new() -> Self {
        Packet::default()
    }

    /// Set the facility from an integer in 0-23 or a recognized name;
    /// `set_facility(16)` and `set_facility("local0")` are equivalent.
    pub fn set_facility<T>(&mut self, value: T) -> Result<(), Error>
    where
        T: TryInto<Facility, Error = Error>,
    {
        self.facility = Some(value.try_into()?);
        Ok(())
    }

    pub fn facility(&self) -> Option<Facility> {
        self.facility
    }

    pub fn facility_name(&self) -> Option<&'static str> {
        self.facility.map(Facility::as_str)
    }

    /// Set the severity from an integer in 0-7 or a recognized name;
    /// `set_severity(6)` and `set_severity("info")` are equivalent.
    pub fn set_severity<T>(&mut self, value: T) -> Result<(), Error>
    where
        T: TryInto<Severity, Error = Error>,
    {
        self.severity = Some(value.try_into()?);
        Ok(())
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn severity_name(&self) -> Option<&'static str> {
        self.severity.map(Severity::as_str)
    }

    /// Set facility and severity together from a combined priority value
    /// in 0-191.
    pub fn set_pri(&mut self, pri: i32) -> Result<(), Error> {
        if !(0..=191).contains(&pri) {
            return Err(Error::OutOfRangePri(pri));
        }

        self.facility = Some(Facility::try_from(pri >> 3)?);
        self.severity = Some(Severity::try_from(pri & 0x7)?);
        Ok(())
    }

    /// The combined priority value, `facility * 8 + severity`. `None`
    /// until both halves are set.
    pub fn pri(&self) -> Option<u8> {
        let facility = self.facility? as u8;
        let severity = self.severity? as u8;
        Some(facility << 3 | severity)
    }

    pub fn set_hostname(&mut self, hostname: &str) -> Result<(), Error> {
        check_printable("hostname", hostname)?;
        self.hostname = Some(hostname.to_string());
        Ok(())
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn set_appname(&mut self, appname: &str) -> Result<(), Error> {
        check_printable("appname", appname)?;
        self.appname = Some(appname.to_string());
        Ok(())
    }

    pub fn appname(&self) -> Option<&str> {
        self.appname.as_deref()
    }

    /// Numeric strings become a numeric PID, anything else is kept as a
    /// name.
    pub fn set_procid(&mut self, procid: &str) -> Result<(), Error> {
        check_token("procid", procid, PROCID_MAX)?;
        self.procid = Some(ProcId::from(procid));
        Ok(())
    }

    pub fn procid(&self) -> Option<&ProcId> {
        self.procid.as_ref()
    }

    pub fn set_msgid(&mut self, msgid: &str) -> Result<(), Error> {
        check_token("msgid", msgid, MSGID_MAX)?;
        self.msgid = Some(msgid.to_string());
        Ok(())
    }

    pub fn msgid(&self) -> Option<&str> {
        self.msgid.as_deref()
    }

    /// Set the timestamp from an RFC 3339 string, e.g. one produced by
    /// [`generate_timestamp`]. The string is checked and then emitted
    /// verbatim.
    pub fn set_timestamp(&mut self, timestamp: &str) -> Result<(), Error> {
        validate_timestamp(timestamp.as_bytes())?;
        self.timestamp = Some(timestamp.to_string());
        Ok(())
    }

    /// Stamp the packet with the current instant.
    pub fn set_timestamp_now(&mut self) {
        self.timestamp = Some(generate_timestamp());
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// The free-form message body. Anything goes, including non-ASCII.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the structured data wholesale, keeping the given order.
    pub fn set_structured_data(&mut self, elements: Vec<StructuredElement>) {
        self.structured_data = elements;
    }

    pub fn add_structured_data(&mut self, element: StructuredElement) {
        self.structured_data.push(element);
    }

    pub fn structured_data(&self) -> &[StructuredElement] {
        &self.structured_data
    }

    /// Serialize to the wire form:
    ///
    /// ```text
    /// <PRI>1 TIMESTAMP HOSTNAME APP-NAME PROCID MSGID STRUCTURED-DATA MSG
    /// ```
    ///
    /// Unset optional fields render as `-`. Content is truncated so the
    /// whole message fits in 1024 bytes.
    pub fn render(&self) -> Result<String, Error> {
        let facility = self.facility.ok_or(Error::MissingFacility)?;
        let severity = self.severity.ok_or(Error::MissingSeverity)?;
        let hostname = self.hostname.as_deref().ok_or(Error::MissingHostname)?;
        let pri = (facility as u8) << 3 | severity as u8;

        let mut out = format!("<{pri}>1 ");
        match &self.timestamp {
            Some(timestamp) => out.push_str(timestamp),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(hostname);

        out.push(' ');
        match &self.appname {
            Some(appname) => out.push_str(appname),
            None => out.push('-'),
        }

        out.push(' ');
        match &self.procid {
            Some(ProcId::PID(pid)) => out.push_str(&pid.to_string()),
            Some(ProcId::Name(name)) => out.push_str(name),
            None => out.push('-'),
        }

        out.push(' ');
        match &self.msgid {
            Some(msgid) => out.push_str(msgid),
            None => out.push('-'),
        }

        out.push(' ');
        if self.structured_data.is_empty() {
            out.push('-');
        } else {
            for element in &self.structured_data {
                element.render_into(&mut out);
            }
        }

        // MSG is optional on the wire, so an empty content emits nothing
        if !self.content.is_empty() {
            out.push(' ');
            let remaining = MAX_PACKET_SIZE.saturating_sub(out.len());
            out.push_str(truncate_to_boundary(&self.content, remaining));
        }

        Ok(out)
    }
}

/// Hostname, appname, procid and msgid may only contain ASCII code points
/// 33-126: no spaces, no NUL, no controls, nothing above tilde.
fn check_printable(field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::EmptyValue(field));
    }

    match value.chars().find(|&ch| !matches!(ch, '!'..='~')) {
        Some(ch) => Err(Error::InvalidChar(field, ch)),
        None => Ok(()),
    }
}

fn check_token(field: &'static str, value: &str, max: usize) -> Result<(), Error> {
    check_printable(field, value)?;

    if value.len() > max {
        return Err(Error::ValueTooLong(field, max));
    }

    Ok(())
}

/// Cut `content` down to at most `max` bytes, backing up to a character
/// boundary so the result stays valid UTF-8.
fn truncate_to_boundary(content: &str, max: usize) -> &str {
    if content.len() <= max {
        return content;
    }

    let mut end = max;
    while !content.is_char_boundary(end) {
        end -= 1;
    }

    &content[..end]
}
