//! Wire codec for whole SOME/IP-SD messages.
//!
//! Builds on [`crate::packet::Packet`] and [`crate::repr::Repr`] for the
//! flags/reserved/entries/options envelope, and on [`crate::entries`] /
//! [`crate::options`] for individual 16-byte entries and variable-length
//! options. This module adds what the original's `someip::sd` namespace
//! layers on top of those pieces: a unified option enum, option-run
//! resolution against the flat options array, and whole-message encode and
//! decode entry points.
//!
//! Every encode/decode path here writes into or reads from a caller-owned
//! buffer; nothing is collected into an owned `Vec`, unlike the original's
//! `std::vector<std::byte>`-returning `encode_message`.

use byteorder::{ByteOrder, NetworkEndian};

use crate::cursor::Writer;
use crate::entries::{
    EntryType, EventGroupEntry, EventGroupEntryRepr, NumberOfOptions, ReservedAndCounter, ServiceEntry, ServiceEntryRepr,
};
use crate::error::Error;
use crate::header::{self, message_type, Header, MessageId, RequestId};
use crate::options::{
    DiscardableFlag, IPv4EndpointOptionRepr, IPv6EndpointOptionRepr, LoadBalancingOption, LoadBalancingOptionRepr,
    OptionHeader, OptionType, TransportProtocol,
};
use crate::packet::Packet;
use crate::repr::Repr;
use crate::sd::packet_model::{SdEntry, SdEntryData, SdOption, MAX_OPTIONS_PER_RUN, MAX_TOTAL_OPTIONS, METHOD_ID, SERVICE_ID};

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

fn decode_one_option(bytes: &[u8]) -> Result<(SdOption<'_>, usize)> {
    let header = OptionHeader::new_checked(bytes)?;
    let len_field = header.length();
    if len_field == 0 {
        return Err(Error::InvalidLength);
    }
    let total = 3usize + len_field as usize;
    if bytes.len() < total {
        return Err(Error::BufferTooShort);
    }
    let discardable = header.discardable_flag().is_discardable();
    let option_type = header.option_type();
    let body = &bytes[..total];
    let payload = &bytes[4..total];

    let opt = match OptionType::from_u8(option_type) {
        Some(OptionType::Configuration) => SdOption::Configuration { discardable, data: payload },
        Some(OptionType::LoadBalancing) => {
            if total != LoadBalancingOption::<&[u8]>::LENGTH {
                return Err(Error::InvalidLength);
            }
            let o = LoadBalancingOption::new_unchecked(body);
            SdOption::LoadBalancing { discardable, repr: LoadBalancingOptionRepr::parse(&o) }
        }
        Some(t @ OptionType::IPv4Endpoint) | Some(t @ OptionType::IPv4Multicast) | Some(t @ OptionType::IPv4SdEndpoint) => {
            if total != IPV4_ENDPOINT_OPTION_LEN {
                return Err(Error::InvalidLength);
            }
            let repr = parse_ipv4_endpoint_payload(payload)?;
            match t {
                OptionType::IPv4Endpoint => SdOption::Ipv4Endpoint { discardable, repr },
                OptionType::IPv4Multicast => SdOption::Ipv4Multicast { discardable, repr },
                _ => SdOption::Ipv4SdEndpoint { discardable, repr },
            }
        }
        Some(t @ OptionType::IPv6Endpoint) | Some(t @ OptionType::IPv6Multicast) | Some(t @ OptionType::IPv6SdEndpoint) => {
            if total != IPV6_ENDPOINT_OPTION_LEN {
                return Err(Error::InvalidLength);
            }
            let repr = parse_ipv6_endpoint_payload(payload)?;
            match t {
                OptionType::IPv6Endpoint => SdOption::Ipv6Endpoint { discardable, repr },
                OptionType::IPv6Multicast => SdOption::Ipv6Multicast { discardable, repr },
                _ => SdOption::Ipv6SdEndpoint { discardable, repr },
            }
        }
        None => SdOption::Unknown { option_type, discardable, data: payload },
    };
    Ok((opt, total))
}

/// IPv4 endpoint/multicast/SD-endpoint option wire size: 4-byte header + 8-byte payload.
const IPV4_ENDPOINT_OPTION_LEN: usize = 12;
/// IPv6 endpoint/multicast/SD-endpoint option wire size: 4-byte header + 20-byte payload.
const IPV6_ENDPOINT_OPTION_LEN: usize = 24;

/// Parses an 8-byte IPv4 endpoint option payload laid out as `addr(4),
/// l4_proto(1), port(2), reserved(1)`.
fn parse_ipv4_endpoint_payload(payload: &[u8]) -> Result<IPv4EndpointOptionRepr> {
    let l4_proto = payload[4];
    let protocol = TransportProtocol::from_u8(l4_proto).ok_or(Error::InvalidProtocol(l4_proto))?;
    Ok(IPv4EndpointOptionRepr {
        ipv4_address: [payload[0], payload[1], payload[2], payload[3]],
        protocol,
        port: NetworkEndian::read_u16(&payload[5..7]),
    })
}

/// Parses a 20-byte IPv6 endpoint option payload laid out as `addr(16),
/// l4_proto(1), port(2), reserved(1)`.
fn parse_ipv6_endpoint_payload(payload: &[u8]) -> Result<IPv6EndpointOptionRepr> {
    let l4_proto = payload[16];
    let protocol = TransportProtocol::from_u8(l4_proto).ok_or(Error::InvalidProtocol(l4_proto))?;
    let mut ipv6_address = [0u8; 16];
    ipv6_address.copy_from_slice(&payload[..16]);
    Ok(IPv6EndpointOptionRepr { ipv6_address, protocol, port: NetworkEndian::read_u16(&payload[17..19]) })
}

fn encode_one_option(out: &mut Writer<'_>, opt: &SdOption<'_>) -> Result<()> {
    let len_field = opt.length_field()?;
    let mut header_buf = [0u8; 4];
    {
        let mut h = OptionHeader::new_unchecked(&mut header_buf[..]);
        h.set_length(len_field);
        h.set_option_type(opt.option_type());
        h.set_discardable_flag(DiscardableFlag::from_bool(opt.discardable()));
    }
    out.write_bytes(&header_buf)?;

    match opt {
        SdOption::Configuration { data, .. } | SdOption::Unknown { data, .. } => out.write_bytes(data),
        SdOption::LoadBalancing { repr, .. } => {
            let mut buf = [0u8; 8];
            {
                let mut w = LoadBalancingOption::new_unchecked(&mut buf[..]);
                w.set_priority(repr.priority);
                w.set_weight(repr.weight);
            }
            out.write_bytes(&buf[4..])
        }
        SdOption::Ipv4Endpoint { repr, .. } | SdOption::Ipv4Multicast { repr, .. } | SdOption::Ipv4SdEndpoint { repr, .. } => {
            // addr(4), l4_proto(1), port(2), reserved(1)
            let mut buf = [0u8; 8];
            buf[..4].copy_from_slice(&repr.ipv4_address);
            buf[4] = repr.protocol.as_u8();
            NetworkEndian::write_u16(&mut buf[5..7], repr.port);
            out.write_bytes(&buf)
        }
        SdOption::Ipv6Endpoint { repr, .. } | SdOption::Ipv6Multicast { repr, .. } | SdOption::Ipv6SdEndpoint { repr, .. } => {
            // addr(16), l4_proto(1), port(2), reserved(1)
            let mut buf = [0u8; 20];
            buf[..16].copy_from_slice(&repr.ipv6_address);
            buf[16] = repr.protocol.as_u8();
            NetworkEndian::write_u16(&mut buf[17..19], repr.port);
            out.write_bytes(&buf)
        }
    }
}

fn decode_one_entry(bytes: &[u8]) -> Result<SdEntry> {
    if bytes.len() != 16 {
        return Err(Error::InvalidLength);
    }
    let entry_type = EntryType::from_u8(bytes[0]).ok_or(Error::SdInvalidHeader)?;
    if entry_type.is_service_entry() {
        let e = ServiceEntry::new_checked(bytes)?;
        Ok(SdEntry::Service(ServiceEntryRepr::parse(&e)?))
    } else {
        let e = EventGroupEntry::new_checked(bytes)?;
        Ok(SdEntry::Eventgroup(EventGroupEntryRepr::parse(&e)?))
    }
}

fn encode_one_entry(out: &mut Writer<'_>, entry: &SdEntry) -> Result<()> {
    let mut buf = [0u8; 16];
    match entry {
        SdEntry::Service(repr) => {
            let mut e = ServiceEntry::new_unchecked(&mut buf[..]);
            repr.emit(&mut e);
        }
        SdEntry::Eventgroup(repr) => {
            let mut e = EventGroupEntry::new_unchecked(&mut buf[..]);
            repr.emit(&mut e);
        }
    }
    out.write_bytes(&buf)
}

fn count_options(options_bytes: &[u8]) -> Result<usize> {
    let mut offset = 0usize;
    let mut count = 0usize;
    while offset < options_bytes.len() {
        let (_, consumed) = decode_one_option(&options_bytes[offset..])?;
        offset += consumed;
        count += 1;
    }
    Ok(count)
}

fn option_run_bytes<'a>(options_bytes: &'a [u8], index: u8, count: u8) -> Result<&'a [u8]> {
    if count == 0 {
        return Ok(&[]);
    }
    let mut offset = 0usize;
    let mut idx = 0usize;
    while idx < index as usize {
        if offset >= options_bytes.len() {
            return Err(Error::SdInvalidLengths);
        }
        let (_, consumed) = decode_one_option(&options_bytes[offset..])?;
        offset += consumed;
        idx += 1;
    }
    let start = offset;
    for _ in 0..count {
        if offset >= options_bytes.len() {
            return Err(Error::SdInvalidLengths);
        }
        let (_, consumed) = decode_one_option(&options_bytes[offset..])?;
        offset += consumed;
    }
    Ok(&options_bytes[start..offset])
}

/// Iterator over the 16-byte entries of a decoded SOME/IP-SD message.
#[derive(Debug, Clone)]
pub struct EntriesIter<'a> {
    bytes: &'a [u8],
}

impl<'a> Iterator for EntriesIter<'a> {
    type Item = Result<SdEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }
        if self.bytes.len() < 16 {
            self.bytes = &[];
            return Some(Err(Error::InvalidLength));
        }
        let (head, rest) = self.bytes.split_at(16);
        self.bytes = rest;
        Some(decode_one_entry(head))
    }
}

/// Iterator over a run of variable-length SOME/IP-SD options.
#[derive(Debug, Clone)]
pub struct OptionsIter<'a> {
    bytes: &'a [u8],
}

impl<'a> OptionsIter<'a> {
    /// Wraps a byte slice holding zero or more consecutive options.
    pub fn new(bytes: &'a [u8]) -> Self {
        OptionsIter { bytes }
    }
}

impl<'a> Iterator for OptionsIter<'a> {
    type Item = Result<SdOption<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }
        match decode_one_option(self.bytes) {
            Ok((opt, consumed)) => {
                self.bytes = &self.bytes[consumed..];
                Some(Ok(opt))
            }
            Err(e) => {
                self.bytes = &[];
                Some(Err(e))
            }
        }
    }
}

/// A decoded SOME/IP-SD message: the SOME/IP header plus a borrowed view of
/// the SD payload's entries and options arrays.
#[derive(Debug, Clone, Copy)]
pub struct SdMessageView<'a> {
    /// The enclosing SOME/IP header.
    pub header: Header,
    /// Reboot/unicast flags byte.
    pub flags: u8,
    /// Reserved 24-bit field, expected to be zero.
    pub reserved: u32,
    entries_bytes: &'a [u8],
    options_bytes: &'a [u8],
}

impl<'a> SdMessageView<'a> {
    /// Iterates over the message's entries.
    pub fn entries(&self) -> EntriesIter<'a> {
        EntriesIter { bytes: self.entries_bytes }
    }

    /// Iterates over the message's flat options array, ignoring entry option-run structure.
    pub fn options(&self) -> OptionsIter<'a> {
        OptionsIter::new(self.options_bytes)
    }

    /// Resolves an entry's two option runs to their underlying byte ranges
    /// within the message's flat options array.
    ///
    /// Validates index/count bounds and that distinct runs do not overlap,
    /// returning [`Error::SdInvalidLengths`] otherwise.
    pub fn resolve_option_runs(&self, entry: &SdEntry) -> Result<(OptionsIter<'a>, OptionsIter<'a>)> {
        let c1 = entry.first_run_count();
        let c2 = entry.second_run_count();
        let idx1 = entry.index_first_option_run();
        let idx2 = entry.index_second_option_run();

        if c1 == 0 && idx1 != 0 {
            return Err(Error::SdInvalidLengths);
        }
        if c2 == 0 && idx2 != 0 {
            return Err(Error::SdInvalidLengths);
        }

        let total_options = count_options(self.options_bytes)?;
        if c1 > 0 && (idx1 as usize + c1 as usize) > total_options {
            return Err(Error::SdInvalidLengths);
        }
        if c2 > 0 && (idx2 as usize + c2 as usize) > total_options {
            return Err(Error::SdInvalidLengths);
        }
        if c1 > 0 && c2 > 0 {
            let run1_start = idx1 as usize;
            let run1_end = run1_start + c1 as usize;
            let run2_start = idx2 as usize;
            let run2_end = run2_start + c2 as usize;
            if run1_start < run2_end && run2_start < run1_end {
                return Err(Error::SdInvalidLengths);
            }
        }

        let run1 = option_run_bytes(self.options_bytes, idx1, c1)?;
        let run2 = option_run_bytes(self.options_bytes, idx2, c2)?;
        Ok((OptionsIter::new(run1), OptionsIter::new(run2)))
    }
}

/// Decodes one SOME/IP-SD message from the front of `frame`.
///
/// Rejects frames whose SOME/IP header does not carry the reserved SD
/// service/method identifiers, or that are not an interface-version-1
/// notification, with [`Error::SdInvalidHeader`].
pub fn decode_message(frame: &[u8]) -> Result<SdMessageView<'_>> {
    let parsed = header::try_parse_frame(frame)?;
    if parsed.hdr.msg.service_id != SERVICE_ID || parsed.hdr.msg.method_id != METHOD_ID {
        return Err(Error::SdInvalidHeader);
    }
    if parsed.hdr.interface_version != 1 || parsed.hdr.msg_type != message_type::NOTIFICATION {
        return Err(Error::SdInvalidHeader);
    }

    let packet = Packet::new_checked(parsed.payload)?;
    if packet.total_length() != parsed.payload.len() {
        return Err(Error::SdInvalidLengths);
    }
    let repr = Repr::parse(&packet)?;

    if repr.entries.len() % 16 != 0 {
        return Err(Error::SdInvalidLengths);
    }

    Ok(SdMessageView {
        header: parsed.hdr,
        flags: repr.flags,
        reserved: repr.reserved,
        entries_bytes: repr.entries,
        options_bytes: repr.options,
    })
}

/// Encodes a SOME/IP-SD notification message into `buf`.
///
/// Assigns each entry's option-run index/count fields from its position in
/// the flattened options array (entries' runs are concatenated in entry
/// order, first run before second run, exactly as each entry appears).
/// Returns the total number of bytes written.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if any entry's option run exceeds 15
/// options, if the flattened options array would exceed 255 options, or if
/// any length computation would overflow. Returns [`Error::BufferTooSmall`]
/// if `buf` is not large enough to hold the encoded message.
pub fn encode_message(buf: &mut [u8], client_id: u16, session_id: u16, entries: &[SdEntryData<'_>]) -> Result<usize> {
    let entries_len = u32::try_from(entries.len()).ok().and_then(|n| n.checked_mul(16)).ok_or(Error::InvalidLength)?;

    let mut options_len: u32 = 0;
    let mut total_options: usize = 0;
    for e in entries {
        let (run1, run2) = e.runs();
        if run1.len() > MAX_OPTIONS_PER_RUN || run2.len() > MAX_OPTIONS_PER_RUN {
            return Err(Error::InvalidLength);
        }
        total_options = total_options
            .checked_add(run1.len())
            .and_then(|v| v.checked_add(run2.len()))
            .ok_or(Error::InvalidLength)?;
        if total_options > MAX_TOTAL_OPTIONS {
            return Err(Error::InvalidLength);
        }
        for opt in run1.iter().chain(run2.iter()) {
            options_len = options_len.checked_add(opt.wire_len()? as u32).ok_or(Error::InvalidLength)?;
        }
    }

    let payload_len = 8u32
        .checked_add(entries_len)
        .and_then(|v| v.checked_add(4))
        .and_then(|v| v.checked_add(options_len))
        .ok_or(Error::InvalidLength)?;
    let header_length = 8u32.checked_add(payload_len).ok_or(Error::InvalidLength)?;
    let total = 8usize.checked_add(header_length as usize).ok_or(Error::InvalidLength)?;

    if buf.len() < total {
        return Err(Error::BufferTooSmall);
    }

    let h = Header {
        msg: MessageId { service_id: SERVICE_ID, method_id: METHOD_ID },
        length: header_length,
        req: RequestId { client_id, session_id },
        protocol_version: 1,
        interface_version: 1,
        msg_type: message_type::NOTIFICATION,
        return_code: 0,
    };
    {
        let mut w = Writer::new(&mut buf[..header::HEADER_LEN]);
        header::encode_header(&mut w, &h)?;
    }

    let mut packet = Packet::new_unchecked(&mut buf[header::HEADER_LEN..total]);
    packet.set_flags(0);
    packet.set_reserved(0);
    packet.set_entries_length(entries_len);
    packet.set_options_length(options_len);

    let mut next_index: usize = 0;
    {
        let entries_buf = packet.entries_array_mut();
        let mut w = Writer::new(entries_buf);
        for e in entries {
            let (run1, run2) = e.runs();

            let idx1 = if run1.is_empty() { 0 } else { next_index as u8 };
            next_index = next_index.checked_add(run1.len()).ok_or(Error::InvalidLength)?;
            let idx2 = if run2.is_empty() { 0 } else { next_index as u8 };
            next_index = next_index.checked_add(run2.len()).ok_or(Error::InvalidLength)?;

            let number_of_options = NumberOfOptions::from_options(run1.len() as u8, run2.len() as u8);

            let sd_entry = match e {
                SdEntryData::Service(d) => SdEntry::Service(ServiceEntryRepr {
                    entry_type: EntryType::from_u8(d.entry_type).ok_or(Error::InvalidEntryType(d.entry_type))?,
                    index_first_option_run: idx1,
                    index_second_option_run: idx2,
                    number_of_options,
                    service_id: d.service_id,
                    instance_id: d.instance_id,
                    major_version: d.major_version,
                    ttl: d.ttl & 0x00FF_FFFF,
                    minor_version: d.minor_version,
                }),
                SdEntryData::Eventgroup(d) => SdEntry::Eventgroup(EventGroupEntryRepr {
                    entry_type: EntryType::from_u8(d.entry_type).ok_or(Error::InvalidEntryType(d.entry_type))?,
                    index_first_option_run: idx1,
                    index_second_option_run: idx2,
                    number_of_options,
                    service_id: d.service_id,
                    instance_id: d.instance_id,
                    major_version: d.major_version,
                    ttl: d.ttl & 0x00FF_FFFF,
                    reserved_and_counter: ReservedAndCounter::from_u16(d.reserved_and_counter),
                    eventgroup_id: d.eventgroup_id,
                }),
            };
            encode_one_entry(&mut w, &sd_entry)?;
        }
    }

    {
        let options_buf = packet.options_array_mut();
        let mut w = Writer::new(options_buf);
        for e in entries {
            let (run1, run2) = e.runs();
            for opt in run1.iter().chain(run2.iter()) {
                encode_one_option(&mut w, opt)?;
            }
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TransportProtocol;
    use crate::sd::packet_model::{EventgroupEntryData, ServiceEntryData};

    #[test]
    fn test_encode_decode_round_trip_no_options() {
        let entries = [SdEntryData::Service(ServiceEntryData {
            entry_type: EntryType::OfferService.as_u8(),
            service_id: 0x1234,
            instance_id: 0x0001,
            major_version: 1,
            ttl: 3,
            minor_version: 0,
            run1: &[],
            run2: &[],
        })];

        let mut buf = [0u8; 64];
        let n = encode_message(&mut buf, 0xAAAA, 0xBBBB, &entries).unwrap();

        let view = decode_message(&buf[..n]).unwrap();
        assert_eq!(view.header.req.client_id, 0xAAAA);
        assert_eq!(view.header.req.session_id, 0xBBBB);

        let decoded: Vec<_> = view.entries().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(decoded.len(), 1);
        match &decoded[0] {
            SdEntry::Service(r) => {
                assert_eq!(r.service_id, 0x1234);
                assert_eq!(r.ttl, 3);
            }
            SdEntry::Eventgroup(_) => panic!("expected service entry"),
        }
    }

    #[test]
    fn test_encode_decode_round_trip_with_options() {
        let opt = SdOption::Ipv4Endpoint {
            discardable: true,
            repr: IPv4EndpointOptionRepr { ipv4_address: [192, 168, 0, 1], protocol: TransportProtocol::UDP, port: 30509 },
        };
        let run1 = [opt];

        let entries = [SdEntryData::Eventgroup(EventgroupEntryData {
            entry_type: EntryType::SubscribeAck.as_u8(),
            service_id: 0x4321,
            instance_id: 0x0001,
            major_version: 1,
            ttl: 5,
            reserved_and_counter: 0,
            eventgroup_id: 0x0010,
            run1: &run1,
            run2: &[],
        })];

        let mut buf = [0u8; 128];
        let n = encode_message(&mut buf, 1, 2, &entries).unwrap();
        let view = decode_message(&buf[..n]).unwrap();

        let decoded: Vec<_> = view.entries().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(decoded.len(), 1);
        let (mut run1_iter, mut run2_iter) = view.resolve_option_runs(&decoded[0]).unwrap();
        let resolved = run1_iter.next().unwrap().unwrap();
        assert!(run1_iter.next().is_none());
        assert!(run2_iter.next().is_none());
        match resolved {
            SdOption::Ipv4Endpoint { discardable, repr } => {
                assert!(discardable);
                assert_eq!(repr.ipv4_address, [192, 168, 0, 1]);
                assert_eq!(repr.port, 30509);
            }
            other => panic!("unexpected option variant: {other:?}"),
        }
    }

    #[test]
    fn test_ipv4_endpoint_option_byte_order() {
        // addr=192.168.0.1, l4_proto=UDP(0x11), port=0x1234, reserved=0, non-discardable.
        let opt = SdOption::Ipv4Endpoint {
            discardable: false,
            repr: IPv4EndpointOptionRepr { ipv4_address: [192, 168, 0, 1], protocol: TransportProtocol::UDP, port: 0x1234 },
        };
        let mut buf = [0u8; 12];
        {
            let mut w = Writer::new(&mut buf);
            encode_one_option(&mut w, &opt).unwrap();
        }
        assert_eq!(buf, [0x00, 0x09, 0x04, 0x00, 0xC0, 0xA8, 0x00, 0x01, 0x11, 0x12, 0x34, 0x00]);

        let (decoded, consumed) = decode_one_option(&buf).unwrap();
        assert_eq!(consumed, 12);
        match decoded {
            SdOption::Ipv4Endpoint { discardable, repr } => {
                assert!(!discardable);
                assert_eq!(repr.ipv4_address, [192, 168, 0, 1]);
                assert_eq!(repr.protocol, TransportProtocol::UDP);
                assert_eq!(repr.port, 0x1234);
            }
            other => panic!("unexpected option variant: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_wrong_service_method_id() {
        let mut buf = [0u8; 16];
        let h = Header {
            msg: MessageId { service_id: 0x1111, method_id: 0x2222 },
            length: 8,
            req: RequestId::default(),
            protocol_version: 1,
            interface_version: 1,
            msg_type: message_type::NOTIFICATION,
            return_code: 0,
        };
        let mut w = Writer::new(&mut buf);
        header::encode_header(&mut w, &h).unwrap();
        assert_eq!(decode_message(&buf), Err(Error::SdInvalidHeader));
    }

    #[test]
    fn test_run_bounds_checked() {
        let entries = [SdEntryData::Service(ServiceEntryData {
            entry_type: EntryType::FindService.as_u8(),
            service_id: 1,
            instance_id: 1,
            major_version: 0,
            ttl: 0,
            minor_version: 0,
            run1: &[SdOption::Configuration { discardable: false, data: &[] }; 16],
            run2: &[],
        })];
        let mut buf = [0u8; 512];
        assert_eq!(encode_message(&mut buf, 0, 0, &entries), Err(Error::InvalidLength));
    }
}
