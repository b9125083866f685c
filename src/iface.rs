//! AUTOSAR-style service interface fields.
//!
//! A field bundles a getter/setter method pair and an optional change
//! notification event under one service/instance, the way AUTOSAR adaptive
//! and classic service interfaces describe a field port. [`FieldDescriptor`]
//! names the four method/event identifiers involved; the `make_*_header`
//! functions build the [`crate::header::Header`] for each operation the way
//! a generated proxy/skeleton would, and `is_get_request`/`is_set_request`
//! classify an incoming request against a descriptor on the skeleton side.
//!
//! `make_*_header` only ever build the header: as in the source this crate
//! is grounded on, payload bytes (a `set` argument, a field's current value)
//! are a [`crate::ser`] concern the caller composes separately, so every
//! header built here has `length == 8`, the no-payload minimum.

use crate::header::{message_type, Header, MessageId, RequestId};

/// Identifies a single AUTOSAR-style field within a service: its getter and
/// setter methods, and the event used to notify subscribers of changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Service identifier the field belongs to.
    pub service_id: u16,
    /// Method identifier for reading the field's current value.
    pub getter_method_id: u16,
    /// Method identifier for writing a new value.
    pub setter_method_id: u16,
    /// Event identifier used to notify subscribers when the value changes.
    pub notifier_event_id: u16,
    /// Eventgroup identifier a client subscribes to in order to receive notifications.
    pub eventgroup_id: u16,
    /// Whether the field supports `get`.
    pub readable: bool,
    /// Whether the field supports `set`.
    pub writable: bool,
    /// Whether the field emits change notifications.
    pub notifies: bool,
}

/// Builds the header for a `get` request against `f`.
pub fn make_get_request_header(f: &FieldDescriptor, req: RequestId, interface_version: u8) -> Header {
    Header {
        msg: MessageId { service_id: f.service_id, method_id: f.getter_method_id },
        length: 8,
        req,
        protocol_version: 1,
        interface_version,
        msg_type: message_type::REQUEST,
        return_code: 0,
    }
}

/// Builds the header for a `set` request against `f`.
pub fn make_set_request_header(f: &FieldDescriptor, req: RequestId, interface_version: u8) -> Header {
    Header {
        msg: MessageId { service_id: f.service_id, method_id: f.setter_method_id },
        length: 8,
        req,
        protocol_version: 1,
        interface_version,
        msg_type: message_type::REQUEST,
        return_code: 0,
    }
}

/// Builds the header for a change notification of `f`.
///
/// Notifications are fire-and-forget events: the request id is always zero.
pub fn make_notify_header(f: &FieldDescriptor, interface_version: u8) -> Header {
    Header {
        msg: MessageId { service_id: f.service_id, method_id: f.notifier_event_id },
        length: 8,
        req: RequestId { client_id: 0, session_id: 0 },
        protocol_version: 1,
        interface_version,
        msg_type: message_type::NOTIFICATION,
        return_code: 0,
    }
}

/// True if `h` is a `get` request addressed to `f`.
pub fn is_get_request(h: &Header, f: &FieldDescriptor) -> bool {
    h.msg.service_id == f.service_id && h.msg.method_id == f.getter_method_id && h.msg_type == message_type::REQUEST
}

/// True if `h` is a `set` request addressed to `f`.
pub fn is_set_request(h: &Header, f: &FieldDescriptor) -> bool {
    h.msg.service_id == f.service_id && h.msg.method_id == f.setter_method_id && h.msg_type == message_type::REQUEST
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_field() -> FieldDescriptor {
        FieldDescriptor {
            service_id: 0x1000,
            getter_method_id: 0x0001,
            setter_method_id: 0x0002,
            notifier_event_id: 0x8001,
            eventgroup_id: 0x0001,
            readable: true,
            writable: true,
            notifies: true,
        }
    }

    #[test]
    fn test_make_get_request_header() {
        let f = sample_field();
        let req = RequestId { client_id: 0x1111, session_id: 0x0001 };
        let h = make_get_request_header(&f, req, 1);
        assert_eq!(h.msg.method_id, f.getter_method_id);
        assert_eq!(h.msg_type, message_type::REQUEST);
        assert_eq!(h.length, 8);
        assert!(is_get_request(&h, &f));
        assert!(!is_set_request(&h, &f));
    }

    #[test]
    fn test_make_set_request_header() {
        let f = sample_field();
        let req = RequestId { client_id: 0x1111, session_id: 0x0002 };
        let h = make_set_request_header(&f, req, 1);
        assert_eq!(h.msg.method_id, f.setter_method_id);
        assert_eq!(h.length, 8);
        assert!(is_set_request(&h, &f));
        assert!(!is_get_request(&h, &f));
    }

    #[test]
    fn test_make_notify_header_has_zero_request_id() {
        let f = sample_field();
        let h = make_notify_header(&f, 1);
        assert_eq!(h.msg.method_id, f.notifier_event_id);
        assert_eq!(h.msg_type, message_type::NOTIFICATION);
        assert_eq!(h.req, RequestId::default());
        assert_eq!(h.length, 8);
    }

    #[test]
    fn test_is_get_request_rejects_wrong_service() {
        let f = sample_field();
        let mut h = make_get_request_header(&f, RequestId::default(), 1);
        h.msg.service_id = 0x9999;
        assert!(!is_get_request(&h, &f));
    }
}
