//! Human readable rendering of decoded packets

use std::fmt::Write as _;

use simaka_eap::{ClientErrorCode, EapMessage, TypeData};

/// Subtype header followed by one attribute per line
pub fn render_type_data(type_data: &TypeData) -> String {
    let reserved = type_data.reserved();
    let mut out = format!(
        "{} {} (subtype {}), reserved {:02x}{:02x}, {} attribute(s)",
        type_data.method(),
        type_data.subtype_name(),
        type_data.subtype(),
        reserved[0],
        reserved[1],
        type_data.attributes().len(),
    );
    for attribute in type_data.attributes() {
        let _ = write!(out, "\n  {attribute}");
    }
    out
}

/// The line printed when type data is rejected
pub fn render_client_error(code: ClientErrorCode) -> String {
    format!("Client-Error {} ({code})", u16::from(code))
}

/// Packet header, then the type data when it is SIM/AKA
pub fn render_packet(message: &EapMessage) -> String {
    let mut out = format!(
        "EAP {} id={} length={}",
        message.code,
        message.identifier,
        message.encoded_len()
    );

    let Some(data) = &message.data else {
        return out;
    };

    let eap_type = u8::from(data.eap_type);
    match data.eap_type.method() {
        Some(method) => {
            let _ = write!(out, "\n{method} ({eap_type})");
            let body = match message.sim_aka_type_data() {
                Ok(type_data) => render_type_data(&type_data),
                Err(code) => render_client_error(code),
            };
            for line in body.lines() {
                let _ = write!(out, "\n  {line}");
            }
        }
        None => {
            let _ = write!(
                out,
                "\n{:?} ({eap_type}) {}",
                data.eap_type,
                simaka_common::format_hex_compact(&data.type_data, 4)
            );
        }
    }
    out
}
