//! Git packet-line decoding.
//!
//! Each packet line is prefixed with a 4-character hex length that includes
//! itself:
//!
//! - `0000` -- flush packet (end of section)
//! - `0001` -- delimiter packet
//! - `0002` -- response-end packet
//! - `0004`+ -- data packet (length includes the 4 prefix bytes)

use tracing::trace;

use crate::version::error::RemoteError;

/// A single packet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PktLine {
    /// A data packet containing arbitrary bytes.
    Data(Vec<u8>),
    /// Flush packet (`0000`).
    Flush,
    /// Delimiter packet (`0001`).
    Delimiter,
    /// Response-end packet (`0002`).
    ResponseEnd,
}

/// Decode a complete sequence of packet lines.
///
/// Unlike a streaming reader this rejects trailing garbage and truncated
/// packets, since a ref advertisement is always read in full.
pub fn decode_pkt_lines(data: &[u8]) -> Result<Vec<PktLine>, RemoteError> {
    let mut packets = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let Some(prefix) = data.get(pos..pos + 4) else {
            return Err(RemoteError::Protocol(format!(
                "truncated packet-line length at offset {pos}"
            )));
        };

        let pkt_len = std::str::from_utf8(prefix)
            .ok()
            .and_then(|hex| usize::from_str_radix(hex, 16).ok())
            .ok_or_else(|| {
                RemoteError::Protocol(format!("invalid packet-line length at offset {pos}"))
            })?;

        match pkt_len {
            0 => packets.push(PktLine::Flush),
            1 => packets.push(PktLine::Delimiter),
            2 => packets.push(PktLine::ResponseEnd),
            3 => {
                return Err(RemoteError::Protocol(format!(
                    "invalid packet-line length 0003 at offset {pos}"
                )));
            }
            n => {
                let Some(payload) = data.get(pos + 4..pos + n) else {
                    return Err(RemoteError::Protocol(format!(
                        "truncated packet-line at offset {pos}: declared {n} bytes, {} available",
                        data.len() - pos
                    )));
                };
                trace!(offset = pos, payload_len = payload.len(), "data packet");
                packets.push(PktLine::Data(payload.to_vec()));
                pos += n;
                continue;
            }
        }
        pos += 4;
    }

    Ok(packets)
}

#[cfg(test)]
pub(crate) fn encode_pkt_line(data: &[u8]) -> Vec<u8> {
    let mut buf = format!("{:04x}", data.len() + 4).into_bytes();
    buf.extend_from_slice(data);
    buf
}
