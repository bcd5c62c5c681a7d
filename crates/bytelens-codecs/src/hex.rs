use bytelens_types::DecodeStep;

/// One lowercase hex pair per byte.
pub(crate) fn decode(buf: &[u8]) -> DecodeStep {
    DecodeStep::Emit {
        text: format!("{:02x}", buf[0]),
        consumed: 1,
    }
}
