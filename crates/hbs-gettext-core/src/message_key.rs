/// Separates context from msgid in a catalog key. Same sentinel Jed uses.
pub const CONTEXT_DELIMITER: char = '\u{0004}';

/// Catalog identity of a message.
///
/// Without a context the key is the bare msgid. An empty context still gets
/// the delimiter, so `Some("")` and `None` never share a key.
pub fn message_key(msgid: &str, msgctxt: Option<&str>) -> String {
    match msgctxt {
        Some(context) => {
            let mut key = String::with_capacity(context.len() + msgid.len() + 1);
            key.push_str(context);
            key.push(CONTEXT_DELIMITER);
            key.push_str(msgid);
            key
        }
        None => msgid.to_string(),
    }
}
