use sectxt_domain::Diagnostics;
use sectxt_types::ids;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a security.txt body as UTF-8. A leading BOM is stripped and reported;
/// invalid sequences are reported and replaced.
pub fn decode_body(bytes: &[u8], out: &mut Diagnostics) -> String {
    let body = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => {
            out.error(
                ids::CODE_BOM_IN_FILE,
                "The Byte-Order Mark was found in the UTF-8 File. Security.txt must be encoded \
                 using UTF-8 in Net-Unicode form, the BOM signature must not appear at the beginning.",
                None,
            );
            rest
        }
        None => bytes,
    };

    match std::str::from_utf8(body) {
        Ok(text) => text.to_string(),
        Err(_) => {
            out.error(ids::CODE_UTF8, "Content must be utf-8 encoded.", None);
            String::from_utf8_lossy(body).into_owned()
        }
    }
}
