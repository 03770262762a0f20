/// Renders the generated `version.rs`: a `&str` constant and a terminated
/// byte-string copy. Byte strings only accept ASCII, so the bytes are escaped
/// individually rather than reusing the `str` escapes.
fn version_source(version: &str) -> String {
    let mut terminated = version.as_bytes().to_vec();
    terminated.push(0);

    format!(
        "pub const VERSION: &str = \"{}\";\npub const VERSION_CSTR: &[u8] = b\"{}\";\n",
        version.escape_default(),
        terminated.escape_ascii()
    )
}
