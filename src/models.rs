/// One month of WBGT measurements for one location, as fetched.
/// The body is kept as raw bytes, it is never parsed or re-encoded.
///
pub struct Snapshot {
    pub url: String,
    pub body: Vec<u8>,
}
