use std::io;

pub(crate) trait FromWideString: AsRef<[u16]> {
    /// Converts UTF-16 to UTF-8, failing on unpaired surrogates instead of replacing them.
    fn to_utf8_string(&self) -> io::Result<String> {
        String::from_utf16(self.as_ref()).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Failed to convert wide string to UTF-8: {err}"),
            )
        })
    }
}
impl<T: AsRef<[u16]> + ?Sized> FromWideString for T {}
