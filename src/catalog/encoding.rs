use std::fs;
use std::io;
use std::path::Path;

/// Read a properties file as text
///
/// UTF-8 is tried first. Anything else is decoded as ISO-8859-1, the classic
/// `.properties` encoding, where every byte maps to the code point of the same
/// value, so no existing value is lost.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode(bytes))
}

pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through() {
        assert_eq!(decode("Déjà vu".as_bytes().to_vec()), "Déjà vu");
    }

    #[test]
    fn test_latin1_bytes_decoded() {
        assert_eq!(decode(b"D\xe9j\xe0".to_vec()), "Déjà");
    }

    #[test]
    fn test_read_text_latin1_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gui_fr.properties");
        fs::write(&path, b"close = Fermer\nalready = D\xe9j\xe0\n").unwrap();

        assert_eq!(read_text(&path).unwrap(), "close = Fermer\nalready = Déjà\n");
    }
}
