//! Registration request parsing
//!
//! The only request the protocol knows is `REGISTER <id> <port>`.

use crate::error::ProtocolError;

/// A validated registration request.
#[derive(Debug, PartialEq)]
pub struct Registration {
    pub id: String,
    pub listen_port: u16,
}

/// Parses a raw request line into a [`Registration`].
///
/// Requires at least three whitespace-separated tokens, a
/// case-insensitive `REGISTER` keyword, and a base-10 u16 port.
/// Extra trailing tokens are tolerated and ignored.
pub fn parse_registration(raw: &str) -> Result<Registration, ProtocolError> {
    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    if parts.len() < 3 || !parts[0].eq_ignore_ascii_case("REGISTER") {
        return Err(ProtocolError::MalformedRequest(trimmed.to_string()));
    }

    let listen_port: u16 = parts[2]
        .parse()
        .map_err(|_| ProtocolError::BadPort(parts[2].to_string()))?;

    Ok(Registration {
        id: parts[1].to_string(),
        listen_port,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_registration() {
        let reg = parse_registration("REGISTER alice 5000\n").unwrap();
        assert_eq!(reg.id, "alice");
        assert_eq!(reg.listen_port, 5000);
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let reg = parse_registration("register bob 6000").unwrap();
        assert_eq!(reg.id, "bob");
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let reg = parse_registration("REGISTER alice 5000 extra junk").unwrap();
        assert_eq!(reg.listen_port, 5000);
    }

    #[test]
    fn rejects_unparseable_port() {
        let err = parse_registration("REGISTER alice notaport").unwrap_err();
        assert_eq!(err, ProtocolError::BadPort("notaport".to_string()));
        assert_eq!(err.wire_reply(), Some("ERR bad port\n"));
    }

    #[test]
    fn rejects_out_of_range_port() {
        let err = parse_registration("REGISTER alice 70000").unwrap_err();
        assert!(matches!(err, ProtocolError::BadPort(_)));
    }

    #[test]
    fn rejects_wrong_command() {
        let err = parse_registration("HELLO alice 5000").unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedRequest(_)));
        assert_eq!(err.wire_reply(), Some("ERR expected REGISTER <id> <port>\n"));
    }

    #[test]
    fn rejects_too_few_tokens() {
        let err = parse_registration("REGISTER alice").unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedRequest(_)));
    }

    #[test]
    fn rejects_empty_line() {
        let err = parse_registration("\n").unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedRequest(_)));
    }
}
