use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetFormat(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid boolean value for {key}: '{value}'. Expected true/false, yes/no or 1/0.")]
    InvalidBool { key: String, value: String },

    #[error("Invalid integer value for {key}: '{value}'.")]
    InvalidInt { key: String, value: String },
}

/// Splits a `--set` argument into its key and value.
pub fn parse_set_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidSetFormat(kv_pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(kv_pair.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ParseError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

pub fn parse_u64(key: &str, value: &str) -> Result<u64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInt {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_values_split_on_first_equals() {
        assert_eq!(parse_set_value("groups.a=H"), Ok(("groups.a", "H")));
        assert_eq!(
            parse_set_value("host.url=http://h:1/?a=b"),
            Ok(("host.url", "http://h:1/?a=b"))
        );
        assert_eq!(parse_set_value(" variant = hbonds "), Ok(("variant", "hbonds")));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        assert_eq!(
            parse_set_value("variant"),
            Err(ParseError::InvalidSetFormat("variant".to_string()))
        );
        assert_eq!(
            parse_set_value("=x"),
            Err(ParseError::EmptyKey("=x".to_string()))
        );
    }

    #[test]
    fn booleans_accept_common_spellings() {
        assert_eq!(parse_bool("k", "TRUE"), Ok(true));
        assert_eq!(parse_bool("k", "no"), Ok(false));
        assert_eq!(parse_bool("k", "1"), Ok(true));
        assert!(matches!(
            parse_bool("k", "maybe"),
            Err(ParseError::InvalidBool { .. })
        ));
    }

    #[test]
    fn integers_are_parsed() {
        assert_eq!(parse_u64("host.timeout-secs", "30"), Ok(30));
        assert!(parse_u64("host.timeout-secs", "-1").is_err());
    }
}
