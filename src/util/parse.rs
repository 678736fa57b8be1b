use crate::error::MentionError;

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(MentionError::ParseStringId)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, MentionError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| MentionError::ParseStringId {
            value,
            source: e,
        })?;

    Ok(result)
}

/// Parses a non-zero snowflake from String
///
/// # Arguments
/// - `value` - Captured digit run to convert
///
/// # Returns
/// - `Ok(u64)` - Non-zero snowflake value
/// - `Err(MentionError::ParseStringId)` - Value does not fit in a `u64`
/// - `Err(MentionError::ZeroId)` - Value is zero
pub fn parse_snowflake(value: String) -> Result<u64, MentionError> {
    match parse_u64_from_string(value.clone())? {
        0 => Err(MentionError::ZeroId { value }),
        id => Ok(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests parsing the largest value a snowflake can hold.
    ///
    /// Verifies that `u64::MAX` survives the round trip without precision loss,
    /// which is the reason identifiers are never routed through a float.
    ///
    /// Expected: Ok with u64::MAX
    #[test]
    fn parses_u64_max() {
        let result = parse_u64_from_string(u64::MAX.to_string());

        assert_eq!(result, Ok(u64::MAX));
    }

    /// Tests parsing a digit run one past `u64::MAX`.
    ///
    /// Expected: Err with ParseStringId carrying the original value
    #[test]
    fn fails_on_overflow() {
        let result = parse_u64_from_string("18446744073709551616".to_string());

        match result {
            Err(MentionError::ParseStringId { value, .. }) => {
                assert_eq!(value, "18446744073709551616")
            }
            other => panic!("expected ParseStringId, got {:?}", other),
        }
    }

    /// Tests that a run of zeros is rejected as a snowflake.
    ///
    /// Expected: Err with ZeroId
    #[test]
    fn snowflake_rejects_zero() {
        let result = parse_snowflake("000".to_string());

        assert_eq!(
            result,
            Err(MentionError::ZeroId {
                value: "000".to_string()
            })
        );
    }

    /// Tests that a signed zero is rejected as a snowflake.
    ///
    /// Verifies that `u64` parsing accepting a leading `+` cannot slip a zero past
    /// the check.
    ///
    /// Expected: Err with ZeroId for every form
    #[test]
    fn snowflake_rejects_signed_zero() {
        for value in ["+0", "+000"] {
            assert_eq!(
                parse_snowflake(value.to_string()),
                Err(MentionError::ZeroId {
                    value: value.to_string()
                })
            );
        }
    }

    /// Tests that leading zeros on a non-zero value are accepted.
    ///
    /// Expected: Ok with 42
    #[test]
    fn snowflake_accepts_leading_zeros() {
        assert_eq!(parse_snowflake("0042".to_string()), Ok(42));
    }
}
