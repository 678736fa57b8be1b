use super::*;

/// Tests parsing input that is exactly one mention.
///
/// Expected: Ok with the ID, surrounding whitespace ignored
#[test]
fn parses_single_mention() {
    assert_eq!(parse_mention("<@!123>", MentionKind::User), Ok("123".to_string()));
    assert_eq!(parse_mention("  <@&456>\n", MentionKind::Role), Ok("456".to_string()));
    assert_eq!(parse_mention("<#789>", MentionKind::Channel), Ok("789".to_string()));
}

/// Tests input that contains a mention alongside other text.
///
/// Expected: Err with InvalidMention carrying the original input
#[test]
fn rejects_surrounding_text() {
    let result = parse_mention("hi <@123>", MentionKind::User);

    assert_eq!(
        result,
        Err(MentionError::InvalidMention {
            kind: MentionKind::User,
            value: "hi <@123>".to_string(),
        })
    );
}

/// Tests input holding more than one mention.
///
/// Expected: Err with InvalidMention
#[test]
fn rejects_several_mentions() {
    let result = parse_mention("<@1><@2>", MentionKind::User);

    assert!(matches!(result, Err(MentionError::InvalidMention { .. })));
}

/// Tests a mention of a different kind than requested.
///
/// Expected: Err with InvalidMention
#[test]
fn rejects_other_kind() {
    let result = parse_mention("<@&456>", MentionKind::User);

    assert!(matches!(
        result,
        Err(MentionError::InvalidMention {
            kind: MentionKind::User,
            ..
        })
    ));
}

/// Tests empty and malformed input.
///
/// Expected: Err for every input
#[test]
fn rejects_malformed_input() {
    assert!(parse_mention("", MentionKind::Channel).is_err());
    for text in fixture::MALFORMED_MENTIONS {
        assert!(parse_mention(text, MentionKind::User).is_err());
    }
}
