use super::*;

/// Tests rendering each mention kind.
///
/// Expected: `<@id>`, `<@&id>` and `<#id>`
#[test]
fn formats_each_kind() {
    assert_eq!(format_mention(MentionKind::User, "1"), "<@1>");
    assert_eq!(format_mention(MentionKind::Role, "2"), "<@&2>");
    assert_eq!(format_mention(MentionKind::Channel, "3"), "<#3>");
}

/// Tests that formatted mentions are found again by extraction.
///
/// Expected: extracting a formatted mention yields exactly its ID
#[test]
fn extraction_reads_back_formatted_mentions() {
    for kind in MentionKind::ALL {
        let id = factory::snowflake();
        let text = format_mention(kind, &id);

        assert_eq!(extract_ids(&text, kind), vec![id]);
    }
}
