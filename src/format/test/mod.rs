use crate::{
    extract::extract_ids,
    format::{build_message_url, format_mention, get_message_url},
    model::{mention::MentionKind, message::MessageRef},
};
use test_utils::factory;

mod format_mention;
