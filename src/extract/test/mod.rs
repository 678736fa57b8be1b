use crate::{
    error::MentionError,
    extract::{
        extract_first_id, extract_ids, extract_mentions, get_channel_id_from_mention,
        get_channel_ids_from_mention, get_role_id_from_mention, get_role_ids_from_mention,
        get_user_id_from_mention, get_user_ids_from_mention, parse_mention,
    },
    model::mention::{Mention, MentionKind},
};
use test_utils::{factory, fixture};

mod parse_mention;
