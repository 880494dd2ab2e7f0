//! Shared SELECT fragments
//!
//! Subtype selects join their `images` row to pick up `img_url`. Aliases are
//! fixed (`u`, `s`, `c`, `m`, `r`, `i`) so callers can append `WHERE` clauses
//! written against them.

use crate::schema::TableNames;

pub(crate) fn select_images(t: &TableNames) -> String {
    format!("SELECT i.id, i.type, i.type_id, i.img_url FROM {} i", t.images)
}

pub(crate) fn select_users(t: &TableNames) -> String {
    format!(
        "SELECT u.id, u.username, u.email, u.hashed_password, i.img_url \
         FROM {} u JOIN {} i ON i.id = u.id",
        t.users, t.images
    )
}

pub(crate) fn select_servers(t: &TableNames) -> String {
    format!(
        "SELECT s.id, s.name, s.\"DM\" AS dm, s.owner_id, i.img_url \
         FROM {} s JOIN {} i ON i.id = s.id",
        t.servers, t.images
    )
}

pub(crate) fn select_channels(t: &TableNames) -> String {
    format!("SELECT c.id, c.server_id, c.name FROM {} c", t.channels)
}

pub(crate) fn select_messages(t: &TableNames) -> String {
    format!(
        "SELECT m.id, m.channel_id, m.user_id, m.text, i.img_url \
         FROM {} m JOIN {} i ON i.id = m.id",
        t.messages, t.images
    )
}

pub(crate) fn select_reactions(t: &TableNames) -> String {
    format!("SELECT r.id, r.message_id, r.user_id, r.type FROM {} r", t.reactions)
}

/// Insert a base row for a subtype, with `type_id` set to the new id
///
/// The id is drawn from the `images` sequence up front so both columns are
/// filled by one statement.
pub(crate) fn insert_subtype_image(t: &TableNames) -> String {
    format!(
        "INSERT INTO {images} (id, type, type_id, img_url) \
         SELECT seq.next_id, $1, seq.next_id, $2 \
         FROM (SELECT nextval(pg_get_serial_sequence('{images}', 'id')) AS next_id) seq \
         RETURNING id",
        images = t.images
    )
}
