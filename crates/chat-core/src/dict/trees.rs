//! Fully expanded entity graphs
//!
//! Each tree owns an entity plus its children. The `assemble` constructors
//! group flat row lists by parent id, preserving the order rows arrive in.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::dict::ToDict;
use crate::entities::{Channel, Message, Reaction, Server, User};
use crate::value_objects::Id;

/// Message with its reactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTree {
    pub message: Message,
    pub reactions: Vec<Reaction>,
}

/// Channel with its messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTree {
    pub channel: Channel,
    pub messages: Vec<MessageTree>,
}

/// Server with its channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerTree {
    pub server: Server,
    pub channels: Vec<ChannelTree>,
}

/// User with owned servers and authored messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTree {
    pub user: User,
    pub servers: Vec<ServerTree>,
    pub messages: Vec<MessageTree>,
}

fn group_by<T>(items: Vec<T>, key: impl Fn(&T) -> Id) -> HashMap<Id, Vec<T>> {
    let mut groups: HashMap<Id, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

impl MessageTree {
    /// Attach reactions to their messages
    pub fn assemble(messages: Vec<Message>, reactions: Vec<Reaction>) -> Vec<Self> {
        let mut by_message = group_by(reactions, |r| r.message_id);
        messages
            .into_iter()
            .map(|message| Self {
                reactions: by_message.remove(&message.id()).unwrap_or_default(),
                message,
            })
            .collect()
    }
}

impl ChannelTree {
    /// Attach message trees to their channels
    pub fn assemble(channels: Vec<Channel>, messages: Vec<MessageTree>) -> Vec<Self> {
        let mut by_channel = group_by(messages, |m| m.message.channel_id);
        channels
            .into_iter()
            .map(|channel| Self {
                messages: by_channel.remove(&channel.id).unwrap_or_default(),
                channel,
            })
            .collect()
    }
}

impl ServerTree {
    /// Attach channel trees to their servers
    pub fn assemble(servers: Vec<Server>, channels: Vec<ChannelTree>) -> Vec<Self> {
        let mut by_server = group_by(channels, |c| c.channel.server_id);
        servers
            .into_iter()
            .map(|server| Self {
                channels: by_server.remove(&server.id()).unwrap_or_default(),
                server,
            })
            .collect()
    }
}

impl ToDict for MessageTree {
    fn to_dict(&self) -> Value {
        json!({
            "id": self.message.id(),
            "channel_id": self.message.channel_id,
            "user_id": self.message.user_id,
            "text": self.message.text,
            "reactions": self.reactions.to_dict(),
        })
    }
}

impl ToDict for ChannelTree {
    fn to_dict(&self) -> Value {
        json!({
            "id": self.channel.id,
            "server_id": self.channel.server_id,
            "name": self.channel.name,
            "messages": self.messages.to_dict(),
        })
    }
}

impl ToDict for ServerTree {
    fn to_dict(&self) -> Value {
        json!({
            "id": self.server.id(),
            "name": self.server.name,
            "DM": self.server.dm,
            "owner_id": self.server.owner_id,
            "channels": self.channels.to_dict(),
        })
    }
}

impl ToDict for UserTree {
    fn to_dict(&self) -> Value {
        json!({
            "id": self.user.id(),
            "username": self.user.username,
            "email": self.user.email,
            "servers": self.servers.to_dict(),
            "messages": self.messages.to_dict(),
        })
    }
}
