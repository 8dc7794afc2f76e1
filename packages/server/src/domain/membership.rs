//! Membership model: who is bound where.
//!
//! [`ConnectionRegistry`] is the source of truth for each connection's
//! binding, [`RoomIndex`] holds room → members, and [`Membership`] owns both
//! and exposes the compound join/leave transitions. Callers only mutate the
//! pair through `Membership`, which keeps these invariants:
//!
//! - a connection is in a room's member list iff its binding names that room
//! - a connection belongs to at most one room
//! - a room exists in the index iff it has at least one member

use std::collections::HashMap;

use super::{
    entity::Binding,
    value_object::{ConnectionId, RoomName, Username},
};

/// Connection ID → binding map.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    bindings: HashMap<ConnectionId, Binding>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the binding for `connection_id`, overwriting any previous one.
    ///
    /// The room index is not touched; keeping it in step is the caller's job.
    pub fn bind(&mut self, connection_id: ConnectionId, binding: Binding) {
        self.bindings.insert(connection_id, binding);
    }

    pub fn lookup(&self, connection_id: &ConnectionId) -> Option<&Binding> {
        self.bindings.get(connection_id)
    }

    /// Remove and return the binding. Unbinding twice is a no-op.
    pub fn unbind(&mut self, connection_id: &ConnectionId) -> Option<Binding> {
        self.bindings.remove(connection_id)
    }

    fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConnectionId, &Binding)> {
        self.bindings.iter()
    }
}

/// Result of removing a member from a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomRemoval {
    /// The connection was not a member (or the room does not exist)
    NotMember,
    /// The last member left and the room entry was deleted
    Emptied,
    /// Members still in the room, in join order
    Remaining(Vec<ConnectionId>),
}

/// Room name → member connection IDs, in join order.
#[derive(Debug, Default)]
pub struct RoomIndex {
    rooms: HashMap<RoomName, Vec<ConnectionId>>,
}

impl RoomIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member, creating the room on first join.
    pub fn insert(&mut self, room: RoomName, connection_id: ConnectionId) {
        let members = self.rooms.entry(room).or_default();
        if !members.contains(&connection_id) {
            members.push(connection_id);
        }
    }

    /// Remove a member. A room whose member list becomes empty is deleted here
    /// and nowhere else.
    pub fn remove(&mut self, room: &RoomName, connection_id: &ConnectionId) -> RoomRemoval {
        let Some(members) = self.rooms.get_mut(room) else {
            return RoomRemoval::NotMember;
        };
        let Some(position) = members.iter().position(|id| id == connection_id) else {
            return RoomRemoval::NotMember;
        };
        members.remove(position);

        if members.is_empty() {
            self.rooms.remove(room);
            RoomRemoval::Emptied
        } else {
            RoomRemoval::Remaining(members.clone())
        }
    }

    /// Members of `room`; empty when the room does not exist.
    pub fn members(&self, room: &RoomName) -> &[ConnectionId] {
        self.rooms.get(room).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_room(&self, room: &RoomName) -> bool {
        self.rooms.contains_key(room)
    }

    /// Names of all rooms, sorted.
    pub fn room_names(&self) -> Vec<RoomName> {
        let mut names: Vec<RoomName> = self.rooms.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RoomName, &Vec<ConnectionId>)> {
        self.rooms.iter()
    }
}

/// Snapshot of a departure, taken inside the leave transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveTransition {
    /// The binding that was removed
    pub binding: Binding,
    /// Members left in the room; empty when the room was deleted
    pub remaining: Vec<ConnectionId>,
    /// Usernames of `remaining`, in join order
    pub usernames: Vec<Username>,
}

/// Snapshot of an arrival, taken inside the join transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTransition {
    pub binding: Binding,
    /// Departure from the previous room, if the connection was already bound
    pub previous: Option<LeaveTransition>,
    /// Members of the room other than the joiner
    pub others: Vec<ConnectionId>,
    /// All members of the room, joiner included
    pub members: Vec<ConnectionId>,
    /// Usernames of `members`, in join order
    pub usernames: Vec<Username>,
}

/// Binding and room members of a bound connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomContext {
    pub binding: Binding,
    pub members: Vec<ConnectionId>,
}

/// Owner of the registry and room index.
#[derive(Debug, Default)]
pub struct Membership {
    registry: ConnectionRegistry,
    rooms: RoomIndex,
}

impl Membership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(
        &mut self,
        connection_id: ConnectionId,
        username: Username,
        room: RoomName,
    ) -> JoinTransition {
        let previous = self.leave(&connection_id);

        let binding = Binding::new(username, room.clone());
        self.registry.bind(connection_id.clone(), binding.clone());
        self.rooms.insert(room.clone(), connection_id.clone());

        let members = self.rooms.members(&room).to_vec();
        let others = members
            .iter()
            .filter(|id| **id != connection_id)
            .cloned()
            .collect();
        let usernames = self.usernames_of(&members);

        debug_assert!(self.is_consistent());

        JoinTransition {
            binding,
            previous,
            others,
            members,
            usernames,
        }
    }

    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<LeaveTransition> {
        let binding = self.registry.unbind(connection_id)?;

        let remaining = match self.rooms.remove(&binding.room, connection_id) {
            RoomRemoval::Remaining(members) => members,
            RoomRemoval::Emptied => Vec::new(),
            RoomRemoval::NotMember => {
                tracing::warn!(
                    "Connection '{}' was bound to '{}' but not listed as a member",
                    connection_id,
                    binding.room
                );
                Vec::new()
            }
        };
        let usernames = self.usernames_of(&remaining);

        debug_assert!(self.is_consistent());

        Some(LeaveTransition {
            binding,
            remaining,
            usernames,
        })
    }

    pub fn context(&self, connection_id: &ConnectionId) -> Option<RoomContext> {
        let binding = self.registry.lookup(connection_id)?.clone();
        let members = self.rooms.members(&binding.room).to_vec();
        Some(RoomContext { binding, members })
    }

    pub fn room_names(&self) -> Vec<RoomName> {
        self.rooms.room_names()
    }

    pub fn members(&self, room: &RoomName) -> &[ConnectionId] {
        self.rooms.members(room)
    }

    pub fn room_usernames(&self, room: &RoomName) -> Option<Vec<Username>> {
        if !self.rooms.contains_room(room) {
            return None;
        }
        Some(self.usernames_of(self.rooms.members(room)))
    }

    /// Check the registry and room index agree in both directions.
    pub fn is_consistent(&self) -> bool {
        let indexed: usize = self.rooms.iter().map(|(_, members)| members.len()).sum();
        if indexed != self.registry.len() {
            return false;
        }
        let every_binding_listed = self
            .registry
            .iter()
            .all(|(id, binding)| self.rooms.members(&binding.room).contains(id));
        let every_member_bound = self.rooms.iter().all(|(room, members)| {
            !members.is_empty()
                && members
                    .iter()
                    .all(|id| self.registry.lookup(id).is_some_and(|b| &b.room == room))
        });
        every_binding_listed && every_member_bound
    }

    fn usernames_of(&self, connection_ids: &[ConnectionId]) -> Vec<Username> {
        connection_ids
            .iter()
            .filter_map(|id| self.registry.lookup(id))
            .map(|binding| binding.username.clone())
            .collect()
    }
}
