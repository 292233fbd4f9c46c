// SPDX-License-Identifier: MPL-2.0
//! Screen-anchored containers, one per [`Position`] at most.
//!
//! A container is registered while it has members and is released as soon as
//! its last member is removed.

use super::notification::NotificationId;
use super::options::Position;
use std::collections::{BTreeMap, VecDeque};

/// Ordered members of one anchor. Front is the visual top.
#[derive(Debug, Clone)]
pub struct Container {
    position: Position,
    members: VecDeque<NotificationId>,
}

impl Container {
    fn new(position: Position) -> Self {
        Self {
            position,
            members: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Prepends for top anchors, appends otherwise.
    pub fn insert(&mut self, id: NotificationId) {
        if self.position.is_top() {
            self.members.push_front(id);
        } else {
            self.members.push_back(id);
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        match self.members.iter().position(|member| *member == id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn members(&self) -> impl Iterator<Item = NotificationId> + '_ {
        self.members.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.members.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: BTreeMap<Position, Container>,
}

impl ContainerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container for `position` and whether it was just created.
    pub fn get_or_create(&mut self, position: Position) -> (&mut Container, bool) {
        let created = !self.containers.contains_key(&position);
        let container = self
            .containers
            .entry(position)
            .or_insert_with(|| Container::new(position));
        (container, created)
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Container> {
        self.containers.get(&position)
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Container> {
        self.containers.get_mut(&position)
    }

    /// Unregisters the container if it is empty. Returns whether it was released.
    pub fn release(&mut self, position: Position) -> bool {
        if self
            .containers
            .get(&position)
            .is_some_and(Container::is_empty)
        {
            self.containers.remove(&position);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.containers.values()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.containers.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
