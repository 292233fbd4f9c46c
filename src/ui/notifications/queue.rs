// SPDX-License-Identifier: MPL-2.0
//! Admission rules deciding which notifications a new arrival evicts.

use super::notification::NotificationId;
use super::options::{Position, QueueStrategy};

pub struct QueuePolicy;

impl QueuePolicy {
    /// Returns the members to evict before admitting a new notification.
    ///
    /// `members` holds the container's whole occupancy in visual order,
    /// including notifications that are already exiting.
    #[must_use]
    pub fn admit(
        position: Position,
        members: &[NotificationId],
        strategy: QueueStrategy,
        max_visible: usize,
    ) -> Vec<NotificationId> {
        match strategy {
            QueueStrategy::ReplaceAll => members.to_vec(),
            QueueStrategy::Collapse => members.first().copied().into_iter().collect(),
            QueueStrategy::ReplaceOldest if members.len() >= max_visible => {
                // Top anchors prepend, so the oldest sits at the visual end.
                let oldest = if position.is_top() {
                    members.last()
                } else {
                    members.first()
                };
                oldest.copied().into_iter().collect()
            }
            QueueStrategy::ReplaceOldest | QueueStrategy::Stack => Vec::new(),
        }
    }
}
