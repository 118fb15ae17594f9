//! Room layout — accessories grouped by the room they are placed in.
//!
//! The layout only carries identifiers, names and service types. It never
//! exposes characteristic values, so it is served even when raw access is
//! disabled.

use serde::{Deserialize, Serialize};

use crate::accessory::AccessoryRecord;
use crate::id::AccessoryUniqueId;

/// Room that collects every accessory without an explicit room.
pub const DEFAULT_ROOM: &str = "Default Room";

/// One room and the accessories placed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRoom {
    pub name: String,
    pub services: Vec<LayoutEntry>,
}

/// An accessory reference inside a [`LayoutRoom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry {
    pub unique_id: AccessoryUniqueId,
    pub name: String,
    pub service_types: Vec<String>,
}

impl From<&AccessoryRecord> for LayoutEntry {
    fn from(accessory: &AccessoryRecord) -> Self {
        Self {
            unique_id: accessory.unique_id.clone(),
            name: accessory.name.clone(),
            service_types: accessory
                .services
                .iter()
                .map(|s| s.service_type.clone())
                .collect(),
        }
    }
}

/// Group accessories by room.
///
/// [`DEFAULT_ROOM`] always comes first (even when empty); other rooms follow
/// in the order they are first seen. Accessories keep their input order
/// within a room.
#[must_use]
pub fn group_by_room(accessories: &[AccessoryRecord]) -> Vec<LayoutRoom> {
    let mut rooms = vec![LayoutRoom {
        name: DEFAULT_ROOM.to_string(),
        services: Vec::new(),
    }];

    for accessory in accessories {
        let name = accessory.room.as_deref().unwrap_or(DEFAULT_ROOM);
        let entry = LayoutEntry::from(accessory);
        match rooms.iter_mut().find(|room| room.name == name) {
            Some(room) => room.services.push(entry),
            None => rooms.push(LayoutRoom {
                name: name.to_string(),
                services: vec![entry],
            }),
        }
    }

    rooms
}
