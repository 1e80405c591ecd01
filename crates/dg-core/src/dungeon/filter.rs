//! Main room selection

use super::room::Room;

/// Whether a room is large enough to be a main room
pub fn is_main_room(room: &Room, threshold: u32) -> bool {
    room.width > threshold && room.height > threshold
}

/// Copy out the rooms whose sides both exceed `threshold`, keeping order.
pub fn select_main_rooms(rooms: &[Room], threshold: u32) -> Vec<Room> {
    rooms
        .iter()
        .filter(|room| is_main_room(room, threshold))
        .cloned()
        .collect()
}
