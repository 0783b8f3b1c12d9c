use msgs::Shape;

use crate::broadcast_msg::ConnectionId;

/// The shared shape together with the connection that last moved it.
///
/// Only `position` ever leaves the server; the updater is used to address
/// the coalesced broadcast and is never serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeModel {
    position: Shape,
    last_updated_by: Option<ConnectionId>,
}

impl ShapeModel {
    pub fn new() -> ShapeModel {
        ShapeModel::default()
    }

    pub fn position(&self) -> Shape {
        self.position
    }

    pub fn set_position(&mut self, position: Shape) {
        self.position = position;
    }

    pub fn last_updated_by(&self) -> Option<ConnectionId> {
        self.last_updated_by
    }

    pub fn set_last_updated_by(&mut self, connection_id: ConnectionId) {
        self.last_updated_by = Some(connection_id);
    }
}

impl From<Shape> for ShapeModel {
    fn from(position: Shape) -> ShapeModel {
        ShapeModel { position, last_updated_by: None }
    }
}
