use std::sync::Arc;

use msgs::{ClientMsg, Shape};

use crate::{broadcast_msg::ConnectionId, broadcaster::Broadcaster, shape_model::ShapeModel, transport::Transport};

/// Entry point for the calls of a single connection.
pub struct Session<T> {
    connection_id: ConnectionId,
    broadcaster: Arc<Broadcaster<T>>,
}

impl<T: Transport> Session<T> {
    pub fn new(connection_id: ConnectionId, broadcaster: Arc<Broadcaster<T>>) -> Session<T> {
        Session { connection_id, broadcaster }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    pub async fn handle(&self, msg: ClientMsg) {
        match msg {
            ClientMsg::UpdateModel (shape) => self.update_model(shape).await,
            ClientMsg::TriggerShapeClick => self.trigger_shape_click(),
            ClientMsg::TriggerShapeDoubleClick => self.trigger_shape_double_click(),
        }
    }

    /// The updater is always the connection the call arrived on.
    pub async fn update_model(&self, shape: Shape) {
        let mut model = ShapeModel::from(shape);
        model.set_last_updated_by(self.connection_id);
        self.broadcaster.update_shape(model).await;
    }

    pub fn trigger_shape_click(&self) {
        self.broadcaster.relay_click();
    }

    pub fn trigger_shape_double_click(&self) {
        self.broadcaster.relay_double_click();
    }
}

#[cfg(test)]
mod tests {
    use msgs::ServerMsg;

    use super::*;
    use crate::{broadcast_msg::Address, broadcaster::tests::RecordingTransport};

    #[tokio::test]
    async fn update_is_stamped_with_the_calling_connection() {
        let transport = RecordingTransport::with_connections(3);
        let broadcaster = Arc::new(Broadcaster::new(transport.clone()));
        let a = Session::new(ConnectionId::new(), broadcaster.clone());

        a.handle(ClientMsg::UpdateModel(Shape::new(10.0, 20.0))).await;

        let model = broadcaster.model().await;
        assert_eq!(model.position(), Shape::new(10.0, 20.0));
        assert_eq!(model.last_updated_by(), Some(a.connection_id()));
        assert!(broadcaster.is_dirty().await);
    }

    #[tokio::test]
    async fn sessions_share_one_broadcaster() {
        let transport = RecordingTransport::with_connections(3);
        let broadcaster = Arc::new(Broadcaster::new(transport.clone()));
        let a = Session::new(ConnectionId::new(), broadcaster.clone());
        let b = Session::new(ConnectionId::new(), broadcaster.clone());

        a.update_model(Shape::new(1.0, 1.0)).await;
        b.update_model(Shape::new(2.0, 3.0)).await;
        broadcaster.broadcast_shape().await;

        assert_eq!(
            transport.sent(),
            vec![(Address::AllExcept(b.connection_id()), ServerMsg::UpdateShape(Shape::new(2.0, 3.0)))]
        );
    }

    #[tokio::test]
    async fn clicks_are_relayed_to_everyone() {
        let transport = RecordingTransport::with_connections(3);
        let broadcaster = Arc::new(Broadcaster::new(transport.clone()));
        let a = Session::new(ConnectionId::new(), broadcaster.clone());

        a.handle(ClientMsg::TriggerShapeClick).await;
        a.handle(ClientMsg::TriggerShapeDoubleClick).await;

        assert_eq!(
            transport.sent(),
            vec![
                (Address::All, ServerMsg::ClientClickedShape),
                (Address::All, ServerMsg::ClientDoubleClickedShape),
            ]
        );
        assert!(!broadcaster.is_dirty().await);
    }
}
