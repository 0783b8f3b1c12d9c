use std::{sync::Arc, time::Duration};

use msgs::ServerMsg;
use tokio::{sync::Mutex, time::MissedTickBehavior};
use tracing::debug;

use crate::{broadcast_msg::Address, shape_model::ShapeModel, transport::Transport};

pub const DEFAULT_BROADCAST_INTERVAL: Duration = Duration::from_millis(20);

struct BroadcastState {
    model: ShapeModel,
    // true while `model` has not been pushed since it was last replaced
    dirty: bool,
}

/// Owns the shared shape and pushes it to clients at a fixed rate.
///
/// Updates only replace the model and mark it dirty; the periodic tick sends
/// whatever is current at that moment, so several updates between two ticks
/// collapse into a single push of the last one. Click events skip all of this
/// and go out immediately to every connection.
pub struct Broadcaster<T> {
    transport: T,
    state: Mutex<BroadcastState>,
}

impl<T: Transport> Broadcaster<T> {
    /// A broadcaster without a timer; call `broadcast_shape` to tick it.
    pub fn new(transport: T) -> Broadcaster<T> {
        Broadcaster {
            transport,
            state: Mutex::new(BroadcastState {
                model: ShapeModel::new(),
                dirty: false,
            }),
        }
    }

    /// Creates the broadcaster and starts its broadcast loop, which runs for
    /// as long as the runtime does.
    pub fn start(transport: T, interval: Duration) -> Arc<Broadcaster<T>> {
        let broadcaster = Arc::new(Broadcaster::new(transport));
        spawn_broadcast_loop(broadcaster.clone(), interval);
        broadcaster
    }

    pub async fn update_shape(&self, model: ShapeModel) {
        let mut state = self.state.lock().await;
        state.model = model;
        state.dirty = true;
    }

    /// One tick: push the current shape to everyone but its last updater,
    /// if it changed since the previous push.
    pub async fn broadcast_shape(&self) {
        let model = {
            let mut state = self.state.lock().await;
            if !state.dirty {
                return;
            }
            state.dirty = false;
            state.model.clone()
        };

        if self.transport.connection_count() == 0 {
            return;
        }

        let address = match model.last_updated_by() {
            Some(connection_id) => Address::AllExcept(connection_id),
            None => Address::All,
        };
        debug!("broadcasting shape {:?} to {address:?}", model.position());
        self.transport.send(address, ServerMsg::UpdateShape(model.position()));
    }

    pub fn relay_click(&self) {
        debug!("relaying shape click");
        self.transport.send(Address::All, ServerMsg::ClientClickedShape);
    }

    pub fn relay_double_click(&self) {
        debug!("relaying shape double click");
        self.transport.send(Address::All, ServerMsg::ClientDoubleClickedShape);
    }

    pub async fn model(&self) -> ShapeModel {
        self.state.lock().await.model.clone()
    }

    pub async fn is_dirty(&self) -> bool {
        self.state.lock().await.dirty
    }
}

fn spawn_broadcast_loop<T: Transport>(broadcaster: Arc<Broadcaster<T>>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            broadcaster.broadcast_shape().await;
        }
    });
}
