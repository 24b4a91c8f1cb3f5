use flume::{Receiver, Sender};
use userdeck_business::{BusinessConfig, UserTableAction, UserTableState};

/// The main application state.
///
/// The user table only changes through [`State::dispatch`]. Async work (the
/// users fetch) reports back by sending actions on the channel, which the app
/// drains at the start of every frame.
pub struct State {
    /// Where the users come from.
    pub config: BusinessConfig,
    user_table: UserTableState,
    action_sender: Sender<UserTableAction>,
    action_receiver: Receiver<UserTableAction>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::from_env())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let (action_sender, action_receiver) = flume::unbounded();

        Self {
            config,
            user_table: UserTableState::new(),
            action_sender,
            action_receiver,
        }
    }

    /// State pointed at a mock users endpoint.
    pub fn test(users_url: String) -> Self {
        Self::with_config(BusinessConfig::new(users_url))
    }

    pub fn user_table(&self) -> &UserTableState {
        &self.user_table
    }

    /// Applies `action` to the user table right away.
    pub fn dispatch(&mut self, action: UserTableAction) {
        self.user_table = std::mem::take(&mut self.user_table).reduce(action);
    }

    /// A handle async tasks use to deliver actions back to the UI thread.
    pub fn action_sender(&self) -> Sender<UserTableAction> {
        self.action_sender.clone()
    }

    /// Applies every action delivered since the last frame, in arrival order.
    ///
    /// Returns how many were applied.
    pub fn drain_pending_actions(&mut self) -> usize {
        let pending: Vec<UserTableAction> = self.action_receiver.try_iter().collect();
        let count = pending.len();
        if count > 0 {
            self.user_table = std::mem::take(&mut self.user_table).reduce_all(pending);
        }
        count
    }
}
