/// Out-of-band notices from the backend worker. View snapshots travel on a watch channel.
pub enum UiEvent {
    BackendFailed(String),
}
