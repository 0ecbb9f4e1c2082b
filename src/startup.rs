use crate::{
    configuration::Settings,
    dal::SnapshotStore,
    domain::PollError,
    services::{Fetcher, Poller},
};

pub fn build_poller(settings: &Settings) -> Result<Poller, PollError> {
    let fetcher = Fetcher::new(
        settings.poller.source_url.clone(),
        settings.poller.request_timeout(),
    )?;
    let store = SnapshotStore::new(settings.storage.output_dir.clone());

    Ok(Poller::new(
        fetcher,
        store,
        settings.poller.interval(),
        settings.poller.iterations(),
    ))
}

pub async fn run(settings: Settings) -> Result<u64, PollError> {
    build_poller(&settings)?.run().await
}
