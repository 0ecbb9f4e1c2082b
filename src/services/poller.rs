use std::{fmt, path::PathBuf, time::Duration};

use tokio::time;

use crate::{
    dal::SnapshotStore,
    domain::{places_db::extract_payload, snapshot::parse_and_rewrite, PollError},
};

use super::Fetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iterations {
    Bounded(u64),
    Unbounded,
}

impl Iterations {
    fn allows(&self, completed: u64) -> bool {
        match self {
            Iterations::Bounded(n) => completed < *n,
            Iterations::Unbounded => true,
        }
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iterations::Bounded(n) => write!(f, "{} cycles", n),
            Iterations::Unbounded => write!(f, "forever"),
        }
    }
}

/// Source of the unix timestamp a snapshot is filed under.
pub trait Clock {
    fn now_unix(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

pub struct Poller<C = SystemClock> {
    fetcher: Fetcher,
    store: SnapshotStore,
    interval: Duration,
    iterations: Iterations,
    clock: C,
}

impl Poller<SystemClock> {
    pub fn new(
        fetcher: Fetcher,
        store: SnapshotStore,
        interval: Duration,
        iterations: Iterations,
    ) -> Self {
        Poller {
            fetcher,
            store,
            interval,
            iterations,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Poller<C> {
    pub fn with_clock<D: Clock>(self, clock: D) -> Poller<D> {
        Poller {
            fetcher: self.fetcher,
            store: self.store,
            interval: self.interval,
            iterations: self.iterations,
            clock,
        }
    }

    /// One fetch, extract, parse and persist cycle. Returns the written file.
    pub async fn poll_once(&self) -> Result<PathBuf, PollError> {
        let page_source = self.fetcher.fetch_snapshot().await?;

        let raw_json = extract_payload(&page_source).ok_or_else(|| PollError::NoMatch {
            url: self.fetcher.url().to_string(),
        })?;

        let pretty_json = parse_and_rewrite(raw_json)?;
        let captured_at = self.clock.now_unix();

        let path = self.store.persist(&pretty_json, captured_at).await?;
        log::info!("Saved snapshot to {}", path.display());

        Ok(path)
    }

    /// Polls until the iteration bound is reached, sleeping `interval` between
    /// cycles. The first error ends the run.
    pub async fn run(&self) -> Result<u64, PollError> {
        self.store.prepare().await?;

        log::info!(
            "Started polling {} every {:?}, {}",
            self.fetcher.url(),
            self.interval,
            self.iterations
        );

        let mut completed = 0;
        while self.iterations.allows(completed) {
            self.poll_once().await?;
            completed += 1;

            if self.iterations.allows(completed) {
                time::sleep(self.interval).await;
            }
        }

        log::info!("Finished after {} snapshots", completed);
        Ok(completed)
    }
}
