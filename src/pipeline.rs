//! Fetch -> split -> parallel map -> reduce -> visualize.

use std::convert::Infallible;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::coordinator;
use crate::count::{self, AggregateCount};
use crate::error::WordCountError;
use crate::fetch::{Fetch, Source};
use crate::split;
use crate::tokenize;
use crate::visualize::Visualizer;

/// Why nothing was handed to the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    /// The text contained no words.
    EmptyAggregate,
    /// Words were counted but the top-N selection is empty (`top_n == 0`).
    EmptySelection,
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDataReason::EmptyAggregate => f.write_str("the text contains no words"),
            NoDataReason::EmptySelection => f.write_str("no words selected for display"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered { entries: usize },
    NoData(NoDataReason),
}

/// Progress notifications emitted by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Fetching { source: String },
    Fetched { bytes: usize },
    Split { fragments: usize, lines: usize, dropped: usize },
    Mapped { fragments: usize },
    Reduced { distinct: usize, total: u64 },
    Rendering { entries: usize },
    NoData(NoDataReason),
}

pub trait Observer: Send + Sync {
    fn on_event(&self, event: &Event);
}

/// Reports progress through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&self, event: &Event) {
        match event {
            Event::Fetching { source } => tracing::info!(%source, "fetching text"),
            Event::Fetched { bytes } => tracing::info!(bytes, "text fetched"),
            Event::Split {
                fragments,
                lines,
                dropped,
            } => {
                tracing::info!(fragments, lines, "text split, counting words");
                if *dropped > 0 {
                    tracing::warn!(
                        dropped,
                        "line count not divisible by fragment count, trailing lines are not counted"
                    );
                }
            }
            Event::Mapped { fragments } => tracing::debug!(fragments, "all fragments mapped"),
            Event::Reduced { distinct, total } => {
                tracing::info!(distinct, total, "word counts merged")
            }
            Event::Rendering { entries } => tracing::info!(entries, "rendering results"),
            Event::NoData(reason) => tracing::warn!(%reason, "nothing to visualize"),
        }
    }
}

/// Split, map and reduce in-memory text.
pub async fn count_text(
    text: &str,
    num_chunks: NonZeroUsize,
    observer: &dyn Observer,
) -> Result<AggregateCount, WordCountError> {
    let lines = split::lines(text).len();
    let fragments = split::split(text, num_chunks);
    observer.on_event(&Event::Split {
        fragments: fragments.len(),
        lines,
        dropped: split::dropped_lines(lines, num_chunks),
    });

    let counts = coordinator::map_parallel(fragments, num_chunks, |fragment: &str| {
        Ok::<_, Infallible>(tokenize::tokenize(fragment))
    })
    .await?;
    observer.on_event(&Event::Mapped {
        fragments: counts.len(),
    });

    let aggregate = count::reduce(counts);
    observer.on_event(&Event::Reduced {
        distinct: aggregate.len(),
        total: aggregate.total(),
    });
    Ok(aggregate)
}

pub struct Pipeline<F, V> {
    fetcher: F,
    visualizer: V,
    config: PipelineConfig,
    observer: Arc<dyn Observer>,
}

impl<F: Fetch, V: Visualizer> Pipeline<F, V> {
    pub fn new(fetcher: F, visualizer: V, config: PipelineConfig) -> Self {
        Self {
            fetcher,
            visualizer,
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    #[cfg(test)]
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Fetch the source and count its words.
    pub async fn count(&self, source: &Source) -> Result<AggregateCount, WordCountError> {
        self.observer.on_event(&Event::Fetching {
            source: source.to_string(),
        });
        let text = self.fetcher.fetch(source).await?;
        self.observer.on_event(&Event::Fetched { bytes: text.len() });
        count_text(&text, self.config.num_chunks, self.observer.as_ref()).await
    }

    /// Count the source's words and render the top entries.
    ///
    /// The visualizer is not called when there is nothing to show.
    pub async fn run(&mut self, source: &Source) -> Result<Outcome, WordCountError> {
        let aggregate = self.count(source).await?;
        let top = aggregate.top(self.config.top_n);

        let reason = if aggregate.is_empty() {
            Some(NoDataReason::EmptyAggregate)
        } else if top.is_empty() {
            Some(NoDataReason::EmptySelection)
        } else {
            None
        };
        if let Some(reason) = reason {
            self.observer.on_event(&Event::NoData(reason));
            return Ok(Outcome::NoData(reason));
        }

        self.observer.on_event(&Event::Rendering { entries: top.len() });
        self.visualizer.render(&top, self.config.top_n)?;
        Ok(Outcome::Rendered { entries: top.len() })
    }
}
