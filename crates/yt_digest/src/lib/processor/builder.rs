use yt_data_api::VideoPlatform;

use crate::{yt::TranscriptSource, DigestProcessor, Summarizer};

pub struct DigestProcessorBuilder<P = (), T = (), S = ()> {
    platform: P,
    transcripts: T,
    summarizer: S,
}

impl DigestProcessorBuilder {
    pub fn new() -> Self {
        Self {
            platform: (),
            transcripts: (),
            summarizer: (),
        }
    }
}

impl Default for DigestProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, T, S> DigestProcessorBuilder<P, T, S> {
    pub fn platform<P2: VideoPlatform + Clone + Send + Sync + 'static>(
        self,
        platform: P2,
    ) -> DigestProcessorBuilder<P2, T, S> {
        DigestProcessorBuilder {
            platform,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
        }
    }

    pub fn transcripts<T2: TranscriptSource + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> DigestProcessorBuilder<P, T2, S> {
        DigestProcessorBuilder {
            platform: self.platform,
            transcripts,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Clone + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> DigestProcessorBuilder<P, T, S2> {
        DigestProcessorBuilder {
            platform: self.platform,
            transcripts: self.transcripts,
            summarizer,
        }
    }
}

impl<P, T, S> DigestProcessorBuilder<P, T, S>
where
    P: VideoPlatform + Clone + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Clone + Send + Sync + 'static,
{
    pub fn build(self) -> DigestProcessor<P, T, S> {
        DigestProcessor {
            platform: self.platform,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
        }
    }
}
