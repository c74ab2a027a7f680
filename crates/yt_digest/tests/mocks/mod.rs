#![allow(dead_code)]

pub mod platform;
pub mod summarizer;
pub mod transcripts;

use platform::MockPlatform;
use transcripts::MockTranscripts;

/// Two resolvable channels and one that exists but never uploaded anything:
/// * `UCbeta` ("Beta Channel", handle `@beta`) with three uploads, newest `beta-3`
/// * `UCgamma` ("Gamma Channel", only reachable by searching `gamma`) with one upload
/// * `UCempty` ("Empty Channel") with no uploads
pub fn fixture_platform() -> MockPlatform {
    MockPlatform::with_key("default-yt-key")
        .with_channel(
            "UCbeta",
            "Beta Channel",
            &[
                ("beta-3", "Beta newest", "2025-03-03T10:00:00Z"),
                ("beta-2", "Beta older", "2025-03-02T10:00:00Z"),
                ("beta-1", "Beta oldest", "2025-03-01T10:00:00Z"),
            ],
        )
        .with_handle("@beta", "UCbeta")
        .with_search("@beta", "UCbeta", "Beta Channel")
        .with_search("beta", "UCbeta", "Beta Channel")
        .with_channel(
            "UCgamma",
            "Gamma Channel",
            &[("gamma-1", "Gamma only", "2025-02-01T08:30:00Z")],
        )
        .with_search("gamma", "UCgamma", "Gamma Channel")
        .with_channel("UCempty", "Empty Channel", &[])
}

/// English transcript for `beta-3`, German only for `gamma-1`
pub fn fixture_transcripts() -> MockTranscripts {
    MockTranscripts::default()
        .with_track("beta-3", "en", true, &["hello", "from beta"])
        .with_track("gamma-1", "de", false, &["hallo", "von gamma"])
}
