//! Property-based tests for request validation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use agentprov_cli::application::services::provision::ProvisioningOrchestrator;
use agentprov_cli::application::services::validate::validate;
use agentprov_cli::domain::validate::TOKEN_RE;
use agentprov_cli::domain::{
    DirectoryState, InstallerSettings, ProvisioningError, ValidationError,
};

use crate::helpers::{
    FakeDir, FetchBehaviour, RecordingFetcher, RecordingReporter, RecordingRunner, VALID_TOKEN,
    VALID_URL, request,
};

const WRITABLE: FakeDir = FakeDir(DirectoryState::Writable);

/// Region prefix plus 8-4-4-4-12 hex groups.
fn well_formed_token() -> impl Strategy<Value = String> {
    (
        "[a-z]{2}",
        "[0-9a-fA-F]{8}",
        "[0-9a-fA-F]{4}",
        "[0-9a-fA-F]{4}",
        "[0-9a-fA-F]{4}",
        "[0-9a-fA-F]{12}",
    )
        .prop_map(|(r, a, b, c, d, e)| format!("{r}:{a}-{b}-{c}-{d}-{e}"))
}

fn run_pipeline(url: &str, token: &str) -> (ProvisioningError, usize, usize) {
    let fetcher = RecordingFetcher::new(FetchBehaviour::Ok(1));
    let runner = RecordingRunner::exiting(0);
    let reporter = RecordingReporter::default();
    let installer = InstallerSettings::default();
    let orchestrator =
        ProvisioningOrchestrator::new(&WRITABLE, &fetcher, &runner, &reporter, &installer);

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let err = rt
        .block_on(orchestrator.run(request(url, "/tmp/valid", token)))
        .expect_err("pipeline should fail");
    (err, fetcher.call_count(), runner.call_count())
}

proptest! {
    /// Every generated well-formed token passes.
    #[test]
    fn prop_well_formed_tokens_are_accepted(token in well_formed_token()) {
        prop_assert!(validate(request(VALID_URL, "/tmp/valid", &token), &WRITABLE).is_ok());
    }

    /// Arbitrary strings that miss the pattern fail with `BadTokenFormat`
    /// and never reach the fetch or install stages.
    #[test]
    fn prop_malformed_tokens_never_fetch_or_install(token in "\\PC{0,48}") {
        prop_assume!(!TOKEN_RE.is_match(&token));
        let (err, fetches, installs) = run_pipeline(VALID_URL, &token);
        prop_assert!(matches!(
            err,
            ProvisioningError::Validation(ValidationError::BadTokenFormat)
        ));
        prop_assert_eq!(fetches, 0);
        prop_assert_eq!(installs, 0);
    }

    /// Uppercase region letters are rejected.
    #[test]
    fn prop_uppercase_region_rejected(token in well_formed_token()) {
        let upper = format!("{}{}", token[..2].to_ascii_uppercase(), &token[2..]);
        prop_assert_eq!(
            validate(request(VALID_URL, "/tmp/valid", &upper), &WRITABLE).unwrap_err(),
            ValidationError::BadTokenFormat
        );
    }

    /// Trailing garbage after a well-formed token is rejected.
    #[test]
    fn prop_token_suffix_rejected(token in well_formed_token(), suffix in "[ -~]{1,8}") {
        let padded = format!("{token}{suffix}");
        prop_assert_eq!(
            validate(request(VALID_URL, "/tmp/valid", &padded), &WRITABLE).unwrap_err(),
            ValidationError::BadTokenFormat
        );
    }

    /// URLs without an accepted scheme fail before any network call.
    #[test]
    fn prop_non_http_urls_never_fetch(url in "[a-zA-Z0-9+.:/-]{0,40}") {
        prop_assume!(!url.starts_with("http://") && !url.starts_with("https://"));
        let (err, fetches, installs) = run_pipeline(&url, VALID_TOKEN);
        prop_assert!(matches!(
            err,
            ProvisioningError::Validation(ValidationError::BadUrlScheme(_))
        ));
        prop_assert_eq!(fetches, 0);
        prop_assert_eq!(installs, 0);
    }

    /// Any path after an accepted scheme passes the URL check.
    #[test]
    fn prop_http_and_https_urls_accepted(
        scheme in prop::sample::select(vec!["http://", "https://"]),
        rest in "[a-z0-9./-]{1,40}",
    ) {
        let url = format!("{scheme}{rest}");
        prop_assert!(validate(request(&url, "/tmp/valid", VALID_TOKEN), &WRITABLE).is_ok());
    }
}

#[test]
fn test_scheme_match_is_case_sensitive() {
    let err = validate(request("HTTPS://example.test/a.msi", "/tmp/valid", VALID_TOKEN), &WRITABLE)
        .unwrap_err();
    assert!(matches!(err, ValidationError::BadUrlScheme(_)));
}
