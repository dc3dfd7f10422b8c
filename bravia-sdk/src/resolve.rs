//! Approximate-name resolution for device resources
//!
//! Lets a human refer to apps and inputs by rough name: `"net"` finds
//! Netflix, `"hd1"` finds the input labeled "HDMI 1". Matching is
//! case-folded subsequence scoring; the resource list is always fetched
//! fresh from the device, never cached across calls, because installed apps
//! and connected inputs change between invocations.

use bravia_api::{Application, BraviaClient, ExternalInputStatus};
use thiserror::Error;

/// Errors from name resolution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No resource scored above zero for the query
    #[error("No match found for '{0}'")]
    NoMatch(String),
}

/// Score `query` as a case-folded subsequence of `candidate`
///
/// Every query character must appear in order (not necessarily contiguous)
/// in the candidate; otherwise there is no match. Contiguous runs and a
/// match starting at the first character score higher, so tighter matches
/// beat scattered ones.
fn subsequence_score(query: &str, candidate: &str) -> Option<u32> {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    let candidate: Vec<char> = candidate.to_lowercase().chars().collect();
    if query.is_empty() {
        return None;
    }

    let mut score = 0u32;
    let mut previous: Option<usize> = None;
    let mut position = 0usize;

    for &wanted in &query {
        let found = candidate[position..]
            .iter()
            .position(|&c| c == wanted)
            .map(|offset| position + offset)?;

        score += 2;
        match previous {
            Some(p) if found == p + 1 => score += 3,
            None if found == 0 => score += 5,
            _ => {}
        }
        previous = Some(found);
        position = found + 1;
    }

    Some(score)
}

/// Resolve a human-supplied approximate name against a resource list
///
/// Scores every resource's key, discards zero-score candidates, and returns
/// the highest-scoring resource. Ties are broken by position in `resources`
/// (earliest wins), so results are deterministic for the device-returned
/// order.
pub fn resolve<'a, R>(
    query: &str,
    resources: &'a [R],
    key: impl Fn(&R) -> &str,
) -> Result<&'a R, ResolveError> {
    let mut best: Option<(u32, &R)> = None;
    for resource in resources {
        if let Some(score) = subsequence_score(query, key(resource)) {
            match best {
                Some((top, _)) if score <= top => {}
                _ => best = Some((score, resource)),
            }
        }
    }
    best.map(|(_, resource)| resource)
        .ok_or_else(|| ResolveError::NoMatch(query.to_string()))
}

/// Find an installed app by approximate title, returning it with its URI
///
/// Performs exactly one fresh device query per call.
pub fn find_app(client: &BraviaClient, query: &str) -> crate::Result<Application> {
    let apps = client.app_control.get_application_list()?;
    let app = resolve(query, &apps, |app| &app.title)?;
    tracing::debug!(title = %app.title, uri = %app.uri, "resolved app");
    Ok(app.clone())
}

/// Find an external input by approximate title
pub fn find_input_by_name(
    client: &BraviaClient,
    query: &str,
) -> crate::Result<ExternalInputStatus> {
    let inputs = client.av_content.get_current_external_inputs_status()?;
    let input = resolve(query, &inputs, |input| &input.title)?;
    tracing::debug!(title = %input.title, uri = %input.uri, "resolved input");
    Ok(input.clone())
}

/// Find an external input by approximate user-assigned label
pub fn find_input_by_label(
    client: &BraviaClient,
    query: &str,
) -> crate::Result<ExternalInputStatus> {
    let inputs = client.av_content.get_current_external_inputs_status()?;
    let input = resolve(query, &inputs, |input| &input.label)?;
    tracing::debug!(label = %input.label, uri = %input.uri, "resolved input");
    Ok(input.clone())
}
