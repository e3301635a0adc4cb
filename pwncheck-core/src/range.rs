/// Errors from scanning a range response body.
#[derive(Debug, thiserror::Error)]
pub enum RangeError {
    #[error("malformed count {value:?} for matching suffix: {source}")]
    InvalidCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Scans a newline-delimited `SUFFIX:COUNT` body for `suffix` and returns the
/// occurrence count, or 0 when no line matches.
///
/// The comparison is exact and case-sensitive. The range endpoint answers in
/// uppercase hex, the same convention [`KAnonymitySplit`] produces; a response
/// in any other case does not match. Empty lines and lines without a `:`
/// separator are skipped. A matching line with an unparsable count is fatal
/// for the request.
///
/// [`KAnonymitySplit`]: crate::digest::KAnonymitySplit
pub fn occurrences(body: &str, suffix: &str) -> Result<u64, RangeError> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if candidate == suffix {
            return count.parse::<u64>().map_err(|source| RangeError::InvalidCount {
                value: count.to_string(),
                source,
            });
        }
    }

    Ok(0)
}
