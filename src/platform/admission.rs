// ABOUTME: Classifies submission comments embedded in otherwise-successful responses.
// ABOUTME: Separates fatal admission verdicts from the benign already-active race.

/// Prefix the platform puts on bill-of-materials failure comments.
pub const ERROR_MARKER: &str = "ERROR:BOM:";

/// Failure code for the benign "a deployment is already running" race.
pub const ACTIVE_DEPLOYMENT_CODE: &str = "activedeployment";

/// Verdict on a submission comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// No failure marker; the call succeeded.
    Clean,

    /// A previous submission already started this work. The submission is
    /// treated as having succeeded and the caller keeps going.
    Ignorable(String),

    /// The platform refused the work.
    Fatal(String),
}

/// Classify a comment string returned alongside a submission response.
///
/// Comments without the [`ERROR_MARKER`] prefix are genuine successes. For
/// marked comments, the third colon-delimited segment carries the failure
/// code. The already-active code downgrades to [`Admission::Ignorable`]
/// only when the comment carries detail beyond the bare marker; a comment
/// that is exactly the bare marker is ambiguous and stays fatal.
pub fn classify(comment: Option<&str>) -> Admission {
    let comment = match comment {
        Some(c) if !c.is_empty() => c,
        _ => return Admission::Clean,
    };

    if !comment.starts_with(ERROR_MARKER) {
        return Admission::Clean;
    }

    let code = comment.split(':').nth(2).unwrap_or("");

    // code already matched case-insensitively, so a length comparison is a
    // case-insensitive check for the bare "ERROR:BOM:activedeployment".
    let bare = comment.len() == ERROR_MARKER.len() + ACTIVE_DEPLOYMENT_CODE.len();

    if code.eq_ignore_ascii_case(ACTIVE_DEPLOYMENT_CODE) && !bare {
        Admission::Ignorable(comment.to_string())
    } else {
        Admission::Fatal(comment.to_string())
    }
}
