//! User-facing status lines.
//!
//! Any 2xx outcome is reported generically; failures are described from the
//! error taxonomy with the backend's own wording where it was parseable.

use crate::error::Error;

/// Shown after any 2xx response, regardless of body content.
pub const SUCCESS: &str = "Operation completed successfully.";

/// One-line description of a failed action.
pub fn describe(err: &Error) -> String {
    match err {
        Error::NoFieldsProvided => "No information provided for update.".to_string(),
        Error::BackendRejected { detail, .. } => format!("Error: {detail}"),
        Error::BackendUnparseable { .. } => {
            "Unknown error: the response could not be decoded.".to_string()
        }
        Error::Network(err) => format!("Error: {err}"),
        Error::Serialization(err) => format!("Error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_quotes_the_backend_detail() {
        let err = Error::BackendRejected {
            status: 404,
            detail: "Not Found".into(),
        };
        assert_eq!(describe(&err), "Error: Not Found");
    }

    #[test]
    fn listed_details_stay_on_separate_lines() {
        let err = Error::BackendRejected {
            status: 422,
            detail: "a\nb".into(),
        };
        let message = describe(&err);
        let a = message.find('a').unwrap();
        let b = message.find('b').unwrap();
        assert!(a < b);
        assert!(message.contains('\n'));
    }

    #[test]
    fn empty_update_has_a_local_message() {
        assert_eq!(
            describe(&Error::NoFieldsProvided),
            "No information provided for update."
        );
    }

    #[test]
    fn undecodable_bodies_report_generically() {
        let message = describe(&Error::BackendUnparseable { status: 500 });
        assert!(message.contains("Unknown error"));
    }
}
