//! Proposal response validation.

use crate::error::UnsuccessfulResponse;
use crate::protos::common::Status;
use crate::protos::peer::ProposalResponse;

/// Name used in error messages for status codes outside the enumeration.
const UNRECOGNIZED_STATUS: &str = "UNRECOGNIZED";

/// Whether a status code counts as success: `SUCCESS <= code < BAD_REQUEST`.
pub fn is_successful_status(code: i32) -> bool {
    (Status::Success.code()..Status::BadRequest.code()).contains(&code)
}

/// Reject any response whose status falls outside the success range.
pub fn check_successful(response: &ProposalResponse) -> Result<(), UnsuccessfulResponse> {
    let code = response.status();
    if is_successful_status(code) {
        return Ok(());
    }

    Err(UnsuccessfulResponse {
        code,
        name: Status::from_code(code)
            .map(|status| status.as_str())
            .unwrap_or(UNRECOGNIZED_STATUS),
        message: response.message().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protos::peer::Response;

    fn response(status: i32, message: &str) -> ProposalResponse {
        ProposalResponse {
            response: Some(Response {
                status,
                message: message.to_string(),
                payload: Vec::new(),
            }),
            ..ProposalResponse::default()
        }
    }

    #[test]
    fn test_success_range_accepts() {
        for code in [200, 201, 299, 399] {
            assert!(check_successful(&response(code, "")).is_ok(), "status {code}");
        }
    }

    #[test]
    fn test_bad_request_boundary_rejects() {
        assert!(check_successful(&response(400, "")).is_err());
        assert!(check_successful(&response(500, "")).is_err());
    }

    #[test]
    fn test_below_success_rejects() {
        assert!(check_successful(&response(199, "")).is_err());
        assert!(check_successful(&response(0, "")).is_err());
        assert!(check_successful(&response(-1, "")).is_err());
    }

    #[test]
    fn test_missing_response_rejects() {
        let err = check_successful(&ProposalResponse::default()).unwrap_err();
        assert_eq!(err.code, 0);
        assert_eq!(err.name, "UNKNOWN");
    }

    #[test]
    fn test_error_describes_code_name_and_message() {
        let err = check_successful(&response(400, "bad args")).unwrap_err();
        assert_eq!(
            err,
            UnsuccessfulResponse {
                code: 400,
                name: "BAD_REQUEST",
                message: "bad args".to_string(),
            }
        );

        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("BAD_REQUEST"));
        assert!(text.contains("bad args"));
    }

    #[test]
    fn test_unrecognized_status_name() {
        let err = check_successful(&response(418, "teapot")).unwrap_err();
        assert_eq!(err.name, "UNRECOGNIZED");
        assert!(err.to_string().contains("418"));
    }
}
