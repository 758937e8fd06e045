use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_schedule(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::loan::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::loan::build_loan_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn loan_payment(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::loan::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let payment = fincalc_core::loan::monthly_payment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "monthly_payment": payment }))
        .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Certificates
// ---------------------------------------------------------------------------

#[napi]
pub fn certificate_schedule(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::certificate::CertificateInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::certificate::build_certificate_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn certificate_interest(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::certificate::CertificateInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let interest =
        fincalc_core::certificate::total_interest(&input).map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "total_interest": interest }))
        .map_err(to_napi_error)
}
