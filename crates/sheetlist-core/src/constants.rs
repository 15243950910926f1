/// OAuth2 token endpoint for service-account assertions.
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Base URL of the spreadsheet values API.
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Read/write scope requested for every token.
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for a signed assertion.
pub const ASSERTION_LIFETIME_SECONDS: i64 = 3600;

/// Subtracted from the issuer-reported token lifetime before caching.
pub const TOKEN_EXPIRY_MARGIN_SECONDS: i64 = 60;

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Header label of the first column; data rows carrying it are skipped.
pub const HEADER_LABEL: &str = "item";

pub const ITEM_ID_PREFIX: &str = "item_";

pub mod keys {
    //! Entries read from a [`CredentialSource`](crate::CredentialSource).

    pub const SERVICE_ACCOUNT_JSON: &str = "service_account_json";
    pub const SPREADSHEET_ID: &str = "spreadsheet_id";
    pub const SHEET_NAME: &str = "sheet_name";
}
