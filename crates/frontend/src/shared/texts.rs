//! Fixed copy used across the wizard.

pub const HEADER_TITLE: &str = "Post Job";
pub const TYPE_PLACEHOLDER: &str = "Type your reply...";
pub const WIPEOUT_CONFIRMATION: &str = "Would you like to start with new order?";
pub const YES: &str = "YES";
pub const NO: &str = "NO";
pub const UPLOAD_TEXT: &str = "Upload Images/Files";
